//! Neighbor-counting strategies over grid snapshots.
//!
//! Each counter is a pure function of a grid snapshot and a position. The
//! Moore neighborhood (3^N - 1 cells) is clipped at grid edges; there is no
//! wraparound. Counters never observe values written during the same tick
//! because the engine hands them the pre-tick snapshot.

use crate::grid::{Grid, Pos};

/// Visit the level of every in-bounds Moore neighbor of `pos`.
fn for_each_neighbor<const N: usize>(grid: &Grid<N>, pos: Pos<N>, mut visit: impl FnMut(u8)) {
    let mut offset = [-1i32; N];
    loop {
        if offset != [0; N] {
            let mut neighbor = pos;
            for axis in 0..N {
                neighbor[axis] += offset[axis];
            }
            if let Some(level) = grid.value(neighbor) {
                visit(level);
            }
        }

        // Advance the offset odometer over {-1, 0, 1}^N.
        let mut axis = 0;
        loop {
            if axis == N {
                return;
            }
            if offset[axis] == 1 {
                offset[axis] = -1;
                axis += 1;
            } else {
                offset[axis] += 1;
                break;
            }
        }
    }
}

/// Count neighbors with a nonzero level (up to 8 in 2D, 26 in 3D).
pub fn alive_count<const N: usize>(grid: &Grid<N>, pos: Pos<N>) -> u8 {
    let mut count = 0;
    for_each_neighbor(grid, pos, |level| {
        if level != 0 {
            count += 1;
        }
    });
    count
}

/// Count neighbors satisfying `level >= center && level != 0`.
///
/// The comparison is asymmetric on purpose: it favors heat propagating
/// outward from warmer cells, and the thermal transition table is authored
/// against exactly this metric. Do not normalize it to a plain alive count.
pub fn warmer_or_equal_count<const N: usize>(grid: &Grid<N>, pos: Pos<N>) -> u8 {
    let Some(center) = grid.value(pos) else {
        return 0;
    };
    let mut count = 0;
    for_each_neighbor(grid, pos, |level| {
        if level >= center && level != 0 {
            count += 1;
        }
    });
    count
}
