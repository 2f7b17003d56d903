//! Dense fixed-size grid of cell levels.

use crate::error::{Error, Result};

/// Integer grid coordinate, one component per axis.
pub type Pos<const N: usize> = [i32; N];

/// A dense N-dimensional grid of cell levels.
///
/// Level 0 always means dead. Dimensions are fixed at construction and the
/// grid is never resized; any access outside the declared dimensions is
/// rejected, never silently clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<const N: usize> {
    dims: [i32; N],
    cells: Vec<u8>,
}

impl<const N: usize> Grid<N> {
    /// Create an all-dead grid. Every dimension must be positive.
    pub fn new(dims: [i32; N]) -> Result<Self> {
        if dims.iter().any(|&d| d <= 0) {
            return Err(Error::InvalidArgument(format!(
                "grid dimensions must be positive, got {dims:?}"
            )));
        }
        let size = dims.iter().map(|&d| d as usize).product();
        Ok(Self {
            dims,
            cells: vec![0; size],
        })
    }

    pub fn dims(&self) -> [i32; N] {
        self.dims
    }

    /// Check if a position lies within grid bounds.
    #[inline]
    pub fn in_bounds(&self, pos: Pos<N>) -> bool {
        pos.iter().zip(&self.dims).all(|(&p, &d)| p >= 0 && p < d)
    }

    /// Linear index in x-fastest order (last axis changes slowest).
    #[inline]
    fn index_of(&self, pos: Pos<N>) -> usize {
        let mut idx = 0usize;
        for axis in (0..N).rev() {
            idx = idx * self.dims[axis] as usize + pos[axis] as usize;
        }
        idx
    }

    fn bounds_err(&self, pos: Pos<N>) -> Error {
        Error::OutOfBounds {
            pos: pos.to_vec(),
            dims: self.dims.to_vec(),
        }
    }

    /// Bounded read without the error payload; `None` when out of bounds.
    #[inline]
    pub fn value(&self, pos: Pos<N>) -> Option<u8> {
        if self.in_bounds(pos) {
            Some(self.cells[self.index_of(pos)])
        } else {
            None
        }
    }

    /// Read a cell level.
    pub fn get(&self, pos: Pos<N>) -> Result<u8> {
        self.value(pos).ok_or_else(|| self.bounds_err(pos))
    }

    /// Overwrite a cell level unconditionally.
    pub fn set(&mut self, pos: Pos<N>, value: u8) -> Result<()> {
        if !self.in_bounds(pos) {
            return Err(self.bounds_err(pos));
        }
        let idx = self.index_of(pos);
        self.cells[idx] = value;
        Ok(())
    }

    /// Set every cell to dead. Touches no generation or timing counters.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Count of nonzero cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Iterate every position in x-fastest order.
    pub fn positions(&self) -> Positions<N> {
        Positions {
            dims: self.dims,
            next: Some([0; N]),
        }
    }
}

/// Iterator over every position of a grid, first axis changing fastest.
pub struct Positions<const N: usize> {
    dims: [i32; N],
    next: Option<[i32; N]>,
}

impl<const N: usize> Iterator for Positions<N> {
    type Item = Pos<N>;

    fn next(&mut self) -> Option<Pos<N>> {
        let current = self.next?;
        let mut succ = current;
        let mut axis = 0;
        self.next = loop {
            if axis == N {
                break None;
            }
            succ[axis] += 1;
            if succ[axis] < self.dims[axis] {
                break Some(succ);
            }
            succ[axis] = 0;
            axis += 1;
        };
        Some(current)
    }
}
