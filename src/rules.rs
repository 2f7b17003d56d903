//! Per-variant transition tables.
//!
//! A variant is a pure, stateless rule: (current level, neighbor metric) to
//! next level. Selecting a variant is a configuration choice made once at
//! engine construction, not per cell.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grid::{Grid, Pos};
use crate::neighbors;

/// Dead/absent, in every variant.
pub const DEAD: u8 = 0;
/// The single live level of the binary variants.
pub const ALIVE: u8 = 1;
/// Thermal levels.
pub const COLD: u8 = 2;
pub const WARM: u8 = 3;
pub const HOT: u8 = 4;

/// Rule variant, paired with its neighbor metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Conway B3/S23 on a 2D Moore neighborhood.
    Binary2D,
    /// Four-level thermal rules driven by the warmer-or-equal metric.
    Thermal2D,
    /// Binary 3D rules: survive on 7..=12, born on 10..=12.
    Binary3D,
}

impl Variant {
    /// Number of grid axes this variant runs on.
    pub fn axes(self) -> usize {
        match self {
            Variant::Binary2D | Variant::Thermal2D => 2,
            Variant::Binary3D => 3,
        }
    }

    /// The cell levels this variant defines, dead included.
    pub fn levels(self) -> &'static [u8] {
        match self {
            Variant::Binary2D | Variant::Binary3D => &[DEAD, ALIVE],
            Variant::Thermal2D => &[DEAD, COLD, WARM, HOT],
        }
    }

    /// The level a direct edit writes into a dead cell by default.
    pub fn default_active(self) -> u8 {
        match self {
            Variant::Thermal2D => HOT,
            Variant::Binary2D | Variant::Binary3D => ALIVE,
        }
    }

    /// Neighbor metric for this variant, read from the pre-tick snapshot.
    pub fn metric<const N: usize>(self, snapshot: &Grid<N>, pos: Pos<N>) -> u8 {
        match self {
            Variant::Binary2D | Variant::Binary3D => neighbors::alive_count(snapshot, pos),
            Variant::Thermal2D => neighbors::warmer_or_equal_count(snapshot, pos),
        }
    }

    /// Look up the next level for a cell holding `current` with the given
    /// neighbor metric. A stored level outside the variant's table is
    /// surfaced as an error, never coerced to something valid.
    pub fn next_value(self, current: u8, neighbors: u8) -> Result<u8> {
        match self {
            Variant::Binary2D => match current {
                DEAD => Ok(if neighbors == 3 { ALIVE } else { DEAD }),
                ALIVE => Ok(if neighbors == 2 || neighbors == 3 {
                    ALIVE
                } else {
                    DEAD
                }),
                other => Err(Error::UnknownCellValue {
                    level: other,
                    variant: self,
                }),
            },
            Variant::Thermal2D => match current {
                DEAD => Ok(if neighbors == 3 { COLD } else { DEAD }),
                COLD => Ok(if neighbors > 3 {
                    WARM
                } else if neighbors < 2 {
                    DEAD
                } else {
                    COLD
                }),
                WARM => Ok(if neighbors > 3 {
                    HOT
                } else if neighbors < 2 {
                    COLD
                } else {
                    WARM
                }),
                HOT => Ok(if neighbors > 3 {
                    DEAD
                } else if neighbors < 2 {
                    WARM
                } else {
                    HOT
                }),
                other => Err(Error::UnknownCellValue {
                    level: other,
                    variant: self,
                }),
            },
            Variant::Binary3D => match current {
                DEAD => Ok(if (10..=12).contains(&neighbors) {
                    ALIVE
                } else {
                    DEAD
                }),
                ALIVE => Ok(if (7..=12).contains(&neighbors) {
                    ALIVE
                } else {
                    DEAD
                }),
                other => Err(Error::UnknownCellValue {
                    level: other,
                    variant: self,
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary2d_table() {
        let v = Variant::Binary2D;
        // Survival on 2 or 3
        assert_eq!(v.next_value(ALIVE, 2).unwrap(), ALIVE);
        assert_eq!(v.next_value(ALIVE, 3).unwrap(), ALIVE);
        assert_eq!(v.next_value(ALIVE, 1).unwrap(), DEAD);
        assert_eq!(v.next_value(ALIVE, 4).unwrap(), DEAD);
        // Birth on exactly 3
        assert_eq!(v.next_value(DEAD, 3).unwrap(), ALIVE);
        assert_eq!(v.next_value(DEAD, 2).unwrap(), DEAD);
        assert_eq!(v.next_value(DEAD, 8).unwrap(), DEAD);
    }

    #[test]
    fn test_thermal_table() {
        let v = Variant::Thermal2D;
        // cold: heats past 3, dies below 2, holds otherwise
        assert_eq!(v.next_value(COLD, 4).unwrap(), WARM);
        assert_eq!(v.next_value(COLD, 1).unwrap(), DEAD);
        assert_eq!(v.next_value(COLD, 2).unwrap(), COLD);
        assert_eq!(v.next_value(COLD, 3).unwrap(), COLD);
        // warm
        assert_eq!(v.next_value(WARM, 4).unwrap(), HOT);
        assert_eq!(v.next_value(WARM, 0).unwrap(), COLD);
        assert_eq!(v.next_value(WARM, 3).unwrap(), WARM);
        // hot: burns out past 3, cools below 2
        assert_eq!(v.next_value(HOT, 5).unwrap(), DEAD);
        assert_eq!(v.next_value(HOT, 1).unwrap(), WARM);
        assert_eq!(v.next_value(HOT, 2).unwrap(), HOT);
        // dead: born cold on exactly 3
        assert_eq!(v.next_value(DEAD, 3).unwrap(), COLD);
        assert_eq!(v.next_value(DEAD, 4).unwrap(), DEAD);
    }

    #[test]
    fn test_binary3d_thresholds() {
        let v = Variant::Binary3D;
        // Survival band is 7..=12
        assert_eq!(v.next_value(ALIVE, 6).unwrap(), DEAD);
        assert_eq!(v.next_value(ALIVE, 7).unwrap(), ALIVE);
        assert_eq!(v.next_value(ALIVE, 12).unwrap(), ALIVE);
        assert_eq!(v.next_value(ALIVE, 13).unwrap(), DEAD);
        assert_eq!(v.next_value(ALIVE, 0).unwrap(), DEAD);
        // Birth band is 10..=12, deliberately narrower than survival
        assert_eq!(v.next_value(DEAD, 9).unwrap(), DEAD);
        assert_eq!(v.next_value(DEAD, 10).unwrap(), ALIVE);
        assert_eq!(v.next_value(DEAD, 11).unwrap(), ALIVE);
        assert_eq!(v.next_value(DEAD, 12).unwrap(), ALIVE);
        assert_eq!(v.next_value(DEAD, 13).unwrap(), DEAD);
    }

    #[test]
    fn test_unknown_level_is_error() {
        assert!(matches!(
            Variant::Binary2D.next_value(2, 3),
            Err(Error::UnknownCellValue { level: 2, .. })
        ));
        assert!(matches!(
            Variant::Thermal2D.next_value(1, 3),
            Err(Error::UnknownCellValue { level: 1, .. })
        ));
        assert!(matches!(
            Variant::Thermal2D.next_value(5, 0),
            Err(Error::UnknownCellValue { level: 5, .. })
        ));
        assert!(matches!(
            Variant::Binary3D.next_value(4, 11),
            Err(Error::UnknownCellValue { level: 4, .. })
        ));
    }

    #[test]
    fn test_variant_metadata() {
        assert_eq!(Variant::Binary2D.axes(), 2);
        assert_eq!(Variant::Thermal2D.axes(), 2);
        assert_eq!(Variant::Binary3D.axes(), 3);
        assert_eq!(Variant::Thermal2D.levels(), &[DEAD, COLD, WARM, HOT]);
        assert_eq!(Variant::Thermal2D.default_active(), HOT);
        assert_eq!(Variant::Binary2D.default_active(), ALIVE);
    }
}
