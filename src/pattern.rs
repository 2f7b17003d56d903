//! Pattern entries, their JSON form, and built-in preset coordinate lists.
//!
//! A preset is nothing more than a literal list of positions with a level
//! each; naming and storing presets is the host's business.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::Pos;

/// One seeded cell: a position and the level to write there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "[i32; N]: Serialize",
    deserialize = "[i32; N]: Deserialize<'de>"
))]
pub struct PatternEntry<const N: usize> {
    pub pos: Pos<N>,
    pub value: u8,
}

impl<const N: usize> PatternEntry<N> {
    pub fn new(pos: Pos<N>, value: u8) -> Self {
        Self { pos, value }
    }
}

impl<const N: usize> From<(Pos<N>, u8)> for PatternEntry<N> {
    fn from((pos, value): (Pos<N>, u8)) -> Self {
        Self { pos, value }
    }
}

/// Parse a pattern from its JSON form, a list of
/// `{"pos": [..], "value": n}` objects.
pub fn parse_entries<const N: usize>(json: &str) -> Result<Vec<PatternEntry<N>>>
where
    for<'de> [i32; N]: Deserialize<'de>,
{
    Ok(serde_json::from_str(json)?)
}

/// Serialize a pattern to its JSON form.
pub fn entries_to_json<const N: usize>(entries: &[PatternEntry<N>]) -> Result<String>
where
    [i32; N]: Serialize,
{
    Ok(serde_json::to_string(entries)?)
}

/// Built-in seed patterns as literal coordinate lists.
pub mod presets {
    use super::PatternEntry;
    use crate::rules::{ALIVE, COLD, HOT, WARM};

    /// Period-2 blinker: three live cells in a row starting at `origin`.
    pub fn blinker(origin: [i32; 2]) -> Vec<PatternEntry<2>> {
        let [x, y] = origin;
        [[x, y], [x + 1, y], [x + 2, y]]
            .into_iter()
            .map(|pos| PatternEntry::new(pos, ALIVE))
            .collect()
    }

    /// Glider with its bounding box anchored at `origin`.
    pub fn glider(origin: [i32; 2]) -> Vec<PatternEntry<2>> {
        let [x, y] = origin;
        [
            [x, y],
            [x + 1, y],
            [x + 2, y],
            [x + 2, y + 1],
            [x + 1, y + 2],
        ]
        .into_iter()
        .map(|pos| PatternEntry::new(pos, ALIVE))
        .collect()
    }

    /// Hot plus-sign with warm shoulder triples in each quadrant.
    pub fn thermal_cross(center: [i32; 2]) -> Vec<PatternEntry<2>> {
        let [cx, cy] = center;
        let mut entries = Vec::new();
        for i in -3..=3 {
            entries.push(PatternEntry::new([cx, cy + i], HOT));
            entries.push(PatternEntry::new([cx + i, cy], HOT));
        }
        for (sx, sy) in [(1, 1), (-1, 1), (1, -1), (-1, -1)] {
            entries.push(PatternEntry::new([cx + sx, cy + sy], WARM));
            entries.push(PatternEntry::new([cx + sx, cy + 2 * sy], WARM));
            entries.push(PatternEntry::new([cx + 2 * sx, cy + sy], WARM));
        }
        entries
    }

    /// Concentric thermal squares: cold 2x2 core, warm ring, hot rim.
    pub fn thermal_rings(center: [i32; 2]) -> Vec<PatternEntry<2>> {
        let [cx, cy] = center;
        let mut entries = Vec::new();
        for dy in -1..=0 {
            for dx in -1..=0 {
                entries.push(PatternEntry::new([cx + dx, cy + dy], COLD));
            }
        }
        for d in -2..=1 {
            entries.push(PatternEntry::new([cx - 2, cy + d], WARM));
            entries.push(PatternEntry::new([cx + 1, cy + d], WARM));
            entries.push(PatternEntry::new([cx + d, cy - 2], WARM));
            entries.push(PatternEntry::new([cx + d, cy + 1], WARM));
        }
        for d in -3..=2 {
            entries.push(PatternEntry::new([cx - 3, cy + d], HOT));
            entries.push(PatternEntry::new([cx + 2, cy + d], HOT));
            entries.push(PatternEntry::new([cx + d, cy - 3], HOT));
            entries.push(PatternEntry::new([cx + d, cy + 2], HOT));
        }
        entries
    }

    /// Solid 3x3x3 cube anchored at `origin`, a compact 3D seed.
    pub fn solid_cube(origin: [i32; 3]) -> Vec<PatternEntry<3>> {
        let [x, y, z] = origin;
        let mut entries = Vec::new();
        for dz in 0..3 {
            for dy in 0..3 {
                for dx in 0..3 {
                    entries.push(PatternEntry::new([x + dx, y + dy, z + dz], ALIVE));
                }
            }
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Engine2D, Engine3D};
    use crate::rules::{Variant, ALIVE, HOT};

    #[test]
    fn test_json_round_trip() {
        let pattern = presets::glider([1, 1]);
        let json = entries_to_json(&pattern).unwrap();
        let parsed: Vec<PatternEntry<2>> = parse_entries(&json).unwrap();
        assert_eq!(parsed, pattern);
    }

    #[test]
    fn test_parse_literal_json() {
        let parsed: Vec<PatternEntry<2>> =
            parse_entries(r#"[{"pos": [1, 2], "value": 1}, {"pos": [2, 2], "value": 4}]"#)
                .unwrap();
        assert_eq!(parsed[0], PatternEntry::new([1, 2], ALIVE));
        assert_eq!(parsed[1], PatternEntry::new([2, 2], HOT));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_entries::<2>("not json").is_err());
        assert!(parse_entries::<2>(r#"[{"pos": [1], "value": 1}]"#).is_err());
    }

    #[test]
    fn test_glider_shape() {
        let glider = presets::glider([0, 0]);
        assert_eq!(glider.len(), 5);
        assert!(glider.iter().all(|entry| entry.value == ALIVE));
    }

    #[test]
    fn test_presets_load_cleanly() {
        let mut engine = Engine2D::new([20, 20], Variant::Thermal2D).unwrap();
        engine.load_pattern(&presets::thermal_cross([10, 10])).unwrap();
        assert!(engine.population() > 0);
        engine.load_pattern(&presets::thermal_rings([10, 10])).unwrap();
        assert!(engine.population() > 0);

        let mut engine = Engine3D::new([10, 10, 10], Variant::Binary3D).unwrap();
        engine.load_pattern(&presets::solid_cube([3, 3, 3])).unwrap();
        assert_eq!(engine.population(), 27);
    }
}
