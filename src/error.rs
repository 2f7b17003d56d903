//! Error types for grid access and engine operations.

use thiserror::Error;

use crate::rules::Variant;

/// Errors surfaced by the simulation engine.
///
/// Every public operation is total: on error the grid is left exactly as it
/// was, still inside the active variant's value domain.
#[derive(Debug, Error)]
pub enum Error {
    /// A position component lies outside the grid dimensions. Out-of-range
    /// access is rejected before any mutation, never clamped or swallowed.
    #[error("position {pos:?} is outside grid dimensions {dims:?}")]
    OutOfBounds { pos: Vec<i32>, dims: Vec<i32> },

    /// A caller-supplied value was rejected (non-positive tick interval,
    /// a level the active variant does not define, and the like).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A stored cell level has no entry in the active variant's transition
    /// table. Indicates corrupted state; surfaced, never coerced.
    #[error("stored cell level {level} has no rule under {variant:?}")]
    UnknownCellValue { level: u8, variant: Variant },

    /// A direct edit (toggle, randomize) was attempted while running.
    #[error("direct edits require the engine to be paused")]
    NotPaused,

    /// The rule variant runs on a different number of axes than the engine.
    #[error("variant {variant:?} runs on {expected} axes, engine has {actual}")]
    VariantDimensionMismatch {
        variant: Variant,
        expected: usize,
        actual: usize,
    },

    /// A pattern list failed to parse from JSON.
    #[error("pattern parse error: {0}")]
    PatternParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
