//! Cellular automata rule engine for fixed-size 2D and 3D grids.
//!
//! Three transition variants share one generic engine: Conway B3/S23
//! (`Binary2D`), a four-level thermal rule with an asymmetric neighbor
//! metric (`Thermal2D`), and a wide-threshold 3D binary rule (`Binary3D`).
//! The engine owns the grid, steps it from a snapshot with a two-phase
//! diff apply, and reports every change through synchronous events;
//! rendering, input mapping, and UI live entirely outside this crate.
//!
//! # Example
//!
//! ```
//! use grid_automata::{pattern::presets, Engine2D, Variant};
//!
//! let mut engine = Engine2D::new([5, 5], Variant::Binary2D)?;
//! engine.load_pattern(&presets::blinker([1, 2]))?;
//! engine.tick()?;
//! assert_eq!(engine.cell([2, 1])?, 1);
//! assert_eq!(engine.generation(), 1);
//! # Ok::<(), grid_automata::Error>(())
//! ```

pub mod engine;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod pattern;
pub mod rules;

pub use engine::{Engine, Engine2D, Engine3D, Event, DEFAULT_TICK_INTERVAL};
pub use error::{Error, Result};
pub use grid::{Grid, Pos};
pub use pattern::{parse_entries, PatternEntry};
pub use rules::{Variant, ALIVE, COLD, DEAD, HOT, WARM};
