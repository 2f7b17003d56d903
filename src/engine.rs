//! Simulation engine: generation stepping, timing, play/pause, direct edits.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::grid::{Grid, Pos};
use crate::pattern::PatternEntry;
use crate::rules::Variant;

/// Default seconds between generations while playing.
pub const DEFAULT_TICK_INTERVAL: f64 = 1.0;

/// Notification delivered synchronously to subscribers within the
/// triggering engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<const N: usize> {
    /// The generation counter changed (tick or reset).
    GenerationChanged(u64),
    /// The paused flag flipped.
    PauseStateChanged(bool),
    /// One cell's level changed (tick diff, direct edit, reset, or load).
    CellChanged { pos: Pos<N>, old: u8, new: u8 },
}

type Subscriber<const N: usize> = Box<dyn FnMut(Event<N>)>;

/// Cellular automaton engine generic over grid dimensionality.
///
/// Owns exactly one grid and one rule variant; switching variant means
/// constructing a new engine. Execution is single-threaded and synchronous:
/// a tick snapshots the grid, scans every cell against the snapshot, then
/// applies the full diff before returning, so external readers never observe
/// a partially applied generation.
pub struct Engine<const N: usize> {
    grid: Grid<N>,
    variant: Variant,
    generation: u64,
    paused: bool,
    tick_interval: f64,
    elapsed: f64,
    subscribers: Vec<Subscriber<N>>,
}

/// Engine over a 2D grid.
pub type Engine2D = Engine<2>;
/// Engine over a 3D grid.
pub type Engine3D = Engine<3>;

impl<const N: usize> Engine<N> {
    /// Create a paused engine at generation 0 with an all-dead grid.
    ///
    /// Fails if the variant runs on a different number of axes than `N`
    /// or any dimension is non-positive.
    pub fn new(dims: [i32; N], variant: Variant) -> Result<Self> {
        if variant.axes() != N {
            return Err(Error::VariantDimensionMismatch {
                variant,
                expected: variant.axes(),
                actual: N,
            });
        }
        Ok(Self {
            grid: Grid::new(dims)?,
            variant,
            generation: 0,
            paused: true,
            tick_interval: DEFAULT_TICK_INTERVAL,
            elapsed: 0.0,
            subscribers: Vec::new(),
        })
    }

    /// Register a callback invoked synchronously for every emitted event.
    pub fn subscribe(&mut self, subscriber: impl FnMut(Event<N>) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn emit(&mut self, event: Event<N>) {
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn dims(&self) -> [i32; N] {
        self.grid.dims()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn tick_interval(&self) -> f64 {
        self.tick_interval
    }

    /// Sub-interval time carried over to the next `advance_time` call.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Read one cell's level.
    pub fn cell(&self, pos: Pos<N>) -> Result<u8> {
        self.grid.get(pos)
    }

    /// Count of nonzero cells.
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Advance one generation.
    ///
    /// Every cell's next level is computed against a snapshot taken before
    /// any write; the diff is then applied deaths-first, births second.
    /// A stored level outside the variant's table aborts the tick before
    /// any mutation, leaving grid and generation untouched.
    pub fn tick(&mut self) -> Result<()> {
        let snapshot = self.grid.clone();
        let mut to_die: Vec<Pos<N>> = Vec::new();
        let mut to_change: Vec<(Pos<N>, u8)> = Vec::new();

        for pos in snapshot.positions() {
            let current = snapshot.get(pos)?;
            let metric = self.variant.metric(&snapshot, pos);
            let next = self.variant.next_value(current, metric)?;
            if next == current {
                continue;
            }
            if next == 0 {
                to_die.push(pos);
            } else {
                to_change.push((pos, next));
            }
        }

        let mut changes: Vec<(Pos<N>, u8, u8)> =
            Vec::with_capacity(to_die.len() + to_change.len());
        for pos in to_die {
            let old = self.grid.get(pos)?;
            self.grid.set(pos, 0)?;
            changes.push((pos, old, 0));
        }
        for (pos, next) in to_change {
            let old = self.grid.get(pos)?;
            self.grid.set(pos, next)?;
            changes.push((pos, old, next));
        }

        self.generation += 1;
        debug!(
            generation = self.generation,
            changed = changes.len(),
            "tick"
        );
        self.emit(Event::GenerationChanged(self.generation));
        for (pos, old, new) in changes {
            self.emit(Event::CellChanged { pos, old, new });
        }
        Ok(())
    }

    /// Accumulate host frame time and run the ticks it pays for.
    ///
    /// Returns the number of ticks executed. The sub-interval remainder is
    /// retained exactly, so repeated small increments still add up to ticks.
    /// While paused this is a no-op.
    pub fn advance_time(&mut self, delta_seconds: f64) -> Result<u32> {
        if !(delta_seconds >= 0.0) {
            return Err(Error::InvalidArgument(format!(
                "delta time must be non-negative, got {delta_seconds}"
            )));
        }
        if self.paused {
            return Ok(0);
        }
        self.elapsed += delta_seconds;
        let mut ticks = 0;
        while self.elapsed >= self.tick_interval {
            self.elapsed -= self.tick_interval;
            self.tick()?;
            ticks += 1;
        }
        Ok(ticks)
    }

    /// Start running. No-op (and no event) if already running.
    pub fn play(&mut self) {
        if self.paused {
            self.paused = false;
            self.emit(Event::PauseStateChanged(false));
        }
    }

    /// Pause. No-op (and no event) if already paused.
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.emit(Event::PauseStateChanged(true));
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.play();
        } else {
            self.pause();
        }
    }

    /// Replace the tick interval. Accumulated time is kept.
    pub fn set_tick_interval(&mut self, seconds: f64) -> Result<()> {
        if !(seconds > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "tick interval must be positive, got {seconds}"
            )));
        }
        self.tick_interval = seconds;
        Ok(())
    }

    /// Flip one cell while paused: dead becomes `active`, anything live dies.
    ///
    /// A direct edit that bypasses the rule table. `active` must be one of
    /// the variant's nonzero levels. Bounds are checked before mutation.
    pub fn toggle_cell(&mut self, pos: Pos<N>, active: u8) -> Result<()> {
        if !self.paused {
            return Err(Error::NotPaused);
        }
        if active == 0 || !self.variant.levels().contains(&active) {
            return Err(Error::InvalidArgument(format!(
                "level {active} is not a live level of {:?}",
                self.variant
            )));
        }
        let old = self.grid.get(pos)?;
        let new = if old == 0 { active } else { 0 };
        self.grid.set(pos, new)?;
        self.emit(Event::CellChanged { pos, old, new });
        Ok(())
    }

    /// Clear the grid, zero the counters, and force pause.
    ///
    /// Emits `CellChanged(old, 0)` for every cell that was live so renderers
    /// can drop their visuals, `PauseStateChanged(true)` only if the engine
    /// was running, and finally `GenerationChanged(0)`.
    pub fn reset(&mut self) {
        let cleared: Vec<(Pos<N>, u8)> = self
            .grid
            .positions()
            .filter_map(|pos| match self.grid.value(pos) {
                Some(level) if level != 0 => Some((pos, level)),
                _ => None,
            })
            .collect();
        self.grid.clear();
        self.generation = 0;
        self.elapsed = 0.0;
        if !self.paused {
            self.paused = true;
            self.emit(Event::PauseStateChanged(true));
        }
        for (pos, old) in cleared {
            self.emit(Event::CellChanged { pos, old, new: 0 });
        }
        self.emit(Event::GenerationChanged(0));
        info!("engine reset");
    }

    /// Reset, then seed the grid from an explicit entry list.
    ///
    /// Every entry is validated (bounds and value domain) before any write:
    /// one bad entry fails the whole load and leaves the grid all-dead.
    pub fn load_pattern(&mut self, entries: &[PatternEntry<N>]) -> Result<()> {
        self.reset();
        for entry in entries {
            if !self.grid.in_bounds(entry.pos) {
                return Err(Error::OutOfBounds {
                    pos: entry.pos.to_vec(),
                    dims: self.grid.dims().to_vec(),
                });
            }
            if !self.variant.levels().contains(&entry.value) {
                return Err(Error::InvalidArgument(format!(
                    "level {} is not defined for {:?}",
                    entry.value, self.variant
                )));
            }
        }
        for entry in entries {
            let old = self.grid.get(entry.pos)?;
            self.grid.set(entry.pos, entry.value)?;
            if entry.value != old {
                self.emit(Event::CellChanged {
                    pos: entry.pos,
                    old,
                    new: entry.value,
                });
            }
        }
        info!(entries = entries.len(), "pattern loaded");
        Ok(())
    }

    /// Reset, then deterministically fill the grid: each cell becomes one of
    /// the variant's live levels with probability `density`, otherwise stays
    /// dead. Paused-only, like any direct edit.
    pub fn randomize(&mut self, seed: u64, density: f32) -> Result<()> {
        if !self.paused {
            return Err(Error::NotPaused);
        }
        if !(0.0..=1.0).contains(&density) {
            return Err(Error::InvalidArgument(format!(
                "density must be within [0, 1], got {density}"
            )));
        }
        self.reset();
        let live: Vec<u8> = self
            .variant
            .levels()
            .iter()
            .copied()
            .filter(|&level| level != 0)
            .collect();
        let positions: Vec<Pos<N>> = self.grid.positions().collect();
        let mut rng = StdRng::seed_from_u64(seed);
        for pos in positions {
            if rng.gen::<f32>() < density {
                let value = live[rng.gen_range(0..live.len())];
                self.grid.set(pos, value)?;
                self.emit(Event::CellChanged {
                    pos,
                    old: 0,
                    new: value,
                });
            }
        }
        info!(seed, density, "grid randomized");
        Ok(())
    }
}
