// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Progress and visualization events.
//!
//! Observers are registered on a `Solver` and called synchronously from the
//! search, only when the display mode is `Visualize`. Hidden runs never touch
//! them.
//!
//! ## Module Structure
//!
//! - `composite`: fans one event out to every registered observer
//! - `channel`: forwards events over a tokio channel for callers that poll

pub mod channel;
pub mod composite;

pub use channel::ChannelObserver;
pub use composite::CompositeObserver;

use serde::Serialize;

/// Receives events from a visualized search.
///
/// All methods default to doing nothing, so an observer implements only the
/// events it cares about.
pub trait SolverObserver: Send {
    fn name(&self) -> &str;

    /// A frame was entered; `queens` is the current partial assignment.
    fn on_queen_placed(&mut self, _queens: &[i8]) {}

    /// A complete assignment was accepted.
    fn on_solution_found(&mut self, _queens: &[i8]) {}

    /// Heuristic progress in percent, one decimal.
    fn on_progress_changed(&mut self, _percent: f64) {}
}

impl std::fmt::Debug for dyn SolverObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SolverObserver({})", self.name())
    }
}

/// An event as an owned value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SolverEvent {
    QueenPlaced(Vec<i8>),
    SolutionFound(Vec<i8>),
    ProgressChanged(f64),
}

/// Progress estimate from how far the leading column has advanced.
///
/// `100 * leading_row / half_size`, rounded to one decimal and clamped to
/// `0..=100`; All mode walks the leading column past `half_size`.
pub fn progress_percent(leading_row: i8, half_size: i8) -> f64 {
    let percent = 100.0 * leading_row.max(0) as f64 / half_size as f64;
    ((percent * 10.0).round() / 10.0).min(100.0)
}
