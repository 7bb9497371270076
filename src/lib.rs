// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! N-Queens search by recursive backtracking.
//!
//! Places N non-attacking queens on an N×N board, one per column, in one of
//! three modes:
//!
//! - **Single**: stop at the first solution.
//! - **All**: count every solution, storing up to a configurable cap.
//! - **Unique**: keep one representative of each class of solutions related
//!   by rotation or reflection of the board.
//!
//! # Architecture
//!
//! ## Fixed data
//!
//! The board size, its half size and the mode are fixed when a search starts.
//! The symmetry group of the square ([`symmetry::Symmetry`]) is a closed enum.
//!
//! ## Search state
//!
//! A [`context::SearchContext`] owns everything a run mutates:
//! - the [`QueenList`], one row per column, `-1` when unplaced
//! - the [`state::SolutionSet`] of accepted solutions
//! - the [`state::Statistics`] counters
//!
//! # Search Algorithm
//!
//! The engine extends the queen list one column at a time, probing rows in
//! ascending order and backtracking when a column has no legal row left. In
//! Unique mode the search ends once the leading queen reaches the half size
//! of the board, because every later placement is a mirror image of one
//! already explored.
//!
//! Searches run on the calling thread ([`Solver::solve`]) or on tokio's
//! blocking pool ([`Solver::solve_async`]). Either can be cancelled through a
//! [`CancellationToken`], and both return partial results when cancelled.
//!
//! ```
//! use nqueen_search::{DisplayMode, SolutionMode, Solver};
//!
//! let mut solver = Solver::new();
//! let results = solver.solve(6, SolutionMode::All, DisplayMode::Hidden).unwrap();
//! assert_eq!(results.total_solutions(), 4);
//! ```

pub mod board;
pub mod config;
pub mod context;
pub mod engine;
pub mod errors;
pub mod observer;
pub mod results;
pub mod state;
pub mod symmetry;

// Re-export commonly used types
pub use board::{BoardSize, QueenList};
pub use config::SolverConfig;
pub use engine::{CancellationToken, DisplayMode, SolutionMode, Solver};
pub use errors::SolveError;
pub use observer::{ChannelObserver, CompositeObserver, SolverEvent, SolverObserver};
pub use results::{SimulationResults, Solution, TerminationReason};
