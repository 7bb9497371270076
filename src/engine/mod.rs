// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking search engine.
//!
//! One recursive routine serves all three modes. Each frame handles one
//! column:
//!
//! 1. Stop if the cancellation token is set.
//! 2. Stop if the mode's early-stop predicate holds.
//! 3. When visualizing, emit a queen-placed event and pause.
//! 4. If every column is placed, offer the assignment to the mode's
//!    acceptance policy and return.
//! 5. Otherwise probe the column for the next legal row. If there is none,
//!    clear the column and backtrack; if there is, descend into the next
//!    column, then go round again to try the following row of this column.
//!
//! Descending before retrying siblings makes the search depth-first and
//! column-ascending, so the first solution found is deterministic. Retrying
//! siblings in a loop rather than a recursive call keeps the recursion depth
//! at most `N + 1`.
//!
//! # Example
//!
//! ```
//! use nqueen_search::engine::{DisplayMode, SolutionMode, Solver};
//!
//! let mut solver = Solver::new();
//! let results = solver.solve(8, SolutionMode::Unique, DisplayMode::Hidden).unwrap();
//! assert_eq!(results.total_solutions(), 12);
//!
//! let results = solver.solve(8, SolutionMode::Single, DisplayMode::Hidden).unwrap();
//! assert_eq!(results.solutions()[0].queens(), &[0, 4, 7, 5, 2, 6, 1, 3]);
//! ```

pub mod cancel;
pub mod mode;

pub use cancel::CancellationToken;
pub use mode::{DisplayMode, SolutionMode};

use crate::board::BoardSize;
use crate::config::SolverConfig;
use crate::context::SearchContext;
use crate::errors::{Result, SolveError};
use crate::observer::{CompositeObserver, SolverObserver};
use crate::results::{SimulationResults, TerminationReason};
use crate::state::Counters;
use std::time::Instant;

/// Entry point for N-Queens searches.
///
/// A solver holds the configuration, the registered observers and the
/// cancellation token. It runs one search at a time: `solve` borrows it
/// mutably and `solve_async` takes it by value and hands it back.
#[derive(Debug, Default)]
pub struct Solver {
    config: SolverConfig,
    observers: CompositeObserver,
    cancellation: CancellationToken,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Register an observer. Observers only hear from visualized searches.
    pub fn add_observer<O>(&mut self, observer: O)
    where
        O: SolverObserver + 'static,
    {
        self.observers.add_observer(observer);
    }

    /// A handle on the token the next search will poll.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    /// Replace the token, e.g. after a cancelled search. Handles obtained
    /// earlier no longer affect this solver.
    pub fn reset_cancellation(&mut self) {
        self.cancellation = CancellationToken::new();
    }

    /// Run a search on the calling thread.
    ///
    /// Fails only for an invalid board size, before any search state is
    /// created. A cancelled search returns its partial results.
    pub fn solve(
        &mut self,
        board_size: i64,
        mode: SolutionMode,
        display: DisplayMode,
    ) -> Result<SimulationResults> {
        let board_size = BoardSize::new(board_size)?;
        Ok(self.run(board_size, mode, display))
    }

    /// Run a search on tokio's blocking pool without blocking the caller.
    ///
    /// The board size is validated before the task is spawned. Resolves to
    /// the solver, ready for reuse, together with the results.
    pub async fn solve_async(
        mut self,
        board_size: i64,
        mode: SolutionMode,
        display: DisplayMode,
    ) -> Result<(Self, SimulationResults)> {
        let board_size = BoardSize::new(board_size)?;
        tokio::task::spawn_blocking(move || {
            let results = self.run(board_size, mode, display);
            (self, results)
        })
        .await
        .map_err(|err| SolveError::TaskFailed(err.to_string()))
    }

    fn run(
        &mut self,
        board_size: BoardSize,
        mode: SolutionMode,
        display: DisplayMode,
    ) -> SimulationResults {
        log::info!(
            "solving N={} mode={} display={}",
            board_size,
            mode,
            display
        );
        if self.cancellation.is_cancelled() {
            log::warn!("cancellation token already set; call reset_cancellation to search again");
        }
        let start = Instant::now();
        let mut ctx = SearchContext::new(
            board_size,
            mode,
            display,
            &self.config,
            self.cancellation.clone(),
            &mut self.observers,
        );

        place_column(&mut ctx, 0);

        let elapsed = start.elapsed();
        let termination = if ctx.is_cancelled() {
            TerminationReason::Cancelled
        } else {
            TerminationReason::Completed
        };
        let accepted = ctx.solutions.accepted();
        let results = SimulationResults::new(
            board_size,
            mode,
            ctx.solutions.into_entries(),
            accepted,
            elapsed,
            termination,
            ctx.statistics,
        );
        log::info!(
            "N={} mode={}: {} ({} solutions, {} stored) in {:.1}s",
            board_size,
            mode,
            termination,
            results.total_solutions(),
            results.solutions().len(),
            results.elapsed_seconds()
        );
        results
    }
}

fn place_column(ctx: &mut SearchContext<'_>, column: usize) {
    loop {
        if ctx.check_cancelled() || ctx.check_early_stop() {
            return;
        }
        ctx.visualize_step();

        if column == ctx.board_size.len() {
            ctx.accept_solution();
            return;
        }

        match ctx.queens.locate_placement(column) {
            Some(row) => {
                ctx.statistics.increment_counter(Counters::PlacementsProbed);
                ctx.queens.set(column, row);
                place_column(ctx, column + 1);
            }
            None => {
                ctx.statistics.increment_counter(Counters::Backtracks);
                ctx.queens.clear(column);
                return;
            }
        }
    }
}
