// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use nqueen_search::{CancellationToken, DisplayMode, SimulationResults, SolutionMode, Solver};
use nqueen_search::SolverObserver;
use std::sync::{Arc, Mutex};

/// Route `log` output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Run a hidden search on a fresh solver.
pub fn solve(n: i64, mode: SolutionMode) -> SimulationResults {
    init_logging();
    Solver::new()
        .solve(n, mode, DisplayMode::Hidden)
        .expect("valid board size")
}

/// Rows of every stored solution, in discovery order.
pub fn stored_rows(results: &SimulationResults) -> Vec<Vec<i8>> {
    results
        .solutions()
        .iter()
        .map(|solution| solution.queens().to_vec())
        .collect()
}

/// Cancels the search after a given number of accepted solutions.
pub struct CancelAfter {
    pub remaining: usize,
    pub token: CancellationToken,
}

impl SolverObserver for CancelAfter {
    fn name(&self) -> &str {
        "CancelAfter"
    }

    fn on_solution_found(&mut self, _queens: &[i8]) {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.token.cancel();
        }
    }
}

/// Counts queen-placed events.
#[derive(Clone, Default)]
pub struct StepCounter(pub Arc<Mutex<u64>>);

impl StepCounter {
    pub fn count(&self) -> u64 {
        *self.0.lock().unwrap()
    }
}

impl SolverObserver for StepCounter {
    fn name(&self) -> &str {
        "StepCounter"
    }

    fn on_queen_placed(&mut self, _queens: &[i8]) {
        *self.0.lock().unwrap() += 1;
    }
}
