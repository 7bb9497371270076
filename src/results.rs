// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Results of a search.
//!
//! `SimulationResults` is built once, when the search returns, and is
//! immutable afterwards. It keeps the stored solutions and the true number of
//! accepted solutions apart: in All mode the first may be truncated while the
//! second stays exact.

use crate::board::BoardSize;
use crate::engine::SolutionMode;
use crate::state::Statistics;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// A complete placement, numbered in discovery order starting at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    id: usize,
    queens: Vec<i8>,
}

impl Solution {
    pub fn new(id: usize, queens: Vec<i8>) -> Self {
        Self { id, queens }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Row of the queen in each column.
    pub fn queens(&self) -> &[i8] {
        &self.queens
    }

    pub fn name(&self) -> String {
        format!("Sol. no. {}", self.id)
    }

    /// One-based rows in column order.
    ///
    /// ```
    /// use nqueen_search::results::Solution;
    ///
    /// let solution = Solution::new(1, vec![1, 3, 0, 2]);
    /// assert_eq!(solution.details(), "(2, 4, 1, 3)");
    /// ```
    pub fn details(&self) -> String {
        let rows: Vec<String> = self.queens.iter().map(|row| (row + 1).to_string()).collect();
        format!("({})", rows.join(", "))
    }

    /// Text board, row 0 first: `Q` for a queen, `.` for an empty square.
    pub fn board_diagram(&self) -> String {
        let size = self.queens.len();
        let mut diagram = String::with_capacity(size * (size + 1));
        for row in 0..size {
            for &queen in &self.queens {
                diagram.push(if queen as usize == row { 'Q' } else { '.' });
            }
            diagram.push('\n');
        }
        diagram
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.details())
    }
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TerminationReason {
    /// The search space was exhausted or the mode stopped early.
    Completed,
    /// The cancellation token was observed; results are partial.
    Cancelled,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::Completed => write!(f, "Completed"),
            TerminationReason::Cancelled => write!(f, "Cancelled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResults {
    board_size: BoardSize,
    mode: SolutionMode,
    solutions: Vec<Solution>,
    total_solutions: u64,
    elapsed_seconds: f64,
    termination: TerminationReason,
    statistics: Statistics,
}

impl SimulationResults {
    /// Package the outcome of a search. `stored` is numbered 1.. in order.
    pub(crate) fn new(
        board_size: BoardSize,
        mode: SolutionMode,
        stored: Vec<Vec<i8>>,
        accepted: u64,
        elapsed: Duration,
        termination: TerminationReason,
        statistics: Statistics,
    ) -> Self {
        let solutions: Vec<Solution> = stored
            .into_iter()
            .enumerate()
            .map(|(index, queens)| Solution::new(index + 1, queens))
            .collect();
        let total_solutions = match mode {
            SolutionMode::All => accepted,
            SolutionMode::Single | SolutionMode::Unique => solutions.len() as u64,
        };
        Self {
            board_size,
            mode,
            solutions,
            total_solutions,
            elapsed_seconds: round_to_tenth(elapsed.as_secs_f64()),
            termination,
            statistics,
        }
    }

    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    pub fn mode(&self) -> SolutionMode {
        self.mode
    }

    /// Stored solutions; truncated to the configured cap in All mode.
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// True number of solutions, independent of the storage cap.
    pub fn total_solutions(&self) -> u64 {
        self.total_solutions
    }

    /// Whether fewer solutions were stored than were found.
    pub fn is_truncated(&self) -> bool {
        (self.solutions.len() as u64) < self.total_solutions
    }

    /// Wall-clock duration of the search, in seconds to one decimal.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    pub fn termination(&self) -> TerminationReason {
        self.termination
    }

    pub fn is_cancelled(&self) -> bool {
        self.termination == TerminationReason::Cancelled
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

impl fmt::Display for SimulationResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board size: {}", self.board_size)?;
        writeln!(f, "Solution mode: {}", self.mode)?;
        writeln!(f, "Termination: {}", self.termination)?;
        writeln!(f, "Total solutions: {}", self.total_solutions)?;
        writeln!(f, "Stored solutions: {}", self.solutions.len())?;
        writeln!(f, "Elapsed time (secs): {:.1}", self.elapsed_seconds)
    }
}

fn round_to_tenth(seconds: f64) -> f64 {
    (seconds * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(mode: SolutionMode, stored: Vec<Vec<i8>>, accepted: u64) -> SimulationResults {
        SimulationResults::new(
            BoardSize::new(4).unwrap(),
            mode,
            stored,
            accepted,
            Duration::from_millis(1260),
            TerminationReason::Completed,
            Statistics::new(),
        )
    }

    #[test]
    fn test_ids_follow_discovery_order() {
        let results = results(SolutionMode::All, vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]], 2);
        let ids: Vec<usize> = results.solutions().iter().map(Solution::id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(results.solutions()[1].queens(), &[2, 0, 3, 1]);
    }

    #[test]
    fn test_all_mode_reports_uncapped_total() {
        let results = results(SolutionMode::All, vec![vec![1, 3, 0, 2]], 2);
        assert_eq!(results.total_solutions(), 2);
        assert!(results.is_truncated());
    }

    #[test]
    fn test_unique_total_is_stored_count() {
        let results = results(SolutionMode::Unique, vec![vec![1, 3, 0, 2]], 1);
        assert_eq!(results.total_solutions(), 1);
        assert!(!results.is_truncated());
    }

    #[test]
    fn test_elapsed_rounds_to_tenth() {
        let results = results(SolutionMode::Single, vec![], 0);
        assert_eq!(results.elapsed_seconds(), 1.3);
    }

    #[test]
    fn test_solution_rendering() {
        let solution = Solution::new(3, vec![1, 3, 0, 2]);
        assert_eq!(solution.name(), "Sol. no. 3");
        assert_eq!(solution.to_string(), "Sol. no. 3: (2, 4, 1, 3)");
        assert_eq!(solution.board_diagram(), "..Q.\nQ...\n...Q\n.Q..\n");
    }

    #[test]
    fn test_display_summary() {
        let rendered = results(SolutionMode::All, vec![vec![1, 3, 0, 2]], 2).to_string();
        assert!(rendered.contains("Board size: 4"));
        assert!(rendered.contains("Solution mode: all"));
        assert!(rendered.contains("Total solutions: 2"));
        assert!(rendered.contains("Elapsed time (secs): 1.3"));
    }
}
