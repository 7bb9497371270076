// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The placement vector and the conflict test.
//!
//! `QueenList` is the only mutable board state of a search. Index is the
//! column, value is the row, `-1` marks an unplaced column. The search fills
//! columns left to right, so every column before the one being probed is
//! placed.

use crate::board::BoardSize;
use std::fmt;

/// Row marker for a column without a queen.
pub const UNPLACED: i8 = -1;

/// Current (partial or complete) assignment of queens to columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueenList {
    rows: Vec<i8>,
}

impl QueenList {
    /// An empty board: every column unplaced.
    pub fn new(size: BoardSize) -> Self {
        Self {
            rows: vec![UNPLACED; size.len()],
        }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True only for a zero-column list, which `BoardSize` rules out.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row of the queen in `column`, or `UNPLACED`.
    pub fn get(&self, column: usize) -> i8 {
        self.rows[column]
    }

    /// Put the queen of `column` on `row`.
    pub fn set(&mut self, column: usize, row: i8) {
        self.rows[column] = row;
    }

    /// Mark `column` as unplaced, so the next probe starts from row 0 again.
    pub fn clear(&mut self, column: usize) {
        self.rows[column] = UNPLACED;
    }

    /// Read-only view of the rows.
    pub fn as_slice(&self) -> &[i8] {
        &self.rows
    }

    /// Find the first legal row for `column` above its current row.
    ///
    /// Starting just past the current value lets a backtracking search resume
    /// probing a column where it left off. A row is legal when no queen in an
    /// earlier column shares it or sits on one of its diagonals.
    ///
    /// ```
    /// use nqueen_search::board::{BoardSize, QueenList};
    ///
    /// let mut queens = QueenList::new(BoardSize::new(4).unwrap());
    /// queens.set(0, 0);
    /// // Row 0 shares the row, row 1 the diagonal.
    /// assert_eq!(queens.locate_placement(1), Some(2));
    /// queens.set(1, 2);
    /// // Probing again resumes after row 2.
    /// assert_eq!(queens.locate_placement(1), Some(3));
    /// ```
    pub fn locate_placement(&self, column: usize) -> Option<i8> {
        let size = self.rows.len() as i8;
        let start = self.rows[column] + 1;
        (start..size).find(|&row| self.is_legal(column, row))
    }

    fn is_legal(&self, column: usize, row: i8) -> bool {
        self.rows[..column]
            .iter()
            .enumerate()
            .all(|(placed_column, &placed_row)| {
                let row_distance = (row as i32 - placed_row as i32).abs();
                let column_distance = (column - placed_column) as i32;
                row_distance != 0 && row_distance != column_distance
            })
    }

    /// Check that every column holds a queen and no two queens attack.
    pub fn is_complete_solution(&self) -> bool {
        is_valid_solution(&self.rows)
    }
}

/// Check a row-per-column mapping for a complete non-attacking placement.
pub fn is_valid_solution(rows: &[i8]) -> bool {
    let size = rows.len() as i32;
    if rows.iter().any(|&row| row < 0 || row as i32 >= size) {
        return false;
    }
    for i in 0..rows.len() {
        for j in (i + 1)..rows.len() {
            let row_distance = (rows[i] as i32 - rows[j] as i32).abs();
            if row_distance == 0 || row_distance == (j - i) as i32 {
                return false;
            }
        }
    }
    true
}

impl fmt::Display for QueenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", row)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(n: i64) -> QueenList {
        QueenList::new(BoardSize::new(n).unwrap())
    }

    #[test]
    fn test_new_is_unplaced() {
        let queens = board(5);
        assert_eq!(queens.len(), 5);
        assert!(queens.as_slice().iter().all(|&row| row == UNPLACED));
    }

    #[test]
    fn test_first_column_takes_row_zero() {
        let queens = board(4);
        assert_eq!(queens.locate_placement(0), Some(0));
    }

    #[test]
    fn test_probe_resumes_after_current_row() {
        let mut queens = board(4);
        queens.set(0, 1);
        assert_eq!(queens.locate_placement(0), Some(2));
        queens.set(0, 3);
        assert_eq!(queens.locate_placement(0), None);
    }

    #[test]
    fn test_diagonal_and_row_conflicts() {
        let mut queens = board(4);
        queens.set(0, 0);
        queens.set(1, 2);
        // Column 2: row 0 (row), 1 (diag of col 1), 2 (row), 3 (diag of col 1).
        assert_eq!(queens.locate_placement(2), None);
    }

    #[test]
    fn test_no_placement_on_two_by_two() {
        let mut queens = board(2);
        queens.set(0, 0);
        assert_eq!(queens.locate_placement(1), None);
        queens.set(0, 1);
        assert_eq!(queens.locate_placement(1), None);
    }

    #[test]
    fn test_clear_restarts_probe() {
        let mut queens = board(4);
        queens.set(0, 3);
        queens.clear(0);
        assert_eq!(queens.get(0), UNPLACED);
        assert_eq!(queens.locate_placement(0), Some(0));
    }

    #[test]
    fn test_valid_solution_check() {
        assert!(is_valid_solution(&[1, 3, 0, 2]));
        assert!(is_valid_solution(&[2, 0, 3, 1]));
        assert!(is_valid_solution(&[0]));
        assert!(!is_valid_solution(&[0, 2, 1, 3]));
        assert!(!is_valid_solution(&[0, 0, 0, 0]));
        assert!(!is_valid_solution(&[1, 3, 0, UNPLACED]));
    }

    #[test]
    fn test_display() {
        let mut queens = board(3);
        queens.set(0, 2);
        assert_eq!(queens.to_string(), "[2, -1, -1]");
    }
}
