// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The dihedral group D4 acting on queen placements.
//!
//! A placement maps each column `c` to a row `r`, i.e. a set of squares
//! `(c, r)` on an N×N board. The square has eight symmetries; the seven
//! non-identity ones are listed by `Symmetry`. Since each symmetry permutes
//! the squares of the board and preserves rows, columns and diagonals as
//! families, the image of a solution is again a solution.

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

/// A non-identity symmetry of the square board.
///
/// Mirrors reflect rows: row `r` becomes `N - 1 - r`, applied after the
/// rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCountMacro)]
pub enum Symmetry {
    Rotate90,
    Rotate180,
    Rotate270,
    Mirror,
    MirrorRotate90,
    MirrorRotate180,
    MirrorRotate270,
}

impl Symmetry {
    /// Apply this symmetry to a complete placement.
    ///
    /// `rows` must be a permutation of `0..rows.len()`; every complete
    /// solution is one.
    ///
    /// ```
    /// use nqueen_search::symmetry::Symmetry;
    ///
    /// // The 4-queens solution is invariant under rotation.
    /// let solution = [1, 3, 0, 2];
    /// assert_eq!(Symmetry::Rotate90.apply(&solution), vec![1, 3, 0, 2]);
    /// assert_eq!(Symmetry::Mirror.apply(&solution), vec![2, 0, 3, 1]);
    /// ```
    pub fn apply(self, rows: &[i8]) -> Vec<i8> {
        match self {
            Symmetry::Rotate90 => rotate90(rows),
            Symmetry::Rotate180 => rotate180(rows),
            Symmetry::Rotate270 => rotate270(rows),
            Symmetry::Mirror => mirror(rows),
            Symmetry::MirrorRotate90 => mirror(&rotate90(rows)),
            Symmetry::MirrorRotate180 => mirror(&rotate180(rows)),
            Symmetry::MirrorRotate270 => mirror(&rotate270(rows)),
        }
    }
}

/// Square `(c, r)` moves to `(r, N - 1 - c)`.
fn rotate90(rows: &[i8]) -> Vec<i8> {
    let last = rows.len() as i8 - 1;
    let mut rotated = vec![0; rows.len()];
    for (column, &row) in rows.iter().enumerate() {
        rotated[row as usize] = last - column as i8;
    }
    rotated
}

/// Square `(c, r)` moves to `(N - 1 - c, N - 1 - r)`.
fn rotate180(rows: &[i8]) -> Vec<i8> {
    let last = rows.len() as i8 - 1;
    rows.iter().rev().map(|&row| last - row).collect()
}

/// Square `(c, r)` moves to `(N - 1 - r, c)`.
fn rotate270(rows: &[i8]) -> Vec<i8> {
    let last = rows.len() as i8 - 1;
    let mut rotated = vec![0; rows.len()];
    for (column, &row) in rows.iter().enumerate() {
        rotated[(last - row) as usize] = column as i8;
    }
    rotated
}

/// Square `(c, r)` moves to `(c, N - 1 - r)`.
fn mirror(rows: &[i8]) -> Vec<i8> {
    let last = rows.len() as i8 - 1;
    rows.iter().map(|&row| last - row).collect()
}
