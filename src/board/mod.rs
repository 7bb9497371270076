// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Board coordinate model.
//!
//! A board of size N has columns and rows numbered `0..N`. A placement is
//! stored column-major: for each column, the row of its queen.
//!
//! # Examples
//!
//! ```
//! use nqueen_search::board::BoardSize;
//!
//! let size = BoardSize::new(8).unwrap();
//! assert_eq!(size.get(), 8);
//! assert_eq!(size.half_size(), 4);
//!
//! assert!(BoardSize::new(0).is_err());
//! assert!(BoardSize::new(128).is_err());
//! ```

pub mod queens;

pub use queens::QueenList;

use crate::errors::{Result, SolveError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest supported board. Values are stored as `i8` rows with `-1` as the
/// unplaced marker.
pub const MAX_BOARD_SIZE: i8 = i8::MAX;

/// Validated board size, `1..=MAX_BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct BoardSize(i8);

impl BoardSize {
    /// Validate and wrap a board size.
    pub fn new(size: i64) -> Result<Self> {
        if size < 1 || size > MAX_BOARD_SIZE as i64 {
            return Err(SolveError::InvalidBoardSize(size));
        }
        Ok(Self(size as i8))
    }

    /// The board size as an `i8`.
    pub fn get(self) -> i8 {
        self.0
    }

    /// The board size as a `usize`, for indexing.
    pub fn len(self) -> usize {
        self.0 as usize
    }

    /// Always false; boards have at least one square.
    pub fn is_empty(self) -> bool {
        false
    }

    /// Leading-column bound for unique search.
    ///
    /// `N / 2` for even N, `N / 2 + 1` for odd N: for odd boards the middle
    /// row is its own mirror and must be explored once.
    pub fn half_size(self) -> i8 {
        if self.0 % 2 == 0 {
            self.0 / 2
        } else {
            self.0 / 2 + 1
        }
    }
}

impl TryFrom<i64> for BoardSize {
    type Error = SolveError;

    fn try_from(size: i64) -> Result<Self> {
        Self::new(size)
    }
}

impl From<BoardSize> for i64 {
    fn from(size: BoardSize) -> Self {
        size.0 as i64
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(BoardSize::new(1).is_ok());
        assert!(BoardSize::new(127).is_ok());
        assert!(matches!(
            BoardSize::new(0),
            Err(SolveError::InvalidBoardSize(0))
        ));
        assert!(matches!(
            BoardSize::new(-3),
            Err(SolveError::InvalidBoardSize(-3))
        ));
        assert!(matches!(
            BoardSize::new(128),
            Err(SolveError::InvalidBoardSize(128))
        ));
    }

    #[test]
    fn test_half_size() {
        let expected = [(1, 1), (2, 1), (3, 2), (4, 2), (5, 3), (8, 4), (9, 5)];
        for (n, half) in expected {
            assert_eq!(BoardSize::new(n).unwrap().half_size(), half, "N={}", n);
        }
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let parsed: std::result::Result<BoardSize, _> = parse_size("200");
        assert!(parsed.is_err());
        let parsed: std::result::Result<BoardSize, _> = parse_size("6");
        assert_eq!(parsed.unwrap().get(), 6);
    }

    fn parse_size(value: &str) -> std::result::Result<BoardSize, toml::de::Error> {
        #[derive(Deserialize)]
        struct Wrapper {
            size: BoardSize,
        }
        toml::from_str::<Wrapper>(&format!("size = {}", value)).map(|w| w.size)
    }
}
