// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search modes.
//!
//! A `SolutionMode` is the strategy value that parameterizes the one
//! backtracking routine: it carries the early-stop predicate here and the
//! acceptance policy in `state::solution_set`.
//!
//! Both enums round-trip through their lowercase names, which is what a
//! command line or config layer hands in:
//!
//! ```
//! use nqueen_search::engine::{DisplayMode, SolutionMode};
//! use std::str::FromStr;
//!
//! assert_eq!(SolutionMode::from_str("unique").unwrap(), SolutionMode::Unique);
//! assert_eq!(SolutionMode::All.to_string(), "all");
//! assert_eq!(DisplayMode::default(), DisplayMode::Hidden);
//! assert!(SolutionMode::from_str("some").is_err());
//! ```

use crate::board::QueenList;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Which solutions a search looks for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SolutionMode {
    /// The first solution in column-ascending order.
    Single,
    /// One representative per symmetry class.
    Unique,
    /// Every solution, stored up to the configured cap.
    All,
}

impl SolutionMode {
    /// Mode-specific check made at the top of every search frame.
    ///
    /// Single stops once a solution is stored. Unique stops once the leading
    /// column reaches `half_size`: every solution has a mirror image whose
    /// leading row lies below it. All never stops early.
    pub fn should_stop(self, queens: &QueenList, half_size: i8, stored: usize) -> bool {
        match self {
            SolutionMode::Single => stored >= 1,
            SolutionMode::Unique => queens.get(0) == half_size,
            SolutionMode::All => false,
        }
    }
}

/// Whether the search reports its progress to observers.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Batch run: no events, no delays.
    #[default]
    Hidden,
    /// Emit events and pause between placements.
    Visualize,
}

impl DisplayMode {
    pub fn is_visualized(self) -> bool {
        self == DisplayMode::Visualize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSize;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_names_round_trip() {
        for mode in SolutionMode::iter() {
            assert_eq!(SolutionMode::from_str(&mode.to_string()).unwrap(), mode);
        }
        for display in DisplayMode::iter() {
            assert_eq!(DisplayMode::from_str(&display.to_string()).unwrap(), display);
        }
    }

    #[test]
    fn test_single_stops_after_one() {
        let queens = QueenList::new(BoardSize::new(8).unwrap());
        assert!(!SolutionMode::Single.should_stop(&queens, 4, 0));
        assert!(SolutionMode::Single.should_stop(&queens, 4, 1));
    }

    #[test]
    fn test_unique_stops_at_half_size() {
        let mut queens = QueenList::new(BoardSize::new(8).unwrap());
        assert!(!SolutionMode::Unique.should_stop(&queens, 4, 0));
        queens.set(0, 3);
        assert!(!SolutionMode::Unique.should_stop(&queens, 4, 5));
        queens.set(0, 4);
        assert!(SolutionMode::Unique.should_stop(&queens, 4, 5));
    }

    #[test]
    fn test_all_never_stops() {
        let mut queens = QueenList::new(BoardSize::new(8).unwrap());
        queens.set(0, 7);
        assert!(!SolutionMode::All.should_stop(&queens, 4, 1000));
    }
}
