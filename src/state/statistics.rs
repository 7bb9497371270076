// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the search context and incremented by the engine
//! as it probes, backtracks and accepts solutions.

use serde::Serialize;
use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, EnumCountMacro, EnumIter, Display, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Successful `locate_placement` calls.
    PlacementsProbed,
    /// Columns exhausted and reset while backtracking.
    Backtracks,
    /// Complete assignments reached, accepted or not.
    SolutionsFound,
    /// Solutions kept in the solution set.
    SolutionsStored,
    /// Unique-mode candidates rejected as images of a stored solution.
    SymmetricDuplicates,
    /// Queen-placed events emitted while visualizing.
    VisualizationSteps,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for counter in Counters::iter() {
            writeln!(f, "  {}: {}", counter, self.get(counter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        for counter in Counters::iter() {
            assert_eq!(stats.get(counter), 0);
        }
    }

    #[test]
    fn test_increment_is_per_counter() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::Backtracks);
        stats.increment_counter(Counters::Backtracks);
        stats.increment_counter(Counters::SolutionsFound);
        assert_eq!(stats.get(Counters::Backtracks), 2);
        assert_eq!(stats.get(Counters::SolutionsFound), 1);
        assert_eq!(stats.get(Counters::PlacementsProbed), 0);
    }

    #[test]
    fn test_display_lists_every_counter() {
        let rendered = Statistics::new().to_string();
        assert!(rendered.contains("PlacementsProbed: 0"));
        assert!(rendered.contains("VisualizationSteps: 0"));
        assert_eq!(rendered.lines().count(), Counters::COUNT);
    }
}
