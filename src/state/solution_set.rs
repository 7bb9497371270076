// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solutions collected by a search.
//!
//! Entries are kept in discovery order and deduplicated by exact row
//! sequence. The number of accepted solutions is tracked separately from the
//! stored entries so that All mode can report an exact total while storing
//! only up to its cap.

use crate::engine::SolutionMode;
use crate::symmetry::symmetric_solutions;
use indexmap::IndexSet;

/// What the acceptance policy did with a complete assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// Counted and stored.
    Stored,
    /// Counted, but the All-mode cap was already reached.
    Counted,
    /// Unique mode: an image of this assignment is already stored.
    Duplicate,
}

impl Offer {
    pub fn is_accepted(self) -> bool {
        !matches!(self, Offer::Duplicate)
    }
}

#[derive(Debug, Clone)]
pub struct SolutionSet {
    entries: IndexSet<Vec<i8>>,
    accepted: u64,
    cap: usize,
}

impl SolutionSet {
    /// An empty set storing at most `cap` entries in All mode.
    pub fn new(cap: usize) -> Self {
        Self {
            entries: IndexSet::new(),
            accepted: 0,
            cap,
        }
    }

    /// Apply `mode`'s acceptance policy to a complete assignment.
    pub fn offer(&mut self, mode: SolutionMode, rows: &[i8]) -> Offer {
        match mode {
            SolutionMode::Single => self.store(rows),
            SolutionMode::All => {
                if self.entries.len() < self.cap {
                    self.store(rows)
                } else {
                    self.accepted += 1;
                    Offer::Counted
                }
            }
            SolutionMode::Unique => {
                if self.entries.contains(rows)
                    || symmetric_solutions(rows).any(|image| self.entries.contains(&image))
                {
                    Offer::Duplicate
                } else {
                    self.store(rows)
                }
            }
        }
    }

    fn store(&mut self, rows: &[i8]) -> Offer {
        self.accepted += 1;
        self.entries.insert(rows.to_vec());
        Offer::Stored
    }

    /// Stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every accepted solution, including those past the cap.
    pub fn accepted(&self) -> u64 {
        self.accepted
    }

    /// Stored entries in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Vec<i8>> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<Vec<i8>> {
        self.entries.into_iter().collect()
    }
}
