// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable per-search state that outlives a single frame: the collected
//! solutions and the search counters.

pub mod solution_set;
pub mod statistics;

pub use solution_set::{Offer, SolutionSet};
pub use statistics::{Counters, Statistics};
