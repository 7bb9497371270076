// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetry reduction for complete placements.
//!
//! Unique search keeps one representative per orbit of the dihedral group of
//! the square. Two solutions are equivalent when one is the image of the other
//! under a rotation, a reflection, or both.
//!
//! ## Module Structure
//!
//! - `dihedral`: the seven non-identity symmetries and how they act on a placement
//! - `mod`: orbit helpers used by the solution set

pub mod dihedral;

pub use dihedral::Symmetry;

use strum::IntoEnumIterator;

/// The seven images of `rows` under the non-identity symmetries.
///
/// Images may repeat (or equal `rows`) for symmetric solutions.
pub fn symmetric_solutions(rows: &[i8]) -> impl Iterator<Item = Vec<i8>> + '_ {
    Symmetry::iter().map(move |symmetry| symmetry.apply(rows))
}

/// Whether `a` and `b` lie in the same orbit.
pub fn are_equivalent(a: &[i8], b: &[i8]) -> bool {
    a.len() == b.len() && (a == b || symmetric_solutions(a).any(|image| image == b))
}
