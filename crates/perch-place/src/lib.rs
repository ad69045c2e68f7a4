//! perch-place: collision-avoiding placement of a floating element next to
//! an anchor.
//!
//! A [`Positioner`] starts from a configured `(position, alignment)` and, if
//! the floating element overflows its bounding context, walks the twelve
//! legal candidates until one fits. When none does, the candidate with the
//! smallest overlap is left applied.
//!
//! Geometry is read and written through [`perch_geom::Layout`].

mod engine;
mod error;
mod profile;
mod state;

#[cfg(test)]
mod deterministic_tests;

pub use engine::{Candidate, Gaps, Outcome, Placed, Positioner};
pub use error::{Error, Result, Role};
pub use profile::{Profile, above, below, centered, start_aligned};
pub use state::{PlacementState, TriedPositions};
