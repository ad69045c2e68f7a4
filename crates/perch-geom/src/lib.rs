//! perch-geom: geometry for anchored floating panels.
//!
//! Reads element, parent and viewport rectangles from a [`Layout`], computes
//! explicit offsets for a `(position, alignment)` candidate, and measures how
//! far a floating element overflows its bounding context.
//!
//! All coordinates are document-relative with y growing downward.

mod error;
mod geom;
mod layout;
mod offset;
mod overlap;
mod scene;
mod side;


pub use error::{Error, Result};
pub use geom::{Dimensions, Offset, Rect, Viewport};
pub use layout::{ElementId, Layout, dimensions};
pub use offset::explicit_offset;
pub use overlap::{Axes, EdgeOverflow, edge_overflow, is_contained, overlap_magnitude};
pub use scene::Scene;
pub use side::{Alignment, Direction, Placement, Position};
