//! Overflow of a floating element past its bounding context.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use crate::geom::{Dimensions, Rect};

/// Which axes an overlap measurement considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axes {
    /// All four edges; the magnitude is the Euclidean norm.
    #[default]
    Both,
    /// Left and right edges only; the magnitude is their plain sum.
    Horizontal,
    /// Top and bottom edges only; the magnitude is their plain sum.
    Vertical,
}

/// Per-edge overflow. Each amount is `<= 0`; zero means the edge is inside
/// the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EdgeOverflow {
    /// Overflow past the top edge.
    pub top: f64,
    /// Overflow past the right edge.
    pub right: f64,
    /// Overflow past the bottom edge.
    pub bottom: f64,
    /// Overflow past the left edge.
    pub left: f64,
}

impl EdgeOverflow {
    /// Collapse into a scalar for the given axes.
    ///
    /// Single-axis results are plain sums and therefore `<= 0`; the two-axis
    /// result is a norm and therefore `>= 0`. Callers only rely on the exact
    /// zero.
    pub fn magnitude(&self, axes: Axes) -> f64 {
        match axes {
            Axes::Horizontal => self.left + self.right,
            Axes::Vertical => self.top + self.bottom,
            Axes::Both => (self.top * self.top
                + self.bottom * self.bottom
                + self.left * self.left
                + self.right * self.right)
                .sqrt(),
        }
    }

    /// True if no edge overflows.
    pub fn is_none(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }
}

impl Display for EdgeOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut parts: Vec<String> = Vec::new();
        for (name, v) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if v != 0.0 {
                parts.push(format!("{}={:.1}", name, v));
            }
        }
        if parts.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", parts.join(","))
        }
    }
}

/// Measure how far `floating` extends past each edge of `bounds`, or past the
/// viewport when `bounds` is `None`.
///
/// With `ignore_bottom`, overflow past the bottom edge is tolerated and
/// reported as zero.
pub fn edge_overflow(
    floating: &Dimensions,
    bounds: Option<&Rect>,
    ignore_bottom: bool,
) -> EdgeOverflow {
    let b = bounds.unwrap_or(&floating.window);
    let r = &floating.rect;
    let bottom = if ignore_bottom {
        0.0
    } else {
        (b.bottom() - r.bottom()).min(0.0)
    };
    EdgeOverflow {
        top: (r.top() - b.top()).min(0.0),
        right: (b.right() - r.right()).min(0.0),
        bottom,
        left: (r.left() - b.left()).min(0.0),
    }
}

/// Scalar overlap of `floating` against `bounds` (or the viewport).
///
/// Returns exactly `0.0` when the element is contained on the checked axes.
pub fn overlap_magnitude(
    floating: &Dimensions,
    bounds: Option<&Rect>,
    axes: Axes,
    ignore_bottom: bool,
) -> f64 {
    edge_overflow(floating, bounds, ignore_bottom).magnitude(axes)
}

/// True when `floating` does not overflow `bounds` (or the viewport) on the
/// checked axes.
pub fn is_contained(
    floating: &Dimensions,
    bounds: Option<&Rect>,
    axes: Axes,
    ignore_bottom: bool,
) -> bool {
    overlap_magnitude(floating, bounds, axes, ignore_bottom) == 0.0
}
