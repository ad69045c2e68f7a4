// Geometry primitives in document coordinates.
// The origin is the top-left corner of the document and y grows downward.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
///
/// `x` is the offset from the document's left edge, `y` the offset from its
/// top edge.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Offset-left.
    pub x: f64,
    /// Offset-top.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Rect {
    /// Construct a rectangle from its offsets and size.
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Left edge.
    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }
    /// Right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }
    /// Top edge.
    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }
    /// Bottom edge; y grows downward.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
    /// Horizontal center.
    #[inline]
    pub fn cx(&self) -> f64 {
        self.x + self.w / 2.0
    }

    /// True when either side is zero (or negative).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Same size, moved so the top-left corner sits at `offset`.
    #[inline]
    pub fn at(&self, offset: Offset) -> Self {
        Self {
            x: offset.left,
            y: offset.top,
            ..*self
        }
    }

    /// Shift by `(dx, dy)`.
    #[inline]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Top-left corner as an offset.
    #[inline]
    pub fn offset(&self) -> Offset {
        Offset {
            top: self.y,
            left: self.x,
        }
    }

    /// True if `other` lies entirely inside `self` (edges inclusive).
    pub fn contains(&self, other: &Self) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "({:.1},{:.1},{:.1},{:.1})", self.x, self.y, self.w, self.h)
    }
}

/// Explicit document-relative coordinates for a floating element's top-left
/// corner.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    /// Distance from the document's top edge.
    pub top: f64,
    /// Distance from the document's left edge.
    pub left: f64,
}

impl Display for Offset {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "top={:.1} left={:.1}", self.top, self.left)
    }
}

/// Visible viewport size and the page scroll position.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    /// Viewport width.
    pub width: f64,
    /// Viewport height.
    pub height: f64,
    /// Horizontal page scroll.
    #[serde(default)]
    pub scroll_x: f64,
    /// Vertical page scroll.
    #[serde(default)]
    pub scroll_y: f64,
}

impl Viewport {
    /// The viewport as a document-relative rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.scroll_x, self.scroll_y, self.width, self.height)
    }
}

/// An element's rectangle together with its parent's and the viewport's.
///
/// All three are in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// The element's own box.
    pub rect: Rect,
    /// The immediate parent's box.
    pub parent: Rect,
    /// The viewport; `x`/`y` carry the page scroll offsets.
    pub window: Rect,
}

impl Dimensions {
    /// Same dimensions with the element moved to `offset`.
    pub fn with_offset(&self, offset: Offset) -> Self {
        Self {
            rect: self.rect.at(offset),
            ..*self
        }
    }
}
