//! Sides of attachment and alignments along the perpendicular axis.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Which side of the anchor the floating element attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Above the anchor.
    Top,
    /// Below the anchor.
    Bottom,
    /// Left of the anchor.
    Left,
    /// Right of the anchor.
    Right,
}

/// Alignments legal for `Top`/`Bottom` attachment.
const HORIZONTAL_ALIGNMENTS: [Alignment; 3] =
    [Alignment::Left, Alignment::Right, Alignment::Center];

/// Alignments legal for `Left`/`Right` attachment.
const VERTICAL_ALIGNMENTS: [Alignment; 3] = [Alignment::Top, Alignment::Bottom, Alignment::Center];

impl Position {
    /// Search order. Kept explicit so reordering the enum cannot change it.
    pub const ORDER: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// The next position in search order, wrapping from `Bottom` to `Left`.
    pub const fn next(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Top,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Left,
        }
    }

    /// Alignments legal for this position, in cycling order.
    ///
    /// The first entry is the alignment used when the search moves onto this
    /// position.
    pub const fn alignments(self) -> &'static [Alignment; 3] {
        match self {
            Self::Top | Self::Bottom => &HORIZONTAL_ALIGNMENTS,
            Self::Left | Self::Right => &VERTICAL_ALIGNMENTS,
        }
    }

    /// True for `Top` and `Bottom`, which place the element on the vertical
    /// axis and align it horizontally.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Lowercase name as used in configuration and class names.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// How the floating element lines up with the anchor along the axis
/// perpendicular to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Top edges line up.
    Top,
    /// Bottom edges line up.
    Bottom,
    /// Left edges line up.
    Left,
    /// Right edges line up.
    Right,
    /// Centered over the anchor's span.
    Center,
}

impl Alignment {
    /// True if this alignment may be used with `position`.
    pub fn is_legal_for(self, position: Position) -> bool {
        position.alignments().contains(&self)
    }

    /// Index of this alignment within `position`'s legal list.
    pub fn index_in(self, position: Position) -> Option<usize> {
        position.alignments().iter().position(|a| *a == self)
    }

    /// Lowercase name as used in configuration and class names.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

impl Display for Alignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Writing direction of the surrounding content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left-to-right.
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

/// A legal `(position, alignment)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Placement {
    /// Side of attachment.
    position: Position,
    /// Alignment along the perpendicular axis.
    alignment: Alignment,
}

impl Placement {
    /// Pair `position` with `alignment`, rejecting illegal combinations.
    pub fn new(position: Position, alignment: Alignment) -> Result<Self> {
        if alignment.is_legal_for(position) {
            Ok(Self {
                position,
                alignment,
            })
        } else {
            Err(Error::IllegalAlignment {
                position,
                alignment,
            })
        }
    }

    /// `position` with the first alignment of its legal list.
    pub const fn first_of(position: Position) -> Self {
        Self {
            position,
            alignment: position.alignments()[0],
        }
    }

    /// Side of attachment.
    pub const fn position(self) -> Position {
        self.position
    }

    /// Alignment along the perpendicular axis.
    pub const fn alignment(self) -> Alignment {
        self.alignment
    }

    /// Same position, next legal alignment (cyclic).
    pub fn next_alignment(self) -> Self {
        let list = self.position.alignments();
        let idx = self.alignment.index_in(self.position).unwrap_or(0);
        Self {
            position: self.position,
            alignment: list[(idx + 1) % list.len()],
        }
    }

    /// Presentational class names for the placement, e.g.
    /// `("attached-top", "aligned-center")`.
    pub fn class_names(self) -> (String, String) {
        (
            format!("attached-{}", self.position),
            format!("aligned-{}", self.alignment),
        )
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}/{}", self.position, self.alignment)
    }
}
