//! Core configuration data types used in the config crate.

use perch_geom::{Alignment, Direction, Position};
use serde::{Deserialize, Serialize};

/// Configured side of attachment, or `auto` to use the widget's default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum PositionSetting {
    /// Use the widget's default position.
    #[default]
    Auto,
    /// Above the anchor.
    Top,
    /// Below the anchor.
    Bottom,
    /// Left of the anchor.
    Left,
    /// Right of the anchor.
    Right,
}

impl PositionSetting {
    /// The explicit position, or `None` for `auto`.
    pub fn explicit(self) -> Option<Position> {
        match self {
            Self::Auto => None,
            Self::Top => Some(Position::Top),
            Self::Bottom => Some(Position::Bottom),
            Self::Left => Some(Position::Left),
            Self::Right => Some(Position::Right),
        }
    }
}

/// Configured alignment, or `auto` to use the widget's default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum AlignmentSetting {
    /// Use the widget's default alignment for the resolved position.
    #[default]
    Auto,
    /// Top edges line up.
    Top,
    /// Bottom edges line up.
    Bottom,
    /// Left edges line up.
    Left,
    /// Right edges line up.
    Right,
    /// Centered on the anchor.
    Center,
}

impl AlignmentSetting {
    /// The explicit alignment, or `None` for `auto`.
    pub fn explicit(self) -> Option<Alignment> {
        match self {
            Self::Auto => None,
            Self::Top => Some(Alignment::Top),
            Self::Bottom => Some(Alignment::Bottom),
            Self::Left => Some(Alignment::Left),
            Self::Right => Some(Alignment::Right),
            Self::Center => Some(Alignment::Center),
        }
    }
}

/// Size of a tooltip arrow. Added to the gap on the axis of attachment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Nub {
    /// Width, added to the horizontal gap for `left`/`right` attachment.
    pub w: f64,
    /// Height, added to the vertical gap for `top`/`bottom` attachment.
    pub h: f64,
}

/// Fully resolved placement configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlacementConfig {
    /// Starting side of attachment.
    pub position: PositionSetting,
    /// Starting alignment.
    pub alignment: AlignmentSetting,
    /// Skip the overlap search and keep the starting placement.
    pub allow_overlap: bool,
    /// Treat overflow past the bottom edge as no overflow.
    pub allow_bottom_overlap: bool,
    /// Vertical gap between anchor and floating element.
    pub v_offset: f64,
    /// Horizontal gap between anchor and floating element.
    pub h_offset: f64,
    /// Writing direction, used to choose the default alignment.
    pub direction: Direction,
    /// Arrow size.
    pub nub: Nub,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            position: PositionSetting::Auto,
            alignment: AlignmentSetting::Auto,
            allow_overlap: false,
            allow_bottom_overlap: true,
            v_offset: 0.0,
            h_offset: 0.0,
            direction: Direction::Ltr,
            nub: Nub::default(),
        }
    }
}
