//! Per-widget defaults for the starting placement.

use perch_geom::{Alignment, Direction, Position};

/// Widget-specific defaults used when the configuration says `auto`.
///
/// Plain function pointers: a widget supplies its defaults as data rather
/// than by overriding methods.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    /// Side of attachment when `position` is `auto`.
    pub default_position: fn() -> Position,
    /// Alignment when `alignment` is `auto`, given the resolved position.
    pub default_alignment: fn(Position, Direction) -> Alignment,
}

impl Profile {
    /// Dropdown panes: below the anchor, aligned to the start edge.
    pub const DROPDOWN: Self = Self {
        default_position: below,
        default_alignment: start_aligned,
    };

    /// Tooltips: above the anchor, centered.
    pub const TOOLTIP: Self = Self {
        default_position: above,
        default_alignment: centered,
    };
}

/// Always `Bottom`.
pub fn below() -> Position {
    Position::Bottom
}

/// Always `Top`.
pub fn above() -> Position {
    Position::Top
}

/// `Left` (LTR) or `Right` (RTL) for top/bottom attachment, `Bottom` for
/// left/right attachment.
pub fn start_aligned(position: Position, direction: Direction) -> Alignment {
    match position {
        Position::Top | Position::Bottom => match direction {
            Direction::Ltr => Alignment::Left,
            Direction::Rtl => Alignment::Right,
        },
        Position::Left | Position::Right => Alignment::Bottom,
    }
}

/// Always `Center`, which is legal for every position.
pub fn centered(_position: Position, _direction: Direction) -> Alignment {
    Alignment::Center
}
