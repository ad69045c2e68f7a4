//! Explicit offsets for a `(position, alignment)` candidate.

use crate::{
    Error, Result,
    geom::{Offset, Rect},
    side::{Alignment, Position},
};

/// Compute the top-left corner for `floating` attached to `anchor`.
///
/// The position decides the coordinate on the axis of attachment:
///
/// ```text
/// top    : top  = anchor.top - (floating.h + v_gap)
/// bottom : top  = anchor.top + anchor.h + v_gap
/// left   : left = anchor.left - (floating.w + h_gap)
/// right  : left = anchor.left + anchor.w + h_gap
/// ```
///
/// The alignment decides the other coordinate. For `top`/`bottom`:
///
/// ```text
/// left   : left = anchor.left + h_gap
/// right  : left = anchor.left - floating.w + anchor.w - h_gap
/// center : left = anchor.cx - floating.w / 2 + h_gap
/// ```
///
/// and for `left`/`right`:
///
/// ```text
/// top    : top = anchor.top + v_gap
/// bottom : top = anchor.top - v_gap + anchor.h - floating.h
/// center : top = anchor.top + v_gap + anchor.h / 2 - floating.h / 2
/// ```
///
/// Only the sizes of `floating` are read; its current offsets are ignored.
pub fn explicit_offset(
    floating: &Rect,
    anchor: &Rect,
    position: Position,
    alignment: Alignment,
    v_gap: f64,
    h_gap: f64,
) -> Result<Offset> {
    if !alignment.is_legal_for(position) {
        return Err(Error::IllegalAlignment {
            position,
            alignment,
        });
    }

    let offset = match position {
        Position::Top | Position::Bottom => {
            let top = if position == Position::Top {
                anchor.top() - (floating.h + v_gap)
            } else {
                anchor.top() + anchor.h + v_gap
            };
            let left = match alignment {
                Alignment::Left => anchor.left() + h_gap,
                Alignment::Right => anchor.left() - floating.w + anchor.w - h_gap,
                _ => anchor.cx() - floating.w / 2.0 + h_gap,
            };
            Offset { top, left }
        }
        Position::Left | Position::Right => {
            let left = if position == Position::Left {
                anchor.left() - (floating.w + h_gap)
            } else {
                anchor.left() + anchor.w + h_gap
            };
            let top = match alignment {
                Alignment::Top => anchor.top() + v_gap,
                Alignment::Bottom => anchor.top() - v_gap + anchor.h - floating.h,
                _ => anchor.top() + v_gap + anchor.h / 2.0 - floating.h / 2.0,
            };
            Offset { top, left }
        }
    };
    Ok(offset)
}
