//! Growth direction resolution
//!
//! Decides whether tight-layout constraints apply to a request and picks the
//! effective direction siblings spread along. Trailing-edge anchors
//! (top-right, bottom-right) are forced into vertical stacking once a second
//! control shares them; every other anchor grows in its default direction.

use crate::layout::types::{AnchorPosition, GrowDirection};

/// Whether constrained-space stacking applies.
///
/// True iff the request carries a nonzero spacing index at one of the two
/// trailing-edge anchors, where horizontal growth is most likely to overflow
/// a narrow container.
pub fn is_constrained(position: AnchorPosition, spacing_index: u32) -> bool {
    spacing_index > 0
        && matches!(
            position,
            AnchorPosition::BottomRight | AnchorPosition::TopRight
        )
}

/// The built-in direction for an anchor.
///
/// Used whenever the layout is constrained or the caller expressed no
/// preference. Constrained trailing-edge anchors stack vertically, away from
/// their pinned edge.
pub fn intelligent_direction(position: AnchorPosition, constrained: bool) -> GrowDirection {
    match position {
        AnchorPosition::TopLeft => GrowDirection::Right,
        AnchorPosition::TopRight => {
            if constrained {
                GrowDirection::Down
            } else {
                GrowDirection::Left
            }
        }
        AnchorPosition::BottomLeft => GrowDirection::Right,
        AnchorPosition::BottomRight => {
            if constrained {
                GrowDirection::Up
            } else {
                GrowDirection::Left
            }
        }
        AnchorPosition::TopCenter => GrowDirection::Down,
        AnchorPosition::BottomCenter => GrowDirection::Up,
        AnchorPosition::CenterLeft => GrowDirection::Right,
        AnchorPosition::CenterRight => GrowDirection::Left,
        AnchorPosition::Center => GrowDirection::Right,
    }
}

/// Resolve the single effective direction for a request.
///
/// A constrained layout always uses the intelligent direction, overriding
/// any explicit preference. Otherwise an explicit direction wins, and `None`
/// falls back to the anchor's intelligent direction. Returns the direction
/// together with the constrained flag.
pub fn effective_direction(
    position: AnchorPosition,
    spacing_index: u32,
    explicit: Option<GrowDirection>,
) -> (GrowDirection, bool) {
    let constrained = is_constrained(position, spacing_index);
    if constrained {
        return (intelligent_direction(position, true), true);
    }
    match explicit {
        Some(direction) => (direction, false),
        None => (intelligent_direction(position, false), false),
    }
}
