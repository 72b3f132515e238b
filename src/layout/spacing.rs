//! Cumulative sibling spacing
//!
//! Controls sharing an anchor are pushed apart along the resolved growth
//! direction by whole button-plus-gap steps. The (position, direction) table
//! below names every pair that carries a spacing delta; pairs outside the
//! table receive none.

use crate::layout::types::{AnchorPosition, GrowDirection, Point};

/// Axis a spacing delta applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// The cumulative pixel distance for a control's ordinal.
///
/// One step per sibling: `index * (button_size + gap)`.
pub fn spacing_offset(spacing_index: u32, button_size: f64, gap: f64) -> f64 {
    f64::from(spacing_index) * (button_size + gap)
}

/// The axis and sign a (position, direction) pair adjusts.
///
/// `None` means the pair carries no spacing delta.
pub fn spacing_vector(
    position: AnchorPosition,
    direction: GrowDirection,
) -> Option<(Axis, f64)> {
    use AnchorPosition::*;
    use GrowDirection::*;

    match (position, direction) {
        (TopLeft, Right) => Some((Axis::X, 1.0)),
        (TopLeft, Down) => Some((Axis::Y, 1.0)),
        (TopRight, Left) => Some((Axis::X, -1.0)),
        (TopRight, Down) => Some((Axis::Y, 1.0)),
        (BottomLeft, Right) => Some((Axis::X, 1.0)),
        (BottomLeft, Up) => Some((Axis::Y, -1.0)),
        (BottomRight, Left) => Some((Axis::X, -1.0)),
        (BottomRight, Up) => Some((Axis::Y, -1.0)),
        (TopCenter, Down) => Some((Axis::Y, 1.0)),
        (BottomCenter, Up) => Some((Axis::Y, -1.0)),
        (CenterLeft, Right) => Some((Axis::X, 1.0)),
        (CenterRight, Left) => Some((Axis::X, -1.0)),
        _ => None,
    }
}

/// Apply a spacing delta to a base anchor point.
///
/// A zero delta or an unlisted (position, direction) pair returns the base
/// point unchanged.
pub fn apply_spacing(
    base: Point,
    position: AnchorPosition,
    direction: GrowDirection,
    offset: f64,
) -> Point {
    if offset == 0.0 {
        return base;
    }
    match spacing_vector(position, direction) {
        Some((Axis::X, sign)) => Point::new(base.x + sign * offset, base.y),
        Some((Axis::Y, sign)) => Point::new(base.x, base.y + sign * offset),
        None => base,
    }
}
