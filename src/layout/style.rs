//! Declarative positioning fragments
//!
//! Renders a resolved placement as an equivalent CSS declaration list for
//! hosts that prefer declarative styling over direct pixel assignment. The
//! spacing delta is carried as a `calc(offset + spacing)` expression on the
//! edge property the anchor pins along the adjusted axis, derived from the
//! same axis/sign table the coordinate math uses.

use crate::layout::coords::anchor_transform;
use crate::layout::spacing::{spacing_vector, Axis};
use crate::layout::types::{AnchorPosition, GrowDirection, Transform};

/// The edge property an anchor pins on a given axis, `None` when the anchor
/// is centered on that axis.
fn pinned_edge(position: AnchorPosition, axis: Axis) -> Option<&'static str> {
    use AnchorPosition::*;
    match axis {
        Axis::X => match position {
            TopLeft | BottomLeft | CenterLeft => Some("left"),
            TopRight | BottomRight | CenterRight => Some("right"),
            TopCenter | BottomCenter | Center => None,
        },
        Axis::Y => match position {
            TopLeft | TopRight | TopCenter => Some("top"),
            BottomLeft | BottomRight | BottomCenter => Some("bottom"),
            CenterLeft | CenterRight | Center => None,
        },
    }
}

/// The property that centers an anchor on an axis
fn centered_property(axis: Axis) -> &'static str {
    match axis {
        Axis::X => "left",
        Axis::Y => "top",
    }
}

/// Render the positioning declarations for a placement.
///
/// With a zero spacing delta every anchor emits its literal inset rule.
/// A nonzero delta moves the pinned-edge declaration on the adjusted axis
/// into a `calc()` expression; (position, direction) pairs that carry no
/// spacing vector keep the literal rule.
pub fn positioning_style(
    position: AnchorPosition,
    direction: GrowDirection,
    spacing_px: f64,
    offset_px: f64,
) -> String {
    let spacing_axis = if spacing_px > 0.0 {
        spacing_vector(position, direction).map(|(axis, _)| axis)
    } else {
        None
    };

    let mut declarations = Vec::with_capacity(3);

    // Pinned insets first, vertical before horizontal
    for axis in [Axis::Y, Axis::X] {
        if let Some(property) = pinned_edge(position, axis) {
            let value = if spacing_axis == Some(axis) {
                format!("calc({}px + {}px)", offset_px, spacing_px)
            } else {
                format!("{}px", offset_px)
            };
            declarations.push(format!("{}: {};", property, value));
        }
    }

    // Then the centered axes
    for axis in [Axis::Y, Axis::X] {
        if pinned_edge(position, axis).is_none() {
            declarations.push(format!("{}: 50%;", centered_property(axis)));
        }
    }

    let transform = anchor_transform(position);
    if transform != Transform::None {
        declarations.push(format!("transform: {};", transform.as_css()));
    }

    declarations.join(" ")
}
