//! Base anchor coordinates
//!
//! Maps an anchor position within a container to its pre-spacing anchor
//! point and the centering transform the anchor requires. Corner anchors are
//! inset by `offset` on both axes; edge-midpoint and center anchors sit on
//! the container midlines and carry a translate transform instead.

use crate::layout::types::{AnchorPosition, ContainerSize, Point, Transform};

/// The pre-spacing anchor point for a position, inset by `offset` pixels
/// from the relevant edges of a `container`.
pub fn base_anchor(position: AnchorPosition, container: ContainerSize, offset: f64) -> Point {
    let ContainerSize { width, height } = container;
    match position {
        AnchorPosition::TopLeft => Point::new(offset, offset),
        AnchorPosition::TopRight => Point::new(width - offset, offset),
        AnchorPosition::TopCenter => Point::new(width / 2.0, offset),
        AnchorPosition::BottomLeft => Point::new(offset, height - offset),
        AnchorPosition::BottomRight => Point::new(width - offset, height - offset),
        AnchorPosition::BottomCenter => Point::new(width / 2.0, height - offset),
        AnchorPosition::CenterLeft => Point::new(offset, height / 2.0),
        AnchorPosition::CenterRight => Point::new(width - offset, height / 2.0),
        AnchorPosition::Center => Point::new(width / 2.0, height / 2.0),
    }
}

/// The centering transform an anchor position requires
pub fn anchor_transform(position: AnchorPosition) -> Transform {
    match position {
        AnchorPosition::TopLeft
        | AnchorPosition::TopRight
        | AnchorPosition::BottomLeft
        | AnchorPosition::BottomRight => Transform::None,
        AnchorPosition::TopCenter | AnchorPosition::BottomCenter => Transform::TranslateX,
        AnchorPosition::CenterLeft | AnchorPosition::CenterRight => Transform::TranslateY,
        AnchorPosition::Center => Transform::TranslateBoth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: ContainerSize = ContainerSize {
        width: 400.0,
        height: 300.0,
    };

    #[test]
    fn test_corner_anchors() {
        assert_eq!(
            base_anchor(AnchorPosition::TopLeft, CONTAINER, 12.0),
            Point::new(12.0, 12.0)
        );
        assert_eq!(
            base_anchor(AnchorPosition::TopRight, CONTAINER, 12.0),
            Point::new(388.0, 12.0)
        );
        assert_eq!(
            base_anchor(AnchorPosition::BottomLeft, CONTAINER, 12.0),
            Point::new(12.0, 288.0)
        );
        assert_eq!(
            base_anchor(AnchorPosition::BottomRight, CONTAINER, 12.0),
            Point::new(388.0, 288.0)
        );
    }

    #[test]
    fn test_edge_midpoint_anchors() {
        assert_eq!(
            base_anchor(AnchorPosition::TopCenter, CONTAINER, 12.0),
            Point::new(200.0, 12.0)
        );
        assert_eq!(
            base_anchor(AnchorPosition::BottomCenter, CONTAINER, 12.0),
            Point::new(200.0, 288.0)
        );
        assert_eq!(
            base_anchor(AnchorPosition::CenterLeft, CONTAINER, 12.0),
            Point::new(12.0, 150.0)
        );
        assert_eq!(
            base_anchor(AnchorPosition::CenterRight, CONTAINER, 12.0),
            Point::new(388.0, 150.0)
        );
    }

    #[test]
    fn test_center_anchor() {
        assert_eq!(
            base_anchor(AnchorPosition::Center, CONTAINER, 12.0),
            Point::new(200.0, 150.0)
        );
    }

    #[test]
    fn test_custom_offset() {
        assert_eq!(
            base_anchor(AnchorPosition::BottomRight, CONTAINER, 20.0),
            Point::new(380.0, 280.0)
        );
    }

    #[test]
    fn test_transforms() {
        assert_eq!(
            anchor_transform(AnchorPosition::TopLeft),
            Transform::None
        );
        assert_eq!(
            anchor_transform(AnchorPosition::TopCenter),
            Transform::TranslateX
        );
        assert_eq!(
            anchor_transform(AnchorPosition::BottomCenter),
            Transform::TranslateX
        );
        assert_eq!(
            anchor_transform(AnchorPosition::CenterLeft),
            Transform::TranslateY
        );
        assert_eq!(
            anchor_transform(AnchorPosition::CenterRight),
            Transform::TranslateY
        );
        assert_eq!(
            anchor_transform(AnchorPosition::Center),
            Transform::TranslateBoth
        );
    }

    #[test]
    fn test_zero_offset_sits_on_edges() {
        assert_eq!(
            base_anchor(AnchorPosition::TopLeft, CONTAINER, 0.0),
            Point::new(0.0, 0.0)
        );
        assert_eq!(
            base_anchor(AnchorPosition::BottomRight, CONTAINER, 0.0),
            Point::new(400.0, 300.0)
        );
    }
}
