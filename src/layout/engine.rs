//! Placement computation
//!
//! [`place`] runs the full pipeline for a single request: resolve the
//! effective growth direction, compute the base anchor, apply the spacing
//! delta, and render the declarative fragment. [`compute`] drives it for a
//! whole parsed scene, assigning per-anchor ordinals in declaration order.

use std::collections::{HashMap, HashSet};

use crate::layout::config::LayoutConfig;
use crate::layout::coords::{anchor_transform, base_anchor};
use crate::layout::error::LayoutError;
use crate::layout::resolver::effective_direction;
use crate::layout::spacing::{apply_spacing, spacing_offset};
use crate::layout::style::positioning_style;
use crate::layout::types::{
    AnchorPosition, ContainerSize, Offset, PlacementRequest, PlacementResult,
};
use crate::parser::ast::{Modifier, ModifierKey, ModifierValue, Scene, Spanned, Statement};
use crate::profile::Profile;

/// Compute the placement for a single control.
///
/// Pure and O(1); every call returns a freshly allocated result.
pub fn place(request: &PlacementRequest, container: ContainerSize) -> PlacementResult {
    let (direction, constrained) =
        effective_direction(request.position, request.spacing_index, request.direction);

    let offset_px = request.offset.pixels();
    let base = base_anchor(request.position, container, offset_px);
    let spacing_px = spacing_offset(request.spacing_index, request.button_size, request.gap);
    let anchor = apply_spacing(base, request.position, direction, spacing_px);

    PlacementResult {
        x: anchor.x,
        y: anchor.y,
        css_transform: anchor_transform(request.position).as_css().to_string(),
        css_positioning: positioning_style(request.position, direction, spacing_px, offset_px),
        constrained,
    }
}

/// One positioned control within a computed scene
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPlacement {
    pub name: String,
    pub position: AnchorPosition,
    pub spacing_index: u32,
    /// Extra CSS classes from `class:` modifiers
    pub css_classes: Vec<String>,
    pub result: PlacementResult,
}

/// The computed layout for a whole scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    pub container: ContainerSize,
    /// Controls in declaration order
    pub controls: Vec<ControlPlacement>,
}

impl SceneLayout {
    /// Get a control's placement by name
    pub fn get(&self, name: &str) -> Option<&ControlPlacement> {
        self.controls.iter().find(|c| c.name == name)
    }
}

/// Compute placements for every control in a parsed scene.
///
/// Spacing indices are assigned zero-based per anchor position, in
/// declaration order. Positions missing from a control declaration are
/// resolved through the profile's position table.
pub fn compute(scene: &Scene, profile: &Profile) -> Result<SceneLayout, LayoutError> {
    let defaults = &profile.defaults;
    let (container, scene_offset) = resolve_container(scene, defaults)?;

    let mut seen: HashSet<&str> = HashSet::new();
    let mut ordinals: HashMap<AnchorPosition, u32> = HashMap::new();
    let mut controls = Vec::new();

    for stmt in &scene.statements {
        let Statement::Control(decl) = &stmt.node else {
            continue;
        };

        let name = decl.name.node.as_str();
        if !seen.insert(name) {
            return Err(LayoutError::DuplicateControl {
                name: name.to_string(),
                span: decl.name.span.clone(),
            });
        }

        let position = match &decl.position {
            Some(position) => position.node,
            None => {
                profile
                    .position_for(name)
                    .ok_or_else(|| LayoutError::MissingPosition {
                        name: name.to_string(),
                        span: decl.name.span.clone(),
                    })?
            }
        };

        let ordinal = ordinals.entry(position).or_insert(0);
        let spacing_index = *ordinal;
        *ordinal += 1;

        let mut request = PlacementRequest::new(position)
            .with_spacing_index(spacing_index)
            .with_button_size(defaults.button_size)
            .with_gap(defaults.gap)
            .with_offset(scene_offset);

        if let Some(direction) = decl.grow_direction() {
            request = request.with_direction(direction);
        }

        let mut css_classes = Vec::new();
        for modifier in &decl.modifiers {
            match (&modifier.node.key.node, &modifier.node.value.node) {
                (ModifierKey::Size, ModifierValue::Number(size)) => {
                    request = request.with_button_size(*size);
                }
                (ModifierKey::Gap, ModifierValue::Number(gap)) => {
                    request = request.with_gap(*gap);
                }
                (ModifierKey::Offset, value) => {
                    if let Some(offset) = modifier_offset_value(value) {
                        request = request.with_offset(offset);
                    }
                }
                (ModifierKey::Class, ModifierValue::String(class)) => {
                    css_classes.push(class.clone());
                }
                _ => {
                    // Grow handled above; custom keys ignored
                }
            }
        }

        let result = place(&request, container);
        controls.push(ControlPlacement {
            name: name.to_string(),
            position,
            spacing_index,
            css_classes,
            result,
        });
    }

    Ok(SceneLayout { container, controls })
}

/// Find the scene's single container and its effective default offset
fn resolve_container(
    scene: &Scene,
    defaults: &LayoutConfig,
) -> Result<(ContainerSize, Offset), LayoutError> {
    let mut found: Option<(ContainerSize, Offset)> = None;

    for stmt in &scene.statements {
        let Statement::Container(decl) = &stmt.node else {
            continue;
        };
        if found.is_some() {
            return Err(LayoutError::DuplicateContainer {
                span: stmt.span.clone(),
            });
        }
        let offset = modifiers_offset(&decl.modifiers).unwrap_or(defaults.offset);
        found = Some((ContainerSize::new(decl.width, decl.height), offset));
    }

    found.ok_or(LayoutError::MissingContainer)
}

fn modifiers_offset(modifiers: &[Spanned<Modifier>]) -> Option<Offset> {
    modifiers.iter().find_map(|m| {
        if m.node.key.node == ModifierKey::Offset {
            modifier_offset_value(&m.node.value.node)
        } else {
            None
        }
    })
}

fn modifier_offset_value(value: &ModifierValue) -> Option<Offset> {
    match value {
        ModifierValue::Number(px) => Some(Offset::px(*px)),
        ModifierValue::String(text) => Some(Offset::parse(text)),
        ModifierValue::Direction(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::types::GrowDirection;
    use crate::parser::ast::{ContainerDecl, ControlDecl, Identifier};

    const CONTAINER: ContainerSize = ContainerSize {
        width: 400.0,
        height: 300.0,
    };

    fn control(name: &str, position: AnchorPosition) -> Spanned<Statement> {
        Spanned::new(
            Statement::Control(ControlDecl {
                name: Spanned::new(Identifier::new(name), 0..0),
                position: Some(Spanned::new(position, 0..0)),
                modifiers: vec![],
            }),
            0..0,
        )
    }

    fn container_stmt(width: f64, height: f64) -> Spanned<Statement> {
        Spanned::new(
            Statement::Container(ContainerDecl {
                width,
                height,
                modifiers: vec![],
            }),
            0..0,
        )
    }

    #[test]
    fn test_place_corner_bases() {
        let result = place(&PlacementRequest::new(AnchorPosition::TopLeft), CONTAINER);
        assert_eq!((result.x, result.y), (12.0, 12.0));
        assert!(!result.constrained);

        let result = place(&PlacementRequest::new(AnchorPosition::TopRight), CONTAINER);
        assert_eq!((result.x, result.y), (388.0, 12.0));

        let result = place(&PlacementRequest::new(AnchorPosition::BottomRight), CONTAINER);
        assert_eq!((result.x, result.y), (388.0, 288.0));
    }

    #[test]
    fn test_place_center_transforms() {
        let result = place(&PlacementRequest::new(AnchorPosition::Center), CONTAINER);
        assert_eq!((result.x, result.y), (200.0, 150.0));
        assert_eq!(result.css_transform, "translate(-50%, -50%)");

        let result = place(&PlacementRequest::new(AnchorPosition::TopCenter), CONTAINER);
        assert_eq!((result.x, result.y), (200.0, 12.0));
        assert_eq!(result.css_transform, "translateX(-50%)");
    }

    #[test]
    fn test_place_constrained_bottom_right() {
        let request = PlacementRequest::new(AnchorPosition::BottomRight).with_spacing_index(1);
        let result = place(&request, CONTAINER);
        assert!(result.constrained);
        assert_eq!((result.x, result.y), (388.0, 240.0));
    }

    #[test]
    fn test_place_constrained_top_right() {
        let request = PlacementRequest::new(AnchorPosition::TopRight).with_spacing_index(2);
        let result = place(&request, CONTAINER);
        assert!(result.constrained);
        assert_eq!((result.x, result.y), (388.0, 108.0));
    }

    #[test]
    fn test_place_explicit_direction_honored() {
        let request = PlacementRequest::new(AnchorPosition::TopLeft)
            .with_spacing_index(1)
            .with_direction(GrowDirection::Down);
        let result = place(&request, CONTAINER);
        assert!(!result.constrained);
        assert_eq!((result.x, result.y), (12.0, 60.0));
    }

    #[test]
    fn test_place_is_pure() {
        let request = PlacementRequest::new(AnchorPosition::BottomRight).with_spacing_index(1);
        let first = place(&request, CONTAINER);
        let second = place(&request, CONTAINER);
        assert_eq!(first, second);
    }

    #[test]
    fn test_place_spacing_is_monotonic() {
        let mut last_delta = -1.0;
        for index in 0..5 {
            let request = PlacementRequest::new(AnchorPosition::TopLeft).with_spacing_index(index);
            let result = place(&request, CONTAINER);
            let delta = result.x - 12.0;
            assert!(delta > last_delta, "delta must grow with the index");
            last_delta = delta;
        }
    }

    #[test]
    fn test_place_zero_index_within_bounds() {
        for position in AnchorPosition::ALL {
            let result = place(&PlacementRequest::new(position), CONTAINER);
            assert!(result.x >= 0.0 && result.x <= CONTAINER.width, "{}", position);
            assert!(result.y >= 0.0 && result.y <= CONTAINER.height, "{}", position);
        }
    }

    #[test]
    fn test_compute_assigns_ordinals_per_position() {
        let scene = Scene {
            statements: vec![
                container_stmt(400.0, 300.0),
                control("favorite", AnchorPosition::TopRight),
                control("share", AnchorPosition::TopRight),
                control("delete", AnchorPosition::BottomRight),
                control("rating", AnchorPosition::TopRight),
            ],
        };

        let layout = compute(&scene, &Profile::default()).unwrap();
        assert_eq!(layout.get("favorite").unwrap().spacing_index, 0);
        assert_eq!(layout.get("share").unwrap().spacing_index, 1);
        assert_eq!(layout.get("delete").unwrap().spacing_index, 0);
        assert_eq!(layout.get("rating").unwrap().spacing_index, 2);
    }

    #[test]
    fn test_compute_second_sibling_is_constrained() {
        let scene = Scene {
            statements: vec![
                container_stmt(400.0, 300.0),
                control("favorite", AnchorPosition::TopRight),
                control("share", AnchorPosition::TopRight),
            ],
        };

        let layout = compute(&scene, &Profile::default()).unwrap();
        let share = layout.get("share").unwrap();
        assert!(share.result.constrained);
        // Constrained top-right stacks downward
        assert_eq!((share.result.x, share.result.y), (388.0, 60.0));
    }

    #[test]
    fn test_compute_missing_container() {
        let scene = Scene {
            statements: vec![control("favorite", AnchorPosition::TopRight)],
        };
        let err = compute(&scene, &Profile::default()).unwrap_err();
        assert!(matches!(err, LayoutError::MissingContainer));
    }

    #[test]
    fn test_compute_duplicate_container() {
        let scene = Scene {
            statements: vec![container_stmt(400.0, 300.0), container_stmt(200.0, 200.0)],
        };
        let err = compute(&scene, &Profile::default()).unwrap_err();
        assert!(matches!(err, LayoutError::DuplicateContainer { .. }));
    }

    #[test]
    fn test_compute_duplicate_control() {
        let scene = Scene {
            statements: vec![
                container_stmt(400.0, 300.0),
                control("favorite", AnchorPosition::TopRight),
                control("favorite", AnchorPosition::TopLeft),
            ],
        };
        let err = compute(&scene, &Profile::default()).unwrap_err();
        assert!(matches!(err, LayoutError::DuplicateControl { .. }));
    }

    #[test]
    fn test_compute_position_from_profile() {
        let profile =
            Profile::default().with_position("favorite", AnchorPosition::TopRight);
        let scene = Scene {
            statements: vec![
                container_stmt(400.0, 300.0),
                Spanned::new(
                    Statement::Control(ControlDecl {
                        name: Spanned::new(Identifier::new("favorite"), 0..8),
                        position: None,
                        modifiers: vec![],
                    }),
                    0..8,
                ),
            ],
        };

        let layout = compute(&scene, &profile).unwrap();
        assert_eq!(
            layout.get("favorite").unwrap().position,
            AnchorPosition::TopRight
        );
    }

    #[test]
    fn test_compute_missing_position() {
        let scene = Scene {
            statements: vec![
                container_stmt(400.0, 300.0),
                Spanned::new(
                    Statement::Control(ControlDecl {
                        name: Spanned::new(Identifier::new("mystery"), 0..7),
                        position: None,
                        modifiers: vec![],
                    }),
                    0..7,
                ),
            ],
        };
        let err = compute(&scene, &Profile::default()).unwrap_err();
        assert!(matches!(err, LayoutError::MissingPosition { .. }));
    }
}
