//! Core types for the placement engine

use std::fmt;

use crate::layout::config::{DEFAULT_BUTTON_SIZE, DEFAULT_GAP, DEFAULT_OFFSET};

/// A 2D point in container coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Container dimensions in pixels, supplied fresh per layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// One of the nine named anchor locations on a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorPosition {
    TopLeft,
    TopRight,
    TopCenter,
    BottomLeft,
    BottomRight,
    BottomCenter,
    CenterLeft,
    CenterRight,
    Center,
}

impl AnchorPosition {
    /// All nine anchors, in catalogue order
    pub const ALL: [AnchorPosition; 9] = [
        AnchorPosition::TopLeft,
        AnchorPosition::TopRight,
        AnchorPosition::TopCenter,
        AnchorPosition::BottomLeft,
        AnchorPosition::BottomRight,
        AnchorPosition::BottomCenter,
        AnchorPosition::CenterLeft,
        AnchorPosition::CenterRight,
        AnchorPosition::Center,
    ];

    /// The kebab-case name used in scenes and profiles
    pub fn name(&self) -> &'static str {
        match self {
            AnchorPosition::TopLeft => "top-left",
            AnchorPosition::TopRight => "top-right",
            AnchorPosition::TopCenter => "top-center",
            AnchorPosition::BottomLeft => "bottom-left",
            AnchorPosition::BottomRight => "bottom-right",
            AnchorPosition::BottomCenter => "bottom-center",
            AnchorPosition::CenterLeft => "center-left",
            AnchorPosition::CenterRight => "center-right",
            AnchorPosition::Center => "center",
        }
    }

    /// Look up an anchor by its kebab-case name
    pub fn from_name(name: &str) -> Option<AnchorPosition> {
        Self::ALL.iter().copied().find(|p| p.name() == name)
    }
}

impl fmt::Display for AnchorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The axis and sign along which siblings sharing one anchor spread apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrowDirection {
    Right,
    Left,
    Up,
    Down,
}

impl GrowDirection {
    pub fn name(&self) -> &'static str {
        match self {
            GrowDirection::Right => "right",
            GrowDirection::Left => "left",
            GrowDirection::Up => "up",
            GrowDirection::Down => "down",
        }
    }

    pub fn from_name(name: &str) -> Option<GrowDirection> {
        match name {
            "right" => Some(GrowDirection::Right),
            "left" => Some(GrowDirection::Left),
            "up" => Some(GrowDirection::Up),
            "down" => Some(GrowDirection::Down),
            _ => None,
        }
    }
}

impl fmt::Display for GrowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inset from the container edges, in pixels.
///
/// Callers may supply a pixel-suffixed string (e.g. `"20px"`); any other
/// unit or unparseable string silently falls back to the 12px default so a
/// bad override never interrupts rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    px: f64,
}

impl Offset {
    /// An offset of exactly `px` pixels
    pub fn px(px: f64) -> Self {
        Self { px }
    }

    /// Lenient parse of a pixel-suffixed string.
    ///
    /// `"20px"` yields 20; anything else (other units, bare numbers,
    /// garbage) yields the default.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if let Some(value) = trimmed.strip_suffix("px") {
            if let Ok(px) = value.trim().parse::<f64>() {
                return Self { px };
            }
        }
        Self::default()
    }

    /// The offset value in pixels
    pub fn pixels(&self) -> f64 {
        self.px
    }
}

impl Default for Offset {
    fn default() -> Self {
        Self { px: DEFAULT_OFFSET }
    }
}

impl From<f64> for Offset {
    fn from(px: f64) -> Self {
        Self { px }
    }
}

/// The centering transform an anchor requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    None,
    TranslateX,
    TranslateY,
    TranslateBoth,
}

impl Transform {
    /// The equivalent CSS transform value, empty for [`Transform::None`]
    pub fn as_css(&self) -> &'static str {
        match self {
            Transform::None => "",
            Transform::TranslateX => "translateX(-50%)",
            Transform::TranslateY => "translateY(-50%)",
            Transform::TranslateBoth => "translate(-50%, -50%)",
        }
    }
}

/// A placement request for one control within one container.
///
/// `spacing_index` is the zero-based ordinal of this control among all
/// controls sharing the same `position`; the host assigns consistent
/// ordinals. `direction` is `None` when the caller expressed no preference,
/// which is a distinct state from explicitly requesting any direction.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRequest {
    pub position: AnchorPosition,
    pub spacing_index: u32,
    pub direction: Option<GrowDirection>,
    pub button_size: f64,
    pub gap: f64,
    pub offset: Offset,
}

impl PlacementRequest {
    /// Create a request with the default metrics (44px buttons, 4px gap,
    /// 12px offset) and no direction preference
    pub fn new(position: AnchorPosition) -> Self {
        Self {
            position,
            spacing_index: 0,
            direction: None,
            button_size: DEFAULT_BUTTON_SIZE,
            gap: DEFAULT_GAP,
            offset: Offset::default(),
        }
    }

    /// Set the zero-based ordinal among siblings at the same anchor
    pub fn with_spacing_index(mut self, index: u32) -> Self {
        self.spacing_index = index;
        self
    }

    /// Set an explicit growth direction
    pub fn with_direction(mut self, direction: GrowDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Set the button size in pixels
    pub fn with_button_size(mut self, size: f64) -> Self {
        self.button_size = size;
        self
    }

    /// Set the gap between siblings in pixels
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Set the edge inset
    pub fn with_offset(mut self, offset: impl Into<Offset>) -> Self {
        self.offset = offset.into();
        self
    }
}

/// The computed placement for one control.
///
/// `x`/`y` are the anchor point before any centering transform. Each call to
/// the engine produces a fresh result; results are never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementResult {
    pub x: f64,
    pub y: f64,
    pub css_transform: String,
    pub css_positioning: String,
    pub constrained: bool,
}
