//! Configuration for the placement engine

use crate::layout::types::Offset;

/// Default control button size in pixels
pub const DEFAULT_BUTTON_SIZE: f64 = 44.0;

/// Default gap between sibling controls in pixels
pub const DEFAULT_GAP: f64 = 4.0;

/// Default inset from the container edges in pixels
pub const DEFAULT_OFFSET: f64 = 12.0;

/// Metric defaults applied to every control that does not override them
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Button size in pixels (one step of sibling spacing is size + gap)
    pub button_size: f64,

    /// Gap between sibling controls in pixels
    pub gap: f64,

    /// Inset from the relevant container edges
    pub offset: Offset,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            button_size: DEFAULT_BUTTON_SIZE,
            gap: DEFAULT_GAP,
            offset: Offset::default(),
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the button size
    pub fn with_button_size(mut self, size: f64) -> Self {
        self.button_size = size;
        self
    }

    /// Set the gap between siblings
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
