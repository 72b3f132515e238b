//! Placement profiles
//!
//! A profile supplies the metric defaults (button size, gap, edge offset)
//! and an optional table mapping control kinds to their default anchor
//! positions, so hosts can keep per-gallery conventions in one TOML file
//! instead of repeating them in every scene.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::similar_positions;
use crate::layout::types::{AnchorPosition, Offset};
use crate::layout::LayoutConfig;

/// Errors that can occur when loading or parsing profiles
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to read profile file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse profile TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Unknown position '{position}' for control '{control}'{}", suggestion_list(.suggestions))]
    UnknownPosition {
        control: String,
        position: String,
        suggestions: Vec<String>,
    },
}

fn suggestion_list(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean {}?)", suggestions.join(", "))
    }
}

/// A placement profile: metric defaults plus per-control default positions
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Optional name for the profile
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Metric defaults applied to controls without overrides
    pub defaults: LayoutConfig,
    /// Default anchor per control kind
    pub positions: HashMap<String, AnchorPosition>,
}

/// TOML structure for deserializing profiles
#[derive(Deserialize)]
struct TomlProfile {
    metadata: Option<TomlMetadata>,
    defaults: Option<TomlDefaults>,
    positions: Option<HashMap<String, String>>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct TomlDefaults {
    button_size: Option<f64>,
    gap: Option<f64>,
    offset: Option<TomlOffset>,
}

/// Offset values may be numeric pixels or a pixel-suffixed string
#[derive(Deserialize)]
#[serde(untagged)]
enum TomlOffset {
    Pixels(f64),
    Text(String),
}

impl Profile {
    /// Load a profile from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a profile from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ProfileError> {
        let parsed: TomlProfile = toml::from_str(content)?;

        let mut defaults = LayoutConfig::default();
        if let Some(d) = &parsed.defaults {
            if let Some(size) = d.button_size {
                defaults = defaults.with_button_size(size);
            }
            if let Some(gap) = d.gap {
                defaults = defaults.with_gap(gap);
            }
            match &d.offset {
                Some(TomlOffset::Pixels(px)) => {
                    defaults = defaults.with_offset(Offset::px(*px));
                }
                Some(TomlOffset::Text(text)) => {
                    // Same leniency as everywhere else: bad strings mean 12px
                    defaults = defaults.with_offset(Offset::parse(text));
                }
                None => {}
            }
        }

        let mut positions = HashMap::new();
        for (control, value) in parsed.positions.unwrap_or_default() {
            let Some(position) = AnchorPosition::from_name(&value) else {
                return Err(ProfileError::UnknownPosition {
                    suggestions: similar_positions(&value, 2),
                    control,
                    position: value,
                });
            };
            positions.insert(control, position);
        }

        Ok(Profile {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            defaults,
            positions,
        })
    }

    /// The default anchor for a control kind, if the profile maps one
    pub fn position_for(&self, control: &str) -> Option<AnchorPosition> {
        self.positions.get(control).copied()
    }

    /// Replace the metric defaults
    pub fn with_defaults(mut self, defaults: LayoutConfig) -> Self {
        self.defaults = defaults;
        self
    }

    /// Map a control kind to a default anchor
    pub fn with_position(mut self, control: impl Into<String>, position: AnchorPosition) -> Self {
        self.positions.insert(control.into(), position);
        self
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            defaults: LayoutConfig::default(),
            positions: HashMap::new(),
        }
    }
}
