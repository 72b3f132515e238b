//! Stylesheet generation from scene layouts
//!
//! Assembles the per-control positioning fragments into a complete
//! stylesheet. Every control's selector includes the marker class the
//! click-routing layer inspects, and a shared marker rule supplies
//! `position: absolute` so hosts only attach the classes.

use crate::layout::{ControlPlacement, SceneLayout};

use super::CssConfig;

/// Build stylesheet rules incrementally
pub struct CssBuilder {
    config: CssConfig,
    rules: Vec<String>,
}

impl CssBuilder {
    /// Create a new builder
    pub fn new(config: CssConfig) -> Self {
        Self {
            config,
            rules: vec![],
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    /// The fully prefixed marker class
    pub fn marker_class(&self) -> String {
        format!("{}{}", self.prefix(), self.config.marker_class)
    }

    /// Add the shared marker rule all overlay controls inherit
    pub fn add_marker_rule(&mut self) {
        self.rules
            .push(format!(".{} {{ position: absolute; }}", self.marker_class()));
    }

    /// Add the positioning rule for one control
    pub fn add_control_rule(&mut self, control: &ControlPlacement) {
        self.rules.push(format!(
            ".{}.{}{} {{ {} }}",
            self.marker_class(),
            self.prefix(),
            control.name,
            control.result.css_positioning
        ));
    }

    /// The class attribute value a host attaches to a control's element
    pub fn element_classes(&self, control: &ControlPlacement) -> String {
        let prefix = self.prefix();
        std::iter::once(self.marker_class())
            .chain(std::iter::once(format!("{}{}", prefix, control.name)))
            .chain(control.css_classes.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Assemble the final stylesheet
    pub fn build(self) -> String {
        let separator = if self.config.pretty_print { "\n" } else { " " };
        self.rules.join(separator)
    }
}

/// Render a computed scene layout as a stylesheet
pub fn render_css(layout: &SceneLayout, config: &CssConfig) -> String {
    let mut builder = CssBuilder::new(config.clone());
    builder.add_marker_rule();
    for control in &layout.controls {
        builder.add_control_rule(control);
    }
    builder.build()
}
