//! Configuration for CSS rendering

/// Attribute-style marker for hosts that tag overlay controls with a
/// boolean attribute instead of a class. The click-routing layer matches
/// either marker to keep overlay clicks from opening the lightbox.
pub const MARKER_ATTRIBUTE: &str = "data-overlay-control";

/// Configuration options for stylesheet output
#[derive(Debug, Clone, PartialEq)]
pub struct CssConfig {
    /// Prefix for CSS class names (e.g., "ov-" for "ov-control")
    pub class_prefix: Option<String>,

    /// Marker class (before prefixing) carried by every overlay control
    pub marker_class: String,

    /// Whether to format output with one rule per line
    pub pretty_print: bool,
}

impl Default for CssConfig {
    fn default() -> Self {
        Self {
            class_prefix: Some("ov-".to_string()),
            marker_class: "control".to_string(),
            pretty_print: true,
        }
    }
}

impl CssConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Set the marker class
    pub fn with_marker_class(mut self, marker: impl Into<String>) -> Self {
        self.marker_class = marker.into();
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}
