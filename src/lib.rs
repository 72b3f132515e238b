//! Overlay Anchor - placement engine for gallery overlay controls
//!
//! This library computes pixel placements and declarative CSS for small
//! interactive controls (favorite, share, delete, rating) anchored on top
//! of image tiles. It provides a scene language, a pure placement engine,
//! and a stylesheet renderer.
//!
//! # Example
//!
//! ```rust
//! use overlay_anchor::render;
//!
//! let css = render("container 400 300  favorite at top-right").unwrap();
//! assert!(css.contains("top: 12px; right: 12px;"));
//! ```
//!
//! Placements can also be computed directly, without a scene:
//!
//! ```rust
//! use overlay_anchor::{place, AnchorPosition, ContainerSize, PlacementRequest};
//!
//! let request = PlacementRequest::new(AnchorPosition::BottomRight).with_spacing_index(1);
//! let result = place(&request, ContainerSize::new(400.0, 300.0));
//! assert_eq!((result.x, result.y), (388.0, 240.0));
//! assert!(result.constrained);
//! ```

pub mod error;
pub mod gallery;
pub mod layout;
pub mod parser;
pub mod profile;
pub mod registry;
pub mod renderer;

pub use error::ParseError;
pub use gallery::GalleryEntry;
pub use layout::{
    place, AnchorPosition, ContainerSize, ControlPlacement, GrowDirection, LayoutConfig,
    LayoutError, Offset, PlacementRequest, PlacementResult, SceneLayout,
};
pub use parser::{parse, Scene};
pub use profile::{Profile, ProfileError};
pub use registry::{OverlayRegistry, RegisteredOverlay, RegistryError};
pub use renderer::{render_css, CssConfig, MARKER_ATTRIBUTE};

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error during parsing
    #[error("parse errors: {}", format_parse_errors(.0))]
    Parse(Vec<ParseError>),

    /// Error during layout
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

impl From<Vec<ParseError>> for RenderError {
    fn from(errors: Vec<ParseError>) -> Self {
        RenderError::Parse(errors)
    }
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Placement profile (metric defaults and default positions)
    pub profile: Profile,
    /// Stylesheet output configuration
    pub css: CssConfig,
    /// Debug mode: trace computed placements to stderr
    pub debug: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            css: CssConfig::default(),
            debug: false,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placement profile
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Set the stylesheet configuration
    pub fn with_css(mut self, css: CssConfig) -> Self {
        self.css = css;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Render scene source to a stylesheet with default configuration
///
/// This is the main entry point for the library. It parses the source,
/// computes every control's placement, and generates stylesheet text.
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render scene source to a stylesheet with custom configuration
///
/// # Example
///
/// ```rust
/// use overlay_anchor::{render_with_config, CssConfig, RenderConfig};
///
/// let config = RenderConfig::new().with_css(CssConfig::new().with_class_prefix("gal-"));
/// let css = render_with_config("container 400 300  share at bottom-left", config).unwrap();
/// assert!(css.contains(".gal-control.gal-share"));
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    // Parse the source
    let scene = parse(source)?;

    // Compute placements
    let layout = layout::compute(&scene, &config.profile)?;

    // Debug output
    if config.debug {
        eprintln!("=== Placement Debug ===");
        for control in &layout.controls {
            eprintln!(
                "[{}] {} #{} x={:.1} y={:.1} constrained={}",
                control.name,
                control.position,
                control.spacing_index,
                control.result.x,
                control.result.y,
                control.result.constrained
            );
        }
        eprintln!("=======================");
    }

    // Generate the stylesheet
    Ok(render_css(&layout, &config.css))
}
