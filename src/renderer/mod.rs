//! CSS renderer for generating stylesheets from scene layouts
//!
//! This module takes a SceneLayout and produces stylesheet text with the
//! marker class contract the click-routing layer relies on.

pub mod config;
pub mod css;

pub use config::{CssConfig, MARKER_ATTRIBUTE};
pub use css::{render_css, CssBuilder};
