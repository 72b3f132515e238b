//! Error types for scene layout
//!
//! The placement math itself never fails under valid input; these errors
//! surface at the scene boundary where declarations are validated.

use thiserror::Error;

use crate::parser::ast::Span;

/// Errors that can occur while computing a scene layout
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The scene declares no container
    #[error("scene has no container statement")]
    MissingContainer,

    /// More than one container statement
    #[error("scene declares more than one container")]
    DuplicateContainer { span: Span },

    /// Two controls share one name
    #[error("duplicate control '{name}'")]
    DuplicateControl { name: String, span: Span },

    /// A control has neither a declared nor a profile position
    #[error("control '{name}' has no position (declare one with 'at' or map it in the profile)")]
    MissingPosition { name: String, span: Span },
}

impl LayoutError {
    /// Get the source span if available
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::DuplicateContainer { span } => Some(span),
            Self::DuplicateControl { span, .. } => Some(span),
            Self::MissingPosition { span, .. } => Some(span),
            Self::MissingContainer => None,
        }
    }
}
