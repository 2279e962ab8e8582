//! Renderer port errors.
//!
//! Adapters translate their engine's failures into these variants once, at
//! the port boundary. From there on the value travels back to the caller
//! unchanged.

use thiserror::Error;

/// Errors produced by a [`TemplateRenderer`](super::ports::TemplateRenderer).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The template references a variable that was not supplied.
    #[error("Undefined variable: {message}")]
    UndefinedVariable { message: String },

    /// The template could not be parsed.
    #[error("Template syntax error: {message}")]
    Syntax { message: String },

    /// Any other engine failure (bad filter arguments, type errors, ...).
    #[error("Rendering failed: {message}")]
    Engine { message: String },
}

impl RenderError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UndefinedVariable { .. } => vec![
                "Every variable referenced by the template is required".into(),
                "Try: quill inspect to list the template's inputs".into(),
                "Pass values with --var NAME=VALUE or --vars FILE".into(),
            ],
            Self::Syntax { .. } => vec![
                "Check the template for unbalanced '{{ }}' or '{% %}' tags".into(),
            ],
            Self::Engine { .. } => vec!["Check the error details above".into()],
        }
    }
}
