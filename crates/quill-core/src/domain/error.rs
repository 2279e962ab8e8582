use thiserror::Error;

/// Root domain error type.
///
/// Raised when a serialized component configuration or a variables payload
/// does not have the shape the domain expects. Rendering failures are not
/// domain errors; see `RenderError`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Compatibility Errors
    // ========================================================================
    #[error("expected component type '{expected}', found '{found}'")]
    UnexpectedComponentType {
        expected: &'static str,
        found: String,
    },

    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Required init parameter missing: {parameter}")]
    MissingInitParameter { parameter: &'static str },

    #[error("Invalid init parameter '{parameter}': {reason}")]
    InvalidInitParameter { parameter: String, reason: String },

    #[error("Invalid variables: {0}")]
    InvalidVariables(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnexpectedComponentType { expected, found } => vec![
                format!("The configuration describes a '{}' component", found),
                format!("Only '{}' configurations can be loaded here", expected),
            ],
            Self::MissingInitParameter { parameter } => vec![
                format!("Add '{}' under 'init_parameters'", parameter),
                "Try: quill export to see a valid configuration".into(),
            ],
            Self::InvalidInitParameter { parameter, reason } => vec![
                format!("Parameter '{}' is invalid: {}", parameter, reason),
            ],
            Self::InvalidVariables(_) => vec![
                "Variables must be a JSON object, e.g. {\"name\": \"value\"}".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnexpectedComponentType { .. } => ErrorCategory::Compatibility,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
}
