//! Unified error handling for Quill Core.
//!
//! This module provides a unified error type that wraps domain and renderer
//! errors, with user-actionable suggestions. The prompt builder itself never
//! converts into this type; it hands renderer errors back untouched. The
//! unified error exists for adapters and the CLI, which deal with files and
//! configuration on top of rendering.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::application::RenderError;
use crate::domain::DomainError;

/// Root error type for Quill operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuillError {
    /// Errors from the domain layer (invalid configuration or variables).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// A renderer failed to produce a prompt.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// A serialized configuration could not be read or written.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A file could not be accessed.  `kind` decides whether this is a
    /// missing resource or a system failure.
    #[error("I/O error at {path}: {reason}")]
    Io {
        path: PathBuf,
        kind: io::ErrorKind,
        reason: String,
    },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl QuillError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Render(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check that the file is valid JSON or TOML".into(),
            ],
            Self::Io { path, kind, .. } => match kind {
                io::ErrorKind::NotFound => vec![
                    format!("No file at: {}", path.display()),
                    "Check the path for typos".into(),
                ],
                io::ErrorKind::PermissionDenied => vec![
                    format!("Permission denied: {}", path.display()),
                    "Check file and directory permissions".into(),
                ],
                _ => vec![format!("Failed to access: {}", path.display())],
            },
            Self::Internal { .. } => vec![
                "This appears to be a bug in Quill".into(),
                "Please report this issue at: https://github.com/cosecruz/quill/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Compatibility => ErrorCategory::Compatibility,
            },
            Self::Render(_) => ErrorCategory::Validation,
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Io { kind, .. } if *kind == io::ErrorKind::NotFound => ErrorCategory::NotFound,
            Self::Io { .. } => ErrorCategory::Internal,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type QuillResult<T> = Result<T, QuillError>;

/// Extension trait for turning parse errors into configuration errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> QuillResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> QuillResult<T> {
        self.map_err(|e| QuillError::Configuration {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}
