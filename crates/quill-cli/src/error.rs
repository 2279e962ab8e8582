//! Errors surfaced by the `quill` binary and how they reach the user.
//!
//! Every failure ends up as a [`CliError`], which knows its exit code, its
//! hints, and how to print itself to stderr.

use std::error::Error as _;
use std::fmt::Write as _;
use std::io;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;
use tracing::{error, warn};

use quill_core::{
    application::RenderError,
    domain::DomainError,
    error::{ErrorCategory as CoreCategory, QuillError},
};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Arguments clap accepted but Quill cannot act on.
    #[error("{message}")]
    Usage { message: String },

    /// `--template FILE` points at nothing.
    #[error("Template file not found: {}", .path.display())]
    TemplateNotFound { path: PathBuf },

    /// Application settings (`quill.toml`, `QUILL_*`) are unusable.
    #[error("Settings error: {message}")]
    Settings {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(transparent)]
    Core(#[from] QuillError),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl From<io::Error> for CliError {
    fn from(source: io::Error) -> Self {
        Self::Io {
            context: "Failed to write output".into(),
            source,
        }
    }
}

impl From<RenderError> for CliError {
    fn from(err: RenderError) -> Self {
        Self::Core(err.into())
    }
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        Self::Core(err.into())
    }
}

impl CliError {
    pub fn settings(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Settings {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// A failure that means Quill itself is broken.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Core(QuillError::Internal {
            message: message.into(),
        })
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Usage { .. } => vec!["Run 'quill <command> --help' for usage".into()],
            Self::TemplateNotFound { path } => vec![
                format!("No file at '{}'", path.display()),
                "Pass inline text instead with --template-str".into(),
            ],
            Self::Settings { .. } => vec![
                format!("Settings file: {}", crate::config::AppConfig::config_path().display()),
                "Regenerate defaults with 'quill init --force'".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::Io { source, .. } if source.kind() == io::ErrorKind::PermissionDenied => {
                vec!["Check file and directory permissions".into()]
            }
            Self::Io { .. } => Vec::new(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Usage { .. } => ErrorCategory::Usage,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::Settings { .. } => ErrorCategory::Settings,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Compatibility => ErrorCategory::Usage,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Settings,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::Io { .. } => ErrorCategory::Internal,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }

    /// The text printed to stderr: message, causes when `verbose`, hints.
    pub fn report(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if color { style(text) } else { text.to_owned() }
        };

        let mut out = String::new();
        let _ = writeln!(out, "\n{} {self}", paint("error:", |s| s.red().bold().to_string()));

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let _ = writeln!(out, "  {} {err}", paint("caused by:", |s| s.dimmed().to_string()));
                cause = err.source();
            }
        }

        for hint in self.suggestions() {
            let _ = writeln!(out, "  {} {hint}", paint("hint:", |s| s.yellow().bold().to_string()));
        }

        if !verbose {
            let _ = writeln!(
                out,
                "\n{}",
                paint("Run again with -v for details.", |s| s.dimmed().to_string())
            );
        }
        out
    }

    /// Expected failures are warnings; broken settings and bugs are errors.
    pub fn log(&self) {
        let category = self.category();
        match category {
            ErrorCategory::Usage | ErrorCategory::NotFound => warn!(?category, "{self}"),
            ErrorCategory::Settings | ErrorCategory::Internal => error!(?category, "{self}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad arguments, bad template, missing variable.
    Usage,
    NotFound,
    Settings,
    Internal,
}

impl ErrorCategory {
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Internal => 1,
            Self::Usage => 2,
            Self::NotFound => 3,
            Self::Settings => 4,
        }
    }
}

/// Attach a description of the attempted operation to an I/O failure.
pub trait IoContext<T> {
    fn io_context(self, context: impl FnOnce() -> String) -> CliResult<T>;
}

impl<T> IoContext<T> for io::Result<T> {
    fn io_context(self, context: impl FnOnce() -> String) -> CliResult<T> {
        self.map_err(|source| CliError::Io {
            context: context(),
            source,
        })
    }
}
