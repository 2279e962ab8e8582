//! Component configuration persisted as a JSON or TOML file.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use quill_core::{
    domain::ComponentConfig,
    error::{QuillError, QuillResult},
};

use crate::format::FileFormat;

/// A component configuration file on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    path: PathBuf,
    format: FileFormat,
}

impl ConfigFile {
    /// Format is chosen from the extension (`.toml`, otherwise JSON).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = FileFormat::from_path(&path);
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    pub fn read(&self) -> QuillResult<ComponentConfig> {
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| map_io_error(&self.path, e, "read"))?;
        let config = Self::decode(&raw, self.format)?;
        debug!(path = %self.path.display(), component = %config.component_type, "Loaded component config");
        Ok(config)
    }

    /// Write `config`, creating parent directories as needed.
    pub fn write(&self, config: &ComponentConfig) -> QuillResult<()> {
        let encoded = Self::encode(config, self.format)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| map_io_error(parent, e, "create directory"))?;
        }
        std::fs::write(&self.path, encoded).map_err(|e| map_io_error(&self.path, e, "write"))?;
        debug!(path = %self.path.display(), "Wrote component config");
        Ok(())
    }

    pub fn encode(config: &ComponentConfig, format: FileFormat) -> QuillResult<String> {
        format.encode(config)
    }

    pub fn decode(input: &str, format: FileFormat) -> QuillResult<ComponentConfig> {
        format.decode(input)
    }
}

pub(crate) fn map_io_error(path: &Path, e: io::Error, operation: &str) -> QuillError {
    QuillError::Io {
        path: path.to_path_buf(),
        kind: e.kind(),
        reason: format!("Failed to {}: {}", operation, e),
    }
}
