//! Variables supplied from a JSON or TOML document.

use std::path::{Path, PathBuf};

use quill_core::{domain::Variables, error::QuillResult};

use crate::config_file::map_io_error;
use crate::format::FileFormat;

/// A file whose top level is an object of variable names to values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariablesFile {
    path: PathBuf,
}

impl VariablesFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> QuillResult<Variables> {
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| map_io_error(&self.path, e, "read"))?;
        Self::parse(&raw, FileFormat::from_path(&self.path))
    }

    pub fn parse(input: &str, format: FileFormat) -> QuillResult<Variables> {
        let value = format.parse_value(input)?;
        Ok(Variables::try_from(value)?)
    }
}
