//! On-disk formats for configuration and variables files.

use std::fmt;
use std::path::Path;

use serde_json::Value;

use quill_core::error::{Context, QuillResult};

/// Serialization format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    /// `.toml` files are TOML; everything else is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }

    pub(crate) fn decode<T>(self, input: &str) -> QuillResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        match self {
            Self::Json => serde_json::from_str(input).context("invalid JSON"),
            Self::Toml => toml::from_str(input).context("invalid TOML"),
        }
    }

    pub(crate) fn encode<T>(self, value: &T) -> QuillResult<String>
    where
        T: serde::Serialize,
    {
        match self {
            Self::Json => {
                let mut out = serde_json::to_string_pretty(value).context("cannot encode JSON")?;
                out.push('\n');
                Ok(out)
            }
            Self::Toml => toml::to_string_pretty(value).context("cannot encode TOML"),
        }
    }

    /// Parse into a generic JSON value regardless of the source format.
    pub(crate) fn parse_value(self, input: &str) -> QuillResult<Value> {
        self.decode(input)
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Toml => write!(f, "toml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_picks_format() {
        assert_eq!(FileFormat::from_path(Path::new("a/b.toml")), FileFormat::Toml);
        assert_eq!(FileFormat::from_path(Path::new("a/b.TOML")), FileFormat::Toml);
        assert_eq!(FileFormat::from_path(Path::new("a/b.json")), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("no_extension")), FileFormat::Json);
    }

    #[test]
    fn toml_parses_into_json_value() {
        let value = FileFormat::Toml.parse_value("name = \"x\"\ncount = 2\n").unwrap();
        assert_eq!(value, serde_json::json!({ "name": "x", "count": 2 }));
    }
}
