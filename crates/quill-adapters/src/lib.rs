//! Infrastructure adapters for Quill.
//!
//! This crate implements the ports defined in `quill-core::application::ports`
//! and owns everything that touches a template engine or the filesystem.

pub mod config_file;
pub mod format;
pub mod renderer;
pub mod variables_file;

// Re-export commonly used adapters
pub use config_file::ConfigFile;
pub use format::FileFormat;
pub use renderer::{MinijinjaRenderer, RendererOptions};
pub use variables_file::VariablesFile;
