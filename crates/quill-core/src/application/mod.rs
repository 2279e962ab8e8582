//! Application layer for Quill.
//!
//! This layer contains:
//! - **Services**: the `PromptBuilder` component
//! - **Ports**: the `TemplateRenderer` trait implemented by adapters
//! - **Errors**: `RenderError`, the failure type of the renderer port

pub mod error;
pub mod ports;
pub mod services;

pub use services::{COMPONENT_TYPE, PromptBuilder};

pub use ports::TemplateRenderer;

pub use error::RenderError;
