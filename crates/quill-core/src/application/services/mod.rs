//! Application services.

pub mod prompt_builder;

pub use prompt_builder::{COMPONENT_TYPE, PromptBuilder};
