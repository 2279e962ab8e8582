//! Template renderer adapters.

pub mod jinja;

pub use jinja::{MinijinjaRenderer, RendererOptions};
