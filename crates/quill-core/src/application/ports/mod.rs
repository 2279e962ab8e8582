//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `quill-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `TemplateRenderer`: template engine

pub mod output;

pub use output::TemplateRenderer;

#[cfg(test)]
pub use output::MockTemplateRenderer;
