//! Core domain layer for Quill.
//!
//! Pure data types with no I/O and no knowledge of any template engine.
//! Template syntax is a renderer concern handled via the port defined in
//! the application layer.
//!
//! - **No I/O**: nothing here touches the filesystem
//! - **Immutable template**: `PromptTemplate` has no mutating methods
//! - **Serde at the edges**: variables, outputs, and configuration are
//!   serializable so adapters can persist or print them
pub mod config;
pub mod error;
pub mod output;
pub mod template;
pub mod variables;

pub use config::ComponentConfig;
pub use error::{DomainError, ErrorCategory};
pub use output::{PROMPT_KEY, PromptOutput};
pub use template::PromptTemplate;
pub use variables::Variables;
