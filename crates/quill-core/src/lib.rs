//! Quill Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Quill, a
//! component that renders a prompt from a template string and variables
//! supplied at call time.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            quill-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │             (PromptBuilder)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │         (Driven: TemplateRenderer)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     quill-adapters (Infrastructure)     │
//! │    (MinijinjaRenderer, ConfigFile)      │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (PromptTemplate, Variables, Config)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quill_core::prelude::*;
//!
//! # fn demo(renderer: Box<dyn TemplateRenderer>) -> Result<(), RenderError> {
//! let builder = PromptBuilder::new(
//!     "Translate to {{ target_language }}. Context: {{ snippet }}",
//!     renderer,
//! );
//!
//! let variables = Variables::new()
//!     .with("target_language", "spanish")
//!     .with("snippet", "hi");
//!
//! let output = builder.run(&variables)?;
//! assert_eq!(output.prompt, "Translate to spanish. Context: hi");
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        PromptBuilder, RenderError,
        ports::TemplateRenderer,
    };
    pub use crate::domain::{
        ComponentConfig, DomainError, PROMPT_KEY, PromptOutput, PromptTemplate, Variables,
    };
    pub use crate::error::{QuillError, QuillResult};
}
