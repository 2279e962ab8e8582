//! Driven (output) ports - implemented by infrastructure.
//!
//! The `quill-adapters` crate provides implementations.

use std::collections::BTreeSet;

use crate::application::RenderError;
use crate::domain::Variables;

/// Port for template rendering.
///
/// Implemented by:
/// - `quill_adapters::renderer::MinijinjaRenderer` (Jinja syntax)
///
/// Implementations decide the template syntax, which variables a template
/// references, and whether a missing variable is an error. The prompt
/// builder relies on `render` being reentrant: it may be called from
/// several threads at once through a shared reference.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `template` with `variables`.
    ///
    /// # Arguments
    ///
    /// * `template` - Template source in the renderer's syntax
    /// * `variables` - Values for the names the template references
    fn render(&self, template: &str, variables: &Variables) -> Result<String, RenderError>;

    /// Names of the top-level variables `template` reads.
    fn variables(&self, template: &str) -> Result<BTreeSet<String>, RenderError>;
}
