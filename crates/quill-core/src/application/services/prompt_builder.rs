//! Prompt Builder - renders a prompt from a template and call-time variables.
//!
//! The builder owns its template and an injected renderer. On every call it
//! forwards `(template, variables)` to the renderer and wraps the result as
//! `{"prompt": text}`. It does no parsing of its own and does not touch
//! renderer errors on the way back out.

use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, instrument};

use crate::{
    application::{RenderError, ports::TemplateRenderer},
    domain::{ComponentConfig, DomainError, PromptOutput, PromptTemplate, Variables},
};

/// Type identity written to, and expected in, serialized configurations.
pub const COMPONENT_TYPE: &str = "PromptBuilder";

const TEMPLATE_PARAM: &str = "template";

/// Renders a prompt from a fixed template.
///
/// Every variable the template references is required on each call; what
/// "references" means is up to the renderer.
pub struct PromptBuilder {
    template: PromptTemplate,
    renderer: Box<dyn TemplateRenderer>,
}

impl PromptBuilder {
    /// Create a builder for `template`, rendered by `renderer`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use quill_core::prelude::*;
    ///
    /// # fn demo(renderer: Box<dyn TemplateRenderer>) {
    /// let builder = PromptBuilder::new("Summarize: {{ documents }}\nSummary:", renderer);
    /// # }
    /// ```
    pub fn new(template: impl Into<PromptTemplate>, renderer: Box<dyn TemplateRenderer>) -> Self {
        Self {
            template: template.into(),
            renderer,
        }
    }

    /// Rebuild a builder from a configuration produced by [`Self::to_config`].
    pub fn from_config(
        config: &ComponentConfig,
        renderer: Box<dyn TemplateRenderer>,
    ) -> Result<Self, DomainError> {
        config.expect_type(COMPONENT_TYPE)?;
        let template = config.string_parameter(TEMPLATE_PARAM)?;
        Ok(Self::new(template, renderer))
    }

    /// The template this builder was constructed with.
    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// Render the template with `variables`.
    ///
    /// Renderer failures (missing variable, malformed template, ...) are
    /// returned as-is.
    #[instrument(skip_all, fields(variables = variables.len()))]
    pub fn run(&self, variables: &Variables) -> Result<PromptOutput, RenderError> {
        let prompt = self.renderer.render(self.template.as_str(), variables)?;
        debug!(chars = prompt.len(), "Prompt rendered");
        Ok(PromptOutput::new(prompt))
    }

    /// Input names declared by the template, as reported by the renderer.
    pub fn input_names(&self) -> Result<BTreeSet<String>, RenderError> {
        self.renderer.variables(self.template.as_str())
    }

    /// Type identity plus the template; nothing else is serialized.
    pub fn to_config(&self) -> ComponentConfig {
        ComponentConfig::new(COMPONENT_TYPE).with_parameter(TEMPLATE_PARAM, self.template.as_str())
    }
}

impl fmt::Debug for PromptBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptBuilder")
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}
