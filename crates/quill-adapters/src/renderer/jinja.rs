//! Jinja-syntax renderer backed by minijinja.
//!
//! Undefined behaviour is always strict: a template that reads a variable
//! the caller did not supply fails instead of rendering an empty string.
//! Supplied variables the template never reads are ignored.

use std::collections::BTreeSet;

use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use quill_core::{
    application::{RenderError, ports::TemplateRenderer},
    domain::Variables,
};

/// Whitespace options passed through to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererOptions {
    /// Keep a single trailing newline at the end of the template.
    pub keep_trailing_newline: bool,
    /// Remove the first newline after a block tag.
    pub trim_blocks: bool,
    /// Strip leading whitespace from the start of a line up to a block tag.
    pub lstrip_blocks: bool,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            keep_trailing_newline: true,
            trim_blocks: false,
            lstrip_blocks: false,
        }
    }
}

/// Renderer using minijinja with strict undefined handling.
pub struct MinijinjaRenderer {
    env: Environment<'static>,
}

impl MinijinjaRenderer {
    /// Create a renderer with default options.
    pub fn new() -> Self {
        Self::with_options(RendererOptions::default())
    }

    pub fn with_options(options: RendererOptions) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(options.keep_trailing_newline);
        env.set_trim_blocks(options.trim_blocks);
        env.set_lstrip_blocks(options.lstrip_blocks);
        Self { env }
    }
}

impl Default for MinijinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MinijinjaRenderer {
    #[instrument(skip_all)]
    fn render(&self, template: &str, variables: &Variables) -> Result<String, RenderError> {
        trace!(names = ?variables.names().collect::<Vec<_>>(), "Rendering template");
        self.env
            .render_str(template, variables)
            .map_err(to_render_error)
    }

    fn variables(&self, template: &str) -> Result<BTreeSet<String>, RenderError> {
        let compiled = self
            .env
            .template_from_str(template)
            .map_err(to_render_error)?;
        Ok(compiled.undeclared_variables(false).into_iter().collect())
    }
}

fn to_render_error(err: minijinja::Error) -> RenderError {
    let message = err.to_string();
    match err.kind() {
        ErrorKind::UndefinedError => RenderError::UndefinedVariable { message },
        ErrorKind::SyntaxError => RenderError::Syntax { message },
        _ => RenderError::Engine { message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(template: &str, variables: &Variables) -> Result<String, RenderError> {
        MinijinjaRenderer::new().render(template, variables)
    }

    #[test]
    fn substitutes_variables() {
        let vars = Variables::new()
            .with("target_language", "spanish")
            .with("snippet", "hi");
        assert_eq!(
            render("Translate to {{ target_language }}. Context: {{ snippet }}", &vars).unwrap(),
            "Translate to spanish. Context: hi"
        );
    }

    #[test]
    fn plain_text_is_unchanged() {
        let text = "No variables here.\nJust text:  spacing kept.\n";
        assert_eq!(render(text, &Variables::new()).unwrap(), text);
        assert_eq!(
            render(text, &Variables::new().with("unused", 1)).unwrap(),
            text
        );
    }

    #[test]
    fn non_string_values_use_their_string_form() {
        let vars = Variables::new().with("n", 3).with("ratio", 0.5);
        assert_eq!(render("{{ n }} / {{ ratio }}", &vars).unwrap(), "3 / 0.5");
    }

    #[test]
    fn control_flow_over_lists() {
        let vars = Variables::new().with("documents", json!(["a", "b"]));
        let out = render(
            "{% for d in documents %}- {{ d }}\n{% endfor %}",
            &vars,
        )
        .unwrap();
        assert_eq!(out, "- a\n- b\n");
    }

    #[test]
    fn missing_variable_is_undefined_error() {
        let err = render("Hello {{ y }}", &Variables::new()).unwrap_err();
        assert!(matches!(err, RenderError::UndefinedVariable { .. }), "{err:?}");
    }

    #[test]
    fn unclosed_tag_is_syntax_error() {
        let err = render("Hello {{ name", &Variables::new().with("name", "x")).unwrap_err();
        assert!(matches!(err, RenderError::Syntax { .. }), "{err:?}");
    }

    #[test]
    fn trailing_newline_option() {
        let stripping = MinijinjaRenderer::with_options(RendererOptions {
            keep_trailing_newline: false,
            ..RendererOptions::default()
        });
        assert_eq!(stripping.render("Hi\n", &Variables::new()).unwrap(), "Hi");
        assert_eq!(MinijinjaRenderer::new().render("Hi\n", &Variables::new()).unwrap(), "Hi\n");
    }

    #[test]
    fn trim_blocks_option() {
        let trimming = MinijinjaRenderer::with_options(RendererOptions {
            trim_blocks: true,
            ..RendererOptions::default()
        });
        let out = trimming
            .render("{% if on %}\nyes\n{% endif %}\n", &Variables::new().with("on", true))
            .unwrap();
        assert_eq!(out, "yes\n");
    }

    #[test]
    fn discovers_top_level_variables() {
        let names = MinijinjaRenderer::new()
            .variables("{{ query }} {% for d in documents %}{{ d.content }}{% endfor %}")
            .unwrap();
        assert_eq!(
            names.into_iter().collect::<Vec<_>>(),
            vec!["documents".to_string(), "query".to_string()]
        );
    }

    #[test]
    fn discovery_reports_syntax_errors() {
        let err = MinijinjaRenderer::new().variables("{% for %}").unwrap_err();
        assert!(matches!(err, RenderError::Syntax { .. }));
    }
}
