//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod export;
pub mod init;
pub mod inspect;
pub mod render;

use std::io;

use tracing::debug;

use quill_adapters::{ConfigFile, MinijinjaRenderer};
use quill_core::application::PromptBuilder;

use crate::{
    cli::TemplateSource,
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Build a [`PromptBuilder`] from whichever template source was given.
///
/// The renderer is always configured from `config.render`, including for
/// builders restored with `--from`.
pub(crate) fn load_builder(source: &TemplateSource, config: &AppConfig) -> CliResult<PromptBuilder> {
    let renderer = Box::new(MinijinjaRenderer::with_options(config.render));

    if let Some(path) = &source.file {
        debug!(path = %path.display(), "Reading template file");
        let template = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CliError::TemplateNotFound { path: path.clone() },
            _ => CliError::Io {
                context: format!("Failed to read template '{}'", path.display()),
                source: e,
            },
        })?;
        return Ok(PromptBuilder::new(template, renderer));
    }

    if let Some(inline) = &source.inline {
        return Ok(PromptBuilder::new(inline.as_str(), renderer));
    }

    if let Some(path) = &source.from {
        let component = ConfigFile::new(path).read()?;
        return Ok(PromptBuilder::from_config(&component, renderer)?);
    }

    Err(CliError::Usage {
        message: "one of --template, --template-str or --from is required".into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::domain::Variables;

    fn source(file: Option<&str>, inline: Option<&str>, from: Option<&str>) -> TemplateSource {
        TemplateSource {
            file: file.map(Into::into),
            inline: inline.map(Into::into),
            from: from.map(Into::into),
        }
    }

    #[test]
    fn inline_source_renders() {
        let builder = load_builder(&source(None, Some("Hi {{ who }}"), None), &AppConfig::default())
            .unwrap();
        let out = builder.run(&Variables::new().with("who", "Ada")).unwrap();
        assert_eq!(out.prompt, "Hi Ada");
    }

    #[test]
    fn missing_template_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.j2");
        let err = load_builder(
            &source(path.to_str(), None, None),
            &AppConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::TemplateNotFound { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn wrong_component_type_is_user_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("builder.json");
        std::fs::write(
            &path,
            r#"{"type":"AnswerBuilder","init_parameters":{"template":"x"}}"#,
        )
        .unwrap();

        let err = load_builder(&source(None, None, path.to_str()), &AppConfig::default())
            .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn no_source_is_invalid_input() {
        let err = load_builder(&source(None, None, None), &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::Usage { .. }));
    }
}
