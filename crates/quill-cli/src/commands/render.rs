//! Implementation of the `quill render` command.
//!
//! Responsibility: collect variables from `--vars` and `--var`, run the
//! prompt builder, and print or write the prompt.  No rendering logic lives
//! here.

use tracing::{debug, info, instrument};

use quill_adapters::VariablesFile;
use quill_core::domain::{PromptOutput, Variables};

use crate::{
    cli::{OutputFormat, RenderArgs},
    config::AppConfig,
    error::{CliError, CliResult, IoContext},
    output::OutputManager,
};

/// Execute the `quill render` command.
#[instrument(skip_all)]
pub fn execute(args: RenderArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let builder = super::load_builder(&args.source, &config)?;
    let variables = collect_variables(&args)?;

    let rendered = builder.run(&variables)?;
    info!(chars = rendered.prompt.len(), "Prompt rendered");

    let text = format_output(rendered, output.format())?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, &text)
                .io_context(|| format!("Failed to write prompt to '{}'", path.display()))?;
            output.success(&format!("Prompt written to {}", path.display()))?;
        }
        None => output.raw(&text)?,
    }

    Ok(())
}

/// File variables first, then `--var` entries on top.
fn collect_variables(args: &RenderArgs) -> CliResult<Variables> {
    let from_file = match &args.vars_file {
        Some(path) => {
            let file = VariablesFile::new(path);
            debug!(path = %file.path().display(), "Reading variables file");
            file.read()?
        }
        None => Variables::new(),
    };

    let from_flags: Variables = args.vars.iter().cloned().collect();
    Ok(from_file.merge(from_flags))
}

/// The prompt exactly as rendered, or a newline-terminated JSON document.
fn format_output(rendered: PromptOutput, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&rendered)
            .map(|json| json + "\n")
            .map_err(|e| CliError::internal(format!("Failed to serialise output: {e}"))),
        _ => Ok(rendered.prompt),
    }
}
