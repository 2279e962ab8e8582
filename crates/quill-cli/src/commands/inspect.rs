//! Implementation of the `quill inspect` command.

use crate::{
    cli::{InspectArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// List the variable names the template reads, one per line.
pub fn execute(args: InspectArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let builder = super::load_builder(&args.source, &config)?;
    let names = builder.input_names()?;

    match output.format() {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&names)
                .map_err(|e| CliError::internal(format!("Failed to serialise input names: {e}")))?;
            output.data(&json)?;
        }
        format => {
            if format == OutputFormat::Human {
                if names.is_empty() {
                    output.warning("Template reads no variables")?;
                } else {
                    output.header("Template inputs:")?;
                }
            }
            // Names are the result, so `--quiet` only drops the decoration.
            for name in &names {
                output.data(name)?;
            }
        }
    }

    Ok(())
}
