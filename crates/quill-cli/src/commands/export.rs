//! Implementation of the `quill export` command.

use tracing::info;

use quill_adapters::{ConfigFile, FileFormat};

use crate::{
    cli::{ConfigFormat, ExportArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Print or write the builder's component configuration.
///
/// With `--out`, the file extension picks the format and `--format` is
/// ignored.
pub fn execute(args: ExportArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let builder = super::load_builder(&args.source, &config)?;
    let component = builder.to_config();

    match &args.out {
        Some(path) => {
            let file = ConfigFile::new(path);
            file.write(&component)?;
            info!(path = %path.display(), format = %file.format(), "Configuration exported");
            output.success(&format!("Configuration written to {}", path.display()))?;
        }
        None => {
            let encoded = ConfigFile::encode(&component, file_format(args.format))?;
            output.data(&encoded)?;
        }
    }

    Ok(())
}

fn file_format(format: ConfigFormat) -> FileFormat {
    match format {
        ConfigFormat::Json => FileFormat::Json,
        ConfigFormat::Toml => FileFormat::Toml,
    }
}
