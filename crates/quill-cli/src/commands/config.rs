//! `quill config`: read configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.data(&to_toml(&config)?)?;
        }

        ConfigCommands::Path => {
            output.data(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn to_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::settings("Failed to serialise config", e))
}

/// Look up a dotted key such as `render.trim_blocks` in the effective config.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let unknown = || CliError::Settings {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    };

    let table = toml::Value::try_from(config)
        .map_err(|e| CliError::settings("Failed to serialise config", e))?;

    let mut current = &table;
    for part in key.split('.') {
        current = current.get(part).ok_or_else(unknown)?;
    }

    match current {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Table(_) => Err(unknown()),
        other => Ok(other.to_string()),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
