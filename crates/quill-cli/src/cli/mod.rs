//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "quill",
    bin_name = "quill",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Render prompts from templates",
    long_about = "Quill renders a Jinja-syntax prompt template with variables \
                  supplied on the command line or from a file.",
    after_help = "EXAMPLES:\n\
        \x20 quill render -s 'Hello {{ name }}' --var name=Ada\n\
        \x20 quill render -t prompt.j2 --vars vars.json\n\
        \x20 quill inspect -t prompt.j2\n\
        \x20 quill export -t prompt.j2 --out builder.json",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a template into a prompt.
    #[command(
        visible_alias = "r",
        about = "Render a prompt",
        long_about = "Render a prompt.  The prompt is written exactly as rendered; \
                      no trailing newline is added.",
        after_help = "EXAMPLES:\n\
            \x20 quill render -s 'Translate to {{ lang }}: {{ text }}' --var lang=spanish --var text=hi\n\
            \x20 quill render -t prompt.j2 --vars vars.toml\n\
            \x20 quill render --from builder.json --vars vars.json --output-format json"
    )]
    Render(RenderArgs),

    /// List the variables a template reads.
    #[command(
        visible_alias = "i",
        about = "List template inputs",
        after_help = "EXAMPLES:\n\
            \x20 quill inspect -t prompt.j2\n\
            \x20 quill inspect -s '{{ a }} {{ b }}' --output-format json"
    )]
    Inspect(InspectArgs),

    /// Serialize the prompt builder configuration.
    #[command(
        about = "Export component configuration",
        after_help = "EXAMPLES:\n\
            \x20 quill export -t prompt.j2\n\
            \x20 quill export -t prompt.j2 --format toml --out builder.toml"
    )]
    Export(ExportArgs),

    /// Initialise a Quill configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 quill init           # default location\n\
            \x20 quill init --local   # .quill.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 quill completions bash > ~/.local/share/bash-completion/completions/quill\n\
            \x20 quill completions zsh  > ~/.zfunc/_quill"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Quill configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 quill config get render.trim_blocks\n\
            \x20 quill config list"
    )]
    Config(ConfigCommands),
}

// ── shared ────────────────────────────────────────────────────────────────────

/// Where the template comes from.  Exactly one source is required.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct TemplateSource {
    /// Read the template from a file.
    #[arg(short = 't', long = "template", value_name = "FILE", help = "Template file")]
    pub file: Option<PathBuf>,

    /// Use the given text as the template.
    #[arg(
        short = 's',
        long = "template-str",
        value_name = "TEXT",
        help = "Inline template text"
    )]
    pub inline: Option<String>,

    /// Load a serialized prompt builder configuration.
    #[arg(
        long = "from",
        value_name = "CONFIG",
        help = "Component configuration file (.json or .toml)"
    )]
    pub from: Option<PathBuf>,
}

// ── render ────────────────────────────────────────────────────────────────────

/// Arguments for `quill render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: TemplateSource,

    /// A single variable; repeatable.  Values are strings.
    #[arg(
        long = "var",
        value_name = "KEY=VALUE",
        value_parser = parse_var,
        help = "Set a variable (repeatable)"
    )]
    pub vars: Vec<(String, String)>,

    /// JSON or TOML file with an object of variables.
    #[arg(
        long = "vars",
        value_name = "FILE",
        help = "Variables file; --var entries take precedence"
    )]
    pub vars_file: Option<PathBuf>,

    /// Write the prompt to a file instead of stdout.
    #[arg(short = 'o', long = "out", value_name = "FILE", help = "Output file")]
    pub out: Option<PathBuf>,
}

// ── inspect ───────────────────────────────────────────────────────────────────

/// Arguments for `quill inspect`.
#[derive(Debug, Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub source: TemplateSource,
}

// ── export ────────────────────────────────────────────────────────────────────

/// Arguments for `quill export`.
#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub source: TemplateSource,

    /// Serialization format for stdout.  Files use their extension.
    #[arg(
        long = "format",
        value_enum,
        default_value = "json",
        help = "Output format when printing"
    )]
    pub format: ConfigFormat,

    /// Write the configuration to a file.
    #[arg(short = 'o', long = "out", value_name = "FILE", help = "Output file")]
    pub out: Option<PathBuf>,
}

/// Serialization format for `export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Json,
    Toml,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `quill init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.quill.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `quill completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `quill config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `render.trim_blocks`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── value parsers ─────────────────────────────────────────────────────────────

fn parse_var(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err("variable name must not be empty".into());
    }
    Ok((key.to_string(), value.to_string()))
}

// ── tests ─────────────────────────────────────────────────────────────────────
