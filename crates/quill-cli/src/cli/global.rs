//! Flags accepted before or after any `quill` subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum, builder::FalseyValueParser};
use tracing::level_filters::LevelFilter;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log progress to stderr; repeat for debug (`-vv`) and trace (`-vvv`).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only errors reach stderr; status lines on stdout are dropped.
    ///
    /// Rendered prompts, `inspect` names and exported configs are still
    /// printed.
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colour codes.
    ///
    /// `NO_COLOR` in the environment enables this unless it is empty or a
    /// falsey word such as `0`, `false` or `off`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Application settings file (TOML).  Must exist when given.
    #[arg(short = 'c', long = "config", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Shape of stdout; `auto` defers to `output.format`, then the terminal.
    #[arg(long = "output-format", global = true, value_enum, default_value_t)]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Most detailed level logged for the Quill crates.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Coloured status lines and headers.
    Human,
    /// Bare values, no colour.
    Plain,
    /// JSON documents (`{"prompt": ...}`, arrays of names).
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn global(args: &[&str]) -> GlobalArgs {
        let mut argv = vec!["quill"];
        argv.extend_from_slice(args);
        argv.extend_from_slice(&["config", "path"]);
        Cli::try_parse_from(argv).unwrap().global
    }

    #[test]
    fn level_follows_verbosity() {
        assert_eq!(global(&[]).log_level(), LevelFilter::WARN);
        assert_eq!(global(&["-v"]).log_level(), LevelFilter::INFO);
        assert_eq!(global(&["-vv"]).log_level(), LevelFilter::DEBUG);
        assert_eq!(global(&["-vvvvv"]).log_level(), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_logs_errors_only() {
        assert_eq!(global(&["-q"]).log_level(), LevelFilter::ERROR);
    }

    #[test]
    fn no_color_flag_takes_no_value() {
        assert!(global(&["--no-color"]).no_color);
    }

    #[test]
    fn falsey_words_do_not_disable_color() {
        let parser = FalseyValueParser::new();
        let cmd = clap::Command::new("quill");
        for (raw, expected) in [("1", true), ("yes", true), ("", false), ("0", false), ("off", false)] {
            let parsed = clap::builder::TypedValueParser::parse_ref(
                &parser,
                &cmd,
                None,
                std::ffi::OsStr::new(raw),
            )
            .unwrap();
            assert_eq!(parsed, expected, "NO_COLOR={raw:?}");
        }
    }

    #[test]
    fn output_format_defaults_to_auto() {
        assert_eq!(global(&[]).output_format, OutputFormat::Auto);
        assert_eq!(
            global(&["--output-format", "json"]).output_format,
            OutputFormat::Json
        );
    }
}
