//! Tracing subscriber for the `quill` binary.
//!
//! The library crates only emit events.  Without `RUST_LOG`, each of the
//! three Quill crates is filtered at [`GlobalArgs::log_level`] and every
//! other target (minijinja, config, ...) is silent.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Install the stderr subscriber.  Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(rust_log.as_deref(), args.log_level());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .without_time()
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// A usable `RUST_LOG` replaces the per-crate defaults entirely.
fn build_filter(rust_log: Option<&str>, level: LevelFilter) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directives(level)))
}

fn default_directives(level: LevelFilter) -> String {
    quill_targets()
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Target prefixes of this binary and the library crates it links.
fn quill_targets() -> [&'static str; 3] {
    [
        env!("CARGO_CRATE_NAME"),
        crate_of::<quill_core::application::PromptBuilder>(),
        crate_of::<quill_adapters::MinijinjaRenderer>(),
    ]
}

fn crate_of<T>() -> &'static str {
    let path = std::any::type_name::<T>();
    path.split("::").next().unwrap_or(path)
}
