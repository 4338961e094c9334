//! jvmver CLI binary.
//!
//! Entry point for the `jvmver` command-line tool. It parses arguments with
//! `clap`, loads the optional config file, initializes logging via
//! `tracing`, and dispatches to the appropriate command handler.

mod cli;
mod commands;
mod config;

use miette::Result;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> Result<()> {
    let args = cli::parse();
    let config = Config::load(args.config.as_deref())?;
    init_logging(args.verbose, &config);

    tracing::debug!(?config, "loaded configuration");
    commands::dispatch(args, &config)
}

/// `RUST_LOG` wins; otherwise `--verbose` means `debug`, else the configured
/// filter. Logs go to stderr so stdout stays parseable.
fn init_logging(verbose: bool, config: &Config) {
    let fallback = if verbose {
        "debug".to_string()
    } else {
        config.log.filter.clone()
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();
}
