//! Command dispatch and handler modules.

mod compare;
mod conflict;
mod items;
mod max;
mod sort;

use std::io::Write;

use serde::Serialize;

use jvmver_util::errors::{JvmverError, JvmverResult};
use jvmver_version::Version;

use crate::cli::{Cli, Command};
use crate::config::{Config, OutputFormat};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli, config: &Config) -> JvmverResult<()> {
    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    match cli.command {
        Command::Compare { left, right } => compare::exec(&left, &right, format),
        Command::Sort {
            versions,
            descending,
        } => sort::exec(&versions, descending || config.sort.descending, format),
        Command::Max { versions } => max::exec(&versions, format),
        Command::Items { version } => items::exec(&version, format),
        Command::Conflict { module, versions } => conflict::exec(&module, &versions, format),
    }
}

fn parse_all(raw: &[String]) -> Vec<Version> {
    raw.iter().map(|s| Version::new(s.as_str())).collect()
}

fn print_json<T: Serialize>(value: &T) -> JvmverResult<()> {
    write_json(&mut std::io::stdout().lock(), value)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> JvmverResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| JvmverError::Serialization {
        message: e.to_string(),
    })?;
    writeln!(out, "{json}").map_err(JvmverError::from)?;
    Ok(())
}
