//! CLI argument definitions for jvmver.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "jvmver",
    version,
    about = "Compare and select JVM artifact versions",
    long_about = "jvmver orders Maven/Ivy version strings the way JVM dependency resolvers do: \
                  numeric segments, qualifiers like RC1 or SNAPSHOT, min/max sentinels and \
                  build metadata all get their conventional precedence."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ~/.jvmver/config.toml)
    #[arg(long, global = true, env = "JVMVER_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare two versions
    Compare {
        /// Left-hand version
        left: String,
        /// Right-hand version
        right: String,
    },

    /// Sort versions, lowest first
    Sort {
        /// Versions to sort
        versions: Vec<String>,
        /// Highest first
        #[arg(short, long)]
        descending: bool,
    },

    /// Print the highest of the given versions
    Max {
        /// Candidate versions
        versions: Vec<String>,
    },

    /// Show how a version is broken into items
    Items {
        /// Version to inspect
        version: String,
    },

    /// Select one version of a module among conflicting requests
    Conflict {
        /// Module coordinate (group:artifact)
        module: String,
        /// Requested versions, in request order
        versions: Vec<String>,
    },
}

/// Parse command-line arguments.
pub fn parse() -> Cli {
    Cli::parse()
}
