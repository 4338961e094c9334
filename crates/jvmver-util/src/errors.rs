use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for the fallible edges of jvmver.
///
/// Version parsing itself never fails; these cover configuration, command
/// usage and output.
#[derive(Debug, Error, Diagnostic)]
pub enum JvmverError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unreadable configuration file.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check ~/.jvmver/config.toml (or the file named by JVMVER_CONFIG)"))]
    Config { message: String },

    /// A command was invoked with arguments it cannot work with.
    #[error("Invalid usage: {message}")]
    Usage { message: String },

    /// Rendering output (e.g. JSON) failed.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type JvmverResult<T> = miette::Result<T>;
