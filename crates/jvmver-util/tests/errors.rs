use jvmver_util::errors::JvmverError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = JvmverError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_config_error_display() {
    let err = JvmverError::Config {
        message: "bad syntax".to_string(),
    };
    assert_eq!(err.to_string(), "Configuration error: bad syntax");
}

#[test]
fn test_usage_error_display() {
    let err = JvmverError::Usage {
        message: "no versions given".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid usage: no versions given");
}

#[test]
fn test_serialization_error_display() {
    let err = JvmverError::Serialization {
        message: "eof".to_string(),
    };
    assert_eq!(err.to_string(), "Serialization error: eof");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: JvmverError = io_err.into();
    assert!(matches!(err, JvmverError::Io(_)));
}

#[test]
fn test_config_error_has_help() {
    use miette::Diagnostic;

    let err = JvmverError::Config {
        message: "x".to_string(),
    };
    let help = err.help().map(|h| h.to_string()).unwrap_or_default();
    assert!(help.contains("config.toml"), "got: {help}");
}
