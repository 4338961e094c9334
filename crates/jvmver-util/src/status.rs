//! Cargo-style status lines written to stderr.
//!
//! Every line is `{label:>12} {message}`, with the label coloured by
//! severity. Output goes to stderr so stdout stays machine-readable.

use std::io::Write;

use console::Style;

fn emit(style: Style, label: &str, message: &str) {
    let _ = writeln!(
        std::io::stderr(),
        "{:>12} {message}",
        style.apply_to(label),
    );
}

/// Action line with a bold green label, e.g. `    Selected 2.0.1`.
pub fn status(label: &str, message: &str) {
    emit(Style::new().green().bold(), label, message);
}

/// Informational line with a bold cyan label.
pub fn status_info(label: &str, message: &str) {
    emit(Style::new().cyan().bold(), label, message);
}

/// Warning line with a bold yellow label.
pub fn status_warn(label: &str, message: &str) {
    emit(Style::new().yellow().bold(), label, message);
}
