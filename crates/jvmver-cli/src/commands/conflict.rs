//! Handler for `jvmver conflict`.

use miette::Result;

use jvmver_util::errors::JvmverError;
use jvmver_util::status;
use jvmver_version::conflict::{self, ConflictReport};

use super::{parse_all, print_json};
use crate::config::OutputFormat;

pub fn exec(module: &str, raw: &[String], format: OutputFormat) -> Result<()> {
    let requested = parse_all(raw);
    let selection = conflict::select(module, &requested).ok_or_else(|| JvmverError::Usage {
        message: format!("no versions requested for {module}"),
    })?;

    if format == OutputFormat::Json {
        return print_json(&selection);
    }

    status::status("Selected", &format!("{module} {}", selection.selected));
    match &selection.conflict {
        Some(c) => status::status_warn(
            "Conflict",
            &format!("{} distinct versions requested", c.requested.len()),
        ),
        None => status::status_info("Agreed", "all requests resolve to the same version"),
    }

    let mut report = ConflictReport::new();
    report.record(&selection);
    println!("{module} {}", selection.selected);
    println!("{}", report.to_string().trim_end());
    Ok(())
}
