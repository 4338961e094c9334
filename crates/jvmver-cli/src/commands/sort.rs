//! Handler for `jvmver sort`.

use miette::Result;

use jvmver_version::conflict::sort_versions;

use super::{parse_all, print_json};
use crate::config::OutputFormat;

pub fn exec(raw: &[String], descending: bool, format: OutputFormat) -> Result<()> {
    let mut versions = parse_all(raw);
    sort_versions(&mut versions);
    if descending {
        versions.reverse();
    }

    match format {
        OutputFormat::Json => print_json(&versions),
        OutputFormat::Text => {
            for v in &versions {
                println!("{v}");
            }
            Ok(())
        }
    }
}
