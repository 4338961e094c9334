//! Handler for `jvmver max`.

use miette::Result;
use serde::Serialize;

use jvmver_util::errors::JvmverError;
use jvmver_version::conflict::highest;
use jvmver_version::Version;

use super::{parse_all, print_json};
use crate::config::OutputFormat;

#[derive(Serialize)]
struct Highest<'a> {
    max: &'a Version,
}

pub fn exec(raw: &[String], format: OutputFormat) -> Result<()> {
    let versions = parse_all(raw);
    let max = highest(&versions).ok_or_else(|| JvmverError::Usage {
        message: "`max` needs at least one version".to_string(),
    })?;

    match format {
        OutputFormat::Json => print_json(&Highest { max }),
        OutputFormat::Text => {
            println!("{max}");
            Ok(())
        }
    }
}
