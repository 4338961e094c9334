//! Handler for `jvmver items`: show the canonical item sequence.

use miette::Result;
use serde::Serialize;

use jvmver_version::Version;

use super::print_json;
use crate::config::OutputFormat;

#[derive(Serialize)]
struct ItemView {
    kind: &'static str,
    value: String,
}

#[derive(Serialize)]
struct Breakdown<'a> {
    version: &'a str,
    empty: bool,
    items: Vec<ItemView>,
}

pub fn exec(raw: &str, format: OutputFormat) -> Result<()> {
    let version = Version::new(raw);
    let breakdown = Breakdown {
        version: raw,
        empty: version.is_empty(),
        items: version
            .items()
            .iter()
            .map(|item| ItemView {
                kind: item.kind(),
                value: item.to_string(),
            })
            .collect(),
    };

    match format {
        OutputFormat::Json => print_json(&breakdown),
        OutputFormat::Text => {
            for item in &breakdown.items {
                println!("{:<15} {}", item.kind, item.value);
            }
            println!("empty: {}", breakdown.empty);
            Ok(())
        }
    }
}
