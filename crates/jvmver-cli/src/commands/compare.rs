//! Handler for `jvmver compare`.

use std::cmp::Ordering;

use miette::Result;
use serde::Serialize;

use jvmver_version::Version;

use super::print_json;
use crate::config::OutputFormat;

#[derive(Serialize)]
struct Comparison<'a> {
    left: &'a str,
    right: &'a str,
    ordering: i8,
}

pub fn exec(left: &str, right: &str, format: OutputFormat) -> Result<()> {
    let ordering = Version::new(left).cmp(&Version::new(right));
    tracing::debug!(left, right, ?ordering, "compared versions");

    match format {
        OutputFormat::Json => print_json(&Comparison {
            left,
            right,
            ordering: ordering as i8,
        }),
        OutputFormat::Text => {
            println!("{left} {} {right}", symbol(ordering));
            Ok(())
        }
    }
}

fn symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "==",
        Ordering::Greater => ">",
    }
}
