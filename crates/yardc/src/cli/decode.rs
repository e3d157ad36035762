#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Error, Result};
use clap::Parser;
use serde_json::json;
use tracing::info;
use yard_pack::{PackageStore, StoreEvent};

use super::input::{InputArgs, emit};

#[derive(Debug, Parser)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Write the decoded record to this file instead of stdout
    #[arg(long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,
}

pub fn handle(args: DecodeArgs, json: bool) -> Result<()> {
    let encoded = args.source.read()?;
    let store = import_package(&encoded, json)?;

    let rendered = if json {
        serde_json::to_string_pretty(&json!({
            "status": "ok",
            "record": store.record(),
        }))?
    } else {
        serde_json::to_string_pretty(store.record())?
    };
    emit(&rendered, args.out.as_deref())
}

/// Imports `encoded` into a fresh store, reporting every import error on failure.
pub fn import_package(encoded: &str, json: bool) -> Result<PackageStore> {
    let mut store = PackageStore::default();
    store.subscribe(|event| {
        if *event == StoreEvent::Imported {
            info!("data package imported");
        }
    });

    match store.import_from_encoded_string(encoded) {
        Ok(()) => Ok(store),
        Err(err) => {
            let summary = report_rejection(store.import_errors(), json);
            Err(Error::new(err).context(summary))
        }
    }
}

/// Prints `errors` (to stdout as JSON, or to stderr one per line) and returns a summary line.
pub fn report_rejection(errors: &[String], json: bool) -> String {
    if json {
        let payload = json!({
            "status": "rejected",
            "errors": errors,
        });
        println!("{payload:#}");
    } else {
        for error in errors {
            eprintln!("  - {error}");
        }
    }
    format!("data package rejected with {} error(s)", errors.len())
}
