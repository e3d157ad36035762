#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::info;
use yard_pack::{PackageStore, ProjectRecord, StoreConfig};

use super::input::{InputArgs, emit};

#[derive(Debug, Parser)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Write the transport string to this file instead of stdout
    #[arg(long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,
}

pub fn handle(args: EncodeArgs, json: bool) -> Result<()> {
    let text = args.source.read()?;
    let record: ProjectRecord =
        serde_json::from_str(&text).context("input is not a valid project record")?;
    info!(regions = record.drawn_areas.len(), "encoding project record");

    let mut store = PackageStore::new(StoreConfig {
        initial_record: record,
    });
    let token = store
        .export_to_encoded_string()
        .context("unable to export data package")?;

    if json {
        if let Some(path) = args.out.as_deref() {
            emit(&token, Some(path))?;
        }
        let record = store.record();
        let payload = json!({
            "token": token,
            "regions": record.drawn_areas.len(),
            "sod_area": record.sod_area(),
            "powerwash_area": record.powerwash_area(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        emit(&token, args.out.as_deref())?;
    }

    Ok(())
}
