#![forbid(unsafe_code)]

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use serde_json::{Value, json};
use yard_pack::{ProjectRecord, narrow};

use super::decode::{import_package, report_rejection};
use super::input::InputArgs;

#[derive(Debug, Parser)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Treat the input as plain JSON rather than a transport string
    #[arg(long)]
    pub plain: bool,
}

pub fn handle(args: ValidateArgs, json: bool) -> Result<()> {
    let text = args.source.read()?;

    let record = if args.plain {
        let raw: Value = serde_json::from_str(&text).context("input is not valid JSON")?;
        narrow(raw).map_err(|defects| anyhow!(report_rejection(&defects, json)))?
    } else {
        import_package(&text, json)?.record().clone()
    };

    print_summary(&record, json)
}

fn print_summary(record: &ProjectRecord, json: bool) -> Result<()> {
    if json {
        let payload = json!({
            "status": "ok",
            "regions": record.drawn_areas.len(),
            "sod_area": record.sod_area(),
            "powerwash_area": record.powerwash_area(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!(
            "data package ok\n  regions: {}\n  sod area: {:.2}\n  powerwash area: {:.2}",
            record.drawn_areas.len(),
            record.sod_area(),
            record.powerwash_area()
        );
    }
    Ok(())
}
