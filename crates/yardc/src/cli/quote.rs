#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use serde_json::json;
use time::OffsetDateTime;
use yard_pack::pricing::{project_cost, project_tier};
use yard_pack::util::{days_from_today, format_currency};

use super::decode::import_package;

#[derive(Debug, Parser)]
pub struct QuoteArgs {
    /// Kentucky Blue Grass area in square feet
    #[arg(long, value_name = "SQFT")]
    pub kbg: Option<f64>,

    /// St. Augustine area in square feet
    #[arg(long, value_name = "SQFT", default_value_t = 0.0)]
    pub st: f64,

    /// Data package whose sod area is used when --kbg is not given
    #[arg(long, value_name = "TOKEN")]
    pub package: Option<String>,
}

pub fn handle(args: QuoteArgs, json: bool) -> Result<()> {
    let record = match args.package.as_deref() {
        Some(encoded) => Some(import_package(encoded, json)?.record().clone()),
        None => None,
    };

    let kbg = args
        .kbg
        .or_else(|| record.as_ref().map(|record| record.sod_area()))
        .unwrap_or(0.0);
    let st = args.st;

    let tier = project_tier(kbg + st);
    let breakdown = project_cost(kbg, st);
    let days_out = record
        .as_ref()
        .and_then(|record| record.desired_complete_date)
        .map(|date| days_from_today(date, OffsetDateTime::now_utc()));

    if json {
        let output = json!({
            "kbg_sq_ft": kbg,
            "st_sq_ft": st,
            "tier": tier,
            "breakdown": breakdown,
            "days_until_complete": days_out,
        });
        println!("{output:#}");
        return Ok(());
    }

    println!(
        "quote\n  tier: {}\n  kbg: {:.2} sq ft  {}\n  st: {:.2} sq ft  {}\n  total: {}",
        tier.map(|tier| tier.name).unwrap_or("none"),
        kbg,
        format_currency(breakdown.kbg_cost),
        st,
        format_currency(breakdown.st_cost),
        format_currency(breakdown.total_cost)
    );
    if let Some(days) = days_out {
        println!("  desired completion: {days} day(s) from today");
    }

    Ok(())
}
