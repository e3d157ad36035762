#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use schemars::schema_for;
use yard_pack::ProjectRecord;

use super::input::emit;

#[derive(Debug, Parser)]
pub struct SchemaArgs {
    /// Write the schema to this file instead of stdout
    #[arg(long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,
}

pub fn handle(args: SchemaArgs) -> Result<()> {
    let schema = schema_for!(ProjectRecord);
    let json = serde_json::to_string_pretty(&schema)?;
    emit(&json, args.out.as_deref())
}
