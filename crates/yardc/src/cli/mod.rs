#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;

pub mod decode;
pub mod encode;
pub mod input;
pub mod quote;
pub mod schema;
pub mod sign;
pub mod validate;
pub mod verify;

#[derive(Debug, Parser)]
#[command(
    name = "yardc",
    about = "Yard project data package CLI",
    version
)]
pub struct Cli {
    /// Logging filter (overridden by YARDC_LOG)
    #[arg(long = "log", global = true)]
    pub verbosity: Option<String>,

    /// Emit machine-readable JSON output where applicable
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ./yardc.toml when present)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode a project record (JSON) into a transport string
    Encode(encode::EncodeArgs),
    /// Import a transport string and print the project record
    Decode(decode::DecodeArgs),
    /// Check a transport string (or plain JSON) and list every defect
    Validate(validate::ValidateArgs),
    /// Sign a JSON payload into an HS256 token
    Sign(sign::SignArgs),
    /// Verify an HS256 token and print its payload
    Verify(verify::VerifyArgs),
    /// Price a sod project from its grass areas
    Quote(quote::QuoteArgs),
    /// Print the JSON schema of a project record
    Schema(schema::SchemaArgs),
}

/// Execute the CLI using a pre-parsed argument set and loaded config.
pub fn run_with_cli(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Command::Encode(args) => encode::handle(args, cli.json)?,
        Command::Decode(args) => decode::handle(args, cli.json)?,
        Command::Validate(args) => validate::handle(args, cli.json)?,
        Command::Sign(args) => sign::handle(args, config, cli.json)?,
        Command::Verify(args) => verify::handle(args, config, cli.json)?,
        Command::Quote(args) => quote::handle(args, cli.json)?,
        Command::Schema(args) => schema::handle(args)?,
    }

    Ok(())
}
