#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{Value, json};

use super::input::InputArgs;
use crate::config::Config;

#[derive(Debug, Parser)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub token: InputArgs,
}

pub fn handle(args: VerifyArgs, config: &Config, json: bool) -> Result<()> {
    let signer = config.signer()?;
    let token = args.token.read()?;

    let payload: Value = signer
        .verify(token.trim())
        .context("token verification failed")?;

    if json {
        let output = json!({
            "status": "verified",
            "payload": payload,
        });
        println!("{output:#}");
    } else {
        println!("{payload:#}");
    }

    Ok(())
}
