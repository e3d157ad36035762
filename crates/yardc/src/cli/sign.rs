#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{Value, json};
use tracing::info;

use super::input::InputArgs;
use crate::config::Config;
use crate::signing::ALGORITHM;

#[derive(Debug, Parser)]
pub struct SignArgs {
    #[command(flatten)]
    pub payload: InputArgs,
}

pub fn handle(args: SignArgs, config: &Config, json: bool) -> Result<()> {
    let signer = config.signer()?;

    let text = args.payload.read()?;
    let payload: Value = serde_json::from_str(&text).context("payload is not valid JSON")?;

    let token = signer.sign(&payload).context("failed to sign payload")?;
    info!(alg = ALGORITHM, "signed payload");

    if json {
        let output = json!({
            "alg": ALGORITHM,
            "token": token,
        });
        println!("{output:#}");
    } else {
        println!("{token}");
    }

    Ok(())
}
