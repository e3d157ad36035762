use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;

/// Where a command reads its main input from.
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Inline value
    #[arg(value_name = "VALUE", conflicts_with = "input")]
    pub value: Option<String>,

    /// Read the value from a file ("-" for stdin)
    #[arg(long = "in", value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    pub fn read(&self) -> Result<String> {
        if let Some(value) = &self.value {
            return Ok(value.clone());
        }
        match self.input.as_deref() {
            Some(path) if path != Path::new("-") => fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
            Some(_) => read_stdin(),
            None => bail!("no input given; pass a value or --in FILE"),
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read stdin")?;
    Ok(buffer)
}

/// Writes `contents` to `path`, or to stdout when no path is given.
pub fn emit(contents: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(path, contents)
                .with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            println!("{contents}");
            Ok(())
        }
    }
}
