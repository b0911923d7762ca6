//! Replace command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::{load_table, read_input};

#[derive(Args)]
pub struct ReplaceArgs {
    /// Message text to rewrite (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the message from a file instead
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Replacement table file (.json or .toml)
    #[arg(short, long, value_name = "PATH")]
    pub table: PathBuf,
}

pub fn run(args: ReplaceArgs) -> Result<()> {
    let text = read_input(&args.text, args.file.as_deref())?;
    let table = load_table(Some(&args.table))?;

    let replaced_chars = text.chars().filter(|&ch| table.contains(ch)).count();
    let output = table.apply(&text);
    tracing::debug!(replaced_chars, "applied replacement table");

    println!("{}", output);
    Ok(())
}
