//! Shared CLI utilities.

use anyhow::{Context, Result};
use std::path::Path;

use crate::input::{read_message_file, read_message_stdin};
use crate::replace::ReplacementTable;

/// Resolve the message body from the TEXT argument, `--file`, or
/// stdin, in that order of precedence. Giving both TEXT and `--file`
/// is an error.
pub fn read_input(text: &Option<String>, file: Option<&Path>) -> Result<String> {
    match (text, file) {
        (Some(_), Some(_)) => anyhow::bail!("Cannot specify both TEXT and --file"),
        (Some(text), None) => Ok(text.clone()),
        (None, Some(path)) => read_message_file(path),
        (None, None) => read_message_stdin(),
    }
}

/// Load the replacement table when a path was given; an absent table
/// is the legal empty table.
pub fn load_table(path: Option<&Path>) -> Result<ReplacementTable> {
    match path {
        Some(path) => ReplacementTable::load(path)
            .with_context(|| format!("Failed loading replacement table: {}", path.display())),
        None => Ok(ReplacementTable::new()),
    }
}
