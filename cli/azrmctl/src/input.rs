//! Collects resource IDs from arguments or stdin.

use std::io::{self, BufRead, IsTerminal};

use anyhow::{Context, Result};

use crate::error::CliError;

/// Returns the IDs passed as arguments, or the non-blank stdin lines when
/// there are none.
pub fn collect_ids(args: Vec<String>) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::NoInput.into());
    }
    read_ids(stdin.lock())
}

/// Reads one ID per line, trimming whitespace and skipping blank lines.
pub fn read_ids(reader: impl BufRead) -> Result<Vec<String>> {
    let mut ids = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read resource IDs from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            ids.push(trimmed.to_string());
        }
    }

    if ids.is_empty() {
        return Err(CliError::NoInput.into());
    }
    Ok(ids)
}
