//! Concatenating input files into one text stream

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Read every file in order and join them into one text
///
/// Each file is followed by a newline so the last word of one file never
/// runs into the first word of the next.
pub fn read_sources(paths: &[PathBuf]) -> Result<String> {
    let mut text = String::new();
    for path in paths {
        log::debug!("Reading {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input {}", path.display()))?;
        text.push_str(&content);
        text.push('\n');
    }
    Ok(text)
}
