//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs the lines as a single JSON document
pub struct JsonFormatter<W: Write> {
    writer: W,
    document: JustifiedDocument,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct JustifiedDocument {
    /// Line width in bytes
    pub width: usize,
    /// Number of lines
    pub line_count: usize,
    /// The justified lines
    pub lines: Vec<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, width: usize) -> Self {
        Self {
            writer,
            document: JustifiedDocument {
                width,
                line_count: 0,
                lines: Vec::new(),
            },
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, line: &str) -> Result<()> {
        self.document.lines.push(line.to_string());
        self.document.line_count += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.document)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
