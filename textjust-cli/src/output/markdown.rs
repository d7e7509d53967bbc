//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs the lines inside a fenced code block
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    line_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            line_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_line(&mut self, line: &str) -> Result<()> {
        if self.line_count == 0 {
            writeln!(self.writer, "```text")?;
        }
        self.line_count += 1;
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.line_count > 0 {
            writeln!(self.writer, "```")?;
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total lines: {}*", self.line_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
