//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single justified line
    fn format_line(&mut self, line: &str) -> Result<()>;

    /// Finalize output (e.g., write the JSON document)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text with one justified line per line
    #[default]
    Text,
    /// JSON object with the width and the lines
    Json,
    /// Markdown code block
    Markdown,
}

impl OutputFormat {
    /// Every supported format
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    /// Name used on the command line and in configuration files
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// Short human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Plain text, one justified line per line",
            OutputFormat::Json => "JSON object with width, line_count and lines",
            OutputFormat::Markdown => "Markdown code block with a line count footer",
        }
    }
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<W>(
    format: OutputFormat,
    width: usize,
    writer: W,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, width)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
