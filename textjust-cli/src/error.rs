//! Error handling for the CLI application

use thiserror::Error;

/// Custom error type for CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// File not found or inaccessible
    #[error("File not found: {0}")]
    FileNotFound(String),
    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Processing error from the engine
    #[error("Processing error: {0}")]
    ProcessingError(String),
}
