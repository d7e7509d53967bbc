//! Engine error types

use textjust_core::JustifyError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Input rejected by core validation
    #[error("justification error: {0}")]
    Core(#[from] JustifyError),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Parallel execution fault
    #[error("parallel execution failed: {0}")]
    Parallel(String),

    /// I/O error while reading input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
