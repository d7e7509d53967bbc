//! Error types for the justification core

use thiserror::Error;

/// Why a width was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidWidthReason {
    /// Width must be at least one byte
    #[error("width must be positive")]
    NotPositive,

    /// A single word does not fit on a line of the requested width
    #[error("word {index} is {len} bytes wide")]
    WordTooWide {
        /// Position of the word in the input sequence
        index: usize,
        /// Width of the word in bytes
        len: usize,
    },
}

/// Errors raised before any line is rendered
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JustifyError {
    /// The requested width cannot hold the input
    #[error("invalid width {max_width}: {reason}")]
    InvalidWidth {
        /// The rejected width
        max_width: usize,
        /// What made it invalid
        reason: InvalidWidthReason,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, JustifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_positive_display() {
        let err = JustifyError::InvalidWidth {
            max_width: 0,
            reason: InvalidWidthReason::NotPositive,
        };
        assert_eq!(err.to_string(), "invalid width 0: width must be positive");
    }

    #[test]
    fn test_word_too_wide_display() {
        let err = JustifyError::InvalidWidth {
            max_width: 4,
            reason: InvalidWidthReason::WordTooWide { index: 2, len: 9 },
        };
        assert_eq!(err.to_string(), "invalid width 4: word 2 is 9 bytes wide");
    }
}
