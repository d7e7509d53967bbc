//! Application orchestration for text justification
//!
//! This crate runs the core partitioner and renderers through pluggable
//! execution strategies. The parallel strategy renders every line on its own
//! task and reassembles the results in line order.

#![warn(missing_docs)]

pub mod collector;
pub mod config;
pub mod error;
pub mod executor;
pub mod input;
pub mod processor;

// Re-export key types
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use input::Input;
pub use processor::{Justifier, JustifierBuilder, Output, ProcessingMetadata};

// Re-export from core for convenience
pub use textjust_core::{InvalidWidthReason, JustifyError};

/// Justify `words` into lines of exactly `max_width` bytes
///
/// Every line is rendered concurrently and the result is returned in line
/// order. Inputs are validated before any work is dispatched, so an invalid
/// width never produces partial output. An empty word list yields no lines.
pub fn justify<S>(words: &[S], max_width: usize) -> Result<Vec<String>>
where
    S: AsRef<str> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        executor::ParallelExecutor::new(None)?.justify(words, max_width)
    }

    #[cfg(not(feature = "parallel"))]
    {
        executor::SequentialExecutor.justify(words, max_width)
    }
}
