//! Execution strategies for line justification

use crate::error::Result;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Render lines one after another on the calling thread
    Sequential,
    /// Render every line on its own task and reassemble in order
    Parallel,
    /// Pick sequential or parallel from the input size
    Adaptive,
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Justify `words` into lines of exactly `max_width` bytes
    fn justify<S: AsRef<str> + Sync>(&self, words: &[S], max_width: usize) -> Result<Vec<String>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Automatically select execution mode based on word count
pub fn auto_select(word_count: usize, threshold: usize) -> ExecutionMode {
    if word_count < threshold || !cfg!(feature = "parallel") {
        ExecutionMode::Sequential
    } else {
        ExecutionMode::Parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_select_small_input_is_sequential() {
        assert_eq!(auto_select(0, 256), ExecutionMode::Sequential);
        assert_eq!(auto_select(255, 256), ExecutionMode::Sequential);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_auto_select_large_input_is_parallel() {
        assert_eq!(auto_select(256, 256), ExecutionMode::Parallel);
        assert_eq!(auto_select(10_000, 256), ExecutionMode::Parallel);
    }
}
