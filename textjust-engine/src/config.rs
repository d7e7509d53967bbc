//! Configuration types for the engine

use crate::ExecutionMode;

/// Default word count at which adaptive mode switches to parallel rendering
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of threads for parallel execution (None = auto)
    pub threads: Option<usize>,
    /// Minimum word count for parallel processing in adaptive mode
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            threads: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Create a single-threaded configuration
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            parallel_threshold: usize::MAX, // Never use parallel
        }
    }

    /// Create a configuration that only parallelizes large inputs
    pub fn fast() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 4 * DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(EngineConfig::default().execution_mode, ExecutionMode::Parallel);
        assert_eq!(EngineConfig::sequential().threads, Some(1));
        assert_eq!(EngineConfig::fast().parallel_threshold, 1024);
    }
}
