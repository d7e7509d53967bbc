//! Main justifier and builder

use crate::{
    config::EngineConfig,
    error::{EngineError, Result},
    executor::{auto_select, ExecutionMode, Executor, SequentialExecutor},
    input::Input,
};
use std::time::Instant;

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Justifies word sequences to a fixed line width
///
/// Holds the target width and its configuration. The parallel executor is
/// built once at construction, whatever the configured mode, so explicit
/// parallel calls on any justifier reuse the same pool.
#[derive(Debug)]
pub struct Justifier {
    width: usize,
    config: EngineConfig,
    #[cfg(feature = "parallel")]
    parallel: ParallelExecutor,
}

/// Justified lines with metadata
#[derive(Debug, Clone)]
pub struct Output {
    /// Rendered lines, each exactly `width` bytes
    pub lines: Vec<String>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Processing metadata
#[derive(Debug, Clone)]
pub struct ProcessingMetadata {
    /// Execution mode that was actually used
    pub mode_used: ExecutionMode,
    /// Number of input words
    pub word_count: usize,
    /// Number of output lines
    pub line_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
}

impl Justifier {
    /// Create a justifier for `width` with default configuration
    pub fn new(width: usize) -> Result<Self> {
        Self::with_config(width, EngineConfig::default())
    }

    /// Create a justifier with custom configuration
    pub fn with_config(width: usize, config: EngineConfig) -> Result<Self> {
        if width == 0 {
            return Err(EngineError::Config("width must be positive".to_string()));
        }
        if config.threads == Some(0) {
            return Err(EngineError::Config(
                "thread count must be positive".to_string(),
            ));
        }

        #[cfg(feature = "parallel")]
        let parallel = ParallelExecutor::new(config.threads)?;

        Ok(Self {
            width,
            config,
            #[cfg(feature = "parallel")]
            parallel,
        })
    }

    /// Create a builder
    pub fn builder() -> JustifierBuilder {
        JustifierBuilder::new()
    }

    /// Target line width in bytes
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the current configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of threads parallel calls render on
    #[cfg(feature = "parallel")]
    pub fn thread_count(&self) -> usize {
        self.parallel.thread_count()
    }

    /// Resolve the configured mode into a concrete one for `word_count` words
    pub fn select_mode(&self, word_count: usize) -> ExecutionMode {
        match self.config.execution_mode {
            ExecutionMode::Adaptive => auto_select(word_count, self.config.parallel_threshold),
            mode => mode,
        }
    }

    /// Justify `words` to the configured width
    pub fn justify<S: AsRef<str> + Sync>(&self, words: &[S]) -> Result<Vec<String>> {
        let mode = self.select_mode(words.len());
        self.justify_with_mode(words, mode)
    }

    /// Justify `words` with an explicit execution mode
    pub fn justify_with_mode<S: AsRef<str> + Sync>(
        &self,
        words: &[S],
        mode: ExecutionMode,
    ) -> Result<Vec<String>> {
        log::debug!("justifying {} words with {:?}", words.len(), mode);

        match mode {
            ExecutionMode::Sequential => SequentialExecutor.justify(words, self.width),
            ExecutionMode::Adaptive => {
                let selected = auto_select(words.len(), self.config.parallel_threshold);
                self.justify_with_mode(words, selected)
            }
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => self.parallel.justify(words, self.width),
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => SequentialExecutor.justify(words, self.width),
        }
    }

    /// Tokenize `input` and justify it, reporting metadata
    pub fn justify_input(&self, input: Input) -> Result<Output> {
        let start = Instant::now();
        let words = input.into_words()?;
        let mode = self.select_mode(words.len());

        let lines = self.justify_with_mode(&words, mode)?;

        let metadata = ProcessingMetadata {
            mode_used: effective_mode(mode),
            word_count: words.len(),
            line_count: lines.len(),
            processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        };

        Ok(Output { lines, metadata })
    }
}

/// Parallel requests fall back to sequential when the feature is off
fn effective_mode(mode: ExecutionMode) -> ExecutionMode {
    if mode == ExecutionMode::Parallel && !cfg!(feature = "parallel") {
        ExecutionMode::Sequential
    } else {
        mode
    }
}

/// Builder for [`Justifier`]
#[derive(Debug, Default)]
pub struct JustifierBuilder {
    width: Option<usize>,
    config: EngineConfig,
}

impl JustifierBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target line width
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the adaptive word-count threshold
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    /// Replace the whole engine configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the justifier
    pub fn build(self) -> Result<Justifier> {
        let width = self
            .width
            .ok_or_else(|| EngineError::Config("width is required".to_string()))?;
        Justifier::with_config(width, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_width() {
        assert!(matches!(
            JustifierBuilder::new().build(),
            Err(EngineError::Config(_))
        ));
    }

    #[test]
    fn test_zero_width_rejected_at_build() {
        assert!(matches!(Justifier::new(0), Err(EngineError::Config(_))));
    }

    #[test]
    fn test_zero_threads_rejected_at_build() {
        let result = Justifier::builder().width(10).threads(Some(0)).build();
        assert!(matches!(result, Err(EngineError::Config(_))));
    }

    #[test]
    fn test_adaptive_mode_selection() {
        let justifier = Justifier::builder()
            .width(10)
            .execution_mode(ExecutionMode::Adaptive)
            .parallel_threshold(3)
            .build()
            .unwrap();

        assert_eq!(justifier.select_mode(2), ExecutionMode::Sequential);
        #[cfg(feature = "parallel")]
        assert_eq!(justifier.select_mode(3), ExecutionMode::Parallel);
    }

    #[test]
    fn test_sequential_config_never_parallelizes() {
        let justifier = Justifier::with_config(10, EngineConfig::sequential()).unwrap();
        assert_eq!(justifier.select_mode(1_000_000), ExecutionMode::Sequential);
    }

    #[test]
    fn test_justify_input_metadata() {
        let justifier = Justifier::builder()
            .width(16)
            .threads(Some(2))
            .build()
            .unwrap();

        let output = justifier
            .justify_input(Input::from_text("What must be acknowledgment shall be"))
            .unwrap();

        assert_eq!(
            output.lines,
            vec!["What   must   be", "acknowledgment  ", "shall be        "]
        );
        assert_eq!(output.metadata.word_count, 6);
        assert_eq!(output.metadata.line_count, 3);
        #[cfg(feature = "parallel")]
        assert_eq!(output.metadata.mode_used, ExecutionMode::Parallel);
    }

    #[test]
    fn test_justify_with_each_mode_agrees() {
        let justifier = Justifier::builder().width(12).build().unwrap();
        let words = ["one", "two", "three", "four", "five", "six", "seven"];

        let sequential = justifier
            .justify_with_mode(&words, ExecutionMode::Sequential)
            .unwrap();
        let parallel = justifier
            .justify_with_mode(&words, ExecutionMode::Parallel)
            .unwrap();

        assert_eq!(sequential, parallel);
        assert_eq!(justifier.justify(&words).unwrap(), sequential);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_sequential_justifier_reuses_pool_for_parallel_calls() {
        let justifier = Justifier::builder()
            .width(10)
            .execution_mode(ExecutionMode::Sequential)
            .threads(Some(2))
            .build()
            .unwrap();
        assert_eq!(justifier.thread_count(), 2);

        let words: Vec<String> = (0..500).map(|i| "w".repeat(i % 5 + 1)).collect();
        let expected = justifier.justify(&words).unwrap();
        for _ in 0..20 {
            let lines = justifier
                .justify_with_mode(&words, ExecutionMode::Parallel)
                .unwrap();
            assert_eq!(lines, expected);
        }
        assert_eq!(justifier.thread_count(), 2);
    }
}
