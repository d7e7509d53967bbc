//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{ExecutionMode, Executor},
};
use textjust_core::justify_sequential;

/// Sequential single-threaded executor
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn justify<S: AsRef<str> + Sync>(&self, words: &[S], max_width: usize) -> Result<Vec<String>> {
        Ok(justify_sequential(words, max_width)?)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
