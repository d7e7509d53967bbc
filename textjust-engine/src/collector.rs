//! Result collection module
//!
//! Gathers rendered lines that arrive in any order and places each one in
//! the output slot named by its line index.

use crate::error::{EngineError, Result};
use textjust_core::RenderedLine;

/// Collector for lines rendered out of order
#[derive(Debug)]
pub struct LineCollector {
    slots: Vec<String>,
    received: usize,
}

impl LineCollector {
    /// Create a collector with one slot per possible line
    ///
    /// Every line holds at least one word, so the word count is a safe
    /// upper bound.
    pub fn with_capacity(upper_bound: usize) -> Self {
        Self {
            slots: vec![String::new(); upper_bound],
            received: 0,
        }
    }

    /// Store a rendered line in its slot
    pub fn insert(&mut self, rendered: RenderedLine) -> Result<()> {
        let capacity = self.slots.len();
        let slot = self.slots.get_mut(rendered.line).ok_or_else(|| {
            EngineError::Parallel(format!(
                "line {} outside output of {} slots",
                rendered.line, capacity
            ))
        })?;
        *slot = rendered.text;
        self.received += 1;
        Ok(())
    }

    /// Consume lines from `receiver` until every sender is gone
    #[cfg(feature = "parallel")]
    pub fn drain(mut self, receiver: crossbeam_channel::Receiver<RenderedLine>) -> Result<Self> {
        for rendered in receiver {
            self.insert(rendered)?;
        }
        log::trace!("collector drained {} lines", self.received);
        Ok(self)
    }

    /// Number of lines received so far
    pub fn received(&self) -> usize {
        self.received
    }

    /// Truncate to `line_count` lines and hand the output over
    pub fn finish(mut self, line_count: usize) -> Result<Vec<String>> {
        if self.received != line_count {
            return Err(EngineError::Parallel(format!(
                "collected {} of {} lines",
                self.received, line_count
            )));
        }
        self.slots.truncate(line_count);
        Ok(self.slots)
    }
}
