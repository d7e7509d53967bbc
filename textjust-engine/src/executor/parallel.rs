//! Parallel execution strategy
//!
//! Lines are dispatched as they are partitioned: each word group becomes one
//! rayon task that renders it and sends the tagged result over a channel.
//! A dedicated collector thread owns the output slab and writes each line
//! into the slot named by its index, so completion order never affects the
//! result.
//!
//! Join order: all render tasks finish (end of the rayon scope), the last
//! sender is dropped to close the channel, then the collector is joined.

use crate::{
    collector::LineCollector,
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor},
};
use crossbeam_channel::Sender;
use std::thread;
use textjust_core::{render_group, validate, LinePartitioner, RenderedLine};

/// Parallel multi-threaded executor
#[derive(Debug)]
pub struct ParallelExecutor {
    pool: Option<rayon::ThreadPool>,
}

impl ParallelExecutor {
    /// Create a new parallel executor
    ///
    /// `threads` of `None` renders on rayon's global pool; `Some(n)` builds a
    /// dedicated pool of `n` threads.
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let pool = match threads {
            Some(count) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(count)
                    .build()
                    .map_err(|e| {
                        EngineError::Config(format!("failed to build thread pool: {e}"))
                    })?,
            ),
            None => None,
        };

        Ok(Self { pool })
    }

    /// Number of render threads in the pool
    pub fn thread_count(&self) -> usize {
        self.pool
            .as_ref()
            .map_or_else(rayon::current_num_threads, |pool| pool.current_num_threads())
    }

    /// Spawn one render task per word group and wait for all of them
    ///
    /// Returns the number of groups dispatched. `sender` is dropped on
    /// return, after every task has sent its line.
    fn dispatch<S: AsRef<str> + Sync>(
        &self,
        words: &[S],
        max_width: usize,
        sender: Sender<RenderedLine>,
    ) -> usize {
        let spawn_all = || {
            let mut line_count = 0;
            rayon::scope(|scope| {
                for group in LinePartitioner::new(words, max_width) {
                    line_count += 1;
                    let sender = sender.clone();
                    scope.spawn(move |_| {
                        let rendered = render_group(&group, words, max_width);
                        // Only fails if the collector died; its join reports that.
                        let _ = sender.send(rendered);
                    });
                }
            });
            line_count
        };

        match &self.pool {
            Some(pool) => pool.install(spawn_all),
            None => spawn_all(),
        }
    }
}

impl Executor for ParallelExecutor {
    fn justify<S: AsRef<str> + Sync>(&self, words: &[S], max_width: usize) -> Result<Vec<String>> {
        validate(words, max_width)?;
        if words.is_empty() {
            return Ok(Vec::new());
        }

        log::debug!(
            "dispatching {} words at width {} on {} threads",
            words.len(),
            max_width,
            self.thread_count()
        );

        let (sender, receiver) = crossbeam_channel::bounded(self.thread_count());
        let collector = LineCollector::with_capacity(words.len());

        thread::scope(|scope| {
            let collecting = scope.spawn(move || collector.drain(receiver));

            let line_count = self.dispatch(words, max_width, sender);

            let collector = collecting
                .join()
                .map_err(|_| EngineError::Parallel("line collector panicked".to_string()))??;

            collector.finish(line_count)
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
