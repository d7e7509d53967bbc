//! Core text justification algorithms
//!
//! This crate contains the zero-I/O building blocks for fixed-width text
//! justification: a greedy line partitioner, full and left justification
//! renderers, and the input validation that guards both.
//!
//! Widths are measured in bytes (`str::len`), not display columns.

#![warn(missing_docs)]

pub mod error;
pub mod partition;
pub mod render;

pub use error::{InvalidWidthReason, JustifyError, Result};
pub use partition::{partition, LinePartitioner, WordGroup};
pub use render::{full_justify, left_justify, render, render_group, Justification, RenderedLine};

/// Check that `words` can be justified to `max_width`
///
/// Fails when the width is zero or any single word is wider than the
/// target width. An empty word list is valid and justifies to no lines.
pub fn validate<S: AsRef<str>>(words: &[S], max_width: usize) -> Result<()> {
    if max_width == 0 {
        return Err(JustifyError::InvalidWidth {
            max_width,
            reason: InvalidWidthReason::NotPositive,
        });
    }

    if let Some((index, word)) = words
        .iter()
        .enumerate()
        .find(|(_, word)| word.as_ref().len() > max_width)
    {
        return Err(JustifyError::InvalidWidth {
            max_width,
            reason: InvalidWidthReason::WordTooWide {
                index,
                len: word.as_ref().len(),
            },
        });
    }

    Ok(())
}

/// Justify `words` into lines of exactly `max_width` bytes, in order, on the
/// calling thread
pub fn justify_sequential<S: AsRef<str>>(words: &[S], max_width: usize) -> Result<Vec<String>> {
    validate(words, max_width)?;

    let lines: Vec<String> = LinePartitioner::new(words, max_width)
        .map(|group| render_group(&group, words, max_width).text)
        .collect();

    log::trace!(
        "justified {} words into {} lines (width {})",
        words.len(),
        lines.len(),
        max_width
    );

    Ok(lines)
}
