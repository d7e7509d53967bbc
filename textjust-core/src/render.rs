//! Fixed-width line rendering
//!
//! Two spacing strategies turn a word group into a string of exactly the
//! target width:
//!
//! - **Full**: gaps between words are stretched so the line starts and ends
//!   with a word. Leftover spaces that do not divide evenly go to the
//!   leftmost gaps, one each.
//! - **Left**: single spaces between words, all padding after the last word.
//!
//! Both renderers expect `width` to be at least the natural width of the
//! words they are given.

use crate::partition::{natural_width, WordGroup};

/// Spacing strategy for a rendered line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justification {
    /// Distribute padding between words
    Full,
    /// Pad after the last word
    Left,
}

impl Justification {
    /// The final line is left justified, every other line is fully justified
    pub fn for_group(is_last: bool) -> Self {
        if is_last {
            Justification::Left
        } else {
            Justification::Full
        }
    }
}

/// A rendered line tagged with its position in the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// Output line index
    pub line: usize,
    /// Line content, exactly `width` bytes long
    pub text: String,
}

/// Render `words` with single spaces and trailing padding up to `width`
pub fn left_justify<S: AsRef<str>>(words: &[S], width: usize) -> String {
    let mut out = String::with_capacity(width);

    if let Some((first, rest)) = words.split_first() {
        out.push_str(first.as_ref());
        for word in rest {
            out.push(' ');
            out.push_str(word.as_ref());
        }
    }

    debug_assert!(out.len() <= width, "group wider than line");
    let pad = width.saturating_sub(out.len());
    push_spaces(&mut out, pad);
    out
}

/// Render `words` with padding spread across the gaps between them
///
/// A single word is left aligned and padded on the right.
pub fn full_justify<S: AsRef<str>>(words: &[S], width: usize) -> String {
    let gaps = words.len().saturating_sub(1);
    if gaps == 0 {
        return left_justify(words, width);
    }

    let natural = natural_width(words);
    debug_assert!(natural <= width, "group wider than line");
    let extra = width.saturating_sub(natural);
    let base = extra / gaps;
    let remainder = extra % gaps;

    let mut out = String::with_capacity(width);
    out.push_str(words[0].as_ref());

    for (gap, word) in words[1..].iter().enumerate() {
        let spaces = 1 + base + usize::from(gap < remainder);
        push_spaces(&mut out, spaces);
        out.push_str(word.as_ref());
    }

    out
}

/// Render `words` to `width` using `mode`
pub fn render<S: AsRef<str>>(words: &[S], width: usize, mode: Justification) -> String {
    match mode {
        Justification::Full => full_justify(words, width),
        Justification::Left => left_justify(words, width),
    }
}

/// Render one partitioned group of `all` to `width`
pub fn render_group<S: AsRef<str>>(group: &WordGroup, all: &[S], width: usize) -> RenderedLine {
    RenderedLine {
        line: group.line,
        text: render(
            group.words(all),
            width,
            Justification::for_group(group.is_last),
        ),
    }
}

fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}
