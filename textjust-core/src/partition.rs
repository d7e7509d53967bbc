//! Greedy line partitioning
//!
//! Splits a word sequence into contiguous groups, each holding as many words
//! as fit on one line when separated by single spaces.

use std::ops::Range;

/// A contiguous run of input words assigned to one output line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGroup {
    /// Position of this line among the output lines (0-based)
    pub line: usize,
    /// Half-open index range into the original word sequence
    pub range: Range<usize>,
    /// Whether this is the final line, which is left justified
    pub is_last: bool,
}

impl WordGroup {
    /// The words of this group, sliced out of the full input
    pub fn words<'a, S>(&self, all: &'a [S]) -> &'a [S] {
        &all[self.range.clone()]
    }

    /// Number of words in the group
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Whether the group holds no words
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Width of the group with exactly one space between words
    pub fn natural_width<S: AsRef<str>>(&self, all: &[S]) -> usize {
        natural_width(self.words(all))
    }
}

/// Sum of word widths plus one separating space per gap
pub fn natural_width<S: AsRef<str>>(words: &[S]) -> usize {
    let letters: usize = words.iter().map(|w| w.as_ref().len()).sum();
    letters + words.len().saturating_sub(1)
}

/// Iterator over the word groups of a word sequence
///
/// Each group is extended while the next word, plus its separating space,
/// still fits within `max_width`. The group that reaches the end of the
/// input is marked as the last one.
#[derive(Debug, Clone)]
pub struct LinePartitioner<'a, S> {
    words: &'a [S],
    max_width: usize,
    start: usize,
    line: usize,
}

impl<'a, S: AsRef<str>> LinePartitioner<'a, S> {
    /// Create a partitioner over `words` for lines of `max_width` bytes
    pub fn new(words: &'a [S], max_width: usize) -> Self {
        Self {
            words,
            max_width,
            start: 0,
            line: 0,
        }
    }
}

impl<S: AsRef<str>> Iterator for LinePartitioner<'_, S> {
    type Item = WordGroup;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start >= self.words.len() {
            return None;
        }

        let start = self.start;
        let mut line_width = self.words[start].as_ref().len();
        let mut end = start + 1;

        while end < self.words.len() {
            let word_width = self.words[end].as_ref().len() + 1;
            if line_width + word_width > self.max_width {
                break;
            }
            line_width += word_width;
            end += 1;
        }

        let group = WordGroup {
            line: self.line,
            range: start..end,
            is_last: end == self.words.len(),
        };

        self.start = end;
        self.line += 1;

        Some(group)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.words.len().saturating_sub(self.start);
        (usize::from(remaining > 0), Some(remaining))
    }
}

/// Partition `words` into line groups for `max_width`
pub fn partition<S: AsRef<str>>(words: &[S], max_width: usize) -> Vec<WordGroup> {
    let groups: Vec<WordGroup> = LinePartitioner::new(words, max_width).collect();
    log::debug!(
        "partitioned {} words into {} groups (width {})",
        words.len(),
        groups.len(),
        max_width
    );
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_is_one_final_group() {
        let groups = partition(&["fabricator"], 10);
        assert_eq!(
            groups,
            vec![WordGroup {
                line: 0,
                range: 0..1,
                is_last: true,
            }]
        );
    }

    #[test]
    fn test_empty_input_has_no_groups() {
        let words: [&str; 0] = [];
        assert!(partition(&words, 10).is_empty());
    }

    #[test]
    fn test_groups_cover_input_in_order() {
        let words = ["What", "must", "be", "acknowledgment", "shall", "be"];
        let groups = partition(&words, 16);

        let ranges: Vec<_> = groups.iter().map(|g| g.range.clone()).collect();
        assert_eq!(ranges, vec![0..3, 3..4, 4..6]);

        let lines: Vec<_> = groups.iter().map(|g| g.line).collect();
        assert_eq!(lines, vec![0, 1, 2]);

        let last: Vec<_> = groups.iter().map(|g| g.is_last).collect();
        assert_eq!(last, vec![false, false, true]);
    }

    #[test]
    fn test_exact_fit_stays_on_one_line() {
        // "a a" is exactly 3 bytes
        let groups = partition(&["a", "a"], 3);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].range, 0..2);
    }

    #[test]
    fn test_overflow_by_one_breaks_line() {
        let groups = partition(&["ab", "cd"], 4);
        assert_eq!(groups.len(), 2);
        assert!(!groups[0].is_last);
        assert!(groups[1].is_last);
    }

    #[test]
    fn test_trailing_empty_word_still_gets_a_line() {
        let groups = partition(&["abc", ""], 3);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].range, 1..2);
        assert!(groups[1].is_last);
    }

    #[test]
    fn test_natural_width() {
        let words = ["This", "is", "an"];
        let group = WordGroup {
            line: 0,
            range: 0..3,
            is_last: false,
        };
        assert_eq!(group.natural_width(&words), 10);
        assert_eq!(group.len(), 3);
        assert_eq!(natural_width::<&str>(&[]), 0);
    }

    #[test]
    fn test_size_hint_bounds() {
        let words = ["a", "b", "c"];
        let mut partitioner = LinePartitioner::new(&words, 1);
        assert_eq!(partitioner.size_hint(), (1, Some(3)));
        partitioner.next();
        assert_eq!(partitioner.size_hint(), (1, Some(2)));
        partitioner.by_ref().for_each(drop);
        assert_eq!(partitioner.size_hint(), (0, Some(0)));
    }
}
