//! Property tests comparing parallel and sequential justification

#![cfg(feature = "parallel")]

use proptest::prelude::*;
use textjust_engine::executor::{Executor, ParallelExecutor, SequentialExecutor};

fn word_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,12}", 0..200)
}

proptest! {
    #[test]
    fn prop_parallel_equals_sequential(
        words in word_list(),
        width in 12usize..60,
        threads in 1usize..6,
    ) {
        let parallel = ParallelExecutor::new(Some(threads)).unwrap();
        let expected = SequentialExecutor.justify(&words, width).unwrap();
        let actual = parallel.justify(&words, width).unwrap();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_parallel_lines_have_target_width(words in word_list(), width in 12usize..60) {
        let lines = textjust_engine::justify(&words, width).unwrap();
        prop_assert!(lines.iter().all(|line| line.len() == width));
        prop_assert!(lines.len() <= words.len());
    }

    #[test]
    fn prop_rejoined_lines_rewrap_identically(words in word_list(), width in 12usize..60) {
        let lines = textjust_engine::justify(&words, width).unwrap();
        let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
        prop_assert_eq!(&rejoined, &words.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert_eq!(&textjust_engine::justify(&rejoined, width).unwrap(), &lines);
    }
}
