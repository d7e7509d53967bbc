//! Input abstraction for justification
//!
//! Turns raw text from various sources into the word sequence the
//! justifier consumes. Words are split on Unicode whitespace.

use crate::error::Result;
use std::io::Read;

/// Unified input abstraction
pub enum Input {
    /// Raw text to be split into words
    Text(String),
    /// Already tokenized words
    Words(Vec<String>),
    /// Reader stream (for stdin, files, etc.)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::Words(words) => f
                .debug_tuple("Words")
                .field(&format!("<{} words>", words.len()))
                .finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from a text string
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from pre-tokenized words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Input::Words(words.into_iter().map(Into::into).collect())
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Resolve the input into its word sequence
    pub fn into_words(self) -> Result<Vec<String>> {
        match self {
            Input::Text(text) => Ok(tokenize(&text)),
            Input::Words(words) => Ok(words),
            Input::Reader(mut reader) => {
                let mut text = String::new();
                reader.read_to_string(&mut text)?;
                Ok(tokenize(&text))
            }
        }
    }
}

/// Split text into words on whitespace
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<Vec<String>> for Input {
    fn from(words: Vec<String>) -> Self {
        Input::Words(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::io::Cursor;

    #[test]
    fn test_text_is_split_on_whitespace() {
        let words = Input::from_text("  This is\tan\nexample  ").into_words().unwrap();
        assert_eq!(words, vec!["This", "is", "an", "example"]);
    }

    #[test]
    fn test_words_pass_through() {
        let words = Input::from_words(["a", "b c"]).into_words().unwrap();
        assert_eq!(words, vec!["a", "b c"]);
    }

    #[test]
    fn test_reader_input() {
        let input = Input::from_reader(Cursor::new(b"one two\nthree".to_vec()));
        assert_eq!(input.into_words().unwrap(), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_reader_invalid_utf8() {
        let input = Input::from_reader(Cursor::new(vec![0xff, 0xfe]));
        assert!(matches!(input.into_words(), Err(EngineError::Io(_))));
    }

    #[test]
    fn test_debug_hides_reader() {
        let input = Input::from_reader(Cursor::new(Vec::new()));
        assert_eq!(format!("{input:?}"), "Reader(\"<Reader>\")");
    }
}
