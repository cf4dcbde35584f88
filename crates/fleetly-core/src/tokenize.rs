//! Word tokenization.

use alloc::{string::String, vec::Vec};

/// Ordered, immutable sequence of words produced by [`tokenize`].
///
/// Replaced wholesale whenever the source text changes; words are non-empty
/// and contain no whitespace.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WordSequence {
    words: Vec<String>,
}

impl WordSequence {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Splits raw text into words.
///
/// Line breaks collapse into separators along with every other run of
/// whitespace; leading and trailing whitespace is dropped, so empty or
/// blank input yields an empty sequence.
pub fn tokenize(text: &str) -> WordSequence {
    WordSequence {
        words: text.split_whitespace().map(String::from).collect(),
    }
}
