//! Fixed-size diceware word lists.
use crate::{Error, Result};
use std::path::Path;

/// Number of words a valid diceware word list must contain.
pub const WORD_LIST_SIZE: usize = 7776;

/// Ordered, immutable word list of exactly [WORD_LIST_SIZE] words.
///
/// Only the length is validated; the content and ordering are the
/// responsibility of whoever supplies the list. A list of the wrong
/// length is rejected outright because it would silently break the
/// advertised entropy per word.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Create a word list, failing fast when the length is not
    /// exactly [WORD_LIST_SIZE].
    pub fn new(words: Vec<String>) -> Result<Self> {
        if words.len() != WORD_LIST_SIZE {
            return Err(Error::CorruptWordList(words.len(), WORD_LIST_SIZE));
        }
        Ok(Self { words })
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// A validated word list is never empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Slice of the words in list order.
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Whether the list contains the given word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// Load a word list from a newline-delimited file.
///
/// Accepts plain one-word-per-line files as well as the EFF
/// distribution format where each line is a dice roll followed by
/// whitespace and the word; the last column of each line is taken
/// and blank lines are skipped.
pub fn load_file(path: impl AsRef<Path>) -> Result<WordList> {
    let content = std::fs::read_to_string(path)?;
    WordList::new(parse(&content))
}

fn parse(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| line.split_whitespace().last())
        .map(|word| word.to_owned())
        .collect()
}
