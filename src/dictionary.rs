//! Word list loading.
//!
//! The word list is newline-delimited. Lines containing whitespace are
//! multi-word entries and are skipped, as is anything with fewer than
//! [`MIN_WORD_LENGTH`](crate::MIN_WORD_LENGTH) letters.

use crate::word::Word;
use crate::MIN_WORD_LENGTH;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to open word list {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read word list: {0}")]
    Read(#[from] std::io::Error),
}

/// An immutable, ordered list of normalized words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Load the word list bundled with the crate.
    pub fn embedded() -> Self {
        Self::from_text(include_str!("../dictionary/words.txt"))
    }

    /// Load a word list from a file on disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DictionaryError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a word list from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let mut words = Vec::new();
        for line in reader.lines() {
            if let Some(word) = accept_line(&line?) {
                words.push(word);
            }
        }
        Ok(Self { words })
    }

    /// Load a word list already held in memory.
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text.lines().filter_map(accept_line).collect(),
        }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn accept_line(line: &str) -> Option<Word> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.chars().any(char::is_whitespace) {
        return None;
    }
    let word = Word::encode(line);
    (word.len() >= MIN_WORD_LENGTH).then_some(word)
}
