use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use crate::config::DictionaryConfig;
use crate::error::{LadderError, Result};

/// A set of unique words.
///
/// Membership checks go through a hash set. An ordered copy of the words is
/// kept alongside so scans visit words in a fixed order, and the set of
/// characters seen in any word is tracked as the dictionary's alphabet.
/// Inserting is O(log n) whatever order the words arrive in.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
    sorted: BTreeSet<String>,
    alphabet: BTreeSet<char>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word. Returns `false` if it was already present.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        let word = word.into();
        if self.words.contains(&word) {
            return false;
        }

        self.alphabet.extend(word.chars());
        self.sorted.insert(word.clone());
        self.words.insert(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sorted.iter().map(String::as_str)
    }

    /// Every character that appears in at least one word
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    /// Build a dictionary from whitespace-separated tokens.
    pub fn parse(text: &str, config: &DictionaryConfig) -> Self {
        text.split_whitespace()
            .map(|token| {
                if config.lowercase {
                    token.to_lowercase()
                } else {
                    token.to_string()
                }
            })
            .collect()
    }

    /// Read a word list file (whitespace-separated tokens).
    #[tracing::instrument(skip(config), fields(path = %path.display(), lowercase = config.lowercase))]
    pub fn load(path: &Path, config: &DictionaryConfig) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| LadderError::io_operation("read dictionary", path.display(), e))?;
        let dict = Self::parse(&text, config);
        tracing::debug!(words = dict.len(), "dictionary loaded");
        Ok(dict)
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dict = Dictionary::new();
        dict.extend(iter);
        dict
    }
}

impl<S: Into<String>> Extend<S> for Dictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}
