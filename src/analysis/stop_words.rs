//! Stop word exclusion.
//!
//! This module provides [`StopWordSet`], a case-normalized set of tokens
//! removed before counting. It ships the usual default English list and
//! supports custom word lists. Multi-word n-grams are excluded whenever any
//! of their constituent tokens is a stop word.
//!
//! # Examples
//!
//! ```
//! use textvec::analysis::stop_words::StopWordSet;
//!
//! let stop_words = StopWordSet::english();
//! assert!(stop_words.contains("the"));
//! assert!(!stop_words.contains("brexit"));
//! assert!(stop_words.excludes_ngram("the deal"));
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Default English stop words list.
///
/// Common English words that are typically filtered out before counting.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// A set of tokens excluded from vocabulary construction.
///
/// Words are lower-cased on insertion so membership checks match the
/// normalized output of the tokenizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// Create an empty stop word set.
    pub fn new() -> Self {
        StopWordSet {
            words: HashSet::new(),
        }
    }

    /// Create a stop word set from the given words (lower-cased on insertion).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        StopWordSet {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Create a stop word set with the default English stop words.
    pub fn english() -> Self {
        Self::from_words(DEFAULT_ENGLISH_STOP_WORDS.iter().copied())
    }

    /// Check whether a single token is a stop word.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Check whether an n-gram term should be excluded.
    ///
    /// A term is excluded when any of its space-separated constituent tokens
    /// is a stop word; unigrams reduce to a plain membership check.
    pub fn excludes_ngram(&self, term: &str) -> bool {
        term.split(' ').any(|part| self.words.contains(part))
    }

    /// Number of stop words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
