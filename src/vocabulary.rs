//! Frozen bidirectional vocabulary.
//!
//! A [`Vocabulary`] maps each distinct term to a dense column index and back.
//! It is built once per corpus and never mutated afterwards: indices form the
//! gap-free range `0..len()` and follow ascending alphabetical order of the
//! term string, which makes every downstream matrix column layout
//! deterministic. Both lookup directions are materialized at construction
//! time; neither is derived by scanning at query time.
//!
//! # Examples
//!
//! ```
//! use textvec::vocabulary::Vocabulary;
//!
//! let vocabulary = Vocabulary::from_terms(["trade", "brexit", "deal"]);
//!
//! assert_eq!(vocabulary.index_of("brexit"), Some(0));
//! assert_eq!(vocabulary.index_of("deal"), Some(1));
//! assert_eq!(vocabulary.index_of("trade"), Some(2));
//! assert_eq!(vocabulary.term(1), Some("deal"));
//! ```

use ahash::AHashMap;

/// An immutable mapping between terms and dense column indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    /// Map from term to its column index.
    term_to_index: AHashMap<String, usize>,
    /// Map from column index to term string.
    index_to_term: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary from an iterator of terms.
    ///
    /// Terms are deduplicated and sorted; indices are assigned in ascending
    /// alphabetical order of the term string.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index_to_term: Vec<String> = terms.into_iter().map(Into::into).collect();
        index_to_term.sort_unstable();
        index_to_term.dedup();

        let term_to_index = index_to_term
            .iter()
            .enumerate()
            .map(|(index, term)| (term.clone(), index))
            .collect();

        Vocabulary {
            term_to_index,
            index_to_term,
        }
    }

    /// Get the column index of a term.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.term_to_index.get(term).copied()
    }

    /// Get the term at a column index.
    pub fn term(&self, index: usize) -> Option<&str> {
        self.index_to_term.get(index).map(String::as_str)
    }

    /// Check whether a term is in the vocabulary.
    pub fn contains(&self, term: &str) -> bool {
        self.term_to_index.contains_key(term)
    }

    /// Number of terms in the vocabulary.
    pub fn len(&self) -> usize {
        self.index_to_term.len()
    }

    /// Check whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.index_to_term.is_empty()
    }

    /// Iterate over the terms in column-index (alphabetical) order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.index_to_term.iter().map(String::as_str)
    }
}
