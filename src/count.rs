//! Document-term count matrices.
//!
//! The [`CountVectorizer`] is the first stage of classical text
//! vectorization: it tokenizes every document, expands the configured word
//! n-gram range, and produces a frozen [`Vocabulary`] plus a
//! [`TermDocumentMatrix`] of raw occurrence counts. Column order follows
//! ascending alphabetical order of the term string, so identical input
//! always yields an identical matrix.
//!
//! Per-document counting fans out across a rayon thread pool; the partial
//! vocabularies merge through a sorted union before final column indices are
//! assigned, which keeps the result independent of thread scheduling.
//!
//! # Examples
//!
//! ```
//! use textvec::analysis::NgramRange;
//! use textvec::count::CountVectorizer;
//!
//! let vectorizer = CountVectorizer::new(NgramRange::unigrams());
//! let (vocabulary, matrix) = vectorizer
//!     .fit_transform(&["brexit trade deal", "brexit election"])
//!     .unwrap();
//!
//! assert_eq!(vocabulary.index_of("brexit"), Some(0));
//! assert_eq!(matrix.row(0), &[1.0, 1.0, 0.0, 1.0]);
//! assert_eq!(matrix.row(1), &[1.0, 0.0, 1.0, 0.0]);
//! ```

use ahash::AHashMap;
use rayon::prelude::*;

use crate::analysis::ngram::NgramRange;
use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};
use crate::error::{Result, TextvecError};
use crate::matrix::TermDocumentMatrix;
use crate::vocabulary::Vocabulary;

/// A vectorizer that maps raw documents to a count matrix and vocabulary.
///
/// The operation is pure: it holds no fitted state, and calling
/// [`fit_transform`](CountVectorizer::fit_transform) twice on the same input
/// produces identical output.
#[derive(Debug, Clone, Default)]
pub struct CountVectorizer {
    tokenizer: WordTokenizer,
    ngram_range: NgramRange,
}

impl CountVectorizer {
    /// Create a count vectorizer for the given n-gram range.
    pub fn new(ngram_range: NgramRange) -> Self {
        CountVectorizer {
            tokenizer: WordTokenizer::new(),
            ngram_range,
        }
    }

    /// The configured n-gram range.
    pub fn ngram_range(&self) -> NgramRange {
        self.ngram_range
    }

    /// Count term occurrences for every document.
    ///
    /// Returns one term-count map per document, in document order. Documents
    /// are processed in parallel; each map depends only on its own document.
    pub(crate) fn count_documents<S: AsRef<str> + Sync>(
        &self,
        documents: &[S],
    ) -> Result<Vec<AHashMap<String, u64>>> {
        documents
            .par_iter()
            .map(|document| self.count_one(document.as_ref()))
            .collect()
    }

    fn count_one(&self, text: &str) -> Result<AHashMap<String, u64>> {
        let tokens = self.tokenizer.tokenize(text)?;
        let mut counts = AHashMap::new();
        for gram in self.ngram_range.expand(&tokens) {
            *counts.entry(gram).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// Build the vocabulary and count matrix for a document collection.
    ///
    /// # Errors
    ///
    /// Returns [`TextvecError::EmptyVocabulary`] when no terms remain, e.g.
    /// when every document is empty or tokenizes to nothing.
    pub fn fit_transform<S: AsRef<str> + Sync>(
        &self,
        documents: &[S],
    ) -> Result<(Vocabulary, TermDocumentMatrix)> {
        let doc_counts = self.count_documents(documents)?;

        // Sorted union of the per-document term sets.
        let mut terms: Vec<&str> = doc_counts
            .iter()
            .flat_map(|counts| counts.keys().map(String::as_str))
            .collect();
        terms.sort_unstable();
        terms.dedup();

        if terms.is_empty() {
            return Err(TextvecError::EmptyVocabulary);
        }

        let vocabulary = Vocabulary::from_terms(terms);
        let matrix = fill_matrix(&vocabulary, &doc_counts);
        Ok((vocabulary, matrix))
    }
}

/// Fill a count matrix from per-document term counts, skipping terms that
/// were filtered out of the vocabulary.
pub(crate) fn fill_matrix(
    vocabulary: &Vocabulary,
    doc_counts: &[AHashMap<String, u64>],
) -> TermDocumentMatrix {
    let mut matrix = TermDocumentMatrix::zeros(doc_counts.len(), vocabulary.len());
    for (doc, counts) in doc_counts.iter().enumerate() {
        for (term, &count) in counts {
            if let Some(index) = vocabulary.index_of(term) {
                matrix.set(doc, index, count as f64);
            }
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unigram_counts() {
        let vectorizer = CountVectorizer::new(NgramRange::unigrams());
        let (vocabulary, matrix) = vectorizer
            .fit_transform(&["brexit trade deal", "brexit election"])
            .unwrap();

        assert_eq!(
            vocabulary.terms().collect::<Vec<_>>(),
            vec!["brexit", "deal", "election", "trade"]
        );
        assert_eq!(matrix.row(0), &[1.0, 1.0, 0.0, 1.0]);
        assert_eq!(matrix.row(1), &[1.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_repeated_terms_accumulate() {
        let vectorizer = CountVectorizer::new(NgramRange::unigrams());
        let (vocabulary, matrix) = vectorizer.fit_transform(&["spam spam spam eggs"]).unwrap();

        let spam = vocabulary.index_of("spam").unwrap();
        let eggs = vocabulary.index_of("eggs").unwrap();
        assert_eq!(matrix.get(0, spam), 3.0);
        assert_eq!(matrix.get(0, eggs), 1.0);
    }

    #[test]
    fn test_bigram_vocabulary() {
        let vectorizer = CountVectorizer::new(NgramRange::unigrams_and_bigrams());
        let (vocabulary, _) = vectorizer.fit_transform(&["brexit trade deal"]).unwrap();

        assert_eq!(
            vocabulary.terms().collect::<Vec<_>>(),
            vec!["brexit", "brexit trade", "deal", "trade", "trade deal"]
        );
    }

    #[test]
    fn test_empty_vocabulary_error() {
        let vectorizer = CountVectorizer::new(NgramRange::unigrams());
        let result = vectorizer.fit_transform(&["", "...", "a I"]);
        assert!(matches!(result, Err(TextvecError::EmptyVocabulary)));
    }

    #[test]
    fn test_determinism() {
        let vectorizer = CountVectorizer::new(NgramRange::unigrams_and_bigrams());
        let documents = ["brexit trade deal reached", "brexit election looms", ""];

        let (vocab_a, matrix_a) = vectorizer.fit_transform(&documents).unwrap();
        let (vocab_b, matrix_b) = vectorizer.fit_transform(&documents).unwrap();
        assert_eq!(vocab_a, vocab_b);
        assert_eq!(matrix_a, matrix_b);
    }

    #[test]
    fn test_empty_document_row_is_zero() {
        let vectorizer = CountVectorizer::new(NgramRange::unigrams());
        let (_, matrix) = vectorizer.fit_transform(&["brexit deal", ""]).unwrap();
        assert!(matrix.row(1).iter().all(|&v| v == 0.0));
    }
}
