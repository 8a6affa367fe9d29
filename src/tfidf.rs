//! TF-IDF weighting.
//!
//! The [`TfIdfVectorizer`] extends the counting stage with the classical
//! inverse-document-frequency weighting: terms that appear in many documents
//! are downweighted, terms concentrated in few documents are boosted. The
//! smoothed formula
//!
//! ```text
//! idf(t) = ln((N + 1) / (df(t) + 1)) + 1
//! ```
//!
//! keeps every IDF strictly positive and never divides by zero, even for
//! terms present in all documents or none. Filtering (stop words,
//! document-frequency bounds, `max_features`) happens before weighting; a
//! configuration that filters away every term fails with
//! [`TextvecError::EmptyVocabulary`]. The whole operation is deterministic:
//! identical input and configuration produce bit-identical output.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::ngram::NgramRange;
use crate::analysis::stop_words::StopWordSet;
use crate::count::{CountVectorizer, fill_matrix};
use crate::error::{Result, TextvecError};
use crate::matrix::{Norm, TermDocumentMatrix};
use crate::vocabulary::Vocabulary;

/// A document-frequency threshold, absolute or proportional.
///
/// `Count(n)` is an absolute number of documents; `Fraction(f)` with
/// `f` in `[0, 1]` is a fraction of the corpus size, resolved against the
/// actual document count at fit time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DocFrequency {
    /// Absolute document count.
    Count(usize),
    /// Fraction of the total document count, in `[0, 1]`.
    Fraction(f64),
}

impl DocFrequency {
    fn validate(&self, name: &str) -> Result<()> {
        if let DocFrequency::Fraction(f) = self {
            if !(0.0..=1.0).contains(f) {
                return Err(TextvecError::invalid_config(format!(
                    "{name} fraction ({f}) must lie in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Resolve a lower bound against the corpus size (fractions round up).
    fn resolve_lower(&self, num_docs: usize) -> usize {
        match self {
            DocFrequency::Count(n) => *n,
            DocFrequency::Fraction(f) => (f * num_docs as f64).ceil() as usize,
        }
    }

    /// Resolve an upper bound against the corpus size (fractions round down).
    fn resolve_upper(&self, num_docs: usize) -> usize {
        match self {
            DocFrequency::Count(n) => *n,
            DocFrequency::Fraction(f) => (f * num_docs as f64).floor() as usize,
        }
    }
}

/// Configuration for the TF-IDF weighter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfIdfConfig {
    /// Whether to apply IDF weighting; when false, weights are raw counts.
    pub use_idf: bool,
    /// Row normalization applied after weighting.
    pub norm: Norm,
    /// Minimum document frequency for a term to be retained (inclusive).
    pub min_df: DocFrequency,
    /// Maximum document frequency for a term to be retained (inclusive).
    pub max_df: DocFrequency,
    /// Keep only this many terms, ranked by aggregate corpus term frequency
    /// (ties broken alphabetically), after all other filtering.
    pub max_features: Option<usize>,
    /// Tokens excluded before counting; n-grams containing one are excluded.
    pub stop_words: Option<StopWordSet>,
}

impl Default for TfIdfConfig {
    fn default() -> Self {
        TfIdfConfig {
            use_idf: true,
            norm: Norm::L2,
            min_df: DocFrequency::Count(1),
            max_df: DocFrequency::Fraction(1.0),
            max_features: None,
            stop_words: None,
        }
    }
}

impl TfIdfConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a fractional threshold lies outside `[0, 1]` or
    /// `max_features` is zero. Threshold ordering is checked at fit time,
    /// once fractions have been resolved against the corpus size.
    pub fn validate(&self) -> Result<()> {
        self.min_df.validate("min_df")?;
        self.max_df.validate("max_df")?;
        if self.max_features == Some(0) {
            return Err(TextvecError::invalid_config(
                "max_features must be at least 1",
            ));
        }
        Ok(())
    }
}

/// The result of fitting a [`TfIdfVectorizer`].
#[derive(Debug, Clone, PartialEq)]
pub struct TfIdfModel {
    /// The retained vocabulary, alphabetically indexed.
    pub vocabulary: Vocabulary,
    /// The weighted (documents x terms) matrix.
    pub matrix: TermDocumentMatrix,
    /// One IDF value per vocabulary term (all ones when `use_idf` is off).
    pub idf: Vec<f64>,
}

/// A vectorizer producing TF-IDF weighted document vectors.
///
/// # Examples
///
/// ```
/// use textvec::analysis::NgramRange;
/// use textvec::matrix::Norm;
/// use textvec::tfidf::{TfIdfConfig, TfIdfVectorizer};
///
/// let config = TfIdfConfig {
///     norm: Norm::None,
///     ..TfIdfConfig::default()
/// };
/// let vectorizer = TfIdfVectorizer::new(NgramRange::unigrams(), config).unwrap();
/// let model = vectorizer
///     .fit_transform(&["brexit trade deal", "brexit election"])
///     .unwrap();
///
/// // "brexit" appears in both documents, so its smoothed IDF is exactly 1.
/// let brexit = model.vocabulary.index_of("brexit").unwrap();
/// assert!((model.idf[brexit] - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    config: TfIdfConfig,
    counter: CountVectorizer,
}

impl TfIdfVectorizer {
    /// Create a TF-IDF vectorizer.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(ngram_range: NgramRange, config: TfIdfConfig) -> Result<Self> {
        config.validate()?;
        Ok(TfIdfVectorizer {
            config,
            counter: CountVectorizer::new(ngram_range),
        })
    }

    /// Create a TF-IDF vectorizer with the default configuration
    /// (IDF on, L2 normalization, no filtering).
    pub fn with_defaults(ngram_range: NgramRange) -> Self {
        TfIdfVectorizer {
            config: TfIdfConfig::default(),
            counter: CountVectorizer::new(ngram_range),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &TfIdfConfig {
        &self.config
    }

    /// Fit the vocabulary and produce the weighted matrix.
    ///
    /// # Errors
    ///
    /// Returns [`TextvecError::EmptyVocabulary`] when filtering removes every
    /// term, and [`TextvecError::InvalidConfiguration`] when the resolved
    /// `min_df` exceeds the resolved `max_df`.
    pub fn fit_transform<S: AsRef<str> + Sync>(&self, documents: &[S]) -> Result<TfIdfModel> {
        let num_docs = documents.len();
        let mut doc_counts = self.counter.count_documents(documents)?;

        if let Some(stop_words) = &self.config.stop_words {
            for counts in &mut doc_counts {
                counts.retain(|term, _| !stop_words.excludes_ngram(term));
            }
        }

        // Document frequency and aggregate corpus term frequency.
        let mut doc_freq: AHashMap<&str, usize> = AHashMap::new();
        let mut corpus_freq: AHashMap<&str, u64> = AHashMap::new();
        for counts in &doc_counts {
            for (term, &count) in counts {
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
                *corpus_freq.entry(term.as_str()).or_insert(0) += count;
            }
        }

        let min_df = self.config.min_df.resolve_lower(num_docs);
        let max_df = self.config.max_df.resolve_upper(num_docs);
        if min_df > max_df {
            return Err(TextvecError::invalid_config(format!(
                "resolved min_df ({min_df}) exceeds resolved max_df ({max_df})"
            )));
        }

        let mut retained: Vec<&str> = doc_freq
            .iter()
            .filter(|&(_, &df)| min_df <= df && df <= max_df)
            .map(|(&term, _)| term)
            .collect();
        retained.sort_unstable();

        if let Some(max_features) = self.config.max_features {
            if retained.len() > max_features {
                // Highest aggregate frequency first; the preceding sort
                // already settles ties alphabetically.
                retained.sort_by_key(|term| std::cmp::Reverse(corpus_freq[term]));
                retained.truncate(max_features);
                retained.sort_unstable();
            }
        }

        if retained.is_empty() {
            return Err(TextvecError::EmptyVocabulary);
        }

        let idf: Vec<f64> = if self.config.use_idf {
            retained
                .iter()
                .map(|term| smoothed_idf(num_docs, doc_freq[term]))
                .collect()
        } else {
            vec![1.0; retained.len()]
        };

        let vocabulary = Vocabulary::from_terms(retained);
        let mut matrix = fill_matrix(&vocabulary, &doc_counts);
        if self.config.use_idf {
            for (index, &weight) in idf.iter().enumerate() {
                matrix.scale_column(index, weight);
            }
        }
        matrix.normalize_rows(self.config.norm);

        Ok(TfIdfModel {
            vocabulary,
            matrix,
            idf,
        })
    }
}

/// Smoothed inverse document frequency: `ln((N + 1) / (df + 1)) + 1`.
fn smoothed_idf(num_docs: usize, doc_freq: usize) -> f64 {
    ((num_docs as f64 + 1.0) / (doc_freq as f64 + 1.0)).ln() + 1.0
}
