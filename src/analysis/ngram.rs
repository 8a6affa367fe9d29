//! Word n-gram expansion.
//!
//! An [`NgramRange`] describes which contiguous word n-grams become features:
//! `[1, 1]` is plain unigram counting, `[1, 2]` adds bigrams, and so on.
//! Expansion operates on one document's token sequence at a time, so n-grams
//! never cross document boundaries. Multi-word grams join their constituent
//! tokens with a single space.
//!
//! # Examples
//!
//! ```
//! use textvec::analysis::ngram::NgramRange;
//! use textvec::analysis::token::Token;
//!
//! let tokens = vec![
//!     Token::new("brexit", 0),
//!     Token::new("trade", 1),
//!     Token::new("deal", 2),
//! ];
//!
//! let range = NgramRange::new(1, 2).unwrap();
//! assert_eq!(
//!     range.expand(&tokens),
//!     vec!["brexit", "trade", "deal", "brexit trade", "trade deal"]
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::error::{Result, TextvecError};

/// An inclusive range `[min_n, max_n]` of word n-gram sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgramRange {
    /// Minimum n-gram size.
    min_n: usize,
    /// Maximum n-gram size.
    max_n: usize,
}

impl NgramRange {
    /// Create a new n-gram range.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `min_n` is 0
    /// - `max_n` is less than `min_n`
    pub fn new(min_n: usize, max_n: usize) -> Result<Self> {
        if min_n == 0 {
            return Err(TextvecError::invalid_config("min_n must be at least 1"));
        }
        if max_n < min_n {
            return Err(TextvecError::invalid_config(format!(
                "max_n ({max_n}) must be >= min_n ({min_n})"
            )));
        }
        Ok(Self { min_n, max_n })
    }

    /// A unigram-only range (`[1, 1]`).
    pub fn unigrams() -> Self {
        Self { min_n: 1, max_n: 1 }
    }

    /// A unigram-plus-bigram range (`[1, 2]`).
    pub fn unigrams_and_bigrams() -> Self {
        Self { min_n: 1, max_n: 2 }
    }

    /// Minimum n-gram size.
    pub fn min_n(&self) -> usize {
        self.min_n
    }

    /// Maximum n-gram size.
    pub fn max_n(&self) -> usize {
        self.max_n
    }

    /// Expand one document's token sequence into all of its contiguous
    /// n-gram occurrences for every n in the range.
    ///
    /// The output lists occurrences, not distinct terms: a gram that appears
    /// twice in the document appears twice in the result.
    pub fn expand(&self, tokens: &[Token]) -> Vec<String> {
        let mut grams = Vec::new();
        for n in self.min_n..=self.max_n {
            if n > tokens.len() {
                break;
            }
            for window in tokens.windows(n) {
                let gram = window
                    .iter()
                    .map(|t| t.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                grams.push(gram);
            }
        }
        grams
    }
}

impl Default for NgramRange {
    fn default() -> Self {
        Self::unigrams()
    }
}
