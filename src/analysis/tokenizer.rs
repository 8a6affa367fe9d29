//! Tokenizer implementations for text analysis.
//!
//! This module provides the [`Tokenizer`] trait and the default
//! [`WordTokenizer`], which splits text using Unicode word boundary rules
//! (UAX #29) and then normalizes each segment into lower-cased alphanumeric
//! runs. Runs shorter than two characters are dropped, so single letters and
//! stray digits never become features.
//!
//! # Examples
//!
//! ```
//! use textvec::analysis::tokenizer::{Tokenizer, WordTokenizer};
//!
//! let tokenizer = WordTokenizer::new();
//! let tokens = tokenizer.tokenize("Brexit trade-deal, 2019!").unwrap();
//!
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["brexit", "trade", "deal", "2019"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::Token;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a sequence of tokens.
    fn tokenize(&self, text: &str) -> Result<Vec<Token>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Minimum number of characters a token must have to be kept.
const MIN_TOKEN_CHARS: usize = 2;

/// A tokenizer that splits text into lower-cased alphanumeric word runs.
///
/// Segmentation happens in two stages: Unicode word boundaries (UAX #29)
/// locate candidate words, then each candidate is split again on any
/// remaining non-alphanumeric character, so punctuation embedded inside a
/// segment (hyphens, apostrophes) also acts as a separator. Surviving runs
/// are lower-cased; runs shorter than two characters are discarded.
///
/// The tokenizer is a pure function of its input: the same text always
/// produces the same token sequence.
///
/// # Examples
///
/// ```
/// use textvec::analysis::tokenizer::{Tokenizer, WordTokenizer};
///
/// let tokenizer = WordTokenizer::new();
/// let tokens = tokenizer.tokenize("Don't panic").unwrap();
///
/// // "Don't" splits at the apostrophe; "t" is too short to keep.
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].text, "don");
/// assert_eq!(tokens[1].text, "panic");
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut position = 0;

        for word in text.unicode_words() {
            for run in word.split(|c: char| !c.is_alphanumeric()) {
                if run.chars().count() < MIN_TOKEN_CHARS {
                    continue;
                }
                tokens.push(Token::new(run.to_lowercase(), position));
                position += 1;
            }
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &WordTokenizer, input: &str) -> Vec<String> {
        tokenizer
            .tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_basic_tokenization() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(
            texts(&tokenizer, "brexit trade deal"),
            vec!["brexit", "trade", "deal"]
        );
    }

    #[test]
    fn test_lowercasing_and_punctuation() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(
            texts(&tokenizer, "Brexit: Trade-Deal reached!"),
            vec!["brexit", "trade", "deal", "reached"]
        );
    }

    #[test]
    fn test_short_runs_are_dropped() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(texts(&tokenizer, "a I x yz"), vec!["yz"]);
    }

    #[test]
    fn test_digits_are_tokens() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(
            texts(&tokenizer, "election 2019 results"),
            vec!["election", "2019", "results"]
        );
    }

    #[test]
    fn test_positions_are_dense() {
        let tokenizer = WordTokenizer::new();
        let tokens = tokenizer.tokenize("one I two three").unwrap();
        let positions: Vec<_> = tokens.iter().map(|t| t.position).collect();
        // "I" is dropped, but positions stay dense over kept tokens.
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        let tokenizer = WordTokenizer::new();
        assert!(tokenizer.tokenize("").unwrap().is_empty());
        assert!(tokenizer.tokenize("... !!! ---").unwrap().is_empty());
    }

    #[test]
    fn test_unicode_words() {
        let tokenizer = WordTokenizer::new();
        assert_eq!(texts(&tokenizer, "café résumé"), vec!["café", "résumé"]);
    }

    #[test]
    fn test_determinism() {
        let tokenizer = WordTokenizer::new();
        let input = "Brexit trade deal: the sequel (2020)";
        assert_eq!(texts(&tokenizer, input), texts(&tokenizer, input));
    }
}
