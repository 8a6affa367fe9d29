//! Token types for text analysis.
//!
//! A [`Token`] is the fundamental unit produced by tokenization: a normalized
//! piece of text plus its position in the document's token sequence. Positions
//! are dense (`0..n`) within one document and are what the n-gram expander and
//! the skip-gram window slide over.

use serde::{Deserialize, Serialize};

/// A single analyzed token.
///
/// # Examples
///
/// ```
/// use textvec::analysis::token::Token;
///
/// let token = Token::new("brexit", 0);
/// assert_eq!(token.text, "brexit");
/// assert_eq!(token.position, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The normalized token text.
    pub text: String,
    /// Position of this token in the document's token sequence.
    pub position: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }
}
