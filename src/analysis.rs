//! Text analysis pipeline: tokenization, word n-gram expansion, stop words.
//!
//! This module contains everything that turns raw document text into the
//! normalized terms counted by the vectorizers:
//!
//! - [`token::Token`] - a single normalized token with its position
//! - [`tokenizer::Tokenizer`] - trait for tokenizers, with
//!   [`tokenizer::WordTokenizer`] as the default word rule
//! - [`ngram::NgramRange`] - contiguous word n-gram expansion
//! - [`stop_words::StopWordSet`] - exclusion set applied before counting

pub mod ngram;
pub mod stop_words;
pub mod token;
pub mod tokenizer;

pub use ngram::NgramRange;
pub use stop_words::StopWordSet;
pub use token::Token;
pub use tokenizer::{Tokenizer, WordTokenizer};
