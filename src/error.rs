//! Error types for the Textvec library.
//!
//! This module provides error handling for all Textvec operations.
//! All errors are represented by the [`TextvecError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use textvec::error::{Result, TextvecError};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(TextvecError::invalid_config("window must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for Textvec operations.
///
/// This enum represents all possible errors that can occur in the Textvec
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum TextvecError {
    /// No terms survive vocabulary construction or filtering.
    #[error("Empty vocabulary: no terms remain after filtering")]
    EmptyVocabulary,

    /// A vocabulary or similarity lookup referenced a token that was never
    /// seen during fitting/training, or was removed by a frequency filter.
    #[error("Unknown token: {0}")]
    UnknownToken(String),

    /// Invalid configuration (thresholds, n-gram ranges, hyperparameters).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Analysis-related errors (tokenization, n-gram expansion, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),
}

/// Result type alias for operations that may fail with TextvecError.
pub type Result<T> = std::result::Result<T, TextvecError>;

impl TextvecError {
    /// Create a new unknown-token error.
    pub fn unknown_token<S: Into<String>>(token: S) -> Self {
        TextvecError::UnknownToken(token.into())
    }

    /// Create a new invalid configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        TextvecError::InvalidConfiguration(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TextvecError::Analysis(msg.into())
    }
}
