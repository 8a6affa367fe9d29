//! # Textvec
//!
//! A text vectorization and word embedding library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Word and word n-gram tokenization
//! - Document-term count matrices with a frozen bidirectional vocabulary
//! - TF-IDF weighting with smoothed IDF, document-frequency filtering and
//!   L1/L2 row normalization
//! - Skip-gram word embeddings with negative sampling and reproducible
//!   seeded training
//! - Cosine similarity and nearest-neighbour queries over trained embeddings

pub mod analysis;
pub mod corpus;
pub mod count;
pub mod embedding;
pub mod error;
pub mod matrix;
pub mod tfidf;
pub mod vocabulary;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
