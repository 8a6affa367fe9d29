//! Skip-gram word embeddings.
//!
//! This module trains dense word vectors from a pre-tokenized corpus and
//! serves similarity queries over the result:
//!
//! - [`trainer::SkipGramTrainer`] - skip-gram with negative sampling,
//!   configured through [`trainer::SkipGramConfig`]
//! - [`table::EmbeddingTable`] - the trained token-to-vector mapping with
//!   cosine similarity and nearest-neighbour queries

pub mod table;
pub mod trainer;

pub use table::EmbeddingTable;
pub use trainer::{SkipGramConfig, SkipGramTrainer};
