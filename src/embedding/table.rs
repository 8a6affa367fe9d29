//! Trained embedding tables and similarity queries.
//!
//! An [`EmbeddingTable`] is the read-only output of skip-gram training: one
//! fixed-dimension vector per vocabulary token. Similarity between tokens is
//! the cosine of their vectors; nearest-neighbour queries rank the rest of
//! the vocabulary by descending cosine with alphabetical tie-breaking.

use crate::error::{Result, TextvecError};
use crate::vocabulary::Vocabulary;

/// A frozen mapping from vocabulary token to dense embedding vector.
#[derive(Debug, Clone)]
pub struct EmbeddingTable {
    vocabulary: Vocabulary,
    vectors: Vec<Vec<f32>>,
    dimension: usize,
}

impl EmbeddingTable {
    /// Assemble a table from a vocabulary and one vector per token.
    ///
    /// `vectors[i]` is the embedding of the token at vocabulary index `i`.
    pub(crate) fn new(vocabulary: Vocabulary, vectors: Vec<Vec<f32>>, dimension: usize) -> Self {
        debug_assert_eq!(vocabulary.len(), vectors.len());
        EmbeddingTable {
            vocabulary,
            vectors,
            dimension,
        }
    }

    /// Number of tokens in the table.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Dimensionality of every embedding vector.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Check whether a token survived training.
    pub fn contains(&self, token: &str) -> bool {
        self.vocabulary.contains(token)
    }

    /// Iterate over the vocabulary tokens in alphabetical order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.vocabulary.terms()
    }

    /// Look up the embedding vector of a token.
    ///
    /// # Errors
    ///
    /// Returns [`TextvecError::UnknownToken`] for tokens absent from the
    /// trained vocabulary.
    pub fn vector(&self, token: &str) -> Result<&[f32]> {
        let index = self
            .vocabulary
            .index_of(token)
            .ok_or_else(|| TextvecError::unknown_token(token))?;
        Ok(&self.vectors[index])
    }

    /// Cosine similarity of two tokens, in `[-1, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`TextvecError::UnknownToken`] if either token is absent.
    pub fn similarity(&self, a: &str, b: &str) -> Result<f32> {
        let va = self.vector(a)?;
        let vb = self.vector(b)?;
        Ok(cosine(va, vb))
    }

    /// The `k` vocabulary tokens most similar to `token`, best first.
    ///
    /// The query token itself is never returned; the result holds
    /// `min(k, len() - 1)` entries. Equal scores order alphabetically.
    ///
    /// # Errors
    ///
    /// Returns [`TextvecError::UnknownToken`] for tokens absent from the
    /// trained vocabulary.
    pub fn most_similar(&self, token: &str, k: usize) -> Result<Vec<(String, f32)>> {
        let query_index = self
            .vocabulary
            .index_of(token)
            .ok_or_else(|| TextvecError::unknown_token(token))?;
        let query = &self.vectors[query_index];

        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != query_index)
            .map(|(index, vector)| (index, cosine(query, vector)))
            .collect();

        // Vocabulary indices are alphabetical, so ascending index is the
        // alphabetical tie-break.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        scored.truncate(k);

        Ok(scored
            .into_iter()
            .filter_map(|(index, score)| {
                self.vocabulary
                    .term(index)
                    .map(|term| (term.to_string(), score))
            })
            .collect())
    }
}

/// Cosine of the angle between two vectors; 0 when either has zero norm.
fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 { 0.0 } else { dot / denom }
}
