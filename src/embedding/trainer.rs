//! Skip-gram training with negative sampling.
//!
//! The trainer consumes a pre-tokenized corpus (one token list per document)
//! and fits two embedding tables - target-role and context-role - so that
//! (target, context) pairs observed inside a sliding window score higher
//! than randomly sampled negative pairs. Negatives are drawn from the
//! smoothed unigram distribution (`frequency^0.75`), the standard word2vec
//! choice that keeps very frequent tokens from dominating the samples.
//!
//! Training visits every pair once per epoch in shuffled order and applies
//! plain logistic SGD updates. With `seed: Some(n)` the whole run -
//! initialization, shuffling, sampling - is reproducible; `seed: None` is
//! the explicitly unseeded mode drawing from OS entropy.
//!
//! # Examples
//!
//! ```
//! use textvec::embedding::{SkipGramConfig, SkipGramTrainer};
//!
//! let documents = vec![
//!     vec!["brexit".to_string(), "trade".to_string(), "deal".to_string()],
//!     vec!["brexit".to_string(), "election".to_string()],
//! ];
//!
//! let config = SkipGramConfig {
//!     dimension: 16,
//!     epochs: 3,
//!     seed: Some(42),
//!     ..SkipGramConfig::default()
//! };
//! let trainer = SkipGramTrainer::new(config).unwrap();
//! let table = trainer.train(&documents).unwrap();
//!
//! assert_eq!(table.len(), 4);
//! assert_eq!(table.dimension(), 16);
//! ```

use ahash::AHashMap;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::embedding::table::EmbeddingTable;
use crate::error::{Result, TextvecError};
use crate::vocabulary::Vocabulary;

/// Exponent applied to unigram frequencies for negative sampling.
const SAMPLING_SMOOTHING: f64 = 0.75;

/// Configuration for skip-gram training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkipGramConfig {
    /// Context window size: pairs form within this many positions of the
    /// target token, on both sides.
    pub window: usize,
    /// Dimensionality of the trained vectors.
    pub dimension: usize,
    /// Tokens with corpus frequency below this are removed before training
    /// (no unknown-token placeholder is substituted).
    pub min_count: usize,
    /// Number of passes over the training pairs.
    pub epochs: usize,
    /// Negative samples drawn per positive pair.
    pub negative_samples: usize,
    /// SGD learning rate.
    pub learning_rate: f32,
    /// Seed for initialization, shuffling and sampling. `None` draws from
    /// OS entropy and makes the run intentionally nondeterministic.
    pub seed: Option<u64>,
}

impl Default for SkipGramConfig {
    fn default() -> Self {
        SkipGramConfig {
            window: 5,
            dimension: 100,
            min_count: 1,
            epochs: 5,
            negative_samples: 5,
            learning_rate: 0.025,
            seed: None,
        }
    }
}

impl SkipGramConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(TextvecError::invalid_config("window must be at least 1"));
        }
        if self.dimension == 0 {
            return Err(TextvecError::invalid_config("dimension must be at least 1"));
        }
        if self.epochs == 0 {
            return Err(TextvecError::invalid_config("epochs must be at least 1"));
        }
        if self.negative_samples == 0 {
            return Err(TextvecError::invalid_config(
                "negative_samples must be at least 1",
            ));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(TextvecError::invalid_config(
                "learning_rate must be finite and positive",
            ));
        }
        Ok(())
    }
}

/// Trains skip-gram embeddings over a pre-tokenized corpus.
#[derive(Debug, Clone)]
pub struct SkipGramTrainer {
    config: SkipGramConfig,
}

impl SkipGramTrainer {
    /// Create a trainer.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: SkipGramConfig) -> Result<Self> {
        config.validate()?;
        Ok(SkipGramTrainer { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &SkipGramConfig {
        &self.config
    }

    /// Train an embedding table from per-document token lists.
    ///
    /// # Errors
    ///
    /// Returns [`TextvecError::EmptyVocabulary`] when no token reaches
    /// `min_count`.
    pub fn train(&self, documents: &[Vec<String>]) -> Result<EmbeddingTable> {
        let dim = self.config.dimension;

        let mut frequency: AHashMap<&str, u64> = AHashMap::new();
        for document in documents {
            for token in document {
                *frequency.entry(token.as_str()).or_insert(0) += 1;
            }
        }
        let kept: Vec<&str> = frequency
            .iter()
            .filter(|&(_, &count)| count as usize >= self.config.min_count)
            .map(|(&token, _)| token)
            .collect();
        if kept.is_empty() {
            return Err(TextvecError::EmptyVocabulary);
        }
        let vocabulary = Vocabulary::from_terms(kept);

        // Filtered tokens are dropped from the sequences entirely, so the
        // window slides over the surviving tokens.
        let sequences: Vec<Vec<usize>> = documents
            .iter()
            .map(|document| {
                document
                    .iter()
                    .filter_map(|token| vocabulary.index_of(token))
                    .collect()
            })
            .collect();

        let mut counts = vec![0u64; vocabulary.len()];
        for sequence in &sequences {
            for &index in sequence {
                counts[index] += 1;
            }
        }

        let mut pairs = Vec::new();
        for sequence in &sequences {
            for (position, &target) in sequence.iter().enumerate() {
                let start = position.saturating_sub(self.config.window);
                let end = (position + self.config.window + 1).min(sequence.len());
                for context_position in start..end {
                    if context_position != position {
                        pairs.push((target, sequence[context_position]));
                    }
                }
            }
        }

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let sampler = UnigramSampler::new(&counts);
        let bound = 0.5 / dim as f32;
        let mut target_table: Vec<f32> = (0..vocabulary.len() * dim)
            .map(|_| rng.random_range(-bound..bound))
            .collect();
        let mut context_table = vec![0.0f32; vocabulary.len() * dim];

        for _ in 0..self.config.epochs {
            pairs.shuffle(&mut rng);
            for &(target, context) in &pairs {
                self.train_pair(
                    target,
                    context,
                    &mut target_table,
                    &mut context_table,
                    &sampler,
                    &mut rng,
                );
            }
        }

        let vectors: Vec<Vec<f32>> = (0..vocabulary.len())
            .map(|index| target_table[index * dim..(index + 1) * dim].to_vec())
            .collect();
        Ok(EmbeddingTable::new(vocabulary, vectors, dim))
    }

    /// One SGD step: the positive pair plus `negative_samples` negatives.
    fn train_pair(
        &self,
        target: usize,
        context: usize,
        target_table: &mut [f32],
        context_table: &mut [f32],
        sampler: &UnigramSampler,
        rng: &mut StdRng,
    ) {
        let dim = self.config.dimension;
        let lr = self.config.learning_rate;
        let target_offset = target * dim;
        let mut accumulated = vec![0.0f32; dim];

        for sample_index in 0..=self.config.negative_samples {
            let (sample, label) = if sample_index == 0 {
                (context, 1.0f32)
            } else {
                // With a single-token vocabulary every draw collides with
                // the true context; there is nothing to push down.
                if sampler.len() < 2 {
                    break;
                }
                let mut sample = sampler.sample(rng);
                while sample == context {
                    sample = sampler.sample(rng);
                }
                (sample, 0.0f32)
            };

            let sample_offset = sample * dim;
            let mut score = 0.0f32;
            for i in 0..dim {
                score += target_table[target_offset + i] * context_table[sample_offset + i];
            }
            let gradient = (label - sigmoid(score)) * lr;
            for i in 0..dim {
                accumulated[i] += gradient * context_table[sample_offset + i];
                context_table[sample_offset + i] += gradient * target_table[target_offset + i];
            }
        }

        for i in 0..dim {
            target_table[target_offset + i] += accumulated[i];
        }
    }
}

/// Samples token indices proportionally to `frequency^0.75`.
struct UnigramSampler {
    cumulative: Vec<f64>,
}

impl UnigramSampler {
    fn new(counts: &[u64]) -> Self {
        let mut cumulative = Vec::with_capacity(counts.len());
        let mut total = 0.0;
        for &count in counts {
            total += (count as f64).powf(SAMPLING_SMOOTHING);
            cumulative.push(total);
        }
        UnigramSampler { cumulative }
    }

    fn len(&self) -> usize {
        self.cumulative.len()
    }

    fn sample(&self, rng: &mut StdRng) -> usize {
        let total = match self.cumulative.last() {
            Some(&total) => total,
            None => return 0,
        };
        let draw = rng.random_range(0.0..total);
        self.cumulative.partition_point(|&bound| bound <= draw)
    }
}

fn sigmoid(x: f32) -> f32 {
    let x = x.clamp(-8.0, 8.0);
    1.0 / (1.0 + (-x).exp())
}
