//! Dense term-document matrices.
//!
//! A [`TermDocumentMatrix`] holds one row per document and one column per
//! vocabulary term. The counting vectorizer fills it with raw occurrence
//! counts; the TF-IDF weighter rescales columns by IDF and optionally
//! normalizes each row with a [`Norm`]. Rows that are entirely zero are left
//! untouched by normalization, so there is never a division by zero.

use serde::{Deserialize, Serialize};

/// Row normalization schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Norm {
    /// Leave rows untouched.
    None,
    /// Divide each row by its sum of absolute values.
    L1,
    /// Divide each row by its Euclidean norm.
    L2,
}

/// A dense (documents x terms) matrix of non-negative weights.
///
/// # Examples
///
/// ```
/// use textvec::matrix::{Norm, TermDocumentMatrix};
///
/// let mut matrix = TermDocumentMatrix::zeros(2, 3);
/// matrix.set(0, 1, 3.0);
/// matrix.set(0, 2, 4.0);
///
/// matrix.normalize_rows(Norm::L2);
/// assert!((matrix.get(0, 1) - 0.6).abs() < 1e-12);
/// assert!((matrix.get(0, 2) - 0.8).abs() < 1e-12);
/// // The all-zero second row stays exactly zero.
/// assert_eq!(matrix.row(1), &[0.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TermDocumentMatrix {
    rows: Vec<Vec<f64>>,
    num_terms: usize,
}

impl TermDocumentMatrix {
    /// Create an all-zero matrix with the given shape.
    pub fn zeros(num_docs: usize, num_terms: usize) -> Self {
        TermDocumentMatrix {
            rows: vec![vec![0.0; num_terms]; num_docs],
            num_terms,
        }
    }

    /// Number of document rows.
    pub fn num_docs(&self) -> usize {
        self.rows.len()
    }

    /// Number of term columns.
    pub fn num_terms(&self) -> usize {
        self.num_terms
    }

    /// Shape as (documents, terms).
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.num_terms)
    }

    /// Get the entry for (document, term).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, doc: usize, term: usize) -> f64 {
        self.rows[doc][term]
    }

    /// Set the entry for (document, term).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, doc: usize, term: usize, value: f64) {
        self.rows[doc][term] = value;
    }

    /// Get one document's row.
    pub fn row(&self, doc: usize) -> &[f64] {
        &self.rows[doc]
    }

    /// Iterate over document rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Multiply every entry of one term column by a factor.
    pub fn scale_column(&mut self, term: usize, factor: f64) {
        for row in &mut self.rows {
            row[term] *= factor;
        }
    }

    /// Normalize every row in place with the given scheme.
    ///
    /// All-zero rows are left exactly zero.
    pub fn normalize_rows(&mut self, norm: Norm) {
        if norm == Norm::None {
            return;
        }
        for row in &mut self.rows {
            let denom = match norm {
                Norm::None => unreachable!(),
                Norm::L1 => row.iter().map(|v| v.abs()).sum::<f64>(),
                Norm::L2 => row.iter().map(|v| v * v).sum::<f64>().sqrt(),
            };
            if denom > 0.0 {
                for value in row.iter_mut() {
                    *value /= denom;
                }
            }
        }
    }
}
