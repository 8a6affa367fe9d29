//! In-memory document collections.
//!
//! The vectorizers consume an ordered sequence of raw text documents; this
//! module provides the value types an external data-loading collaborator
//! hands over. A [`Document`] is an immutable (text, optional label) pair,
//! identified by its position in the owning [`Corpus`]. How the collection
//! was produced (file parsing, network, etc.) is outside this crate.
//!
//! # Examples
//!
//! ```
//! use textvec::corpus::{Corpus, Document};
//!
//! let mut corpus = Corpus::new();
//! corpus.push(Document::with_label("brexit trade deal", "politics"));
//! corpus.push(Document::new("brexit election"));
//!
//! assert_eq!(corpus.len(), 2);
//! assert_eq!(corpus.texts(), vec!["brexit trade deal", "brexit election"]);
//! ```

use serde::{Deserialize, Serialize};

/// An immutable raw text document with an optional category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Raw document text.
    pub text: String,
    /// Optional category or query label.
    pub label: Option<String>,
}

impl Document {
    /// Create an unlabeled document.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Document {
            text: text.into(),
            label: None,
        }
    }

    /// Create a labeled document.
    pub fn with_label<S: Into<String>, L: Into<String>>(text: S, label: L) -> Self {
        Document {
            text: text.into(),
            label: Some(label.into()),
        }
    }
}

/// An ordered, append-only collection of documents.
///
/// A document's identity is its index: the vectorizers produce matrix rows
/// in exactly this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Corpus {
            documents: Vec::new(),
        }
    }

    /// Build a corpus of unlabeled documents from raw texts.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Corpus {
            documents: texts.into_iter().map(Document::new).collect(),
        }
    }

    /// Append a document, assigning it the next index.
    pub fn push(&mut self, document: Document) {
        self.documents.push(document);
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check whether the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Get the document at an index.
    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    /// All documents in index order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// The raw texts in index order, the shape the vectorizers consume.
    pub fn texts(&self) -> Vec<&str> {
        self.documents.iter().map(|d| d.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_constructors() {
        let plain = Document::new("brexit election");
        assert_eq!(plain.text, "brexit election");
        assert_eq!(plain.label, None);

        let labeled = Document::with_label("brexit trade deal", "politics");
        assert_eq!(labeled.label.as_deref(), Some("politics"));
    }

    #[test]
    fn test_corpus_order_is_preserved() {
        let corpus = Corpus::from_texts(["third", "first", "second"]);
        assert_eq!(corpus.texts(), vec!["third", "first", "second"]);
        assert_eq!(corpus.get(1).unwrap().text, "first");
        assert_eq!(corpus.get(3), None);
    }

    #[test]
    fn test_push_appends() {
        let mut corpus = Corpus::new();
        assert!(corpus.is_empty());

        corpus.push(Document::new("one"));
        corpus.push(Document::new("two"));
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.documents()[1].text, "two");
    }
}
