//! Vectorizers that turn text corpora into numeric feature matrices.
//!
//! This module provides the two-stage vectorization pipeline:
//!
//! - [`CountVectorizer`] learns a vocabulary from a corpus and produces
//!   document-term count matrices.
//! - [`TfidfTransformer`] re-weights count matrices by term frequency and
//!   inverse document frequency.
//! - [`TfidfVectorizer`] composes the two behind a single fit/transform
//!   surface.
//!
//! # Examples
//!
//! ```
//! use xyston::vectorize::TfidfVectorizer;
//!
//! let corpus = ["the cat sat", "the dog sat"];
//!
//! let mut vectorizer = TfidfVectorizer::new();
//! let matrix = vectorizer.fit_transform(&corpus).unwrap();
//!
//! assert_eq!(matrix.len(), 2);
//! assert_eq!(matrix[0].len(), vectorizer.vocabulary_size());
//! ```

pub mod count;
pub mod tfidf;

// Re-export the vectorizers for convenient access
pub use count::CountVectorizer;
pub use tfidf::{TfidfTransformer, TfidfVectorizer};
