//! # Xyston
//!
//! A text vectorization library for Rust.
//!
//! Xyston turns corpora of raw text documents into numeric feature matrices
//! for statistical text processing.
//!
//! ## Features
//!
//! - Configurable analysis pipeline (char filters + tokenizers)
//! - Document-term count matrices over a learned, order-stable vocabulary
//! - Smoothed TF-IDF weighting
//! - Composed count + TF-IDF vectorizer behind one fit/transform surface
//!
//! ## Examples
//!
//! ```
//! use xyston::vectorize::{CountVectorizer, TfidfVectorizer};
//!
//! let corpus = ["the cat sat", "the dog sat"];
//!
//! // Document-term counts
//! let mut counter = CountVectorizer::new();
//! let counts = counter.fit_transform(&corpus).unwrap();
//! assert_eq!(counts, vec![vec![1, 1, 1, 0], vec![1, 0, 1, 1]]);
//!
//! // TF-IDF weights over the same corpus
//! let mut vectorizer = TfidfVectorizer::new();
//! let weights = vectorizer.fit_transform(&corpus).unwrap();
//! assert_eq!(weights.len(), 2);
//! assert_eq!(weights[0].len(), vectorizer.vocabulary_size());
//! ```

pub mod analysis;
pub mod error;
pub mod vectorize;

pub mod prelude {
    //! Convenient re-exports of the most commonly used types.

    pub use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
    pub use crate::analysis::char_filter::{CharFilter, LowercaseCharFilter};
    pub use crate::analysis::token::{Token, TokenStream};
    pub use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
    pub use crate::error::{Result, XystonError};
    pub use crate::vectorize::{CountVectorizer, TfidfTransformer, TfidfVectorizer};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
