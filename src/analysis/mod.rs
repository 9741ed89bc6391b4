//! Text analysis module for Xyston.
//!
//! This module provides the text analysis functionality that feeds the
//! vectorizers: char filtering, tokenization, and analysis pipelines.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use char_filter::*;
pub use token::*;
pub use tokenizer::*;
