//! Char filter implementations for text normalization.
//!
//! This module provides filters that pre-process the text string before it is
//! passed to the tokenizer. Char filters run on whole documents and preserve
//! document identity: one string in, one string out.
//!
//! # Available Filters
//!
//! - [`LowercaseCharFilter`] - Unicode-aware case folding
//!
//! # Examples
//!
//! ```
//! use xyston::analysis::char_filter::{CharFilter, LowercaseCharFilter};
//!
//! let filter = LowercaseCharFilter::new();
//! assert_eq!(filter.filter("Hello WORLD"), "hello world");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

/// A char filter that lower-cases the entire input.
///
/// Case folding is Unicode-aware and runs before tokenization, so the token
/// pattern only ever sees folded text. The output may differ in length from
/// the input: some characters lower-case to multiple characters.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        input.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
