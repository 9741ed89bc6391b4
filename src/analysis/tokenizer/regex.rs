//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::error::{Result, XystonError};

/// The default token pattern: runs of two or more word characters.
///
/// `\w` is Unicode-aware in the `regex` crate, so the pattern matches words
/// in any script while dropping punctuation and single-character tokens.
pub const DEFAULT_TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// A regex-based tokenizer that extracts tokens using regular expressions.
///
/// This is the default tokenizer for the vectorizers. Tokens are the
/// non-overlapping, left-to-right matches of the pattern; everything between
/// matches is discarded.
///
/// # Examples
///
/// ```
/// use xyston::analysis::tokenizer::{RegexTokenizer, Tokenizer};
///
/// let tokenizer = RegexTokenizer::new().unwrap();
/// let tokens: Vec<_> = tokenizer.tokenize("a cat sat").unwrap().collect();
///
/// // Single-character words do not match the default pattern.
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].text, "cat");
/// assert_eq!(tokens[1].text, "sat");
/// ```
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default pattern.
    ///
    /// The default pattern [`DEFAULT_TOKEN_PATTERN`] matches runs of two or
    /// more word characters.
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_TOKEN_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    ///
    /// Returns a configuration error if the pattern does not compile.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| XystonError::configuration(format!("Invalid token pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new().expect("Default token pattern should be valid")
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
