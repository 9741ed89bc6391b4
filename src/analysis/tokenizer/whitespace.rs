//! Whitespace tokenizer implementation.

use super::Tokenizer;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on Unicode whitespace.
///
/// Token text is carried through verbatim; no normalization is applied.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut search_from = 0;

        for (position, word) in text.split_whitespace().enumerate() {
            // split_whitespace yields subslices in order, so each word is
            // found at or after the end of the previous one.
            let start = match text[search_from..].find(word) {
                Some(idx) => search_from + idx,
                None => search_from,
            };
            let end = start + word.len();
            search_from = end;

            tokens.push(Token::with_offsets(word, position, start, end));
        }

        Ok(tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello  world\ttest").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
    }

    #[test]
    fn test_repeated_words_keep_distinct_offsets() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("ha ha").unwrap().collect();

        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 2);
        assert_eq!(tokens[1].start_offset, 3);
        assert_eq!(tokens[1].end_offset, 5);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
