//! Count vectorizer: vocabulary learning and document-term count matrices.

use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::LowercaseCharFilter;
use crate::analysis::tokenizer::{DEFAULT_TOKEN_PATTERN, RegexTokenizer};
use crate::error::{Result, XystonError};

/// A vocabulary learned from a corpus: terms in first-seen order plus the
/// term to column index map.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct Vocabulary {
    terms: Vec<String>,
    index: AHashMap<String, usize>,
}

impl Vocabulary {
    /// Record a term, assigning the next column the first time it is seen.
    fn insert(&mut self, term: String) {
        if !self.index.contains_key(&term) {
            self.index.insert(term.clone(), self.terms.len());
            self.terms.push(term);
        }
    }

    fn column_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    fn terms(&self) -> &[String] {
        &self.terms
    }

    fn len(&self) -> usize {
        self.terms.len()
    }
}

/// Learns a vocabulary from a corpus and turns documents into term-count
/// rows.
///
/// The matrix layout is one row per document and one column per vocabulary
/// term, with columns ordered by first occurrence during fitting. Tokens
/// outside the vocabulary are ignored.
///
/// By default documents are lower-cased (Unicode-aware) and tokenized with
/// [`DEFAULT_TOKEN_PATTERN`]; both steps are configurable, or the whole
/// pipeline can be replaced with a custom [`Analyzer`].
///
/// `fit` takes `&mut self`, so the borrow checker rules out concurrent fits
/// on a single instance. Separate instances are fully independent.
///
/// # Examples
///
/// ```
/// use xyston::vectorize::CountVectorizer;
///
/// let corpus = ["the cat sat", "the dog sat"];
///
/// let mut vectorizer = CountVectorizer::new();
/// let counts = vectorizer.fit_transform(&corpus).unwrap();
///
/// assert_eq!(
///     vectorizer.feature_names().unwrap(),
///     ["the", "cat", "sat", "dog"]
/// );
/// assert_eq!(counts, vec![vec![1, 1, 1, 0], vec![1, 0, 1, 1]]);
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct CountVectorizer {
    /// Lower-case documents before tokenization
    lowercase: bool,
    /// Regex pattern that defines what counts as a token
    token_pattern: String,
    /// Vocabulary learned by the last successful fit, if any
    vocabulary: Option<Vocabulary>,
    /// Optional analyzer replacing the lowercase/token_pattern pipeline.
    ///
    /// Not serialized; a deserialized vectorizer falls back to the
    /// configured pipeline.
    #[serde(skip)]
    analyzer: Option<Arc<dyn Analyzer>>,
}

impl fmt::Debug for CountVectorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountVectorizer")
            .field("lowercase", &self.lowercase)
            .field("token_pattern", &self.token_pattern)
            .field("vocabulary_size", &self.vocabulary_size())
            .field("analyzer", &self.analyzer.as_ref().map(|a| a.name()))
            .finish()
    }
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CountVectorizer {
    /// Create a new count vectorizer with the default configuration:
    /// lower-casing enabled and the [`DEFAULT_TOKEN_PATTERN`] token pattern.
    pub fn new() -> Self {
        CountVectorizer {
            lowercase: true,
            token_pattern: DEFAULT_TOKEN_PATTERN.to_string(),
            vocabulary: None,
            analyzer: None,
        }
    }

    /// Set whether documents are lower-cased before tokenization.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Set the regex pattern that defines what counts as a token.
    ///
    /// The pattern is compiled when a corpus is processed, so a malformed
    /// pattern surfaces as a configuration error from [`fit`](Self::fit) or
    /// [`transform`](Self::transform), not here.
    pub fn with_token_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.token_pattern = pattern.into();
        self
    }

    /// Replace the built-in pipeline with a custom analyzer.
    ///
    /// When an analyzer is set, the `lowercase` and `token_pattern`
    /// configuration is ignored.
    pub fn with_analyzer(mut self, analyzer: Arc<dyn Analyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    /// Learn the vocabulary of a corpus.
    ///
    /// Documents are analyzed in order and every distinct token is assigned
    /// a column the first time it is seen, so column order is first-seen
    /// order, never frequency or lexical order. Fitting again replaces the
    /// previous vocabulary entirely.
    ///
    /// Fitting on an empty corpus clears the fitted state, and subsequent
    /// calls to [`transform`](Self::transform) or
    /// [`feature_names`](Self::feature_names) return a not-fitted error. A
    /// non-empty corpus whose documents produce no tokens is different: it
    /// fits an empty vocabulary (see [`transform`](Self::transform)).
    pub fn fit<S: AsRef<str>>(&mut self, corpus: &[S]) -> Result<()> {
        let analyzer = self.build_analyzer()?;

        let mut vocabulary = Vocabulary::default();
        for document in corpus {
            for token in analyzer.analyze(document.as_ref())? {
                vocabulary.insert(token.text);
            }
        }

        self.vocabulary = if corpus.is_empty() {
            None
        } else {
            Some(vocabulary)
        };

        Ok(())
    }

    /// Count vocabulary terms in each document of a corpus.
    ///
    /// Any corpus can be transformed, not just the one the vectorizer was
    /// fitted on. Documents are re-analyzed with the same configuration, and
    /// each row gets one cell per vocabulary term in column order; tokens
    /// that are not in the vocabulary are silently ignored. With an empty
    /// vocabulary every row has length zero.
    ///
    /// Returns a not-fitted error unless [`fit`](Self::fit) previously
    /// succeeded on a non-empty corpus.
    pub fn transform<S: AsRef<str>>(&self, corpus: &[S]) -> Result<Vec<Vec<u64>>> {
        let vocabulary = self.fitted_vocabulary()?;
        let analyzer = self.build_analyzer()?;

        let mut matrix = Vec::with_capacity(corpus.len());
        for document in corpus {
            let mut row = vec![0u64; vocabulary.len()];
            for token in analyzer.analyze(document.as_ref())? {
                if let Some(column) = vocabulary.column_of(&token.text) {
                    row[column] += 1;
                }
            }
            matrix.push(row);
        }

        Ok(matrix)
    }

    /// Fit on a corpus, then transform that same corpus.
    ///
    /// Equivalent to calling [`fit`](Self::fit) followed by
    /// [`transform`](Self::transform).
    pub fn fit_transform<S: AsRef<str>>(&mut self, corpus: &[S]) -> Result<Vec<Vec<u64>>> {
        self.fit(corpus)?;
        self.transform(corpus)
    }

    /// Get the vocabulary terms in column order.
    ///
    /// A fitted vocabulary may still be empty when no document produced a
    /// token. Returns a not-fitted error unless [`fit`](Self::fit)
    /// previously succeeded on a non-empty corpus.
    pub fn feature_names(&self) -> Result<&[String]> {
        Ok(self.fitted_vocabulary()?.terms())
    }

    /// Get the number of vocabulary terms (0 when not fitted).
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.as_ref().map_or(0, Vocabulary::len)
    }

    /// Check whether the vectorizer has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.vocabulary.is_some()
    }

    fn fitted_vocabulary(&self) -> Result<&Vocabulary> {
        self.vocabulary.as_ref().ok_or_else(|| {
            XystonError::not_fitted("fit the vectorizer on a non-empty corpus first")
        })
    }

    /// Build the analysis pipeline for the current configuration.
    ///
    /// The token pattern is compiled here, so a malformed pattern fails on
    /// first use rather than at construction.
    fn build_analyzer(&self) -> Result<Arc<dyn Analyzer>> {
        if let Some(analyzer) = &self.analyzer {
            return Ok(Arc::clone(analyzer));
        }

        let tokenizer = Arc::new(RegexTokenizer::with_pattern(&self.token_pattern)?);
        let mut pipeline = PipelineAnalyzer::new(tokenizer);
        if self.lowercase {
            pipeline = pipeline.add_char_filter(Arc::new(LowercaseCharFilter::new()));
        }

        Ok(Arc::new(pipeline))
    }
}
