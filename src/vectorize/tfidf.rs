//! TF-IDF transformation and the composed TF-IDF vectorizer.
//!
//! Weighting follows the smoothed formulation:
//!
//! ```text
//! tf[doc][term]    = count[doc][term] / sum(count[doc])
//! idf[term]        = 1 + ln((n_documents + 1) / (document_frequency[term] + 1))
//! tfidf[doc][term] = tf[doc][term] * idf[term]
//! ```
//!
//! The `+ 1` smoothing terms act as if one extra document containing every
//! term had been seen, which keeps every IDF weight strictly positive and
//! defined even for terms that occur in all documents.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;
use crate::vectorize::count::CountVectorizer;

/// Re-weights document-term count matrices by term frequency and inverse
/// document frequency.
///
/// The transformer is pure computation over a borrowed matrix: it never
/// tokenizes text and keeps no statistics between calls. Feed it the output
/// of [`CountVectorizer::transform`] or any matrix with one row per document
/// and one column per term.
///
/// # Examples
///
/// ```
/// use xyston::vectorize::TfidfTransformer;
///
/// let counts = vec![vec![1, 1, 0], vec![1, 0, 1]];
///
/// let transformer = TfidfTransformer::new();
/// let weighted = transformer.fit_transform(&counts);
///
/// // "term 0" occurs in both documents, so its weight is exactly its
/// // term frequency: idf = 1 + ln(3/3) = 1.
/// assert_eq!(weighted[0][0], 0.5);
/// ```
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct TfidfTransformer;

impl TfidfTransformer {
    /// Create a new TF-IDF transformer.
    pub fn new() -> Self {
        TfidfTransformer
    }

    /// Normalize each row of a count matrix by its own sum.
    ///
    /// A row that sums to zero (a document that produced no vocabulary
    /// tokens) stays all-zero; no division takes place for such rows, so
    /// the output is always finite.
    pub fn tf_transform(&self, counts: &[Vec<u64>]) -> Vec<Vec<f64>> {
        counts
            .iter()
            .map(|row| {
                let total: u64 = row.iter().sum();
                if total == 0 {
                    return vec![0.0; row.len()];
                }

                let total = total as f64;
                row.iter().map(|&count| count as f64 / total).collect()
            })
            .collect()
    }

    /// Compute the smoothed inverse document frequency of each column.
    ///
    /// `idf[term] = 1 + ln((n + 1) / (df[term] + 1))`, where `n` is the
    /// number of rows and `df[term]` the number of rows with a positive
    /// count in that column. The column count is taken from the first row;
    /// an empty matrix yields an empty vector.
    pub fn idf_transform(&self, counts: &[Vec<u64>]) -> Vec<f64> {
        let n_documents = counts.len();
        let n_terms = counts.first().map_or(0, Vec::len);

        let mut document_frequency = vec![0usize; n_terms];
        for row in counts {
            for (column, &count) in row.iter().take(n_terms).enumerate() {
                if count > 0 {
                    document_frequency[column] += 1;
                }
            }
        }

        document_frequency
            .iter()
            .map(|&df| 1.0 + ((n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln())
            .collect()
    }

    /// Weight a count matrix: term frequencies multiplied column-wise by
    /// inverse document frequencies.
    ///
    /// The TF matrix and the IDF vector are computed independently from the
    /// same input and combined cell by cell.
    pub fn fit_transform(&self, counts: &[Vec<u64>]) -> Vec<Vec<f64>> {
        let idf = self.idf_transform(counts);

        self.tf_transform(counts)
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .zip(&idf)
                    .map(|(tf, &idf)| tf * idf)
                    .collect()
            })
            .collect()
    }
}

/// The composed TF-IDF pipeline: count vectorization followed by TF-IDF
/// weighting behind a single fit/transform surface.
///
/// The vectorizer owns a [`CountVectorizer`] for vocabulary learning and
/// counting, and a [`TfidfTransformer`] for weighting, and forwards to them
/// explicitly. It keeps no state of its own beyond what the count component
/// holds.
///
/// # Examples
///
/// ```
/// use xyston::vectorize::TfidfVectorizer;
///
/// let corpus = ["the cat sat", "the dog sat"];
///
/// let mut vectorizer = TfidfVectorizer::new();
/// let matrix = vectorizer.fit_transform(&corpus).unwrap();
///
/// assert_eq!(matrix.len(), 2);
/// assert_eq!(
///     vectorizer.feature_names().unwrap(),
///     ["the", "cat", "sat", "dog"]
/// );
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    count: CountVectorizer,
    tfidf: TfidfTransformer,
}

impl TfidfVectorizer {
    /// Create a new TF-IDF vectorizer with the default configuration:
    /// lower-casing enabled and the default token pattern.
    pub fn new() -> Self {
        TfidfVectorizer {
            count: CountVectorizer::new(),
            tfidf: TfidfTransformer::new(),
        }
    }

    /// Set whether documents are lower-cased before tokenization.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.count = self.count.with_lowercase(lowercase);
        self
    }

    /// Set the regex pattern that defines what counts as a token.
    pub fn with_token_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.count = self.count.with_token_pattern(pattern);
        self
    }

    /// Replace the built-in pipeline with a custom analyzer.
    pub fn with_analyzer(mut self, analyzer: Arc<dyn Analyzer>) -> Self {
        self.count = self.count.with_analyzer(analyzer);
        self
    }

    /// Learn the vocabulary of a corpus.
    ///
    /// Delegates to [`CountVectorizer::fit`].
    pub fn fit<S: AsRef<str>>(&mut self, corpus: &[S]) -> Result<()> {
        self.count.fit(corpus)
    }

    /// Transform a corpus into its TF-IDF matrix.
    ///
    /// Counts are taken against the fitted vocabulary, then weighted with
    /// the term frequencies and document frequencies of the given corpus.
    ///
    /// Returns a not-fitted error unless [`fit`](Self::fit) previously
    /// succeeded on a non-empty corpus.
    pub fn transform<S: AsRef<str>>(&self, corpus: &[S]) -> Result<Vec<Vec<f64>>> {
        let counts = self.count.transform(corpus)?;
        Ok(self.tfidf.fit_transform(&counts))
    }

    /// Fit on a corpus, then transform that same corpus.
    pub fn fit_transform<S: AsRef<str>>(&mut self, corpus: &[S]) -> Result<Vec<Vec<f64>>> {
        self.fit(corpus)?;
        self.transform(corpus)
    }

    /// Get the vocabulary terms in column order.
    pub fn feature_names(&self) -> Result<&[String]> {
        self.count.feature_names()
    }

    /// Get the number of vocabulary terms (0 when not fitted).
    pub fn vocabulary_size(&self) -> usize {
        self.count.vocabulary_size()
    }

    /// Check whether the vectorizer has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.count.is_fitted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::XystonError;

    const TOLERANCE: f64 = 1e-12;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_tf_rows_sum_to_one() {
        let counts = vec![vec![1, 1, 1, 0], vec![1, 0, 1, 1]];

        let tf = TfidfTransformer::new().tf_transform(&counts);

        for row in &tf {
            assert_close(row.iter().sum::<f64>(), 1.0);
        }
        assert_close(tf[0][0], 1.0 / 3.0);
        assert_close(tf[0][3], 0.0);
    }

    #[test]
    fn test_tf_zero_sum_row_stays_zero() {
        let counts = vec![vec![2, 2], vec![0, 0]];

        let tf = TfidfTransformer::new().tf_transform(&counts);

        assert_eq!(tf[1], vec![0.0, 0.0]);
        assert!(tf[1].iter().all(|value| value.is_finite()));
    }

    #[test]
    fn test_idf_is_one_when_term_occurs_everywhere() {
        // df == n means idf = 1 + ln((n + 1) / (n + 1)) = 1.
        let counts = vec![vec![1], vec![3]];

        let idf = TfidfTransformer::new().idf_transform(&counts);

        assert_eq!(idf.len(), 1);
        assert_close(idf[0], 1.0);
    }

    #[test]
    fn test_idf_matches_smoothed_formula() {
        let counts = vec![vec![1, 1, 0], vec![1, 0, 1]];

        let idf = TfidfTransformer::new().idf_transform(&counts);

        assert_close(idf[0], 1.0);
        assert_close(idf[1], 1.0 + (3.0f64 / 2.0).ln());
        assert_close(idf[2], 1.0 + (3.0f64 / 2.0).ln());
    }

    #[test]
    fn test_idf_is_strictly_positive() {
        // An all-zero column exercises df = 0, the largest possible ratio.
        let counts = vec![vec![5, 0], vec![3, 0]];

        let idf = TfidfTransformer::new().idf_transform(&counts);

        assert!(idf.iter().all(|&weight| weight > 0.0));
    }

    #[test]
    fn test_idf_decreases_as_document_frequency_rises() {
        let counts = vec![vec![1, 1], vec![0, 1], vec![0, 1]];

        let idf = TfidfTransformer::new().idf_transform(&counts);

        // Column 0 appears in one document, column 1 in all three.
        assert!(idf[0] > idf[1]);
    }

    #[test]
    fn test_idf_of_empty_matrix_is_empty() {
        let transformer = TfidfTransformer::new();

        assert!(transformer.idf_transform(&[]).is_empty());
        assert!(transformer.fit_transform(&[]).is_empty());
    }

    #[test]
    fn test_fit_transform_combines_tf_and_idf() {
        let counts = vec![vec![1, 1, 0], vec![1, 0, 1]];

        let weighted = TfidfTransformer::new().fit_transform(&counts);

        let rare = 1.0 + (3.0f64 / 2.0).ln();
        assert_close(weighted[0][0], 0.5);
        assert_close(weighted[0][1], 0.5 * rare);
        assert_close(weighted[0][2], 0.0);
        assert_close(weighted[1][0], 0.5);
        assert_close(weighted[1][1], 0.0);
        assert_close(weighted[1][2], 0.5 * rare);
    }

    #[test]
    fn test_ragged_rows_do_not_panic() {
        // Only external callers can construct ragged input; column count
        // follows the first row.
        let counts = vec![vec![1, 1], vec![1, 1, 1], vec![1]];

        let transformer = TfidfTransformer::new();
        let idf = transformer.idf_transform(&counts);
        assert_eq!(idf.len(), 2);

        let weighted = transformer.fit_transform(&counts);
        assert_eq!(weighted.len(), 3);
    }

    #[test]
    fn test_vectorizer_transform_weights_counts() {
        let corpus = ["the cat sat", "the dog sat"];

        let mut vectorizer = TfidfVectorizer::new();
        let matrix = vectorizer.fit_transform(&corpus).unwrap();

        // Vocabulary: the, cat, sat, dog. "the" and "sat" occur everywhere,
        // so their weights are exactly their term frequencies.
        let rare = 1.0 + (3.0f64 / 2.0).ln();
        assert_close(matrix[0][0], 1.0 / 3.0);
        assert_close(matrix[0][1], rare / 3.0);
        assert_close(matrix[0][2], 1.0 / 3.0);
        assert_close(matrix[0][3], 0.0);
        assert_close(matrix[1][1], 0.0);
        assert_close(matrix[1][3], rare / 3.0);
    }

    #[test]
    fn test_vectorizer_fit_transform_matches_fit_then_transform() {
        let corpus = ["the cat sat", "the dog sat"];

        let mut fitted = TfidfVectorizer::new();
        fitted.fit(&corpus).unwrap();
        let separate = fitted.transform(&corpus).unwrap();

        let mut combined = TfidfVectorizer::new();
        assert_eq!(combined.fit_transform(&corpus).unwrap(), separate);
    }

    #[test]
    fn test_vectorizer_transform_before_fit_is_not_fitted() {
        let vectorizer = TfidfVectorizer::new();
        let result = vectorizer.transform(&["the cat sat"]);

        assert!(matches!(result, Err(XystonError::NotFitted(_))));
    }

    #[test]
    fn test_vectorizer_empty_token_document_yields_zero_row() {
        // "a" produces no tokens under the default pattern, so its row in
        // the count matrix sums to zero and the TF-IDF row stays all-zero.
        let corpus = ["the cat sat", "a"];

        let mut vectorizer = TfidfVectorizer::new();
        let matrix = vectorizer.fit_transform(&corpus).unwrap();

        assert_eq!(matrix[1], vec![0.0, 0.0, 0.0]);
        assert!(matrix[1].iter().all(|value| value.is_finite()));
    }

    #[test]
    fn test_vectorizer_forwards_configuration() {
        let corpus = ["Cat CAT cat"];

        let mut vectorizer = TfidfVectorizer::new().with_lowercase(false);
        vectorizer.fit(&corpus).unwrap();

        assert_eq!(vectorizer.vocabulary_size(), 3);
        assert!(vectorizer.is_fitted());
    }
}
