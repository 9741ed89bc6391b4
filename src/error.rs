//! Error types for the Xyston library.
//!
//! This module provides error handling for all Xyston operations. All errors
//! are represented by the [`XystonError`] enum, which provides detailed
//! information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use xyston::error::{Result, XystonError};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(XystonError::configuration("Invalid token pattern"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for Xyston operations.
///
/// This enum represents all possible errors that can occur in the Xyston
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum XystonError {
    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid configuration, such as a malformed token pattern
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An operation that requires a fitted vectorizer was called without one
    #[error("Not fitted: {0}")]
    NotFitted(String),
}

/// Result type alias for operations that may fail with XystonError.
pub type Result<T> = std::result::Result<T, XystonError>;

impl XystonError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        XystonError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        XystonError::Configuration(msg.into())
    }

    /// Create a new not-fitted error.
    pub fn not_fitted<S: Into<String>>(msg: S) -> Self {
        XystonError::NotFitted(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = XystonError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = XystonError::configuration("Test configuration error");
        assert_eq!(
            error.to_string(),
            "Configuration error: Test configuration error"
        );

        let error = XystonError::not_fitted("Test not-fitted error");
        assert_eq!(error.to_string(), "Not fitted: Test not-fitted error");
    }

    #[test]
    fn test_error_variants() {
        let error = XystonError::configuration("bad pattern");
        assert!(matches!(error, XystonError::Configuration(_)));

        let error = XystonError::not_fitted("call fit first");
        assert!(matches!(error, XystonError::NotFitted(_)));
    }
}
