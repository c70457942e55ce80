//! Error types for the Shift Cost Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation core itself is a total function and never fails; errors
//! arise only when loading rate configuration or validating a quote at the
//! API boundary.

use thiserror::Error;

/// The main error type for the Shift Cost Engine.
///
/// # Example
///
/// ```
/// use shiftcost_engine::error::QuoteError;
///
/// let error = QuoteError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Rate card name was not found in the configuration.
    #[error("Rate card not found: {name}")]
    RateCardNotFound {
        /// The rate card name that was not found.
        name: String,
    },

    /// A quote was invalid or contained inconsistent data.
    #[error("Invalid quote: {message}")]
    InvalidQuote {
        /// A description of what made the quote invalid.
        message: String,
    },
}

/// A type alias for Results that return QuoteError.
pub type QuoteResult<T> = Result<T, QuoteError>;
