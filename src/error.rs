//! Error types for the parser.
//!
//! The structural parse itself is total: malformed input degrades to an
//! empty or partial result instead of an error (see [`crate::parser`]).
//! Errors exist only at the validated edges where identity records are
//! constructed from registry data.

use thiserror::Error;

/// Main error type for the parser library.
#[derive(Debug, Error)]
pub enum ParserError {
    /// Invalid act identifier format.
    #[error("Invalid act id: '{0}'. Expected a lowercase kebab-case slug (e.g., protection-of-privacy-law)")]
    InvalidActId(String),

    /// Invalid date format.
    #[error("Invalid date format: '{0}'. Expected YYYY-MM-DD (e.g., 1981-04-11)")]
    InvalidDate(String),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;
