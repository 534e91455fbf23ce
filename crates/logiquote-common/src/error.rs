//! Error types for LogiQuote
//!
//! The pricing engine itself is total and never returns these. They are used by
//! the opt-in validation layer, configuration loading, and serialization edges.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using QuoteError
pub type Result<T> = std::result::Result<T, QuoteError>;

/// Unified error type for LogiQuote operations
#[derive(Debug, Error)]
pub enum QuoteError {
    // Input validation errors
    #[error("Quote validation failed with {} issue(s)", .0.len())]
    Validation(Vec<ValidationIssue>),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl QuoteError {
    /// Validation issues carried by this error, if any
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            QuoteError::Validation(issues) => issues,
            _ => &[],
        }
    }
}

/// A single problem found in a quote request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("{field} must sum to 100%, got {total}%")]
    DistributionSum { field: &'static str, total: Decimal },

    #[error("{field} must not be negative, got {value}")]
    NegativeValue { field: &'static str, value: Decimal },
}

impl ValidationIssue {
    /// Field path the issue refers to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationIssue::DistributionSum { field, .. } => field,
            ValidationIssue::NegativeValue { field, .. } => field,
        }
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        QuoteError::Serialization(err.to_string())
    }
}
