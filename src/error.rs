//! Error types for summarization and evaluation.
//!
//! The public operations raise only [`Error::InvalidInput`]. Scoring and
//! metric internals never fail on well-formed strings; divide-by-zero and
//! empty-collection cases all resolve to neutral values instead of errors.

use thiserror::Error;

/// Errors raised by the crate's public operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A required text input was missing or empty.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A configuration value failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("text is required".to_string());
        assert_eq!(err.to_string(), "invalid input: text is required");

        let err = Error::InvalidConfig("selection_ratio 1.5 outside (0, 1]".to_string());
        assert!(err.to_string().starts_with("invalid config:"));
    }
}
