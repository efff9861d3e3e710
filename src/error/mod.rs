//! Error definitions
//!
//! Ordinary non-matches are never errors; they are reported through
//! [`Matcher::describe_mismatch`](crate::assertions::matcher::Matcher::describe_mismatch).
//! The variants here cover malformed construction arguments and callers that
//! want a `Result` instead of a panic.

use thiserror::Error;

/// Main error type for resource-matchers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A factory or the map builder was called with malformed arguments.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A matcher rejected the value it was checked against.
    #[error("Assertion failed: {0}")]
    AssertionFailed(String),
}

impl Error {
    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an assertion failure error.
    #[must_use]
    pub fn assertion_failed(message: impl Into<String>) -> Self {
        Self::AssertionFailed(message.into())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_argument("odd number of arguments: 3");
        assert_eq!(err.to_string(), "Invalid argument: odd number of arguments: 3");

        let err = Error::assertion_failed("was Resource with path \"/b\"");
        assert!(err.to_string().starts_with("Assertion failed:"));
    }
}
