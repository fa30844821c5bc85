//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("Credential cannot be empty")]
    EmptyCredential,

    #[error("Unknown provider key: {0}")]
    UnknownProviderKey(String),

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
}

impl DomainError {
    /// Check if this error is a user-input validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::EmptyQuery | DomainError::EmptyCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_display() {
        assert_eq!(DomainError::EmptyQuery.to_string(), "Query cannot be empty");
    }

    #[test]
    fn test_is_validation_check() {
        assert!(DomainError::EmptyQuery.is_validation());
        assert!(DomainError::EmptyCredential.is_validation());
        assert!(!DomainError::UnknownProviderKey("x".to_string()).is_validation());
    }
}
