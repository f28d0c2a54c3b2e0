//! Domain-level errors.
//!
//! These errors represent domain logic failures, independent of
//! infrastructure concerns (gRPC, database).

use thiserror::Error;

/// Domain-specific errors.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// Credential hashing could not complete
    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

impl DomainError {
    /// Create a hashing error
    pub fn hashing(msg: impl Into<String>) -> Self {
        DomainError::Hashing(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
