//! Unified error type for the domain layer.
//!
//! Structural field malformation (blank names, length and price bounds) is
//! detected by the value-object constructors and reported through this type,
//! so callers can match on the failure kind instead of on message text.

use thiserror::Error;

/// Error raised when a value fails validation at construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field value failed structural validation.
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
