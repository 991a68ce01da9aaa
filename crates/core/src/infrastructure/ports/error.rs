//! Error types for port operations.

/// Store operation errors with context for debugging.
///
/// This is the vocabulary adapters use for their own failures. Lookups report
/// absence through `Option`/`bool` return values and the services translate
/// those into the caller-facing taxonomy; a `RepoError` reaching a service
/// means the store itself broke.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Storage operation failed - includes operation name for tracing.
    #[error("Store error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },
}

impl RepoError {
    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }
}
