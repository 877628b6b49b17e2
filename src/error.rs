//! Error types for Driftscope

use thiserror::Error;

/// Errors that can occur during drift-engine operations
#[derive(Debug, Error)]
pub enum DriftError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl DriftError {
    /// Whether this error is a missing-session/missing-events condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, DriftError::NotFound(_))
    }
}
