//! Error type for item operations.

use thiserror::Error;

/// Error type for item domain operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}

impl ItemError {
    /// Create a not found error
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        ItemError::NotFound(id.into())
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl Into<String>) -> Self {
        ItemError::ValidationError(msg.into())
    }

    /// Create a malformed body error
    #[must_use]
    pub fn malformed(detail: impl Into<String>) -> Self {
        ItemError::MalformedBody(detail.into())
    }
}

impl From<serde_json::Error> for ItemError {
    fn from(err: serde_json::Error) -> Self {
        ItemError::MalformedBody(err.to_string())
    }
}
