//! Typed error enum for the service layer.
//!
//! Unifies validation and storage failures into a single error type, so
//! front ends can map each failure mode to their own response.

use dishpick_core::CoreError;
use dishpick_storage::StorageError;
use thiserror::Error;

/// Service-layer error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (database, duplicate, schema).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input (blank dish name, malformed request).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No database connection string was configured.
    #[error("not configured: {0}")]
    NotConfigured(String),
}

impl ServiceError {
    /// Whether this error represents a duplicate dish name.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_duplicate())
    }
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
