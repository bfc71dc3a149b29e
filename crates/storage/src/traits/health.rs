use async_trait::async_trait;

use crate::error::StorageError;

/// Connectivity and schema probes for health reporting.
#[async_trait]
pub trait HealthStore: Send + Sync {
    /// Run a trivial query against the backend.
    async fn ping(&self) -> Result<(), StorageError>;

    /// Whether the `dishes` table exists.
    async fn table_exists(&self) -> Result<bool, StorageError>;
}
