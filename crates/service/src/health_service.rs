use std::sync::Arc;

use dishpick_storage::StorageBackend;
use dishpick_storage::traits::{DishStore, HealthStore};

use crate::ServiceError;

/// Outcome of a successful health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthReport {
    pub table_exists: bool,
    pub dish_count: u64,
}

/// Read-only connectivity and schema diagnostics.
pub struct HealthService {
    storage: Arc<StorageBackend>,
}

impl HealthService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn check(&self) -> Result<HealthReport, ServiceError> {
        self.storage.ping().await?;
        let table_exists = self.storage.table_exists().await?;
        // counting a missing table would fail; report zero instead
        let dish_count = if table_exists { self.storage.count().await? } else { 0 };
        Ok(HealthReport { table_exists, dish_count })
    }
}
