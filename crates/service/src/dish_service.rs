use std::sync::Arc;

use dishpick_core::{Dish, DishName};
use dishpick_storage::StorageBackend;
use dishpick_storage::traits::DishStore;

use crate::ServiceError;

/// Result of a best-effort batch insert.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Rows actually inserted, in request order.
    pub added: Vec<Dish>,
    /// Entries that were blank after trimming.
    pub skipped_invalid: usize,
}

pub struct DishService {
    storage: Arc<StorageBackend>,
}

impl DishService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    /// Create the table if needed. Failures are logged, not returned: the
    /// operation that follows reports the real problem.
    pub async fn ensure_schema(&self) {
        if let Err(e) = self.storage.ensure_schema().await {
            tracing::warn!(error = %e, "failed to ensure dishes table exists");
        }
    }

    pub async fn list_names(&self) -> Result<Vec<String>, ServiceError> {
        let dishes = self.storage.list_all().await?;
        Ok(dishes.into_iter().map(|d| d.name).collect())
    }

    pub async fn add_one(&self, raw: &str) -> Result<Dish, ServiceError> {
        let name = DishName::new(raw)?;
        let dish = self.storage.insert_one(&name).await?;
        tracing::info!(id = dish.id, name = %dish.name, "dish added");
        Ok(dish)
    }

    /// Insert every valid name, skipping blanks and names already stored.
    pub async fn add_many(&self, raw: &[String]) -> Result<BatchOutcome, ServiceError> {
        let mut names = Vec::with_capacity(raw.len());
        let mut skipped_invalid = 0usize;
        for entry in raw {
            match DishName::new(entry) {
                Ok(name) => names.push(name),
                Err(e) => {
                    tracing::warn!(entry = %entry, error = %e, "skipping invalid dish name");
                    skipped_invalid = skipped_invalid.saturating_add(1);
                },
            }
        }
        let added = self.storage.insert_many(&names).await?;
        tracing::info!(
            requested = raw.len(),
            added = added.len(),
            skipped_invalid,
            "batch insert finished"
        );
        Ok(BatchOutcome { added, skipped_invalid })
    }

    pub async fn remove(&self, raw: &str) -> Result<u64, ServiceError> {
        let name = DishName::new(raw)?;
        Ok(self.storage.delete_by_name(&name).await?)
    }

    pub async fn clear(&self) -> Result<u64, ServiceError> {
        Ok(self.storage.delete_all().await?)
    }

    pub async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.storage.count().await?)
    }

    /// Let the store choose a dish, so the result is always a persisted row.
    pub async fn pick_random(&self) -> Result<Option<Dish>, ServiceError> {
        Ok(self.storage.pick_random().await?)
    }
}
