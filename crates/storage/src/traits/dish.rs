use async_trait::async_trait;
use dishpick_core::{Dish, DishName};

use crate::error::StorageError;

/// Dish table operations.
///
/// Every call is a single round trip; nothing spans a transaction.
#[async_trait]
pub trait DishStore: Send + Sync {
    /// Create the `dishes` table if it is absent. Idempotent.
    async fn ensure_schema(&self) -> Result<(), StorageError>;

    /// All dishes, newest first.
    async fn list_all(&self) -> Result<Vec<Dish>, StorageError>;

    /// Insert one dish. Fails with [`StorageError::Duplicate`] when the name exists.
    async fn insert_one(&self, name: &DishName) -> Result<Dish, StorageError>;

    /// Delete the dish with this name. Returns rows removed (0 when absent).
    async fn delete_by_name(&self, name: &DishName) -> Result<u64, StorageError>;

    /// Delete every dish. Returns rows removed.
    async fn delete_all(&self) -> Result<u64, StorageError>;

    /// Number of stored dishes.
    async fn count(&self) -> Result<u64, StorageError>;

    /// One stored dish chosen by the backend at random, `None` when empty.
    async fn pick_random(&self) -> Result<Option<Dish>, StorageError>;

    /// Insert names one after another, skipping duplicates.
    ///
    /// Returns the rows actually inserted. Any other failure aborts the loop;
    /// rows inserted before it stay persisted.
    async fn insert_many(&self, names: &[DishName]) -> Result<Vec<Dish>, StorageError> {
        let mut inserted = Vec::with_capacity(names.len());
        for name in names {
            match self.insert_one(name).await {
                Ok(dish) => inserted.push(dish),
                Err(e) if e.is_duplicate() => {
                    tracing::debug!(name = %name, "dish already exists, skipping");
                },
                Err(e) => return Err(e),
            }
        }
        Ok(inserted)
    }
}
