use async_trait::async_trait;
use dishpick_core::{Dish, DishName};

use super::PgStorage;
use crate::error::StorageError;
use crate::traits::DishStore;

#[async_trait]
impl DishStore for PgStorage {
    async fn ensure_schema(&self) -> Result<(), StorageError> {
        self.migrate().await
    }

    async fn list_all(&self) -> Result<Vec<Dish>, StorageError> {
        let dishes = sqlx::query_as::<_, Dish>(
            "SELECT id, name, created_at FROM dishes ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(dishes)
    }

    async fn insert_one(&self, name: &DishName) -> Result<Dish, StorageError> {
        let dish = sqlx::query_as::<_, Dish>(
            "INSERT INTO dishes (name) VALUES ($1) RETURNING id, name, created_at",
        )
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await?;
        tracing::debug!(id = dish.id, name = %dish.name, "dish inserted");
        Ok(dish)
    }

    async fn delete_by_name(&self, name: &DishName) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM dishes WHERE name = $1")
            .bind(name.as_str())
            .execute(&self.pool)
            .await?;
        tracing::info!(name = %name, removed = result.rows_affected(), "deleted dish");
        Ok(result.rows_affected())
    }

    async fn delete_all(&self) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM dishes").execute(&self.pool).await?;
        tracing::info!(removed = result.rows_affected(), "all dishes cleared");
        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<u64, StorageError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM dishes").fetch_one(&self.pool).await?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn pick_random(&self) -> Result<Option<Dish>, StorageError> {
        let dish = sqlx::query_as::<_, Dish>(
            "SELECT id, name, created_at FROM dishes ORDER BY RANDOM() LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(dish)
    }
}
