use async_trait::async_trait;

use super::PgStorage;
use crate::error::StorageError;
use crate::traits::HealthStore;

#[async_trait]
impl HealthStore for PgStorage {
    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn table_exists(&self) -> Result<bool, StorageError> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT FROM information_schema.tables
                WHERE table_schema = 'public' AND table_name = 'dishes'
            )",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}
