//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by concern.

mod dishes;
mod health;

use std::time::Duration;

use dishpick_core::{
    PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
    env_parse_with_default,
};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Build a lazily connecting pool and try to create the schema.
    ///
    /// Only a malformed URL is an error here. An unreachable server or a
    /// failed migration is logged; later queries report it again.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let max_connections =
            env_parse_with_default("DISHPICK_PG_MAX_CONNECTIONS", PG_POOL_MAX_CONNECTIONS);
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect_lazy(database_url)?;
        let storage = Self::from_pool(pool);
        if let Err(e) = storage.migrate().await {
            tracing::warn!(error = %e, "schema setup failed at startup, continuing");
        }
        tracing::info!(max_connections, "PgStorage initialized");
        Ok(storage)
    }

    /// Wrap an existing pool without touching the schema.
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn migrate(&self) -> Result<(), StorageError> {
        run_pg_migrations(&self.pool).await.map_err(|e| StorageError::Migration(e.to_string()))
    }
}
