//! PostgreSQL schema for dishpick storage.

use anyhow::Result;
use sqlx::PgPool;

/// Create the `dishes` table if it does not exist yet.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS dishes (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_dishes_created ON dishes (created_at DESC)")
        .execute(pool)
        .await?;

    Ok(())
}
