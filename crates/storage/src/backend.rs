//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use dishpick_core::{Dish, DishName};

use crate::error::StorageError;
use crate::memory::MemoryStorage;
use crate::pg_storage::PgStorage;
use crate::traits::{DishStore, HealthStore};

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Postgres(s) => <PgStorage as $trait>::$method(s, $($arg),*).await,
            StorageBackend::Memory(s) => <MemoryStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Postgres(PgStorage),
    Memory(MemoryStorage),
}

impl StorageBackend {
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(PgStorage::new(database_url).await?))
    }

    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(MemoryStorage::new())
    }

    /// Short backend label for logs and health output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

// ── DishStore ────────────────────────────────────────────────────

#[async_trait]
impl DishStore for StorageBackend {
    async fn ensure_schema(&self) -> Result<(), StorageError> {
        dispatch!(self, DishStore, ensure_schema())
    }

    async fn list_all(&self) -> Result<Vec<Dish>, StorageError> {
        dispatch!(self, DishStore, list_all())
    }

    async fn insert_one(&self, name: &DishName) -> Result<Dish, StorageError> {
        dispatch!(self, DishStore, insert_one(name))
    }

    async fn delete_by_name(&self, name: &DishName) -> Result<u64, StorageError> {
        dispatch!(self, DishStore, delete_by_name(name))
    }

    async fn delete_all(&self) -> Result<u64, StorageError> {
        dispatch!(self, DishStore, delete_all())
    }

    async fn count(&self) -> Result<u64, StorageError> {
        dispatch!(self, DishStore, count())
    }

    async fn pick_random(&self) -> Result<Option<Dish>, StorageError> {
        dispatch!(self, DishStore, pick_random())
    }
}

// ── HealthStore ──────────────────────────────────────────────────

#[async_trait]
impl HealthStore for StorageBackend {
    async fn ping(&self) -> Result<(), StorageError> {
        dispatch!(self, HealthStore, ping())
    }

    async fn table_exists(&self) -> Result<bool, StorageError> {
        dispatch!(self, HealthStore, table_exists())
    }
}
