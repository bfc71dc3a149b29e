//! Process-local dish store.
//!
//! Mirrors the PostgreSQL semantics (unique names, newest-first listing,
//! serial ids) without a database. Contents vanish with the process.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dishpick_core::{Dish, DishName, pick_one};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::{DishStore, HealthStore};

#[derive(Debug, Default)]
struct Table {
    last_id: i32,
    rows: Vec<Dish>,
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    table: Arc<RwLock<Table>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DishStore for MemoryStorage {
    async fn ensure_schema(&self) -> Result<(), StorageError> {
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Dish>, StorageError> {
        let table = self.table.read().await;
        let mut dishes = table.rows.clone();
        dishes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(dishes)
    }

    async fn insert_one(&self, name: &DishName) -> Result<Dish, StorageError> {
        let mut table = self.table.write().await;
        if table.rows.iter().any(|d| d.name == name.as_str()) {
            return Err(StorageError::Duplicate(format!("dish '{name}' already exists")));
        }
        table.last_id = table.last_id.saturating_add(1);
        let dish = Dish {
            id: table.last_id,
            name: name.as_str().to_owned(),
            created_at: Utc::now().naive_utc(),
        };
        table.rows.push(dish.clone());
        Ok(dish)
    }

    async fn delete_by_name(&self, name: &DishName) -> Result<u64, StorageError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|d| d.name != name.as_str());
        Ok(u64::try_from(before.saturating_sub(table.rows.len())).unwrap_or(0))
    }

    async fn delete_all(&self) -> Result<u64, StorageError> {
        let mut table = self.table.write().await;
        let removed = table.rows.len();
        table.rows.clear();
        Ok(u64::try_from(removed).unwrap_or(0))
    }

    async fn count(&self) -> Result<u64, StorageError> {
        Ok(u64::try_from(self.table.read().await.rows.len()).unwrap_or(0))
    }

    async fn pick_random(&self) -> Result<Option<Dish>, StorageError> {
        let table = self.table.read().await;
        Ok(pick_one(&table.rows).cloned())
    }
}

#[async_trait]
impl HealthStore for MemoryStorage {
    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }

    async fn table_exists(&self) -> Result<bool, StorageError> {
        Ok(true)
    }
}
