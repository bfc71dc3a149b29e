//! Storage layer for dishpick
//!
//! Owns the `dishes` table: schema creation and every SQL statement the
//! application runs. A process-local backend mirrors the same semantics for
//! tests and database-less runs.

mod backend;
mod error;
mod memory;
mod pg_migrations;
mod pg_storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStorage;
pub use pg_storage::PgStorage;
pub use traits::{DishStore, HealthStore};
