//! Test utilities and module declarations for storage tests.

use dishpick_core::DishName;

use crate::StorageBackend;

pub fn create_test_storage() -> StorageBackend {
    StorageBackend::new_memory()
}

#[allow(clippy::unwrap_used, reason = "test code")]
pub fn name(raw: &str) -> DishName {
    DishName::new(raw).unwrap()
}

pub fn names(raw: &[&str]) -> Vec<DishName> {
    raw.iter().map(|r| name(r)).collect()
}

mod dish_tests;
mod health_tests;
