//! Storage backend trait abstraction
//!
//! Async domain traits implemented by every backend, so services stay
//! agnostic of PostgreSQL versus the in-memory store.

pub mod dish;
pub mod health;

pub use dish::DishStore;
pub use health::HealthStore;
