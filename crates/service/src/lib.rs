//! Service layer for dishpick
//!
//! Centralizes business rules between the HTTP/CLI front ends and storage.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod dish_service;
mod error;
mod health_service;

pub use dish_service::{BatchOutcome, DishService};
pub use error::ServiceError;
pub use health_service::{HealthReport, HealthService};
