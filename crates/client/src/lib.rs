//! Client side of dishpick.
//!
//! [`DishClient`] speaks the `/api/dishes` protocol; [`Shell`] keeps the
//! transient state a UI needs on top of it.

mod client;
mod error;
mod shell;

pub use client::{DEFAULT_BASE_URL, DishClient};
pub use error::ClientError;
pub use shell::{NETWORK_ERROR, Shell};
