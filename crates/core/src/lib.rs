//! Core types and helpers for dishpick
//!
//! Domain types shared across all other crates: the persisted `Dish`,
//! the validated `DishName`, preset menus, environment configuration,
//! menu-file parsing and random selection.

mod constants;
mod dish;
mod env_config;
mod error;
mod menu;
mod pick;

pub use constants::*;
pub use dish::{Dish, DishName};
pub use env_config::{
    DatabaseUrl, app_environment, env_parse_with_default, is_production, resolve_database_url,
    resolve_database_url_with,
};
pub use error::{CoreError, Result};
pub use menu::parse_menu;
pub use pick::{pick_from, pick_one};
