//! Response types (Serialize)

use serde::{Deserialize, Serialize};

/// Full post-operation snapshot of the dish list.
#[derive(Debug, Serialize, Deserialize)]
pub struct DishListResponse {
    pub success: bool,
    pub data: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DishListResponse {
    #[must_use]
    pub const fn new(data: Vec<String>) -> Self {
        Self { success: true, data, message: None }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RandomDishResponse {
    pub success: bool,
    pub data: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub table_exists: bool,
    pub dish_count: u64,
    pub timestamp: String,
    pub environment: String,
}

#[derive(Debug, Serialize)]
pub struct HealthErrorResponse {
    pub status: &'static str,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}
