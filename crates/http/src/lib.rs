//! HTTP API server for dishpick.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::absolute_paths, reason = "Explicit paths for clarity")]
#![allow(missing_copy_implementations, reason = "Types may grow")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod handlers;
mod request_types;
mod response_types;
mod viewer;

use std::sync::Arc;
use std::time::Duration;

use axum::http::Method;
use axum::http::header::CONTENT_TYPE;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use dishpick_core::{DATABASE_NOT_CONFIGURED, is_production};
use dishpick_service::{DishService, HealthService, ServiceError};
use dishpick_storage::StorageBackend;

use crate::api_error::ApiError;

pub use request_types::{AddDishes, RemoveDishes};
pub use response_types::{
    DishListResponse, HealthErrorResponse, HealthResponse, RandomDishResponse, VersionResponse,
};

/// Settings fixed at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Deployment environment name; `production` hides error details.
    pub environment: String,
}

impl Settings {
    #[must_use]
    pub fn expose_error_detail(&self) -> bool {
        !is_production(&self.environment)
    }
}

/// Shared application state for all HTTP handlers.
///
/// Built once by the binary and never mutated afterwards. The services are
/// absent when no database connection string was configured; dish routes
/// then answer with a configuration error and health reports `error`.
pub struct AppState {
    pub dish_service: Option<Arc<DishService>>,
    pub health_service: Option<Arc<HealthService>>,
    pub settings: Settings,
}

impl AppState {
    #[must_use]
    pub fn new(storage: Option<Arc<StorageBackend>>, settings: Settings) -> Self {
        let dish_service = storage.as_ref().map(|s| Arc::new(DishService::new(Arc::clone(s))));
        let health_service = storage.map(|s| Arc::new(HealthService::new(s)));
        Self { dish_service, health_service, settings }
    }

    pub(crate) fn dishes(&self) -> Result<&DishService, ApiError> {
        self.dish_service.as_deref().ok_or_else(|| {
            tracing::error!("dish request received but no database is configured");
            ApiError::NotConfigured(DATABASE_NOT_CONFIGURED.to_owned())
        })
    }

    /// Map a service failure to a response, attaching detail outside production.
    pub(crate) fn fail(&self, err: ServiceError, context: &'static str) -> ApiError {
        ApiError::from_service(err, context, self.settings.expose_error_detail())
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(viewer::serve_viewer))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/health", get(handlers::health::health_check))
        .route(
            "/api/dishes",
            get(handlers::dishes::list_dishes)
                .post(handlers::dishes::add_dishes)
                .delete(handlers::dishes::remove_dishes),
        )
        .route("/api/dishes/random", get(handlers::dishes::random_dish))
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
