//! `/api/health`: database connectivity and schema diagnostics.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{SecondsFormat, Utc};
use dishpick_core::DATABASE_NOT_CONFIGURED;

use crate::AppState;
use crate::response_types::{HealthErrorResponse, HealthResponse};

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn unhealthy(message: String) -> Response {
    let body = HealthErrorResponse { status: "error", message, timestamp: now() };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> Response {
    let Some(health) = state.health_service.as_deref() else {
        return unhealthy(DATABASE_NOT_CONFIGURED.to_owned());
    };

    match health.check().await {
        Ok(report) => {
            let body = HealthResponse {
                status: "healthy",
                database: "connected",
                table_exists: report.table_exists,
                dish_count: report.dish_count,
                timestamp: now(),
                environment: state.settings.environment.clone(),
            };
            (StatusCode::OK, Json(body)).into_response()
        },
        Err(e) => {
            tracing::error!(error = ?e, "health check failed");
            unhealthy(e.to_string())
        },
    }
}
