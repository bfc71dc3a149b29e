//! Typed API error for HTTP handlers.
//!
//! Converts service errors into JSON responses with proper status codes.
//! Every error body has the shape `{"success": false, "error": "..."}`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dishpick_service::ServiceError;
use serde::Serialize;

pub const DUPLICATE_DISH: &str = "dish already exists";

/// API error with HTTP status code and human-readable message.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: malformed body or blank dish name.
    BadRequest(String),
    /// 422 Unprocessable Entity: single insert of a name that already exists.
    UnprocessableEntity(String),
    /// 500: no database connection string configured.
    NotConfigured(String),
    /// 500: unexpected failure. Logged when built; `detail` is only set
    /// outside production.
    Internal { message: &'static str, detail: Option<String> },
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    success: bool,
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    debug: Option<&'a str>,
}

impl ApiError {
    pub fn from_service(err: ServiceError, context: &'static str, expose_detail: bool) -> Self {
        if err.is_duplicate() {
            return Self::UnprocessableEntity(DUPLICATE_DISH.to_owned());
        }
        match err {
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::NotConfigured(msg) => Self::NotConfigured(msg),
            ServiceError::Storage(_) => {
                tracing::error!(error = ?err, "{context}");
                Self::Internal { message: context, detail: expose_detail.then(|| err.to_string()) }
            },
        }
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotConfigured(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error, debug) = match &self {
            Self::BadRequest(msg) | Self::UnprocessableEntity(msg) | Self::NotConfigured(msg) => {
                (msg.as_str(), None)
            },
            Self::Internal { message, detail } => (*message, detail.as_deref()),
        };
        let body = ErrorBody { success: false, error, debug };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
