//! Web UI: embedded single-page app served at `/`
//!
//! Holds the dish list client-side, re-fetches it from the API after every
//! mutation, and performs the random pick in the browser.

use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

/// Embedded HTML for the UI
pub const VIEWER_HTML: &str = include_str!("viewer.html");

/// Serve the UI page
pub async fn serve_viewer() -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(VIEWER_HTML))
        .into_response()
}
