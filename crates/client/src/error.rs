use thiserror::Error;

/// Errors returned by [`crate::DishClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Building the HTTP client failed (TLS backend).
    #[error("client init: {0}")]
    ClientInit(String),

    /// Transport failure or undecodable response body.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with `success: false`.
    #[error("API error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Api { status: u16, message: Option<String> },
}

