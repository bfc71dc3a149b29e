use std::time::Duration;

use reqwest::Method;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;

use crate::error::ClientError;

/// Where `dishpick serve` listens by default.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// Body shared by every `/api/dishes` answer, success or not.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    data: Option<Vec<String>>,
    #[serde(default)]
    error: Option<String>,
}

/// Client for the dish API.
#[derive(Debug, Clone)]
pub struct DishClient {
    client: reqwest::Client,
    base_url: String,
}

impl DishClient {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ClientError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list(&self) -> Result<Vec<String>, ClientError> {
        self.dishes_request::<()>(Method::GET, None).await
    }

    pub async fn add(&self, name: &str) -> Result<Vec<String>, ClientError> {
        self.dishes_request(Method::POST, Some(&json!({ "name": name }))).await
    }

    pub async fn add_many<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<String>, ClientError> {
        let dishes: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
        self.dishes_request(Method::POST, Some(&json!({ "dishes": dishes }))).await
    }

    pub async fn remove(&self, name: &str) -> Result<Vec<String>, ClientError> {
        self.dishes_request(Method::DELETE, Some(&json!({ "name": name }))).await
    }

    pub async fn clear(&self) -> Result<Vec<String>, ClientError> {
        self.dishes_request(Method::DELETE, Some(&json!({ "clearAll": true }))).await
    }

    /// Raw `/api/health` body. Unhealthy answers are returned, not raised.
    pub async fn health(&self) -> Result<serde_json::Value, ClientError> {
        let response = self.client.get(format!("{}/api/health", self.base_url)).send().await?;
        Ok(response.json().await?)
    }

    async fn dishes_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        body: Option<&B>,
    ) -> Result<Vec<String>, ClientError> {
        let mut request = self.client.request(method, format!("{}/api/dishes", self.base_url));
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        let status = response.status().as_u16();
        let envelope: Envelope = response.json().await?;
        if envelope.success {
            Ok(envelope.data.unwrap_or_default())
        } else {
            tracing::debug!(status, error = ?envelope.error, "dish API returned an error");
            Err(ClientError::Api { status, message: envelope.error })
        }
    }
}
