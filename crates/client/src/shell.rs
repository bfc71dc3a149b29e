//! UI shell state.
//!
//! Mirrors what the browser page keeps: the list as last reported by the
//! server, the pending input, the last pick, an error banner and a loading
//! flag. Every mutation replaces the whole list with the server's answer;
//! failures land in `error` and never propagate to the caller.

use dishpick_core::{PRESET_DISHES, pick_from};
use rand::Rng;

use crate::client::DishClient;
use crate::error::ClientError;

pub const NETWORK_ERROR: &str = "network error, check the connection";

pub struct Shell {
    client: DishClient,
    dishes: Vec<String>,
    input: String,
    selected: Option<String>,
    error: Option<String>,
    loading: bool,
}

impl Shell {
    #[must_use]
    pub const fn new(client: DishClient) -> Self {
        Self {
            client,
            dishes: Vec::new(),
            input: String::new(),
            selected: None,
            error: None,
            loading: false,
        }
    }

    #[must_use]
    pub fn dishes(&self) -> &[String] {
        &self.dishes
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Fetch the list once, as on mount.
    pub async fn load(&mut self) -> bool {
        self.begin();
        let result = self.client.list().await;
        self.settle(result, "failed to load dishes")
    }

    /// Submit the pending input. Blank input is ignored.
    pub async fn add(&mut self) -> bool {
        let name = self.input.trim().to_owned();
        if name.is_empty() {
            return false;
        }
        self.begin();
        let result = self.client.add(&name).await;
        let ok = self.settle(result, "failed to add dish");
        if ok {
            self.input.clear();
        }
        ok
    }

    pub async fn remove(&mut self, name: &str) -> bool {
        self.begin();
        let result = self.client.remove(name).await;
        self.settle(result, "failed to delete dish")
    }

    /// Delete everything and hide the last pick.
    pub async fn clear(&mut self) -> bool {
        self.begin();
        let result = self.client.clear().await;
        let ok = self.settle(result, "failed to clear dishes");
        if ok {
            self.selected = None;
        }
        ok
    }

    pub async fn add_presets(&mut self) -> bool {
        self.begin();
        let result = self.client.add_many(PRESET_DISHES).await;
        self.settle(result, "failed to add preset dishes")
    }

    /// [`Self::pick_with`] using the thread-local generator.
    pub async fn pick(&mut self) -> Option<&str> {
        self.pick_with(&mut rand::thread_rng()).await
    }

    /// Pick a dish for today.
    ///
    /// With an empty list the presets are submitted first so the choice is
    /// persisted; if that fails for any reason the in-memory presets are
    /// used instead. The error banner is left untouched either way.
    pub async fn pick_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&str> {
        let candidates = self.candidates().await;
        if let Some(choice) = pick_from(&candidates, rng) {
            self.selected = Some(choice.clone());
        }
        self.selected.as_deref()
    }

    async fn candidates(&mut self) -> Vec<String> {
        if !self.dishes.is_empty() {
            return self.dishes.clone();
        }
        self.loading = true;
        let result = self.client.add_many(PRESET_DISHES).await;
        self.loading = false;
        match result {
            Ok(list) => {
                self.dishes = list;
                self.dishes.clone()
            },
            Err(e) => {
                tracing::warn!(error = %e, "could not store preset dishes, picking from memory");
                PRESET_DISHES.iter().map(|&d| d.to_owned()).collect()
            },
        }
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn settle(&mut self, result: Result<Vec<String>, ClientError>, fallback: &str) -> bool {
        self.loading = false;
        match result {
            Ok(list) => {
                self.dishes = list;
                true
            },
            Err(ClientError::Api { message, .. }) => {
                self.error = Some(message.unwrap_or_else(|| fallback.to_owned()));
                false
            },
            Err(e) => {
                tracing::warn!(error = %e, "dish API unreachable");
                self.error = Some(NETWORK_ERROR.to_owned());
                false
            },
        }
    }
}
