//! Provides a client for fetching the component registry document.
//!
//! The registry is either served over HTTP(S) or read from a local JSON file,
//! which is convenient for mirrors and offline work.

use crate::error::{AppError, Result};
use crate::models::{Component, RegistryResponse};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info};

/// Anything that can produce the list of available components.
#[allow(async_fn_in_trait)]
pub trait ComponentSource {
    async fn fetch_components(&self) -> Result<Vec<Component>>;
}

/// An asynchronous client for the component registry.
pub struct RegistryClient {
    client: Client,
    location: String,
    show_progress: bool,
}

impl RegistryClient {
    /// Creates a client for `location`, an `http(s)://` URL or a file path.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            location: location.into(),
            show_progress: false,
        }
    }

    /// Shows a spinner on stderr while fetching.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    fn is_remote(&self) -> bool {
        self.location.starts_with("http://") || self.location.starts_with("https://")
    }

    async fn fetch_remote(&self) -> Result<RegistryResponse> {
        info!("Fetching component registry from {}", self.location);

        let response = self
            .client
            .get(&self.location)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                error!("Error fetching component registry: {}", e);
                AppError::Api(e.into())
            })?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                error!(
                    "Registry request to {} failed with status {}",
                    self.location,
                    e.status().unwrap_or_default()
                );
                return Err(AppError::Api(e.into()));
            },
        };

        response.json().await.map_err(|e| {
            error!("Error parsing registry response JSON: {}", e);
            AppError::Api(e.into())
        })
    }

    async fn read_local(&self) -> Result<RegistryResponse> {
        let path = self
            .location
            .strip_prefix("file://")
            .unwrap_or(&self.location);
        info!("Reading component registry from {}", path);

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            error!("Error reading component registry {}: {}", path, e);
            AppError::from(e)
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    fn spinner(&self) -> Result<Option<ProgressBar>> {
        if !self.show_progress {
            return Ok(None);
        }
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
        spinner.set_message("Fetching component registry...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        Ok(Some(spinner))
    }
}

impl ComponentSource for RegistryClient {
    async fn fetch_components(&self) -> Result<Vec<Component>> {
        let spinner = self.spinner()?;

        let result = if self.is_remote() {
            self.fetch_remote().await
        } else {
            self.read_local().await
        };

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        let response = result?;
        debug!(
            "Registry returned {} components (registry version {:?})",
            response.components.len(),
            response.version
        );
        Ok(response.components)
    }
}
