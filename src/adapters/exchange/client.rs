//! Exchange HTTP Client - Indexer and LCD REST Access
//!
//! Wraps reqwest for the Injective indexer (exchange API) and LCD (bank
//! module) endpoints. Requests carry a per-request timeout and are never
//! retried; a failed call surfaces to the session, which keeps its prior
//! state.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::{Client, Response};
use tracing::debug;

/// Configuration for the exchange HTTP client.
#[derive(Debug, Clone)]
pub struct ExchangeClientConfig {
    /// Base URL of the exchange indexer REST API.
    pub indexer_url: String,
    /// Base URL of the LCD REST API (bank module).
    pub lcd_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ExchangeClientConfig {
    fn default() -> Self {
        Self {
            indexer_url: "https://testnet.sentry.exchange.grpc-web.injective.network"
                .to_string(),
            lcd_url: "https://testnet.sentry.lcd.injective.network".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the exchange indexer and LCD endpoints.
pub struct ExchangeClient {
    /// Underlying HTTP client.
    http: Client,
    /// Client configuration.
    config: ExchangeClientConfig,
}

impl ExchangeClient {
    /// Create a new exchange client.
    pub fn new(config: ExchangeClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(5)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, config })
    }

    /// Execute a GET against the indexer API.
    pub async fn get_indexer(&self, path: &str) -> Result<Response> {
        self.get(&format!("{}{}", self.config.indexer_url, path)).await
    }

    /// Execute a GET against the LCD API.
    pub async fn get_lcd(&self, path: &str) -> Result<Response> {
        self.get(&format!("{}{}", self.config.lcd_url, path)).await
    }

    /// Execute a single GET request; non-success statuses become errors
    /// carrying the response body.
    async fn get(&self, url: &str) -> Result<Response> {
        debug!(url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request failed: GET {url}"))?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(anyhow!("API error {status} for GET {url}: {body}"))
        }
    }
}
