//! Configuration Module - TOML-based Console Configuration
//!
//! Loads and validates configuration from `config.toml`. All endpoints
//! and the explorer link template are externalized here - nothing is
//! hardcoded in the domain layer.

pub mod loader;

use serde::Deserialize;

/// Top-level console configuration.
///
/// Loaded from `config.toml` at startup. All fields are validated
/// before the session starts.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
  /// Console identity and behavior.
  pub console: ConsoleConfig,
  /// Remote endpoint configuration.
  pub network: NetworkConfig,
  /// Block explorer link configuration.
  pub explorer: ExplorerConfig,
  /// Wallet connector configuration.
  #[serde(default)]
  pub wallet: WalletConfig,
}

/// Console identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
  /// Human-readable console name.
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Ticker to select automatically after the market list loads.
  pub default_market: Option<String>,
}

/// Remote endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
  /// Exchange indexer REST base URL.
  pub indexer_url: String,
  /// LCD REST base URL (bank module).
  pub lcd_url: String,
  /// Transaction broadcast endpoint.
  pub broadcast_url: String,
  /// Per-request timeout in milliseconds.
  #[serde(default = "default_timeout_ms")]
  pub timeout_ms: u64,
}

/// Block explorer link configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExplorerConfig {
  /// Explorer base URL, without a trailing slash.
  pub base_url: String,
}

impl ExplorerConfig {
  /// Display link for a transaction hash.
  pub fn transaction_url(&self, tx_hash: &str) -> String {
    format!("{}/transaction/{tx_hash}", self.base_url.trim_end_matches('/'))
  }
}

/// Wallet connector configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WalletConfig {
  /// Addresses the session may act for, in preference order.
  #[serde(default)]
  pub addresses: Vec<String>,
}

// Default value functions for serde

fn default_log_level() -> String {
  "info".to_string()
}

fn default_timeout_ms() -> u64 {
  30_000
}
