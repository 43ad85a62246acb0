//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config: AppConfig = toml::from_str(&content)
    .with_context(|| "Failed to parse config.toml")?;

  validate_config(&config)?;

  info!(
    indexer = %config.network.indexer_url,
    wallet_addresses = config.wallet.addresses.len(),
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Non-empty endpoint URLs
/// - A positive request timeout
/// - Well-formed wallet addresses
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.console.name.is_empty(),
    "Console name must not be empty"
  );

  // Endpoint validation
  anyhow::ensure!(
    !config.network.indexer_url.is_empty(),
    "Indexer URL must not be empty"
  );
  anyhow::ensure!(
    !config.network.lcd_url.is_empty(),
    "LCD URL must not be empty"
  );
  anyhow::ensure!(
    !config.network.broadcast_url.is_empty(),
    "Broadcast URL must not be empty"
  );
  anyhow::ensure!(
    !config.explorer.base_url.is_empty(),
    "Explorer base URL must not be empty"
  );
  anyhow::ensure!(
    config.network.timeout_ms > 0,
    "Request timeout must be positive, got {}",
    config.network.timeout_ms
  );

  // Wallet validation
  for (i, address) in config.wallet.addresses.iter().enumerate() {
    anyhow::ensure!(
      address.starts_with("inj"),
      "Wallet address {} ({:?}) is not a bech32 inj address",
      i,
      address
    );
  }

  if let Some(ticker) = &config.console.default_market {
    anyhow::ensure!(
      !ticker.is_empty(),
      "Default market ticker must not be empty when set"
    );
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn base_config() -> AppConfig {
    toml::from_str(
      r#"
      [console]
      name = "spot-console"

      [network]
      indexer_url = "https://indexer.example"
      lcd_url = "https://lcd.example"
      broadcast_url = "https://broadcast.example/tx"

      [explorer]
      base_url = "https://explorer.example"

      [wallet]
      addresses = ["inj1abc"]
      "#,
    )
    .unwrap()
  }

  #[test]
  fn test_load_nonexistent_file() {
    let result = load_config("nonexistent.toml");
    assert!(result.is_err());
  }

  #[test]
  fn valid_config_passes_validation() {
    assert!(validate_config(&base_config()).is_ok());
  }

  #[test]
  fn malformed_wallet_address_is_rejected() {
    let mut config = base_config();
    config.wallet.addresses = vec!["cosmos1xyz".to_string()];
    assert!(validate_config(&config).is_err());
  }

  #[test]
  fn zero_timeout_is_rejected() {
    let mut config = base_config();
    config.network.timeout_ms = 0;
    assert!(validate_config(&config).is_err());
  }
}
