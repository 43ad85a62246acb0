//! Wallet Connector Adapter - Configured Addresses
//!
//! Serves the addresses the operator configured, with an environment
//! override (`INJ_ADDRESSES`, comma-separated) for ad-hoc runs. Key
//! custody and signing live with the external wallet integration; this
//! adapter only answers which accounts the session may act for.

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::config::WalletConfig;
use crate::ports::wallet::WalletConnector;

/// Environment variable overriding the configured address list.
pub const ADDRESSES_ENV: &str = "INJ_ADDRESSES";

/// Wallet connector backed by static configuration.
pub struct ConfiguredConnector {
    addresses: Vec<String>,
}

impl ConfiguredConnector {
    /// Create a connector over an explicit address list.
    pub fn new(addresses: Vec<String>) -> Self {
        Self { addresses }
    }

    /// Build from config, honoring the environment override.
    pub fn from_config(config: &WalletConfig) -> Self {
        if let Ok(raw) = std::env::var(ADDRESSES_ENV) {
            let addresses = parse_address_list(&raw);
            if !addresses.is_empty() {
                debug!(
                    addresses = addresses.len(),
                    "Using wallet addresses from environment"
                );
                return Self::new(addresses);
            }
        }
        Self::new(config.addresses.clone())
    }
}

#[async_trait]
impl WalletConnector for ConfiguredConnector {
    async fn get_addresses(&self) -> Result<Vec<String>> {
        Ok(self.addresses.clone())
    }
}

/// Split a comma-separated address list, dropping empty entries.
fn parse_address_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
