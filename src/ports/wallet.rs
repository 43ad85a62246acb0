//! Wallet Connector Port - Account Address Discovery
//!
//! Defines the trait for querying the wallet integration that owns key
//! management. The console never sees private keys; it only learns which
//! addresses the wallet controls and adopts the first one as the active
//! session account.

use async_trait::async_trait;

/// Trait for wallet connector providers.
///
/// Implementors bridge to whatever holds the keys (a configured keyring,
/// a hardware device, a browser extension relay). Signing stays on their
/// side of the boundary.
#[async_trait]
pub trait WalletConnector: Send + Sync + 'static {
  /// List the addresses under the wallet's control, in preference order.
  ///
  /// An empty list means the wallet is reachable but holds no accounts;
  /// the session treats that as "stay disconnected", not as an error.
  ///
  /// # Errors
  /// Returns error if the wallet is unreachable or denies access.
  async fn get_addresses(&self) -> anyhow::Result<Vec<String>>;
}
