//! Market Data Port - Balances, Markets, and Order Books
//!
//! Defines the trait for the remote exchange data service: bank balances
//! for an address, the spot market list with resolved display metadata,
//! and per-market order book snapshots.

use async_trait::async_trait;

use crate::domain::book::OrderBook;
use crate::domain::market::{Coin, SpotMarket};

/// Order book snapshot as returned by the data service.
///
/// `current_price` is the service's display price for the market at
/// snapshot time (mid of the best levels when both sides exist).
#[derive(Debug, Clone)]
pub struct OrderBookSnapshot {
  /// Aggregated levels, buys descending and sells ascending.
  pub book: OrderBook,
  /// Display price, absent when the book is empty.
  pub current_price: Option<String>,
}

/// Trait for market data providers.
///
/// Implementors translate remote wire formats (indexer REST, LCD REST)
/// into domain types, including the chain-unit → human-unit conversion
/// for prices, sizes, and tick annotations.
#[async_trait]
pub trait MarketDataService: Send + Sync + 'static {
  /// Fetch all bank balances held by `address`.
  ///
  /// # Errors
  /// Returns error if the service is unreachable or the payload is
  /// malformed.
  async fn fetch_balances(&self, address: &str) -> anyhow::Result<Vec<Coin>>;

  /// Fetch the full spot market list with resolved display metadata.
  ///
  /// Markets whose token metadata cannot be resolved are omitted, not
  /// errored: the list is for display and trading, and an unlabeled
  /// market is neither.
  async fn fetch_spot_markets(&self) -> anyhow::Result<Vec<SpotMarket>>;

  /// Fetch the current order book snapshot for `market`.
  async fn fetch_order_book(
    &self,
    market: &SpotMarket,
  ) -> anyhow::Result<OrderBookSnapshot>;
}
