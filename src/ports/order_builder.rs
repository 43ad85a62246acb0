//! Order Builder Port - Chain Message Construction
//!
//! Defines the trait for turning normalized order parameters into the
//! chain-specific signed-message payload. The payload is opaque to the
//! session: it is handed to the broadcaster as-is.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::market::OrderSide;

/// Market parameters the builder needs, already converted to numeric form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketOrderParams {
  /// Target market identifier.
  pub market_id: String,
  /// Power-of-ten exponent of the price tick.
  pub price_tens_multiplier: i32,
  /// Power-of-ten exponent of the quantity tick.
  pub quantity_tens_multiplier: i32,
  /// Decimal precision of the base asset.
  pub base_decimals: u32,
  /// Decimal precision of the quote asset.
  pub quote_decimals: u32,
  /// Minimum price increment, human-readable quote units.
  pub min_price_tick_size: String,
  /// Minimum quantity increment, human-readable base units.
  pub min_quantity_tick_size: String,
}

/// Fully normalized input for a spot limit order message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotLimitOrderParams {
  /// Limit price, human-readable quote units per base unit.
  pub price: String,
  /// Order quantity, already shifted to chain units.
  pub quantity: String,
  /// Buy or sell.
  pub side: OrderSide,
  /// Bech32 address the order is sent from.
  pub sender_address: String,
  /// Market tick and precision parameters.
  pub market: MarketOrderParams,
}

/// Opaque signed-message payload in protobuf `Any` form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderMsg {
  /// Protobuf type URL of the wrapped message.
  pub type_url: String,
  /// JSON-encoded message body.
  pub value: serde_json::Value,
}

/// Trait for order message builders.
///
/// Implementors own the wire format of the chain's order message and the
/// final snapping of values to the market's tick grid.
#[async_trait]
pub trait OrderBuilder: Send + Sync + 'static {
  /// Construct a spot limit order message from normalized parameters.
  ///
  /// # Errors
  /// Returns error if the parameters are rejected as invalid (bad price
  /// literal, tick mismatch, missing sender).
  async fn build_spot_limit_order(
    &self,
    params: &SpotLimitOrderParams,
  ) -> anyhow::Result<OrderMsg>;
}
