//! Exchange API Response Types
//!
//! Serialization types for the indexer REST API (camelCase JSON) and the
//! LCD bank module (snake_case JSON). Values stay as the decimal strings
//! the services report; unit conversion happens in the adapter, not here.

use serde::Deserialize;

use crate::domain::market::MarketStatus;

/// Response of the spot markets listing.
#[derive(Debug, Clone, Deserialize)]
pub struct SpotMarketsResponse {
  /// All spot markets known to the indexer.
  #[serde(default)]
  pub markets: Vec<SpotMarketInfo>,
}

/// One spot market as the indexer reports it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotMarketInfo {
  /// Unique market identifier.
  pub market_id: String,
  /// Lifecycle status tag.
  pub market_status: MarketStatus,
  /// Display ticker.
  pub ticker: String,
  /// Bank denom of the base asset.
  pub base_denom: String,
  /// Bank denom of the quote asset.
  pub quote_denom: String,
  /// Minimum price increment, chain units.
  pub min_price_tick_size: String,
  /// Minimum quantity increment, chain units.
  pub min_quantity_tick_size: String,
  /// Resolved base token metadata, when the registry knows the denom.
  pub base_token_meta: Option<TokenMeta>,
  /// Resolved quote token metadata.
  pub quote_token_meta: Option<TokenMeta>,
}

/// Token registry metadata attached to a market.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMeta {
  /// Full token name.
  pub name: Option<String>,
  /// Display symbol.
  pub symbol: String,
  /// Decimal precision.
  pub decimals: u32,
}

/// Response of the order book query.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBookResponse {
  /// The snapshot itself.
  pub orderbook: RawOrderBook,
}

/// Both book sides in chain units.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOrderBook {
  /// Bid levels, price descending.
  #[serde(default)]
  pub buys: Vec<RawPriceLevel>,
  /// Ask levels, price ascending.
  #[serde(default)]
  pub sells: Vec<RawPriceLevel>,
}

/// One aggregated level in chain units.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPriceLevel {
  /// Price at this level.
  pub price: String,
  /// Total quantity at this level.
  pub quantity: String,
  /// Server timestamp of the aggregation.
  #[serde(default)]
  pub timestamp: Option<i64>,
}

/// Response of the bank balances query.
#[derive(Debug, Clone, Deserialize)]
pub struct BankBalancesResponse {
  /// All balances held by the queried address.
  #[serde(default)]
  pub balances: Vec<RawCoin>,
  /// LCD pagination envelope.
  pub pagination: Option<Pagination>,
}

/// One bank balance entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCoin {
  /// Bank denom.
  pub denom: String,
  /// Amount in chain units.
  pub amount: String,
}

/// LCD pagination envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
  /// Cursor to the next page, if any.
  pub next_key: Option<String>,
  /// Total entry count, when the node reports it.
  pub total: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn spot_market_deserializes_from_indexer_json() {
    let json = r#"{
      "markets": [{
        "marketId": "0xa508cb32923323679f29a032c70342c147c17d0145625922b0ef22e955c844c0",
        "marketStatus": "active",
        "ticker": "INJ/USDT",
        "baseDenom": "inj",
        "quoteDenom": "peggy0x87aB3B4C8661e07D6372361211B96ed4Dc36B1B5",
        "minPriceTickSize": "0.000000000000001",
        "minQuantityTickSize": "1000000000000000",
        "baseTokenMeta": {"name": "Injective", "symbol": "INJ", "decimals": 18},
        "quoteTokenMeta": {"name": "Tether", "symbol": "USDT", "decimals": 6}
      }]
    }"#;

    let parsed: SpotMarketsResponse = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.markets.len(), 1);
    let market = &parsed.markets[0];
    assert_eq!(market.ticker, "INJ/USDT");
    assert_eq!(market.market_status, MarketStatus::Active);
    assert_eq!(market.base_token_meta.as_ref().unwrap().decimals, 18);
    assert_eq!(market.quote_token_meta.as_ref().unwrap().symbol, "USDT");
  }

  #[test]
  fn order_book_deserializes_with_missing_sides() {
    let json = r#"{"orderbook": {"buys": [{"price": "0.000000000000012", "quantity": "1000000000000000000", "timestamp": 1700000000000}]}}"#;
    let parsed: OrderBookResponse = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.orderbook.buys.len(), 1);
    assert!(parsed.orderbook.sells.is_empty());
  }

  #[test]
  fn bank_balances_deserialize_from_lcd_json() {
    let json = r#"{
      "balances": [{"denom": "inj", "amount": "1000000"}],
      "pagination": {"next_key": null, "total": "1"}
    }"#;
    let parsed: BankBalancesResponse = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.balances.len(), 1);
    assert_eq!(parsed.balances[0].denom, "inj");
    assert_eq!(parsed.balances[0].amount, "1000000");
  }
}
