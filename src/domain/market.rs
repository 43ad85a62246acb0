//! Spot market domain types.
//!
//! A `SpotMarket` carries everything the session needs to render a market
//! and to construct orders against it: resolved display metadata, decimal
//! precisions, and tick annotations. Balances are plain `{denom, amount}`
//! pairs exactly as the bank module reports them.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a spot market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketStatus {
    /// Open for trading.
    Active,
    /// Trading suspended by governance.
    Paused,
    /// Force-settled and removed.
    Demolished,
    /// Past its expiry time.
    Expired,
    /// Any status tag this build does not recognize.
    #[serde(other)]
    Unspecified,
}

impl std::fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Demolished => "demolished",
            Self::Expired => "expired",
            Self::Unspecified => "unspecified",
        };
        write!(f, "{tag}")
    }
}

/// Side of a spot limit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Numeric discriminant used by the exchange message format
    /// (buy = 1, sell = 2).
    pub fn wire_code(self) -> u8 {
        match self {
            Self::Buy => 1,
            Self::Sell => 2,
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

/// A single denom balance held by the connected account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    /// Bank denom, unique within a balance list.
    pub denom: String,
    /// Amount in chain units, kept as the reported decimal string.
    pub amount: String,
}

/// A spot market with resolved display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotMarket {
    /// Unique market identifier (hex hash on Injective).
    pub market_id: String,
    /// Display ticker, e.g. `"INJ/USDT"`.
    pub ticker: String,
    /// Bank denom of the base asset.
    pub base_denom: String,
    /// Bank denom of the quote asset.
    pub quote_denom: String,
    /// Display symbol of the base asset.
    pub base_symbol: String,
    /// Display symbol of the quote asset.
    pub quote_symbol: String,
    /// Decimal precision of the base asset.
    pub base_decimals: u32,
    /// Decimal precision of the quote asset.
    pub quote_decimals: u32,
    /// Minimum price increment, in human-readable quote units.
    pub min_price_tick_size: String,
    /// Minimum quantity increment, in human-readable base units.
    pub min_quantity_tick_size: String,
    /// Lifecycle status.
    pub status: MarketStatus,
    /// Most recently observed price; set when a book snapshot loads.
    pub last_price: Option<String>,
    /// Power-of-ten exponent of the price tick, in wire string form.
    pub price_tens_multiplier: String,
    /// Power-of-ten exponent of the quantity tick, in wire string form.
    pub quantity_tens_multiplier: String,
}

impl SpotMarket {
    /// Whether the market is open for trading.
    pub fn is_active(&self) -> bool {
        self.status == MarketStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_side_wire_codes() {
        assert_eq!(OrderSide::Buy.wire_code(), 1);
        assert_eq!(OrderSide::Sell.wire_code(), 2);
    }

    #[test]
    fn unknown_status_maps_to_unspecified() {
        let status: MarketStatus = serde_json::from_str("\"launched\"").unwrap();
        assert_eq!(status, MarketStatus::Unspecified);

        let status: MarketStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(status, MarketStatus::Active);
    }

    #[test]
    fn side_display_matches_exchange_labels() {
        assert_eq!(OrderSide::Buy.to_string(), "BUY");
        assert_eq!(OrderSide::Sell.to_string(), "SELL");
    }
}
