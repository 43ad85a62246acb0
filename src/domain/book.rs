//! Order book snapshot types.
//!
//! A book is two ordered sides of aggregated price levels, replaced
//! wholesale on every load — levels are never patched incrementally.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One aggregated price level of an order book side.
///
/// All three fields are human-readable decimal strings: `price` in quote
/// units per base unit, `size` in base units, `total` the running quote
/// notional from the top of the side down to this level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: String,
    pub size: String,
    pub total: String,
}

/// Snapshot of both book sides: buys descending, sells ascending by price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBook {
    pub buys: Vec<PriceLevel>,
    pub sells: Vec<PriceLevel>,
}

impl OrderBook {
    /// Whether both sides are empty.
    pub fn is_empty(&self) -> bool {
        self.buys.is_empty() && self.sells.is_empty()
    }

    /// Highest resting bid.
    pub fn best_buy(&self) -> Option<&PriceLevel> {
        self.buys.first()
    }

    /// Lowest resting ask.
    pub fn best_sell(&self) -> Option<&PriceLevel> {
        self.sells.first()
    }

    /// Mid price of the best bid/ask, if both sides are populated.
    pub fn mid_price(&self) -> Option<Decimal> {
        let bid: Decimal = self.best_buy()?.price.parse().ok()?;
        let ask: Decimal = self.best_sell()?.price.parse().ok()?;
        Some((bid + ask) / Decimal::TWO)
    }

    /// Display price for the snapshot: the mid when both sides exist,
    /// otherwise the best price of whichever side is populated.
    pub fn current_price(&self) -> Option<String> {
        if let Some(mid) = self.mid_price() {
            return Some(mid.normalize().to_string());
        }
        self.best_buy()
            .or_else(|| self.best_sell())
            .map(|level| level.price.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(price: &str, size: &str, total: &str) -> PriceLevel {
        PriceLevel {
            price: price.to_string(),
            size: size.to_string(),
            total: total.to_string(),
        }
    }

    #[test]
    fn mid_price_averages_best_levels() {
        let book = OrderBook {
            buys: vec![level("10.0", "1", "10.0"), level("9.5", "2", "29.0")],
            sells: vec![level("11.0", "1", "11.0")],
        };
        assert_eq!(book.current_price().unwrap(), "10.5");
    }

    #[test]
    fn one_sided_book_falls_back_to_best_price() {
        let book = OrderBook {
            buys: vec![],
            sells: vec![level("11.0", "1", "11.0")],
        };
        assert_eq!(book.mid_price(), None);
        assert_eq!(book.current_price().unwrap(), "11.0");
    }

    #[test]
    fn empty_book_has_no_price() {
        let book = OrderBook::default();
        assert!(book.is_empty());
        assert_eq!(book.current_price(), None);
    }
}
