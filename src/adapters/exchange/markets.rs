//! Market Data Adapter - Indexer and Bank Queries
//!
//! Implements the `MarketDataService` port over the indexer REST API and
//! the LCD bank module. All chain-unit values are converted to
//! human-readable strings here, using the exact shift arithmetic from the
//! domain layer, so the session only ever sees display units.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::client::ExchangeClient;
use super::types::{
    BankBalancesResponse, OrderBookResponse, RawOrderBook, RawPriceLevel,
    SpotMarketInfo, SpotMarketsResponse,
};
use crate::domain::book::{OrderBook, PriceLevel};
use crate::domain::market::{Coin, SpotMarket};
use crate::domain::quantize::{shift_decimal, tens_multiplier};
use crate::ports::market_data::{MarketDataService, OrderBookSnapshot};

/// Market data adapter over the indexer and LCD REST APIs.
pub struct IndexerMarketData {
    client: Arc<ExchangeClient>,
}

impl IndexerMarketData {
    /// Create a new market data adapter.
    pub fn new(client: Arc<ExchangeClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MarketDataService for IndexerMarketData {
    async fn fetch_balances(&self, address: &str) -> Result<Vec<Coin>> {
        let path = format!("/cosmos/bank/v1beta1/balances/{address}");
        let response = self
            .client
            .get_lcd(&path)
            .await
            .context("Failed to fetch bank balances")?;

        let parsed: BankBalancesResponse = response
            .json()
            .await
            .context("Failed to parse bank balances response")?;

        debug!(address, balances = parsed.balances.len(), "Balances fetched");

        Ok(parsed
            .balances
            .into_iter()
            .map(|coin| Coin {
                denom: coin.denom,
                amount: coin.amount,
            })
            .collect())
    }

    async fn fetch_spot_markets(&self) -> Result<Vec<SpotMarket>> {
        let response = self
            .client
            .get_indexer("/api/exchange/spot/v1/markets")
            .await
            .context("Failed to fetch spot markets")?;

        let parsed: SpotMarketsResponse = response
            .json()
            .await
            .context("Failed to parse spot markets response")?;

        let mut markets = Vec::with_capacity(parsed.markets.len());
        for info in parsed.markets {
            let ticker = info.ticker.clone();
            match to_spot_market(info) {
                Ok(market) => markets.push(market),
                Err(e) => {
                    warn!(ticker, error = %e, "Skipping market with unresolved metadata");
                }
            }
        }

        debug!(markets = markets.len(), "Spot markets fetched");
        Ok(markets)
    }

    async fn fetch_order_book(&self, market: &SpotMarket) -> Result<OrderBookSnapshot> {
        let path = format!("/api/exchange/spot/v1/orderbook/{}", market.market_id);
        let response = self
            .client
            .get_indexer(&path)
            .await
            .context("Failed to fetch order book")?;

        let parsed: OrderBookResponse = response
            .json()
            .await
            .context("Failed to parse order book response")?;

        let snapshot = to_order_book(&parsed.orderbook, market)?;
        debug!(
            ticker = %market.ticker,
            buys = snapshot.book.buys.len(),
            sells = snapshot.book.sells.len(),
            "Order book fetched"
        );
        Ok(snapshot)
    }
}

/// Convert an indexer market record into the domain market.
///
/// Tick sizes arrive in chain units; they are shifted into human units
/// and annotated with their tens multipliers. Markets without resolved
/// token metadata are rejected.
fn to_spot_market(info: SpotMarketInfo) -> Result<SpotMarket> {
    let base = info
        .base_token_meta
        .as_ref()
        .with_context(|| format!("market {} has no base token metadata", info.ticker))?;
    let quote = info
        .quote_token_meta
        .as_ref()
        .with_context(|| format!("market {} has no quote token metadata", info.ticker))?;

    let base_symbol = base.symbol.clone();
    let quote_symbol = quote.symbol.clone();
    let base_decimals = base.decimals;
    let quote_decimals = quote.decimals;
    let price_shift = decimals_i32(base_decimals)? - decimals_i32(quote_decimals)?;

    let min_price_tick_size = shift_decimal(&info.min_price_tick_size, price_shift)?;
    let min_quantity_tick_size =
        shift_decimal(&info.min_quantity_tick_size, -decimals_i32(base_decimals)?)?;

    let price_tens = tens_multiplier(&min_price_tick_size)?;
    let quantity_tens = tens_multiplier(&min_quantity_tick_size)?;

    Ok(SpotMarket {
        market_id: info.market_id,
        ticker: info.ticker,
        base_denom: info.base_denom,
        quote_denom: info.quote_denom,
        base_symbol,
        quote_symbol,
        base_decimals,
        quote_decimals,
        min_price_tick_size,
        min_quantity_tick_size,
        status: info.market_status,
        last_price: None,
        price_tens_multiplier: price_tens.to_string(),
        quantity_tens_multiplier: quantity_tens.to_string(),
    })
}

/// Convert a raw book into human units with running quote totals.
fn to_order_book(raw: &RawOrderBook, market: &SpotMarket) -> Result<OrderBookSnapshot> {
    let book = OrderBook {
        buys: to_levels(&raw.buys, market)?,
        sells: to_levels(&raw.sells, market)?,
    };
    let current_price = book.current_price();
    Ok(OrderBookSnapshot {
        book,
        current_price,
    })
}

fn to_levels(raw: &[RawPriceLevel], market: &SpotMarket) -> Result<Vec<PriceLevel>> {
    let base = decimals_i32(market.base_decimals)?;
    let quote = decimals_i32(market.quote_decimals)?;

    let mut running = Decimal::ZERO;
    let mut levels = Vec::with_capacity(raw.len());
    for entry in raw {
        let price = shift_decimal(&entry.price, base - quote)?;
        let size = shift_decimal(&entry.quantity, -base)?;

        let price_dec: Decimal = price
            .parse()
            .with_context(|| format!("price {price:?} exceeds display precision"))?;
        let size_dec: Decimal = size
            .parse()
            .with_context(|| format!("size {size:?} exceeds display precision"))?;
        running += price_dec * size_dec;

        levels.push(PriceLevel {
            price,
            size,
            total: running.normalize().to_string(),
        });
    }
    Ok(levels)
}

fn decimals_i32(decimals: u32) -> Result<i32> {
    i32::try_from(decimals)
        .with_context(|| format!("token decimals {decimals} out of range"))
}
