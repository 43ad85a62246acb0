//! Injective Spot Console — Entry Point
//!
//! Initializes configuration, logging, and the collaborator adapters,
//! then drives one trading session: connect the wallet, load the spot
//! market list, select a market, and display its book. Runs until SIGINT.
//!
//! Wiring sequence:
//! 1. Load config.toml + validate
//! 2. Init tracing (JSON structured logging)
//! 3. Create ExchangeClient (indexer + LCD REST)
//! 4. Wire the four session ports (wallet, data, builder, broadcaster)
//! 5. Run the connect → load markets → select flow
//! 6. Wait for SIGINT

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{info, warn};

mod adapters;
mod config;
mod domain;
mod ports;
mod usecases;

use adapters::chain::broadcaster::HttpBroadcaster;
use adapters::chain::order_builder::SpotMsgBuilder;
use adapters::exchange::client::{ExchangeClient, ExchangeClientConfig};
use adapters::exchange::markets::IndexerMarketData;
use adapters::wallet::ConfiguredConnector;
use domain::market::SpotMarket;
use usecases::session::{SessionView, TradingSession};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration from config.toml ──────────────
    let config = config::loader::load_config("config.toml")
        .context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(&config.console.log_level)
                }),
        )
        .json()
        .init();

    info!(
        name = %config.console.name,
        version = env!("CARGO_PKG_VERSION"),
        indexer = %config.network.indexer_url,
        "Starting Injective spot console"
    );

    // ── 3. Create the exchange HTTP client ──────────────────
    let timeout = Duration::from_millis(config.network.timeout_ms);
    let exchange_client = Arc::new(
        ExchangeClient::new(ExchangeClientConfig {
            indexer_url: config.network.indexer_url.clone(),
            lcd_url: config.network.lcd_url.clone(),
            timeout,
        })
        .context("Failed to create exchange client")?,
    );

    // ── 4. Wire the four session ports ──────────────────────
    let wallet = Arc::new(ConfiguredConnector::from_config(&config.wallet));
    let market_data = Arc::new(IndexerMarketData::new(Arc::clone(&exchange_client)));
    let order_builder = Arc::new(SpotMsgBuilder::new());
    let broadcaster = Arc::new(
        HttpBroadcaster::new(config.network.broadcast_url.clone(), timeout)
            .context("Failed to create broadcaster")?,
    );

    let session = TradingSession::new(wallet, market_data, order_builder, broadcaster);

    // ── 5. Run the session flow ─────────────────────────────
    session.connect_wallet().await;
    session.load_markets().await;

    let view = session.view().await;
    if !view.is_connected() {
        warn!("No wallet connected — browsing markets read-only");
    }
    for balance in &view.balances {
        info!(denom = %balance.denom, amount = %balance.amount, "Balance");
    }

    if view.markets.is_empty() {
        warn!("Market list is empty, nothing to select");
    } else if let Some(market) =
        pick_market(&view.markets, config.console.default_market.as_deref())
    {
        let market_id = market.market_id.clone();
        session.select_market(&market_id).await;
        render_book(&session.view().await, &config.explorer);
    }

    // ── 6. Wait for SIGINT ──────────────────────────────────
    signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;
    info!("Shutdown complete");
    Ok(())
}

/// Pick the market to auto-select: the configured ticker when present,
/// otherwise the first active market, otherwise the first listed.
fn pick_market<'a>(
    markets: &'a [SpotMarket],
    preferred: Option<&str>,
) -> Option<&'a SpotMarket> {
    if let Some(ticker) = preferred {
        if let Some(market) = markets.iter().find(|m| m.ticker == ticker) {
            return Some(market);
        }
        warn!(ticker, "Configured default market not listed, using first active");
    }
    markets.iter().find(|m| m.is_active()).or_else(|| markets.first())
}

/// Log the top of the selected book the way the UI renders it:
/// lowest asks first, then the best bids, then the explorer link.
fn render_book(view: &SessionView, explorer: &config::ExplorerConfig) {
    let Some(selected) = &view.selected else {
        return;
    };

    info!(
        ticker = %selected.ticker,
        price = ?selected.last_price,
        quote = %selected.quote_symbol,
        "Order book loaded"
    );
    for level in view.book.sells.iter().take(3).rev() {
        info!(side = "sell", price = %level.price, size = %level.size, total = %level.total, "Level");
    }
    for level in view.book.buys.iter().take(3) {
        info!(side = "buy", price = %level.price, size = %level.size, total = %level.total, "Level");
    }

    if !view.last_tx_hash.is_empty() {
        info!(link = %explorer.transaction_url(&view.last_tx_hash), "Latest transaction");
    }
}
