//! Trading Session - View State and Request Orchestration
//!
//! Owns the per-session view state (connected address, balances, market
//! list, selected market, order book, last transaction hash) and drives
//! the four collaborator ports. One `TradingSession` is one UI session;
//! there is no process-global state.
//!
//! Failure policy: every operation catches its own errors, reports them
//! to the diagnostic channel, and keeps the last-known-good state. No
//! retry is scheduled anywhere. Order book loads carry a sequence token
//! so that the most recently *requested* market wins when responses
//! resolve out of order.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};

use crate::domain::book::OrderBook;
use crate::domain::market::{Coin, OrderSide, SpotMarket};
use crate::domain::quantize;
use crate::ports::broadcaster::{BroadcastRequest, Broadcaster};
use crate::ports::market_data::MarketDataService;
use crate::ports::order_builder::{
  MarketOrderParams, OrderBuilder, SpotLimitOrderParams,
};
use crate::ports::wallet::WalletConnector;

/// Session failure taxonomy.
///
/// All four kinds are handled identically (logged and swallowed, prior
/// state retained); the kind records where in the pipeline the attempt
/// failed.
#[derive(Debug, Error)]
pub enum SessionError {
  /// Wallet unreachable or access denied.
  #[error("wallet connector error: {0:#}")]
  Connector(anyhow::Error),
  /// Balance, market, or order book retrieval failed.
  #[error("market data fetch error: {0:#}")]
  Fetch(anyhow::Error),
  /// Parameters rejected while constructing the order message.
  #[error("order construction error: {0:#}")]
  Build(anyhow::Error),
  /// Network or chain rejected the transaction.
  #[error("broadcast error: {0:#}")]
  Broadcast(anyhow::Error),
}

/// Mutable view state behind the session lock.
#[derive(Debug, Default)]
struct ViewState {
  address: String,
  balances: Vec<Coin>,
  markets: Vec<SpotMarket>,
  selected: Option<SpotMarket>,
  book: OrderBook,
  book_fetched_at: Option<DateTime<Utc>>,
  last_tx_hash: String,
}

/// Cloned, render-ready copy of the session state.
#[derive(Debug, Clone, Default)]
pub struct SessionView {
  /// Active account address; empty while disconnected.
  pub address: String,
  /// Bank balances of the active account.
  pub balances: Vec<Coin>,
  /// Spot markets loaded at session start.
  pub markets: Vec<SpotMarket>,
  /// Currently selected market, with `last_price` annotated.
  pub selected: Option<SpotMarket>,
  /// Book snapshot for the selected market.
  pub book: OrderBook,
  /// When the current book snapshot was accepted.
  pub book_fetched_at: Option<DateTime<Utc>>,
  /// Hash of the most recent successful order broadcast.
  pub last_tx_hash: String,
}

impl SessionView {
  /// Whether the wallet gate has been passed.
  pub fn is_connected(&self) -> bool {
    !self.address.is_empty()
  }
}

/// One wallet-connected trading session over the four collaborator ports.
pub struct TradingSession<W, D, B, X>
where
  W: WalletConnector,
  D: MarketDataService,
  B: OrderBuilder,
  X: Broadcaster,
{
  wallet: Arc<W>,
  market_data: Arc<D>,
  order_builder: Arc<B>,
  broadcaster: Arc<X>,
  state: RwLock<ViewState>,
  /// Sequence tokens for order book requests; latest issued wins.
  book_seq: AtomicU64,
  /// Latched after the first market list load attempt.
  markets_loaded: AtomicBool,
}

impl<W, D, B, X> TradingSession<W, D, B, X>
where
  W: WalletConnector,
  D: MarketDataService,
  B: OrderBuilder,
  X: Broadcaster,
{
  /// Create a session over the given collaborator ports.
  pub fn new(
    wallet: Arc<W>,
    market_data: Arc<D>,
    order_builder: Arc<B>,
    broadcaster: Arc<X>,
  ) -> Self {
    Self {
      wallet,
      market_data,
      order_builder,
      broadcaster,
      state: RwLock::new(ViewState::default()),
      book_seq: AtomicU64::new(0),
      markets_loaded: AtomicBool::new(false),
    }
  }

  /// Snapshot the current view state.
  pub async fn view(&self) -> SessionView {
    let state = self.state.read().await;
    SessionView {
      address: state.address.clone(),
      balances: state.balances.clone(),
      markets: state.markets.clone(),
      selected: state.selected.clone(),
      book: state.book.clone(),
      book_fetched_at: state.book_fetched_at,
      last_tx_hash: state.last_tx_hash.clone(),
    }
  }

  /// Connect the wallet and load balances for the adopted address.
  ///
  /// Adopts the first address the connector reports. The address and its
  /// balances commit together: if the balance fetch fails, the session
  /// stays disconnected. Errors are logged and swallowed.
  pub async fn connect_wallet(&self) {
    if let Err(e) = self.try_connect().await {
      error!(error = %e, "Wallet connection failed");
    }
  }

  async fn try_connect(&self) -> Result<(), SessionError> {
    {
      let state = self.state.read().await;
      if !state.address.is_empty() {
        debug!(address = %state.address, "Wallet already connected");
        return Ok(());
      }
    }

    let addresses = self
      .wallet
      .get_addresses()
      .await
      .map_err(SessionError::Connector)?;

    let Some(address) = addresses.into_iter().next() else {
      warn!("Wallet connector returned no addresses");
      return Ok(());
    };

    let balances = self
      .market_data
      .fetch_balances(&address)
      .await
      .map_err(SessionError::Fetch)?;

    let mut state = self.state.write().await;
    state.address = address;
    state.balances = balances;
    info!(
      address = %state.address,
      balances = state.balances.len(),
      "Wallet connected"
    );
    Ok(())
  }

  /// Load the spot market list. Runs at most once per session lifetime;
  /// a failed attempt latches too and leaves the list empty.
  pub async fn load_markets(&self) {
    if self.markets_loaded.swap(true, Ordering::SeqCst) {
      debug!("Market list already loaded for this session");
      return;
    }

    match self.market_data.fetch_spot_markets().await {
      Ok(markets) => {
        let mut state = self.state.write().await;
        state.markets = markets;
        info!(markets = state.markets.len(), "Spot market list loaded");
      }
      Err(e) => {
        error!(error = %SessionError::Fetch(e), "Market list load failed");
      }
    }
  }

  /// Select a market by id and load its order book.
  ///
  /// Ids not present in the loaded market list are ignored, so the
  /// selection can never dangle.
  pub async fn select_market(&self, market_id: &str) {
    let market = {
      let state = self.state.read().await;
      state
        .markets
        .iter()
        .find(|m| m.market_id == market_id)
        .cloned()
    };

    let Some(market) = market else {
      warn!(market_id, "Unknown market id, selection ignored");
      return;
    };

    self.load_order_book(market).await;
  }

  /// Fetch and install the order book for `market`.
  ///
  /// Stamps a fresh sequence token before the fetch; the response is
  /// discarded if a newer request was issued while it was in flight.
  async fn load_order_book(&self, market: SpotMarket) {
    let token = self.book_seq.fetch_add(1, Ordering::SeqCst) + 1;

    let snapshot = match self.market_data.fetch_order_book(&market).await {
      Ok(snapshot) => snapshot,
      Err(e) => {
        error!(
          ticker = %market.ticker,
          error = %SessionError::Fetch(e),
          "Order book load failed"
        );
        return;
      }
    };

    let mut state = self.state.write().await;
    if self.book_seq.load(Ordering::SeqCst) != token {
      debug!(ticker = %market.ticker, "Discarding stale order book response");
      return;
    }

    state.book = snapshot.book;
    state.book_fetched_at = Some(Utc::now());
    let mut selected = market;
    selected.last_price = snapshot.current_price;
    debug!(
      ticker = %selected.ticker,
      buys = state.book.buys.len(),
      sells = state.book.sells.len(),
      price = ?selected.last_price,
      "Order book installed"
    );
    state.selected = Some(selected);
  }

  /// Build and broadcast a spot limit order, then refresh the book.
  ///
  /// The human quantity is shifted to chain units first; the market's
  /// tens multipliers are parsed to numeric form for the builder. On
  /// success the returned transaction hash is stored and the book for
  /// the currently selected market is reloaded. On any failure the prior
  /// state is left untouched and the error is logged only.
  #[instrument(skip(self, market), fields(ticker = %market.ticker, price = %price, quantity = %quantity))]
  pub async fn place_spot_limit_order(
    &self,
    market: &SpotMarket,
    price: &str,
    quantity: &str,
    side: OrderSide,
  ) {
    if let Err(e) = self.try_place(market, price, quantity, side).await {
      error!(error = %e, "Order submission failed");
    }
  }

  async fn try_place(
    &self,
    market: &SpotMarket,
    price: &str,
    quantity: &str,
    side: OrderSide,
  ) -> Result<(), SessionError> {
    let sender = {
      let state = self.state.read().await;
      state.address.clone()
    };
    if sender.is_empty() {
      return Err(SessionError::Build(anyhow!(
        "no wallet connected, cannot address the order"
      )));
    }

    let adjusted = quantize::adjusted_order_quantity(
      quantity,
      market.base_decimals,
      market.quote_decimals,
    )
    .map_err(|e| SessionError::Build(e.into()))?;
    debug!(adjusted = %adjusted, "Order quantity normalized to chain units");

    let price_tens = parse_tens(&market.price_tens_multiplier)
      .map_err(SessionError::Build)?;
    let quantity_tens = parse_tens(&market.quantity_tens_multiplier)
      .map_err(SessionError::Build)?;

    let params = SpotLimitOrderParams {
      price: price.to_string(),
      quantity: adjusted,
      side,
      sender_address: sender.clone(),
      market: MarketOrderParams {
        market_id: market.market_id.clone(),
        price_tens_multiplier: price_tens,
        quantity_tens_multiplier: quantity_tens,
        base_decimals: market.base_decimals,
        quote_decimals: market.quote_decimals,
        min_price_tick_size: market.min_price_tick_size.clone(),
        min_quantity_tick_size: market.min_quantity_tick_size.clone(),
      },
    };

    let msg = self
      .order_builder
      .build_spot_limit_order(&params)
      .await
      .map_err(SessionError::Build)?;

    let receipt = self
      .broadcaster
      .broadcast(&BroadcastRequest {
        msgs: vec![msg],
        sender_address: sender,
      })
      .await
      .map_err(SessionError::Broadcast)?;

    info!(
      tx_hash = %receipt.tx_hash,
      side = %side,
      "Spot limit order broadcast"
    );

    {
      let mut state = self.state.write().await;
      state.last_tx_hash = receipt.tx_hash;
    }

    // Refresh the displayed book for whichever market is selected now.
    let selected = {
      let state = self.state.read().await;
      state.selected.clone()
    };
    if let Some(selected) = selected {
      self.load_order_book(selected).await;
    }

    Ok(())
  }
}

/// Parse a wire-form tens multiplier into its numeric exponent.
fn parse_tens(raw: &str) -> anyhow::Result<i32> {
  raw
    .trim()
    .parse::<i32>()
    .map_err(|e| anyhow!("invalid tens multiplier {raw:?}: {e}"))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_tens_accepts_signed_integers() {
    assert_eq!(parse_tens("-3").unwrap(), -3);
    assert_eq!(parse_tens(" 4 ").unwrap(), 4);
    assert!(parse_tens("0.5").is_err());
    assert!(parse_tens("").is_err());
  }

  #[test]
  fn view_reports_connection_gate() {
    let mut view = SessionView::default();
    assert!(!view.is_connected());
    view.address = "inj1abc".to_string();
    assert!(view.is_connected());
  }
}
