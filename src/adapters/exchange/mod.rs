//! Exchange Data Adapter
//!
//! HTTP access to the Injective exchange indexer (spot markets, order
//! books) and the LCD bank module (balances), plus the conversion of
//! chain-unit payloads into display units.
//!
//! Sub-modules:
//! - `client`: HTTP client over the indexer and LCD base URLs
//! - `markets`: `MarketDataService` implementation
//! - `types`: API response type definitions

pub mod client;
pub mod markets;
pub mod types;
