//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the session layer requires from
//! the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `WalletConnector`: account address discovery
//! - `MarketDataService`: balances, market list, order book snapshots
//! - `OrderBuilder`: chain order message construction
//! - `Broadcaster`: transaction submission

pub mod broadcaster;
pub mod market_data;
pub mod order_builder;
pub mod wallet;
