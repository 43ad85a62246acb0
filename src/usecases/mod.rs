//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces to implement the
//! console's workflows. The single use case here is the trading session:
//! wallet connection, market list, order book selection, and limit order
//! submission, all against the collaborator ports.

pub mod session;

pub use session::{SessionError, SessionView, TradingSession};
