//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies. Each sub-module groups adapters by
//! infrastructure concern.
//!
//! Adapter categories:
//! - `exchange`: indexer and LCD REST clients for markets, books, balances
//! - `chain`: order message construction and transaction broadcast
//! - `wallet`: configured-address wallet connector

pub mod chain;
pub mod exchange;
pub mod wallet;
