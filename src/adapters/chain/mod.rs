//! Chain Message Adapter
//!
//! Order message construction and transaction submission.
//!
//! Sub-modules:
//! - `order_builder`: spot limit order message construction
//! - `broadcaster`: HTTP transaction submission

pub mod broadcaster;
pub mod order_builder;
