//! Broadcaster Port - Transaction Submission
//!
//! Defines the trait for submitting built order messages to the network.
//! Signing and sequence/nonce handling live behind this boundary; the
//! session only learns the resulting transaction hash.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ports::order_builder::OrderMsg;

/// A batch of messages to broadcast on behalf of one sender.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastRequest {
  /// Messages included in the transaction, in order.
  pub msgs: Vec<OrderMsg>,
  /// Address the transaction is bound to.
  pub sender_address: String,
}

/// Result of a successful broadcast.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastReceipt {
  /// Hash of the accepted transaction.
  pub tx_hash: String,
}

/// Trait for transaction broadcasters.
#[async_trait]
pub trait Broadcaster: Send + Sync + 'static {
  /// Submit `request` to the network and return the transaction hash.
  ///
  /// # Errors
  /// Returns error on transport failure or chain-side rejection. There is
  /// no retry at this layer; the caller decides what a failure means.
  async fn broadcast(
    &self,
    request: &BroadcastRequest,
  ) -> anyhow::Result<BroadcastReceipt>;
}
