//! Transaction Broadcaster - HTTP Submission
//!
//! Posts built messages to the broadcast endpoint bound to the sender
//! address and returns the transaction hash. Requests time out but are
//! never retried; a rejection is reported to the caller unchanged.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::ports::broadcaster::{BroadcastReceipt, BroadcastRequest, Broadcaster};

/// HTTP broadcaster for signed order messages.
pub struct HttpBroadcaster {
    http: Client,
    broadcast_url: String,
}

impl HttpBroadcaster {
    /// Create a broadcaster posting to `broadcast_url`.
    pub fn new(broadcast_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build broadcast HTTP client")?;

        Ok(Self {
            http,
            broadcast_url: broadcast_url.into(),
        })
    }
}

#[async_trait]
impl Broadcaster for HttpBroadcaster {
    async fn broadcast(&self, request: &BroadcastRequest) -> Result<BroadcastReceipt> {
        debug!(
            msgs = request.msgs.len(),
            sender = %request.sender_address,
            "Broadcasting transaction"
        );

        let response = self
            .http
            .post(&self.broadcast_url)
            .json(request)
            .send()
            .await
            .context("Broadcast request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("broadcast rejected with {status}: {body}"));
        }

        let receipt: BroadcastReceipt = response
            .json()
            .await
            .context("Failed to parse broadcast receipt")?;

        if receipt.tx_hash.is_empty() {
            return Err(anyhow!("broadcast receipt carried no transaction hash"));
        }

        debug!(tx_hash = %receipt.tx_hash, "Broadcast accepted");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use crate::ports::broadcaster::{BroadcastReceipt, BroadcastRequest};
    use crate::ports::order_builder::OrderMsg;

    #[test]
    fn request_serializes_with_camel_case_wire_names() {
        let request = BroadcastRequest {
            msgs: vec![OrderMsg {
                type_url: "/injective.exchange.v1beta1.MsgCreateSpotLimitOrder"
                    .to_string(),
                value: serde_json::json!({"sender": "inj1abc"}),
            }],
            sender_address: "inj1abc".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"senderAddress\":\"inj1abc\""));
        assert!(json.contains("\"typeUrl\""));
    }

    #[test]
    fn receipt_deserializes_tx_hash() {
        let receipt: BroadcastReceipt =
            serde_json::from_str(r#"{"txHash": "ABC123"}"#).unwrap();
        assert_eq!(receipt.tx_hash, "ABC123");
    }
}
