//! Spot Order Message Builder
//!
//! Constructs the `MsgCreateSpotLimitOrder` payload from normalized
//! parameters: snaps the human price to the market's tick grid, shifts
//! it into chain units, and wraps the result in the protobuf `Any` JSON
//! shape the broadcaster expects. The quantity arrives already shifted
//! to chain units and passes through untouched.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::domain::quantize::{round_to_tens, shift_decimal};
use crate::ports::order_builder::{OrderBuilder, OrderMsg, SpotLimitOrderParams};

/// Protobuf type URL of the spot limit order message.
pub const MSG_CREATE_SPOT_LIMIT_ORDER: &str =
    "/injective.exchange.v1beta1.MsgCreateSpotLimitOrder";

/// Builds spot limit order messages in chain wire form.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpotMsgBuilder;

impl SpotMsgBuilder {
    /// Create a new message builder.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OrderBuilder for SpotMsgBuilder {
    async fn build_spot_limit_order(
        &self,
        params: &SpotLimitOrderParams,
    ) -> Result<OrderMsg> {
        if params.sender_address.is_empty() {
            return Err(anyhow!("sender address is empty"));
        }
        if params.quantity.is_empty() {
            return Err(anyhow!("order quantity is empty"));
        }

        let market = &params.market;
        let base = i32::try_from(market.base_decimals)
            .context("base decimals out of range")?;
        let quote = i32::try_from(market.quote_decimals)
            .context("quote decimals out of range")?;

        // Snap to the human tick grid, then shift into chain units.
        let snapped = round_to_tens(&params.price, market.price_tens_multiplier)
            .with_context(|| format!("price {:?} rejected", params.price))?;
        let chain_price = shift_decimal(&snapped, quote - base)
            .with_context(|| format!("price {snapped:?} rejected"))?;

        let value = json!({
            "sender": params.sender_address,
            "order": {
                "marketId": market.market_id,
                "orderType": params.side.wire_code(),
                "orderInfo": {
                    "subaccountId": "",
                    "feeRecipient": params.sender_address,
                    "price": chain_price,
                    "quantity": params.quantity,
                },
            },
        });

        debug!(
            market_id = %market.market_id,
            side = %params.side,
            price = %chain_price,
            quantity = %params.quantity,
            "Spot limit order message built"
        );

        Ok(OrderMsg {
            type_url: MSG_CREATE_SPOT_LIMIT_ORDER.to_string(),
            value,
        })
    }
}
