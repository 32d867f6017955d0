/*
[INPUT]:  Batch order payloads (structured collections or raw JSON)
[OUTPUT]: Bulk placement, cancellation and balance documents
[POS]:    HTTP layer - batch and multi-credential endpoints
[UPDATE]: When adding new batch operations
*/

use serde_json::Value;

use crate::http::{Result, SbeeClient, SbeeError};
use crate::types::{BatchBody, TradeCategory};

impl SbeeClient {
    /// Bulk limit orders from one wallet.
    ///
    /// POST /Crypto/{Exchange}/{Trade}/PlaceBatchLimitOrders
    pub async fn place_batch_limit_orders(
        &self,
        exchange: &str,
        trade: TradeCategory,
        payload: impl BatchBody,
    ) -> Result<Value> {
        self.batch_post(exchange, trade, "PlaceBatchLimitOrders", payload)
            .await
    }

    /// Bulk market orders from one wallet.
    ///
    /// POST /Crypto/{Exchange}/{Trade}/PlaceBatchMarketOrders
    pub async fn place_batch_market_orders(
        &self,
        exchange: &str,
        trade: TradeCategory,
        payload: impl BatchBody,
    ) -> Result<Value> {
        self.batch_post(exchange, trade, "PlaceBatchMarketOrders", payload)
            .await
    }

    /// Cancel several orders from one wallet. An empty list is legal and
    /// still sends an `orders` array.
    ///
    /// POST /Crypto/{Exchange}/{Trade}/CancelBatchOrders
    pub async fn cancel_batch_orders(
        &self,
        exchange: &str,
        trade: TradeCategory,
        payload: impl BatchBody,
    ) -> Result<Value> {
        self.batch_post(exchange, trade, "CancelBatchOrders", payload)
            .await
    }

    /// Cancel orders across several wallets; the payload is a bare array of
    /// per-wallet entries, each carrying its own credentials.
    ///
    /// POST /Crypto/{Exchange}/{Trade}/CancelBatchOrdersForPeople
    pub async fn cancel_batch_orders_for_people(
        &self,
        exchange: &str,
        trade: TradeCategory,
        payload: impl BatchBody,
    ) -> Result<Value> {
        self.batch_post(exchange, trade, "CancelBatchOrdersForPeople", payload)
            .await
    }

    /// Bulk limit orders across several wallets.
    ///
    /// POST /Crypto/{Exchange}/{Trade}/PlaceLimitOrderForPeople
    pub async fn place_limit_order_for_people(
        &self,
        exchange: &str,
        trade: TradeCategory,
        payload: impl BatchBody,
    ) -> Result<Value> {
        self.batch_post(exchange, trade, "PlaceLimitOrderForPeople", payload)
            .await
    }

    /// Bulk market orders across several wallets.
    ///
    /// POST /Crypto/{Exchange}/{Trade}/PlaceMarketOrderForPeople
    pub async fn place_market_order_for_people(
        &self,
        exchange: &str,
        trade: TradeCategory,
        payload: impl BatchBody,
    ) -> Result<Value> {
        self.batch_post(exchange, trade, "PlaceMarketOrderForPeople", payload)
            .await
    }

    async fn batch_post(
        &self,
        exchange: &str,
        trade: TradeCategory,
        op: &'static str,
        payload: impl BatchBody,
    ) -> Result<Value> {
        let url = self.exchange_url(exchange, trade, op, &[])?;
        let body = payload
            .into_batch_body()
            .map_err(|source| SbeeError::Serialize { op, source })?;
        self.post_raw(op, url, body).await
    }
}
