/*
[INPUT]:  Exchange credentials and account query parameters
[OUTPUT]: Wallet balances and order history documents
[POS]:    HTTP layer - account-scoped read endpoints
[UPDATE]: When adding new account endpoints or changing payload fields
*/

use serde_json::{Value, json};

use crate::http::{Result, SbeeClient, SbeeError};
use crate::types::{BatchBody, ExchangeCredentials, TradeCategory};

impl SbeeClient {
    /// Wallet cash balances; an empty symbol returns every coin.
    ///
    /// POST /Crypto/{Exchange}/{Trade}/TradingBalances
    pub async fn trading_balances(
        &self,
        exchange: &str,
        trade: TradeCategory,
        symbol: &str,
        credentials: &ExchangeCredentials,
    ) -> Result<Value> {
        let url = self.exchange_url(exchange, trade, "TradingBalances", &[])?;
        let body = json!({
            "symbol": symbol,
            "apiKey": credentials.api_key,
            "apiSecret": credentials.api_secret,
            "apiPass": credentials.api_pass,
        });
        self.post("TradingBalances", url, &body).await
    }

    /// Own buy and sell orders filtered by state (NEW, ALL, FILLED, CANCELED).
    ///
    /// POST /Crypto/{Exchange}/{Trade}/OrderHistory
    pub async fn order_history(
        &self,
        exchange: &str,
        trade: TradeCategory,
        symbol: &str,
        state: &str,
        credentials: &ExchangeCredentials,
    ) -> Result<Value> {
        let url = self.exchange_url(exchange, trade, "OrderHistory", &[])?;
        let body = json!({
            "symbol": symbol,
            "state": state,
            "apiKey": credentials.api_key,
            "apiSecret": credentials.api_secret,
            "apiPass": credentials.api_pass,
        });
        self.post("OrderHistory", url, &body).await
    }

    /// Cash balances across several accounts in one call.
    ///
    /// POST /Crypto/{Exchange}/{Trade}/TradingBalancesForPeople
    pub async fn trading_balances_for_people(
        &self,
        exchange: &str,
        trade: TradeCategory,
        payload: impl BatchBody,
    ) -> Result<Value> {
        let url = self.exchange_url(exchange, trade, "TradingBalancesForPeople", &[])?;
        let body = payload.into_batch_body().map_err(|source| SbeeError::Serialize {
            op: "TradingBalancesForPeople",
            source,
        })?;
        self.post_raw("TradingBalancesForPeople", url, body).await
    }
}
