/*
[INPUT]:  Typed order requests with exchange credentials
[OUTPUT]: Order placement, cancellation and leverage documents
[POS]:    HTTP layer - single-order write endpoints
[UPDATE]: When adding new order types or changing payload fields
*/

use serde_json::{Value, json};

use crate::http::{Result, SbeeClient};
use crate::types::{
    CancelOrderRequest, ExchangeCredentials, LimitOrderRequest, MarketOrderRequest,
    StopOrderRequest, TradeCategory,
};

impl SbeeClient {
    /// Place a limit buy or sell order.
    ///
    /// POST /Crypto/{Exchange}/{Trade}/PlaceLimitOrder
    pub async fn place_limit_order(
        &self,
        exchange: &str,
        trade: TradeCategory,
        request: &LimitOrderRequest,
    ) -> Result<Value> {
        let url = self.exchange_url(exchange, trade, "PlaceLimitOrder", &[])?;
        self.post("PlaceLimitOrder", url, request).await
    }

    /// Execute a buy or sell at market price. Futures orders carry leverage
    /// and contract fields through `request.futures`; spot orders never do.
    ///
    /// POST /Crypto/{Exchange}/{Trade}/PlaceMarketOrder
    pub async fn place_market_order(
        &self,
        exchange: &str,
        trade: TradeCategory,
        request: &MarketOrderRequest,
    ) -> Result<Value> {
        let url = self.exchange_url(exchange, trade, "PlaceMarketOrder", &[])?;
        self.post("PlaceMarketOrder", url, request).await
    }

    /// Place a stop-loss limit order.
    ///
    /// POST /Crypto/{Exchange}/{Trade}/PlaceLimitStopLossOrder
    pub async fn place_limit_stop_loss_order(
        &self,
        exchange: &str,
        trade: TradeCategory,
        request: &StopOrderRequest,
    ) -> Result<Value> {
        let url = self.exchange_url(exchange, trade, "PlaceLimitStopLossOrder", &[])?;
        self.post("PlaceLimitStopLossOrder", url, request).await
    }

    /// Place a take-profit limit order.
    ///
    /// POST /Crypto/{Exchange}/{Trade}/PlaceLimitTakeProfitOrder
    pub async fn place_limit_take_profit_order(
        &self,
        exchange: &str,
        trade: TradeCategory,
        request: &StopOrderRequest,
    ) -> Result<Value> {
        let url = self.exchange_url(exchange, trade, "PlaceLimitTakeProfitOrder", &[])?;
        self.post("PlaceLimitTakeProfitOrder", url, request).await
    }

    /// Define the leverage value for a futures symbol.
    ///
    /// POST /Crypto/{Exchange}/{Trade}/SetLeverage
    pub async fn set_leverage(
        &self,
        exchange: &str,
        trade: TradeCategory,
        symbol: &str,
        leverage: &str,
        credentials: &ExchangeCredentials,
    ) -> Result<Value> {
        let url = self.exchange_url(exchange, trade, "SetLeverage", &[])?;
        let body = json!({
            "apiKey": credentials.api_key,
            "apiSecret": credentials.api_secret,
            "apiPass": credentials.api_pass,
            "symbol": symbol,
            "leverage": leverage,
        });
        self.post("SetLeverage", url, &body).await
    }

    /// Cancel one order by exchange id or client id.
    ///
    /// POST /Crypto/{Exchange}/{Trade}/CancelOrder
    pub async fn cancel_order(
        &self,
        exchange: &str,
        trade: TradeCategory,
        request: &CancelOrderRequest,
    ) -> Result<Value> {
        let url = self.exchange_url(exchange, trade, "CancelOrder", &[])?;
        self.post("CancelOrder", url, request).await
    }

    /// Cancel every open order on a symbol.
    ///
    /// POST /Crypto/{Exchange}/{Trade}/CancelOrdersBySymbol
    pub async fn cancel_orders_by_symbol(
        &self,
        exchange: &str,
        trade: TradeCategory,
        symbol: &str,
        credentials: &ExchangeCredentials,
    ) -> Result<Value> {
        let url = self.exchange_url(exchange, trade, "CancelOrdersBySymbol", &[])?;
        let body = json!({
            "symbol": symbol,
            "apiKey": credentials.api_key,
            "apiSecret": credentials.api_secret,
            "apiPass": credentials.api_pass,
        });
        self.post("CancelOrdersBySymbol", url, &body).await
    }
}
