/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
[UPDATE]: 2026-07-30 split futures-only market order fields into FuturesParams
*/

use serde::{Deserialize, Serialize};

/// Per-exchange API credentials, forwarded verbatim as request fields.
///
/// The service contract is plaintext passthrough; the pipeline never logs or
/// persists these. They are distinct from the aggregator bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeCredentials {
    pub api_key: String,
    pub api_secret: String,
    pub api_pass: String,
}

impl ExchangeCredentials {
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        api_pass: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            api_pass: api_pass.into(),
        }
    }
}

/// Millisecond time bounds for k-line queries.
///
/// The service accepts the bounds only as a pair; modeling them as one value
/// makes a lone start or end time unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    pub start_time: String,
    pub end_time: String,
}

impl TimeRange {
    pub fn new(start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }
}

/// Limit order payload for `PlaceLimitOrder`.
///
/// `ClientOrderId` keeps its upstream capitalization; every other field is
/// camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrderRequest {
    #[serde(flatten)]
    pub credentials: ExchangeCredentials,
    pub symbol: String,
    #[serde(rename = "ClientOrderId")]
    pub client_order_id: String,
    pub price: String,
    pub quote_quantity: String,
    pub base_quantity: String,
    pub side: String,
}

/// Leverage settings that only apply to futures market orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesParams {
    pub leverage: u32,
    pub contract: u32,
}

/// Market order payload for `PlaceMarketOrder`.
///
/// Spot orders leave `futures` unset and the leverage/contract fields never
/// reach the wire; futures orders set it and both fields are flattened in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderRequest {
    #[serde(flatten)]
    pub credentials: ExchangeCredentials,
    pub symbol: String,
    #[serde(rename = "ClientOrderId")]
    pub client_order_id: String,
    pub price: String,
    pub quote_quantity: String,
    pub base_quantity: String,
    pub side: String,
    #[serde(flatten)]
    pub futures: Option<FuturesParams>,
}

/// Shared payload for `PlaceLimitStopLossOrder` and `PlaceLimitTakeProfitOrder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopOrderRequest {
    #[serde(flatten)]
    pub credentials: ExchangeCredentials,
    pub symbol: String,
    pub quantity: String,
    #[serde(rename = "ClientOrderId")]
    pub client_order_id: String,
    pub stop_price: String,
    pub order_price: String,
    pub price: String,
    pub trailing_delta: String,
    pub side: String,
}

/// Payload for `CancelOrder`; one of the two identifiers may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    #[serde(flatten)]
    pub credentials: ExchangeCredentials,
    pub symbol: String,
    pub order_id: String,
    pub client_order_id: String,
}

/// One technical-indicator descriptor for `KlineFormation`.
///
/// Field names are PascalCase on the wire; unused periods are omitted, so a
/// `MAX` entry carries only `TimePeriod`/`Source` while `MACD` carries the
/// fast/slow/signal trio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formation {
    #[serde(rename = "Formation")]
    pub formation: String,
    #[serde(rename = "TimePeriod", skip_serializing_if = "Option::is_none")]
    pub time_period: Option<u32>,
    #[serde(rename = "Source", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "FastPeriod", skip_serializing_if = "Option::is_none")]
    pub fast_period: Option<u32>,
    #[serde(rename = "SlowPeriod", skip_serializing_if = "Option::is_none")]
    pub slow_period: Option<u32>,
    #[serde(rename = "SignalPeriod", skip_serializing_if = "Option::is_none")]
    pub signal_period: Option<u32>,
}

impl Formation {
    pub fn new(formation: impl Into<String>) -> Self {
        Self {
            formation: formation.into(),
            ..Self::default()
        }
    }
}

/// Payload for `KlineFormation`.
///
/// The time bounds serialize as explicit nulls when no range is supplied;
/// the private fields plus [`with_time_range`](Self::with_time_range) keep a
/// lone bound unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KlineFormationRequest {
    pub symbol: String,
    pub interval: String,
    pub limit: u32,
    start_time: Option<String>,
    end_time: Option<String>,
    pub formations: Vec<Formation>,
}

impl KlineFormationRequest {
    pub fn new(
        symbol: impl Into<String>,
        interval: impl Into<String>,
        limit: u32,
        formations: Vec<Formation>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            interval: interval.into(),
            limit,
            start_time: None,
            end_time: None,
            formations,
        }
    }

    /// Restrict the query to a start/end pair.
    pub fn with_time_range(mut self, range: TimeRange) -> Self {
        self.start_time = Some(range.start_time);
        self.end_time = Some(range.end_time);
        self
    }

    /// Both bounds, when set.
    pub fn time_range(&self) -> Option<(&str, &str)> {
        match (&self.start_time, &self.end_time) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

/// Shared body for the `/Crypto/MultiMarket/{Trade}/...` operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiMarketQuery {
    pub symbol: String,
    pub depth: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    pub exchanges: Vec<String>,
}
