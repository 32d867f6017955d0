/*
[INPUT]:  Batch order collections and pre-serialized JSON payloads
[OUTPUT]: One wire shape per batch operation regardless of input form
[POS]:    Data layer - batch and multi-credential payload types
[UPDATE]: When batch operations gain new order fields
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::requests::ExchangeCredentials;

/// Input contract for every batch operation.
///
/// The service accepts either a pre-serialized JSON payload or a structured
/// collection; both must produce the same bytes on the wire. Raw strings pass
/// through untouched, everything else serializes through serde.
pub trait BatchBody {
    fn into_batch_body(self) -> Result<String, serde_json::Error>;
}

impl BatchBody for String {
    fn into_batch_body(self) -> Result<String, serde_json::Error> {
        Ok(self)
    }
}

impl BatchBody for &str {
    fn into_batch_body(self) -> Result<String, serde_json::Error> {
        Ok(self.to_owned())
    }
}

impl BatchBody for Value {
    fn into_batch_body(self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self)
    }
}

impl<T: Serialize> BatchBody for &BatchOrders<T> {
    fn into_batch_body(self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<T: Serialize> BatchBody for BatchOrders<T> {
    fn into_batch_body(self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self)
    }
}

impl<T: Serialize> BatchBody for Vec<T> {
    fn into_batch_body(self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self)
    }
}

/// Single-wallet batch envelope: one credential set plus an order list.
///
/// An empty list still serializes as `"orders": []`; the service treats a
/// missing field as malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOrders<T> {
    #[serde(flatten)]
    pub credentials: ExchangeCredentials,
    pub orders: Vec<T>,
}

impl<T> BatchOrders<T> {
    pub fn new(credentials: ExchangeCredentials, orders: Vec<T>) -> Self {
        Self {
            credentials,
            orders,
        }
    }
}

/// One order in a `CancelBatchOrders` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderItem {
    pub symbol: String,
    pub order_id: String,
    pub client_order_id: String,
}

/// One order in a `PlaceBatchLimitOrders` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrderItem {
    pub symbol: String,
    pub client_order_id: String,
    pub price: String,
    pub quote_quantity: String,
    pub base_quantity: String,
    pub side: String,
}

/// One order in a `PlaceBatchMarketOrders` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderItem {
    pub symbol: String,
    pub quote_quantity: String,
    pub base_quantity: String,
    pub client_order_id: String,
    pub side: String,
}

/// One per-wallet entry for `CancelBatchOrdersForPeople`; the top-level wire
/// shape is a bare JSON array of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonCancelOrder {
    pub symbol: String,
    pub order_id: String,
    pub client_order_id: String,
    #[serde(flatten)]
    pub credentials: ExchangeCredentials,
}

/// One per-wallet entry for `PlaceLimitOrderForPeople`.
///
/// The order-id field is `cliOrId` upstream, unlike every sibling operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonLimitOrder {
    #[serde(flatten)]
    pub credentials: ExchangeCredentials,
    pub side: String,
    pub price: String,
    pub base_quantity: String,
    pub quote_quantity: String,
    #[serde(rename = "cliOrId")]
    pub cli_or_id: String,
    pub symbol: String,
}

/// One per-wallet entry for `TradingBalancesForPeople`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonBalanceQuery {
    pub symbol: String,
    #[serde(flatten)]
    pub credentials: ExchangeCredentials,
}

/// One per-wallet entry for `PlaceMarketOrderForPeople`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonMarketOrder {
    pub symbol: String,
    pub quote_quantity: String,
    pub base_quantity: String,
    #[serde(rename = "ClientOrderId")]
    pub client_order_id: String,
    pub side: String,
    #[serde(flatten)]
    pub credentials: ExchangeCredentials,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn credentials() -> ExchangeCredentials {
        ExchangeCredentials::new("key", "secret", "")
    }

    #[test]
    fn test_batch_orders_round_trip() {
        let batch = BatchOrders::new(
            credentials(),
            vec![
                LimitOrderItem {
                    symbol: "BTC-USDT".to_string(),
                    client_order_id: "ID123".to_string(),
                    price: "20000".to_string(),
                    quote_quantity: "0".to_string(),
                    base_quantity: "0.005".to_string(),
                    side: "BUY".to_string(),
                },
                LimitOrderItem {
                    symbol: "ETH-USDT".to_string(),
                    client_order_id: "ID124".to_string(),
                    price: "1800".to_string(),
                    quote_quantity: "0".to_string(),
                    base_quantity: "0.1".to_string(),
                    side: "SELL".to_string(),
                },
            ],
        );

        let bytes = serde_json::to_string(&batch).expect("serialize");
        let decoded: BatchOrders<LimitOrderItem> =
            serde_json::from_str(&bytes).expect("deserialize");
        assert_eq!(decoded, batch);
        assert_eq!(decoded.orders[1].symbol, "ETH-USDT");
    }

    #[test]
    fn test_raw_and_structured_payloads_match() {
        let batch = BatchOrders::new(
            credentials(),
            vec![CancelOrderItem {
                symbol: "BTC-USDT".to_string(),
                order_id: "ID124".to_string(),
                client_order_id: "ID123".to_string(),
            }],
        );
        let structured = batch.into_batch_body().expect("structured body");

        let raw: Value = serde_json::from_str(&structured).expect("parse");
        let from_raw = raw.to_string().into_batch_body().expect("raw body");

        assert_eq!(
            serde_json::from_str::<Value>(&structured).expect("structured json"),
            serde_json::from_str::<Value>(&from_raw).expect("raw json"),
        );
    }

    #[test]
    fn test_empty_order_list_keeps_array_field() {
        let batch: BatchOrders<CancelOrderItem> = BatchOrders::new(credentials(), Vec::new());
        let value = serde_json::to_value(&batch).expect("serialize");
        assert_eq!(value["orders"], json!([]));
    }

    #[test]
    fn test_people_orders_serialize_as_bare_array() {
        let people = vec![PersonMarketOrder {
            symbol: "BTC-USDT".to_string(),
            quote_quantity: "11".to_string(),
            base_quantity: "0".to_string(),
            client_order_id: "UD01".to_string(),
            side: "BUY".to_string(),
            credentials: credentials(),
        }];
        let value: Value =
            serde_json::from_str(&people.into_batch_body().expect("body")).expect("json");
        assert!(value.is_array());
        assert_eq!(value[0]["ClientOrderId"], "UD01");
        assert_eq!(value[0]["apiKey"], "key");
    }

    #[test]
    fn test_person_limit_order_uses_cli_or_id() {
        let order = PersonLimitOrder {
            credentials: credentials(),
            side: "buy".to_string(),
            price: "10000".to_string(),
            base_quantity: "0.001".to_string(),
            quote_quantity: "0".to_string(),
            cli_or_id: "UD01".to_string(),
            symbol: "BTC-USDT".to_string(),
        };
        let value = serde_json::to_value(&order).expect("serialize");
        assert_eq!(value["cliOrId"], "UD01");
        assert!(value.get("clientOrderId").is_none());
    }
}
