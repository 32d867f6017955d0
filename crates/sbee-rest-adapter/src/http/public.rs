/*
[INPUT]:  Exchange name, trade category and query parameters
[OUTPUT]: Market data documents (time, trades, books, klines, metadata)
[POS]:    HTTP layer - public market data endpoints
[UPDATE]: When adding new public endpoints or changing query parameters
*/

use serde_json::Value;

use crate::http::{Result, SbeeClient};
use crate::types::{KlineFormationRequest, TimeRange, TradeCategory};

impl SbeeClient {
    /// Exchange server time.
    ///
    /// GET /Crypto/{Exchange}/SystemTime
    pub async fn system_time(&self, exchange: &str) -> Result<Value> {
        let url = self.api_url(&["Crypto", exchange, "SystemTime"], &[])?;
        self.get("SystemTime", url).await
    }

    /// Recently fulfilled buy and sell orders for a symbol.
    ///
    /// GET /Crypto/{Exchange}/{Trade}/RecentTrades?symbol={symbol}&depth={depth}
    pub async fn recent_trades(
        &self,
        exchange: &str,
        trade: TradeCategory,
        symbol: &str,
        depth: u32,
    ) -> Result<Value> {
        let url = self.exchange_url(
            exchange,
            trade,
            "RecentTrades",
            &[
                ("symbol", symbol.to_string()),
                ("depth", depth.to_string()),
            ],
        )?;
        self.get("RecentTrades", url).await
    }

    /// All tradable pairs and their quantity or price scales.
    ///
    /// GET /Crypto/{Exchange}/{Trade}/Currencies
    pub async fn currencies(&self, exchange: &str, trade: TradeCategory) -> Result<Value> {
        let url = self.exchange_url(exchange, trade, "Currencies", &[])?;
        self.get("Currencies", url).await
    }

    /// Open orders snapshot (price levels and quantities) for a symbol.
    ///
    /// GET /Crypto/{Exchange}/{Trade}/OrderBook?symbol={symbol}&depth={depth}
    pub async fn order_book(
        &self,
        exchange: &str,
        trade: TradeCategory,
        symbol: &str,
        depth: u32,
    ) -> Result<Value> {
        let url = self.exchange_url(
            exchange,
            trade,
            "OrderBook",
            &[
                ("symbol", symbol.to_string()),
                ("depth", depth.to_string()),
            ],
        )?;
        self.get("OrderBook", url).await
    }

    /// Latest price, best bid/ask and 24h volume snapshot.
    ///
    /// GET /Crypto/{Exchange}/{Trade}/Tickers?symbol={symbol}
    pub async fn tickers(
        &self,
        exchange: &str,
        trade: TradeCategory,
        symbol: &str,
    ) -> Result<Value> {
        let url = self.exchange_url(
            exchange,
            trade,
            "Tickers",
            &[("symbol", symbol.to_string())],
        )?;
        self.get("Tickers", url).await
    }

    /// Historical candlesticks. The optional range carries both bounds or
    /// neither; they never reach the query string alone.
    ///
    /// GET /Crypto/{Exchange}/{Trade}/KLine?symbol=&interval=&startTime=&endTime=&limit=
    pub async fn kline(
        &self,
        exchange: &str,
        trade: TradeCategory,
        symbol: &str,
        interval: &str,
        range: Option<&TimeRange>,
        limit: u32,
    ) -> Result<Value> {
        let mut query = vec![
            ("symbol", symbol.to_string()),
            ("interval", interval.to_string()),
        ];
        if let Some(range) = range {
            query.push(("startTime", range.start_time.clone()));
            query.push(("endTime", range.end_time.clone()));
        }
        query.push(("limit", limit.to_string()));

        let url = self.exchange_url(exchange, trade, "KLine", &query)?;
        self.get("KLine", url).await
    }

    /// Candlesticks decorated with technical-indicator formations.
    ///
    /// POST /Crypto/{Exchange}/{Trade}/KlineFormation
    pub async fn kline_formation(
        &self,
        exchange: &str,
        trade: TradeCategory,
        request: &KlineFormationRequest,
    ) -> Result<Value> {
        let url = self.exchange_url(exchange, trade, "KlineFormation", &[])?;
        self.post("KlineFormation", url, request).await
    }

    /// Exchanges known to the aggregator and their service endpoints.
    ///
    /// GET /Crypto/Info/Markets
    pub async fn markets(&self) -> Result<Value> {
        let url = self.api_url(&["Crypto", "Info", "Markets"], &[])?;
        self.get("Markets", url).await
    }

    /// Fiat currency cross rates.
    ///
    /// GET /Fintech/MoneyPairValues
    pub async fn money_pair_values(&self) -> Result<Value> {
        let url = self.api_url(&["Fintech", "MoneyPairValues"], &[])?;
        self.get("MoneyPairValues", url).await
    }

    /// Paginated news listing.
    ///
    /// GET /Crypto/News/List?language={language}&pageSize={pageSize}&pageNumber={pageNumber}
    pub async fn news(&self, language: &str, page_size: u32, page_number: u32) -> Result<Value> {
        let url = self.api_url(
            &["Crypto", "News", "List"],
            &[
                ("language", language.to_string()),
                ("pageSize", page_size.to_string()),
                ("pageNumber", page_number.to_string()),
            ],
        )?;
        self.get("News", url).await
    }

    /// Country listing.
    ///
    /// GET /Crypto/Country/List
    pub async fn countries(&self) -> Result<Value> {
        let url = self.api_url(&["Crypto", "Country", "List"], &[])?;
        self.get("Country", url).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, SbeeClient, SbeeError};
    use crate::types::TradeCategory;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SbeeClient {
        let config = ClientConfig {
            base_url: format!("{}/api", server.uri()),
            ..ClientConfig::default()
        };
        SbeeClient::with_config("test-token", config).expect("client init")
    }

    #[tokio::test]
    async fn test_tickers_decodes_document_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/Crypto/Binance/Spot/Tickers"))
            .and(query_param("symbol", "BTC-USDT"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("accept", "text/plain"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"symbol":"BTC-USDT","price":"27000"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let document = client
            .tickers("Binance", TradeCategory::Spot, "BTC-USDT")
            .await
            .expect("tickers failed");

        assert_eq!(document, json!({"symbol": "BTC-USDT", "price": "27000"}));
    }

    #[tokio::test]
    async fn test_kline_range_appears_as_a_pair_or_not_at_all() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/Crypto/Binance/Futures/KLine"))
            .and(query_param("symbol", "BTC-USDT"))
            .and(query_param("interval", "1h"))
            .and(query_param("limit", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candles": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client
            .kline("Binance", TradeCategory::Futures, "BTC-USDT", "1h", None, 10)
            .await
            .expect("kline failed");

        let requests = server.received_requests().await.expect("recorded requests");
        let query = requests[0].url.query().unwrap_or_default();
        assert!(!query.contains("startTime"));
        assert!(!query.contains("endTime"));
    }

    #[tokio::test]
    async fn test_news_language_is_percent_encoded() {
        let server = MockServer::start().await;
        // wiremock matches on the decoded value; the raw query is checked below.
        Mock::given(method("GET"))
            .and(path("/api/Crypto/News/List"))
            .and(query_param("language", "en US"))
            .and(query_param("pageSize", "20"))
            .and(query_param("pageNumber", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"news": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.news("en US", 20, 1).await.expect("news failed");

        let requests = server.received_requests().await.expect("recorded requests");
        let query = requests[0].url.query().unwrap_or_default();
        assert!(!query.contains("en US"));
    }

    #[tokio::test]
    async fn test_error_status_body_still_decodes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/Crypto/Binance/Spot/Currencies"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"ERROR": "exchange offline"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let document = client
            .currencies("Binance", TradeCategory::Spot)
            .await
            .expect("status must not be inspected");

        assert_eq!(document["ERROR"], "exchange offline");
    }

    #[tokio::test]
    async fn test_non_json_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/Crypto/Binance/SystemTime"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("<html>busy</html>", "text/html"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .system_time("Binance")
            .await
            .expect_err("html body must fail decoding");

        assert!(err.is_decode());
        assert!(!err.is_transport());
        assert_eq!(err.operation(), Some("SystemTime"));
    }

    #[tokio::test]
    async fn test_connect_failure_is_tagged_with_operation() {
        // Reserve a port, then close the listener so the connection is refused.
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let config = ClientConfig {
            base_url: format!("{uri}/api"),
            ..ClientConfig::default()
        };
        let client = SbeeClient::with_config("test-token", config).expect("client init");
        let err = client
            .system_time("Binance")
            .await
            .expect_err("connect must fail");

        assert!(err.is_transport());
        assert!(err.to_string().contains("SystemTime"));
        match err {
            SbeeError::Transport { op, .. } => assert_eq!(op, "SystemTime"),
            other => panic!("expected Transport, got {other:?}"),
        }
    }
}
