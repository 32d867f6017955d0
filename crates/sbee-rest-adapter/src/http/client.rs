/*
[INPUT]:  HTTP configuration (base URL, timeouts, bearer token)
[OUTPUT]: Configured reqwest client plus the generic request pipeline
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing pipeline behavior
*/

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::http::{Result, SbeeError};
use crate::types::TradeCategory;

/// Default base URL for the SBEE aggregation service
const DEFAULT_BASE_URL: &str = "https://api.sbee.io/api";

/// HTTP client configuration.
///
/// Timeouts are a hardening addition over the upstream contract, which leaves
/// transport tuning entirely unspecified.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the SBEE REST API.
///
/// Holds only the immutable base URL / bearer token pair, so one instance can
/// be shared freely across tasks. Each method call issues exactly one request
/// and runs to completion; there is no queuing, retrying, or cancellation.
#[derive(Debug)]
pub struct SbeeClient {
    http_client: Client,
    base_url: Url,
    bearer_token: String,
}

impl SbeeClient {
    /// Create a new client against the production base URL.
    ///
    /// The bearer token is the aggregator credential issued by www.sbee.io;
    /// there is no default and the library never acquires one itself.
    pub fn new(bearer_token: impl Into<String>) -> Result<Self> {
        Self::with_config(bearer_token, ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    pub fn with_config(bearer_token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(SbeeError::Config(format!(
                "base URL {} cannot carry endpoint paths",
                config.base_url
            )));
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| SbeeError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url,
            bearer_token: bearer_token.into(),
        })
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an absolute URL from path segments and query parameters.
    ///
    /// All string values go through the standard form-urlencoding, unlike the
    /// upstream reference clients which escaped only the news language field.
    pub(crate) fn api_url(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| SbeeError::Config("base URL cannot carry endpoint paths".into()))?;
            path.pop_if_empty().extend(segments);
        }
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// URL for an exchange-scoped operation: `/Crypto/{Exchange}/{Trade}/{Operation}`.
    pub(crate) fn exchange_url(
        &self,
        exchange: &str,
        trade: TradeCategory,
        operation: &str,
        query: &[(&str, String)],
    ) -> Result<Url> {
        self.api_url(&["Crypto", exchange, trade.as_str(), operation], query)
    }

    /// URL for an aggregated operation: `/Crypto/MultiMarket/{Trade}/{Operation}`.
    pub(crate) fn multi_market_url(&self, trade: TradeCategory, operation: &str) -> Result<Url> {
        self.api_url(&["Crypto", "MultiMarket", trade.as_str(), operation], &[])
    }

    /// Issue a GET and decode the JSON response.
    pub(crate) async fn get(&self, op: &'static str, url: Url) -> Result<Value> {
        self.execute(op, Method::GET, url, None).await
    }

    /// Serialize `body` and POST it.
    pub(crate) async fn post<T: Serialize + ?Sized>(
        &self,
        op: &'static str,
        url: Url,
        body: &T,
    ) -> Result<Value> {
        let body = serde_json::to_string(body).map_err(|source| SbeeError::Serialize { op, source })?;
        self.execute(op, Method::POST, url, Some(body)).await
    }

    /// POST a pre-serialized JSON body verbatim.
    pub(crate) async fn post_raw(&self, op: &'static str, url: Url, body: String) -> Result<Value> {
        self.execute(op, Method::POST, url, Some(body)).await
    }

    /// The generic request pipeline every operation funnels through.
    ///
    /// Sends one request, reads the whole body, decodes it as JSON. The HTTP
    /// status code is deliberately not inspected: the service reports failures
    /// inside the JSON body regardless of status, so the decode step is the
    /// only error signal past the transport.
    pub(crate) async fn execute(
        &self,
        op: &'static str,
        method: Method,
        url: Url,
        body: Option<String>,
    ) -> Result<Value> {
        if method != Method::GET && method != Method::POST {
            return Err(SbeeError::UnsupportedMethod {
                method: method.to_string(),
            });
        }

        debug!(operation = op, method = %method, path = url.path(), "sending request");

        // accept: text/plain mirrors the documented upstream contract even
        // though every response body is JSON.
        let mut request = self
            .http_client
            .request(method, url)
            .header(ACCEPT, "text/plain")
            .bearer_auth(&self.bearer_token);
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json-patch+json")
                .body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|source| SbeeError::Transport { op, source })?;
        let bytes = response
            .bytes()
            .await
            .map_err(|source| SbeeError::Transport { op, source })?;

        debug!(operation = op, bytes = bytes.len(), "response received");

        serde_json::from_slice(&bytes).map_err(|source| SbeeError::Decode { op, source })
    }
}
