/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public SBEE adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Async client for the SBEE exchange-aggregation REST API.
//!
//! One [`SbeeClient`] holds the base URL and bearer token; every endpoint is a
//! method returning the service's JSON reply as a dynamic
//! [`serde_json::Value`], since each of the ~30 operations has its own shape.
//!
//! ```rust,no_run
//! use sbee_rest_adapter::{SbeeClient, TradeCategory};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SbeeClient::new("your-bearer-token")?;
//!     let ticker = client.tickers("Binance", TradeCategory::Spot, "BTC-USDT").await?;
//!     println!("{ticker}");
//!     Ok(())
//! }
//! ```

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Result,
    SbeeClient,
    SbeeError,
};

// Re-export all types
pub use types::*;
