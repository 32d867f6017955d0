/*
[INPUT]:  SBEE_TOKEN environment variable, symbol identifier
[OUTPUT]: Market data (server time, ticker, order book, aggregated book)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use sbee_rest_adapter::{MultiMarketQuery, SbeeClient, TradeCategory};

/// Example: query market data through the aggregator.
///
/// Requires a bearer token from www.sbee.io in the SBEE_TOKEN variable.
#[tokio::main]
async fn main() {
    println!("=== SBEE Market Data Example ===\n");

    let token = match std::env::var("SBEE_TOKEN") {
        Ok(t) => t,
        Err(_) => {
            eprintln!("Set SBEE_TOKEN to your bearer token first");
            return;
        }
    };

    let client = match SbeeClient::new(token) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created\n");

    let symbol = "BTC-USDT";

    println!("Querying Binance server time...");
    match client.system_time("Binance").await {
        Ok(time) => println!("✓ System time: {}", time),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying ticker for {}...", symbol);
    match client.tickers("Binance", TradeCategory::Spot, symbol).await {
        Ok(ticker) => println!("✓ Ticker: {}", ticker),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying order book for {}...", symbol);
    match client
        .order_book("Binance", TradeCategory::Spot, symbol, 20)
        .await
    {
        Ok(book) => println!("✓ Order book: {}", book),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying aggregated order book across exchanges...");
    let query = MultiMarketQuery {
        symbol: symbol.to_string(),
        depth: 50,
        precision: Some(3),
        exchanges: vec![
            "Binance".to_string(),
            "Kraken".to_string(),
            "KuCoin".to_string(),
        ],
    };
    match client.multi_order_book(TradeCategory::Spot, &query).await {
        Ok(book) => println!("✓ Aggregated book: {}", book),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
