/*
[INPUT]:  SBEE_TOKEN plus per-exchange API credentials from the environment
[OUTPUT]: Order placement and cancellation round trip
[POS]:    Examples - authenticated trading flow
[UPDATE]: When the order flow or payload fields change
*/

use sbee_rest_adapter::{
    CancelOrderRequest, ExchangeCredentials, LimitOrderRequest, SbeeClient, TradeCategory,
};

/// Example: place a limit order and cancel it again.
///
/// Reads SBEE_TOKEN plus EXCHANGE_API_KEY / EXCHANGE_API_SECRET /
/// EXCHANGE_API_PASS. The credentials are forwarded to the aggregator as
/// request fields, per the service contract.
#[tokio::main]
async fn main() {
    println!("=== SBEE Trading Example ===\n");

    let token = match std::env::var("SBEE_TOKEN") {
        Ok(t) => t,
        Err(_) => {
            eprintln!("Set SBEE_TOKEN to your bearer token first");
            return;
        }
    };
    let credentials = ExchangeCredentials::new(
        std::env::var("EXCHANGE_API_KEY").unwrap_or_default(),
        std::env::var("EXCHANGE_API_SECRET").unwrap_or_default(),
        std::env::var("EXCHANGE_API_PASS").unwrap_or_default(),
    );

    let client = match SbeeClient::new(token) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    println!("Placing limit order...");
    let order = LimitOrderRequest {
        credentials: credentials.clone(),
        symbol: "BTC-USDT".to_string(),
        client_order_id: "ID3231".to_string(),
        price: "16000".to_string(),
        quote_quantity: "0".to_string(),
        base_quantity: "0.005".to_string(),
        side: "BUY".to_string(),
    };
    match client
        .place_limit_order("Binance", TradeCategory::Spot, &order)
        .await
    {
        Ok(result) => println!("✓ Placed: {}", result),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nCancelling it again...");
    let cancel = CancelOrderRequest {
        credentials,
        symbol: "BTC-USDT".to_string(),
        order_id: String::new(),
        client_order_id: "ID3231".to_string(),
    };
    match client
        .cancel_order("Binance", TradeCategory::Spot, &cancel)
        .await
    {
        Ok(result) => println!("✓ Cancelled: {}", result),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Trading example complete");
}
