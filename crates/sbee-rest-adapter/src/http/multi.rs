/*
[INPUT]:  Multi-market queries (symbol, depth, exchange list)
[OUTPUT]: Aggregated order book and trade documents across exchanges
[POS]:    HTTP layer - multi-exchange aggregation endpoints
[UPDATE]: When adding new aggregation operations
*/

use serde_json::Value;

use crate::http::{Result, SbeeClient};
use crate::types::{MultiMarketQuery, TradeCategory};

impl SbeeClient {
    /// Depth of buy and sell orders for one asset across several exchanges.
    ///
    /// POST /Crypto/MultiMarket/{Trade}/OrderBook
    pub async fn multi_order_book(
        &self,
        trade: TradeCategory,
        query: &MultiMarketQuery,
    ) -> Result<Value> {
        let url = self.multi_market_url(trade, "OrderBook")?;
        self.post("MultiOrderBook", url, query).await
    }

    /// Recent trades for one asset across several exchanges.
    ///
    /// POST /Crypto/MultiMarket/{Trade}/RecentTrades
    pub async fn multi_recent_trades(
        &self,
        trade: TradeCategory,
        query: &MultiMarketQuery,
    ) -> Result<Value> {
        let url = self.multi_market_url(trade, "RecentTrades")?;
        self.post("MultiRecentTrades", url, query).await
    }

    /// Order book with stepped price-level increments.
    ///
    /// POST /Crypto/MultiMarket/{Trade}/SteppedOrderBook
    pub async fn stepped_order_book(
        &self,
        trade: TradeCategory,
        query: &MultiMarketQuery,
    ) -> Result<Value> {
        let url = self.multi_market_url(trade, "SteppedOrderBook")?;
        self.post("SteppedOrderBook", url, query).await
    }
}
