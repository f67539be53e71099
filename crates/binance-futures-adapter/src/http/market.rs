/*
[INPUT]:  Symbol identifiers
[OUTPUT]: Market data (ticker prices)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use reqwest::Method;

use crate::http::{Result, UmFuturesClient};
use crate::types::TickerPrice;

impl UmFuturesClient {
    /// Latest price for a symbol
    ///
    /// GET /fapi/v1/ticker/price?symbol={symbol}
    pub async fn ticker_price(&self, symbol: &str) -> Result<TickerPrice> {
        let query = format!("symbol={symbol}");
        let builder = self.public_request(Method::GET, "/fapi/v1/ticker/price", Some(&query))?;
        self.send_json(builder).await
    }
}
