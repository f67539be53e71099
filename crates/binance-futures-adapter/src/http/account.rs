/*
[INPUT]:  Query parameters and signed authentication
[OUTPUT]: Account data (assets, positions, open orders)
[POS]:    HTTP layer - signed account query endpoints
[UPDATE]: When adding new account endpoints or changing query parameters
*/

use reqwest::Method;

use crate::http::{Result, UmFuturesClient};
use crate::types::{AccountInfo, OrderResponse, PositionRisk};

impl UmFuturesClient {
    /// Current account state including the per-asset balance list
    ///
    /// GET /fapi/v2/account
    pub async fn account(&self) -> Result<AccountInfo> {
        let builder = self.signed_request(Method::GET, "/fapi/v2/account", &[])?;
        self.send_json(builder).await
    }

    /// Open orders for a symbol
    ///
    /// GET /fapi/v1/openOrders?symbol={symbol}
    pub async fn get_orders(&self, symbol: &str) -> Result<Vec<OrderResponse>> {
        let params = [("symbol", symbol.to_string())];
        let builder = self.signed_request(Method::GET, "/fapi/v1/openOrders", &params)?;
        self.send_json(builder).await
    }

    /// Position rows for a symbol. The exchange returns a row even with
    /// zero exposure; callers decide what a zero amount means.
    ///
    /// GET /fapi/v2/positionRisk?symbol={symbol}
    pub async fn get_position_risk(&self, symbol: &str) -> Result<Vec<PositionRisk>> {
        let params = [("symbol", symbol.to_string())];
        let builder = self.signed_request(Method::GET, "/fapi/v2/positionRisk", &params)?;
        self.send_json(builder).await
    }
}
