/*
[INPUT]:  Validated order parameters with signed query strings
[OUTPUT]: Order responses and confirmations
[POS]:    HTTP layer - signed trading endpoints
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use reqwest::Method;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::http::{Result, UmFuturesClient};
use crate::types::{
    CancelAllResponse, ChangeLeverageResponse, OrderResponse, OrderSide, OrderType, TimeInForce,
};

impl UmFuturesClient {
    /// Place a new order
    ///
    /// POST /fapi/v1/order
    ///
    /// `time_in_force` and `price` are required for LIMIT orders and must
    /// be absent for MARKET orders; the caller (trading facade) guarantees
    /// the combination. Every order carries a fresh client order id.
    pub async fn new_order(
        &self,
        symbol: &str,
        side: OrderSide,
        order_type: OrderType,
        quantity: Decimal,
        time_in_force: Option<TimeInForce>,
        price: Option<Decimal>,
    ) -> Result<OrderResponse> {
        let client_order_id = Uuid::new_v4().to_string();
        let mut params: Vec<(&str, String)> = vec![
            ("symbol", symbol.to_string()),
            ("side", side.as_str().to_string()),
            ("type", order_type.as_str().to_string()),
            ("quantity", quantity.to_string()),
            ("newClientOrderId", client_order_id.clone()),
        ];
        if let Some(tif) = time_in_force {
            params.push(("timeInForce", tif.as_str().to_string()));
        }
        if let Some(price) = price {
            params.push(("price", price.to_string()));
        }

        let builder = self.signed_request(Method::POST, "/fapi/v1/order", &params)?;
        let response: OrderResponse = self.send_json(builder).await?;

        info!(
            order_id = response.order_id,
            status = %response.status,
            client_order_id = %client_order_id,
            "order accepted by exchange"
        );
        Ok(response)
    }

    /// Cancel an existing order
    ///
    /// DELETE /fapi/v1/order
    pub async fn cancel_order(&self, symbol: &str, order_id: i64) -> Result<OrderResponse> {
        let params = [
            ("symbol", symbol.to_string()),
            ("orderId", order_id.to_string()),
        ];
        let builder = self.signed_request(Method::DELETE, "/fapi/v1/order", &params)?;
        self.send_json(builder).await
    }

    /// Cancel all open orders for a symbol
    ///
    /// DELETE /fapi/v1/allOpenOrders
    pub async fn cancel_open_orders(&self, symbol: &str) -> Result<CancelAllResponse> {
        let params = [("symbol", symbol.to_string())];
        let builder = self.signed_request(Method::DELETE, "/fapi/v1/allOpenOrders", &params)?;
        self.send_json(builder).await
    }

    /// Change leverage for a symbol
    ///
    /// POST /fapi/v1/leverage
    pub async fn change_leverage(
        &self,
        symbol: &str,
        leverage: u32,
    ) -> Result<ChangeLeverageResponse> {
        let params = [
            ("symbol", symbol.to_string()),
            ("leverage", leverage.to_string()),
        ];
        let builder = self.signed_request(Method::POST, "/fapi/v1/leverage", &params)?;
        self.send_json(builder).await
    }
}
