/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for binance-futures-adapter tests

use binance_futures_adapter::FuturesBot;
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// 64-character alphanumeric key accepted by credential validation
pub fn mock_api_key() -> String {
    "A1b2C3d4".repeat(8)
}

/// A facade wired against the given mock server
#[allow(dead_code)]
pub fn bot_for(server: &MockServer) -> FuturesBot {
    FuturesBot::new(&mock_api_key(), &mock_api_key(), &server.uri())
        .expect("facade should build against mock server")
}

/// Position risk row as returned by GET /fapi/v2/positionRisk
#[allow(dead_code)]
pub fn position_row(symbol: &str, amount: &str) -> serde_json::Value {
    serde_json::json!({
        "symbol": symbol,
        "positionAmt": amount,
        "entryPrice": "41250.50",
        "markPrice": "41300.10",
        "unRealizedProfit": "-24.81",
        "leverage": "20",
        "liquidationPrice": "0",
        "marginType": "cross",
        "positionSide": "BOTH",
        "updateTime": 1625474304765i64
    })
}

/// Account body as returned by GET /fapi/v2/account
#[allow(dead_code)]
pub fn account_body(assets: &[(&str, &str)]) -> serde_json::Value {
    let assets: Vec<serde_json::Value> = assets
        .iter()
        .map(|(asset, balance)| {
            serde_json::json!({
                "asset": asset,
                "walletBalance": balance,
                "availableBalance": balance,
                "unrealizedProfit": "0.00000000",
                "marginBalance": balance
            })
        })
        .collect();
    serde_json::json!({
        "assets": assets,
        "canTrade": true,
        "canDeposit": true,
        "canWithdraw": true
    })
}

/// Order body as returned by POST /fapi/v1/order
#[allow(dead_code)]
pub fn order_body(order_id: i64, symbol: &str, side: &str, qty: &str) -> serde_json::Value {
    serde_json::json!({
        "orderId": order_id,
        "symbol": symbol,
        "status": "NEW",
        "clientOrderId": "x-test",
        "price": "0",
        "avgPrice": "0.00000",
        "origQty": qty,
        "executedQty": "0",
        "side": side,
        "type": "MARKET",
        "timeInForce": "GTC",
        "reduceOnly": false,
        "updateTime": 1625474304765i64
    })
}
