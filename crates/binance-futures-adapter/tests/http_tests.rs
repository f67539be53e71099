/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use common::{mock_api_key, order_body, setup_mock_server};

use binance_futures_adapter::{
    ClientConfig, OrderSide, OrderType, TimeInForce, UmFuturesClient, validate_credentials,
};
use rust_decimal::Decimal;
use tokio_test::assert_ok;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn client_for(uri: &str) -> UmFuturesClient {
    let credentials =
        validate_credentials(&mock_api_key(), &mock_api_key(), uri).expect("test credentials");
    UmFuturesClient::new(credentials).expect("client init")
}

#[test]
fn test_client_creation() {
    let credentials = assert_ok!(validate_credentials(
        &mock_api_key(),
        &mock_api_key(),
        "https://testnet.binancefuture.com",
    ));
    let client = assert_ok!(UmFuturesClient::with_config(
        credentials,
        ClientConfig::default(),
    ));
    assert_eq!(client.api_key(), mock_api_key());
}

#[tokio::test]
async fn test_new_order_sends_signed_query_and_api_key() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .and(query_param("symbol", "BTCUSDT"))
        .and(query_param("side", "BUY"))
        .and(query_param("type", "LIMIT"))
        .and(query_param("quantity", "0.001"))
        .and(query_param("timeInForce", "GTC"))
        .and(query_param("price", "35000"))
        .and(query_param("recvWindow", "5000"))
        .and(header_exists("X-MBX-APIKEY"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(order_body(7, "BTCUSDT", "BUY", "0.001")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let response = client
        .new_order(
            "BTCUSDT",
            OrderSide::Buy,
            OrderType::Limit,
            "0.001".parse::<Decimal>().unwrap(),
            Some(TimeInForce::Gtc),
            Some("35000".parse::<Decimal>().unwrap()),
        )
        .await
        .expect("new_order failed");

    assert_eq!(response.order_id, 7);
    assert_eq!(response.status, "NEW");
}

#[tokio::test]
async fn test_cancel_order() {
    let server = setup_mock_server().await;
    Mock::given(method("DELETE"))
        .and(path("/fapi/v1/order"))
        .and(query_param("symbol", "ETHUSDT"))
        .and(query_param("orderId", "42"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(order_body(42, "ETHUSDT", "SELL", "0.5")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let response = client
        .cancel_order("ETHUSDT", 42)
        .await
        .expect("cancel_order failed");

    assert_eq!(response.order_id, 42);
}

#[tokio::test]
async fn test_cancel_open_orders() {
    let server = setup_mock_server().await;
    Mock::given(method("DELETE"))
        .and(path("/fapi/v1/allOpenOrders"))
        .and(query_param("symbol", "BTCUSDT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 200,
            "msg": "The operation of cancel all open order is done."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let response = client
        .cancel_open_orders("BTCUSDT")
        .await
        .expect("cancel_open_orders failed");

    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_get_orders() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/fapi/v1/openOrders"))
        .and(query_param("symbol", "DOGEUSDT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            order_body(1, "DOGEUSDT", "BUY", "100"),
            order_body(2, "DOGEUSDT", "SELL", "50")
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let orders = client.get_orders("DOGEUSDT").await.expect("get_orders failed");

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].order_id, 1);
    assert_eq!(orders[1].side, "SELL");
}

#[tokio::test]
async fn test_unparsable_error_body_keeps_status_and_text() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/fapi/v2/account"))
        .respond_with(ResponseTemplate::new(503).set_body_string("service unavailable"))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let err = client.account().await.expect_err("503 should error");

    match err {
        binance_futures_adapter::BinanceError::Api { code, message } => {
            assert_eq!(code, 503);
            assert_eq!(message, "service unavailable");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
