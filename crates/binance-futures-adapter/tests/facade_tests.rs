/*
[INPUT]:  Mock exchange responses
[OUTPUT]: Test results for the trading facade contract
[POS]:    Integration tests - facade operations over a mock exchange
[UPDATE]: When facade operations or error semantics change
*/

mod common;

use common::{account_body, bot_for, order_body, position_row, setup_mock_server};

use binance_futures_adapter::BotError;
use rust_decimal::Decimal;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn balance_returns_exact_value_when_asset_present() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/fapi/v2/account"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(account_body(&[("USDT", "23.72469206"), ("BNB", "1.5")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let balance = bot.balance("USDT").await.expect("balance failed");

    assert_eq!(balance, "23.72469206".parse::<Decimal>().unwrap());
}

#[tokio::test]
async fn balance_returns_zero_when_asset_absent() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/fapi/v2/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_body(&[("BNB", "1.5")])))
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let balance = bot.balance("USDT").await.expect("balance failed");

    assert_eq!(balance, Decimal::ZERO);
}

#[tokio::test]
async fn position_is_none_when_amount_is_zero() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/fapi/v2/positionRisk"))
        .and(query_param("symbol", "BTCUSDT"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([position_row("BTCUSDT", "0.000")])),
        )
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let position = bot.position("BTCUSDT").await.expect("position failed");

    assert!(position.is_none());
}

#[tokio::test]
async fn position_preserves_signed_amount() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/fapi/v2/positionRisk"))
        .and(query_param("symbol", "ETHUSDT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            position_row("ETHUSDT", "0.000"),
            position_row("ETHUSDT", "-2.500")
        ])))
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let position = bot
        .position("ETHUSDT")
        .await
        .expect("position failed")
        .expect("position should be present");

    assert_eq!(position.amount, "-2.5".parse::<Decimal>().unwrap());
    assert_eq!(position.leverage, 20);
}

#[tokio::test]
async fn close_position_issues_buy_for_short() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/fapi/v2/positionRisk"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([position_row("BTCUSDT", "-0.500")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .and(query_param("symbol", "BTCUSDT"))
        .and(query_param("side", "BUY"))
        .and(query_param("type", "MARKET"))
        .and(query_param("quantity", "0.5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(order_body(101, "BTCUSDT", "BUY", "0.5")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let order = bot
        .close_position("BTCUSDT")
        .await
        .expect("close_position failed")
        .expect("order should be issued");

    assert_eq!(order.order_id, 101);
}

#[tokio::test]
async fn close_position_issues_sell_for_long() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/fapi/v2/positionRisk"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([position_row("SOLUSDT", "1.250")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .and(query_param("symbol", "SOLUSDT"))
        .and(query_param("side", "SELL"))
        .and(query_param("quantity", "1.25"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(order_body(102, "SOLUSDT", "SELL", "1.25")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let order = bot
        .close_position("SOLUSDT")
        .await
        .expect("close_position failed")
        .expect("order should be issued");

    assert_eq!(order.order_id, 102);
}

#[tokio::test]
async fn close_position_without_position_issues_no_order() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/fapi/v2/positionRisk"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([position_row("BTCUSDT", "0.000")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_body(1, "BTCUSDT", "BUY", "0")))
        .expect(0)
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let result = bot.close_position("BTCUSDT").await.expect("close_position failed");

    assert!(result.is_none());
}

#[tokio::test]
async fn close_position_fails_validation_for_sub_step_amount() {
    // A held amount finer than the 3-decimal-place quantity rule must be
    // rejected by the validated order path, not sent to the exchange
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/fapi/v2/positionRisk"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([position_row("BTCUSDT", "-0.0005")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_body(1, "BTCUSDT", "BUY", "0")))
        .expect(0)
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let err = bot
        .close_position("BTCUSDT")
        .await
        .expect_err("sub-step amount should fail validation");

    match err {
        BotError::Validation(validation) => assert_eq!(validation.field, "quantity"),
        other => panic!("expected Validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn exchange_rejection_surfaces_as_runtime_with_original_message() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"code": -2019, "msg": "Margin is insufficient."})),
        )
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let err = bot
        .place_market_order("BTCUSDT", "BUY", 0.001)
        .await
        .expect_err("rejection should surface");

    match err {
        BotError::Runtime { message } => {
            assert!(message.contains("Margin is insufficient."), "message: {message}");
        }
        other => panic!("expected Runtime error, got {other:?}"),
    }
}

#[tokio::test]
async fn validation_failure_issues_no_network_call() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_body(1, "BTCUSDT", "BUY", "0")))
        .expect(0)
        .mount(&server)
        .await;

    let bot = bot_for(&server);

    let err = bot
        .place_market_order("BTCUSDT", "BUY", 0.0011)
        .await
        .expect_err("precision violation should fail");
    assert!(matches!(err, BotError::Validation(_)));

    let err = bot
        .place_limit_order("BTCUSDT", "SELL", 0.001, 35000.123, "GTC")
        .await
        .expect_err("price precision violation should fail");
    assert!(matches!(err, BotError::Validation(_)));

    let err = bot
        .place_market_order("XRPUSDT", "BUY", 0.001)
        .await
        .expect_err("unknown symbol should fail");
    assert!(matches!(err, BotError::Validation(_)));
}

#[tokio::test]
async fn set_leverage_round_trips() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/leverage"))
        .and(query_param("symbol", "ADAUSDT"))
        .and(query_param("leverage", "125"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "leverage": 125,
            "maxNotionalValue": "50000",
            "symbol": "ADAUSDT"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let response = bot
        .set_leverage("ADAUSDT", 125)
        .await
        .expect("set_leverage failed");

    assert_eq!(response.leverage, 125);
    assert_eq!(response.symbol, "ADAUSDT");
}

#[tokio::test]
async fn facade_construction_fails_on_bad_credentials() {
    let err = binance_futures_adapter::FuturesBot::new("short", &"a".repeat(64), "https://x")
        .expect_err("short key should fail");
    match err {
        BotError::Validation(validation) => assert_eq!(validation.field, "api_key"),
        other => panic!("expected Validation error, got {other:?}"),
    }
}
