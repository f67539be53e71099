/*
[INPUT]:  Binance USDT-M futures JSON payloads
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - response models for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order response returned by order placement, cancellation and open-order
/// queries. Fields the client does not act on (status strings, position
/// side) pass through as opaque text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: i64,
    pub symbol: String,
    pub status: String,
    #[serde(default)]
    pub client_order_id: String,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub price: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub avg_price: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub orig_qty: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub executed_qty: Decimal,
    #[serde(default)]
    pub side: String,
    #[serde(default, rename = "type")]
    pub order_type: String,
    #[serde(default)]
    pub time_in_force: String,
    #[serde(default)]
    pub reduce_only: bool,
    #[serde(default)]
    pub update_time: i64,
}

/// One row of GET /fapi/v2/positionRisk. The exchange returns a row per
/// symbol even with zero exposure; `position_amt` of exactly zero means no
/// position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRisk {
    pub symbol: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub position_amt: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub entry_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub mark_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub un_realized_profit: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_u32_from_str",
        serialize_with = "serde_helpers::serialize_u32_as_str"
    )]
    pub leverage: u32,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub liquidation_price: Decimal,
    #[serde(default)]
    pub margin_type: String,
    #[serde(default)]
    pub position_side: String,
    #[serde(default)]
    pub update_time: i64,
}

/// Net signed exposure to a symbol, derived from a non-zero PositionRisk
/// row. Positive amount = long, negative = short.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub symbol: String,
    pub amount: Decimal,
    pub entry_price: Decimal,
    pub mark_price: Decimal,
    pub unrealized_pnl: Decimal,
    pub leverage: u32,
}

impl From<&PositionRisk> for Position {
    fn from(row: &PositionRisk) -> Self {
        Self {
            symbol: row.symbol.clone(),
            amount: row.position_amt,
            entry_price: row.entry_price,
            mark_price: row.mark_price,
            unrealized_pnl: row.un_realized_profit,
            leverage: row.leverage,
        }
    }
}

/// One asset entry of GET /fapi/v2/account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAsset {
    pub asset: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub wallet_balance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub available_balance: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub unrealized_profit: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub margin_balance: Decimal,
}

/// Account state, reduced to the asset list the client consumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub assets: Vec<AccountAsset>,
    #[serde(default)]
    pub can_trade: bool,
    #[serde(default)]
    pub can_deposit: bool,
    #[serde(default)]
    pub can_withdraw: bool,
}

/// GET /fapi/v1/ticker/price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerPrice {
    pub symbol: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(default)]
    pub time: i64,
}

/// DELETE /fapi/v1/allOpenOrders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelAllResponse {
    pub code: i64,
    pub msg: String,
}

/// POST /fapi/v1/leverage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeLeverageResponse {
    pub leverage: u32,
    pub max_notional_value: String,
    pub symbol: String,
}

mod serde_helpers {
    use super::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;
    use std::str::FromStr;

    pub fn deserialize_decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Decimal::ZERO);
        }

        if let Some(raw) = value.as_str() {
            if raw.trim().is_empty() {
                return Ok(Decimal::ZERO);
            }
            return Decimal::from_str(raw).map_err(serde::de::Error::custom);
        }

        if value.is_number() {
            return Decimal::from_str(&value.to_string()).map_err(serde::de::Error::custom);
        }

        Err(serde::de::Error::custom("invalid decimal value"))
    }

    pub fn serialize_decimal<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize_u32_from_str<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<u32>().map_err(serde::de::Error::custom)
    }

    pub fn serialize_u32_as_str<S>(value: &u32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn position_risk_deserializes_exchange_row() {
        let value = json!({
            "entryPrice": "41250.50",
            "marginType": "cross",
            "isAutoAddMargin": "false",
            "isolatedMargin": "0.00000000",
            "leverage": "20",
            "liquidationPrice": "0",
            "markPrice": "41300.12345678",
            "maxNotionalValue": "20000000",
            "positionAmt": "-0.500",
            "symbol": "BTCUSDT",
            "unRealizedProfit": "-24.81000000",
            "positionSide": "BOTH",
            "updateTime": 1625474304765i64
        });

        let row: PositionRisk = serde_json::from_value(value).expect("row should deserialize");

        assert_eq!(row.symbol, "BTCUSDT");
        assert_eq!(row.position_amt, "-0.500".parse::<Decimal>().unwrap());
        assert_eq!(row.leverage, 20);
        assert_eq!(
            row.un_realized_profit,
            "-24.81".parse::<Decimal>().unwrap()
        );
    }

    #[test]
    fn zero_amount_row_keeps_exact_zero() {
        let value = json!({
            "entryPrice": "0.00000",
            "leverage": "10",
            "markPrice": "6679.50671178",
            "positionAmt": "0.000",
            "symbol": "ETHUSDT",
            "unRealizedProfit": "0.00000000"
        });

        let row: PositionRisk = serde_json::from_value(value).expect("row should deserialize");
        assert_eq!(row.position_amt, Decimal::ZERO);
    }

    #[test]
    fn order_response_tolerates_missing_optionals() {
        let value = json!({
            "orderId": 22542179,
            "symbol": "BTCUSDT",
            "status": "NEW",
            "clientOrderId": "x-abc",
            "price": "0",
            "origQty": "0.001",
            "executedQty": "0",
            "side": "BUY",
            "type": "MARKET"
        });

        let order: OrderResponse = serde_json::from_value(value).expect("order should deserialize");

        assert_eq!(order.order_id, 22542179);
        assert_eq!(order.avg_price, Decimal::ZERO);
        assert_eq!(order.orig_qty, "0.001".parse::<Decimal>().unwrap());
        assert!(order.time_in_force.is_empty());
    }

    #[test]
    fn position_from_row_preserves_sign() {
        let row = PositionRisk {
            symbol: "SOLUSDT".to_string(),
            position_amt: "-1.250".parse().unwrap(),
            entry_price: "150.10".parse().unwrap(),
            mark_price: "149.90".parse().unwrap(),
            un_realized_profit: "0.25".parse().unwrap(),
            leverage: 5,
            liquidation_price: Decimal::ZERO,
            margin_type: "cross".to_string(),
            position_side: "BOTH".to_string(),
            update_time: 0,
        };

        let position = Position::from(&row);
        assert_eq!(position.amount, "-1.25".parse::<Decimal>().unwrap());
        assert_eq!(position.leverage, 5);
    }
}
