/*
[INPUT]:  Binance USDT-M futures schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "BUY",
            OrderSide::Sell => "SELL",
        }
    }

    /// Side that closes a position opened with this side
    pub fn inverse(&self) -> Self {
        match self {
            OrderSide::Buy => OrderSide::Sell,
            OrderSide::Sell => OrderSide::Buy,
        }
    }
}

impl FromStr for OrderSide {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "BUY" => Ok(OrderSide::Buy),
            "SELL" => Ok(OrderSide::Sell),
            other => Err(UnknownVariant::new("side", other)),
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order types - restricted to MARKET and LIMIT even though the exchange
/// supports more
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    Market,
    Limit,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time in force for limit orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
    /// Good till cancelled
    Gtc,
    /// Immediate or cancel
    Ioc,
    /// Fill or kill
    Fok,
}

impl TimeInForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::Gtc => "GTC",
            TimeInForce::Ioc => "IOC",
            TimeInForce::Fok => "FOK",
        }
    }
}

impl FromStr for TimeInForce {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "GTC" => Ok(TimeInForce::Gtc),
            "IOC" => Ok(TimeInForce::Ioc),
            "FOK" => Ok(TimeInForce::Fok),
            other => Err(UnknownVariant::new("time_in_force", other)),
        }
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported trading pairs. The set is closed: anything else is rejected
/// before reaching the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Symbol {
    Btcusdt,
    Ethusdt,
    Bnbusdt,
    Adausdt,
    Dogeusdt,
    Solusdt,
}

impl Symbol {
    pub const ALL: [Symbol; 6] = [
        Symbol::Btcusdt,
        Symbol::Ethusdt,
        Symbol::Bnbusdt,
        Symbol::Adausdt,
        Symbol::Dogeusdt,
        Symbol::Solusdt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Btcusdt => "BTCUSDT",
            Symbol::Ethusdt => "ETHUSDT",
            Symbol::Bnbusdt => "BNBUSDT",
            Symbol::Adausdt => "ADAUSDT",
            Symbol::Dogeusdt => "DOGEUSDT",
            Symbol::Solusdt => "SOLUSDT",
        }
    }
}

impl FromStr for Symbol {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        // Exact match; case normalization is the caller's responsibility
        Symbol::ALL
            .into_iter()
            .find(|symbol| symbol.as_str() == value)
            .ok_or_else(|| UnknownVariant::new("symbol", value))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse failure for the closed enum sets above
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub field: &'static str,
    pub value: String,
}

impl UnknownVariant {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid {}", self.value, self.field)
    }
}

impl std::error::Error for UnknownVariant {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_parses_exact_match_only() {
        assert_eq!("BTCUSDT".parse::<Symbol>(), Ok(Symbol::Btcusdt));
        assert!("btcusdt".parse::<Symbol>().is_err());
        assert!("XRPUSDT".parse::<Symbol>().is_err());
    }

    #[test]
    fn side_inverse_flips() {
        assert_eq!(OrderSide::Buy.inverse(), OrderSide::Sell);
        assert_eq!(OrderSide::Sell.inverse(), OrderSide::Buy);
    }

    #[test]
    fn enums_serialize_to_wire_strings() {
        assert_eq!(
            serde_json::to_string(&OrderType::Market).unwrap(),
            r#""MARKET""#
        );
        assert_eq!(
            serde_json::to_string(&TimeInForce::Gtc).unwrap(),
            r#""GTC""#
        );
        assert_eq!(
            serde_json::to_string(&Symbol::Dogeusdt).unwrap(),
            r#""DOGEUSDT""#
        );
    }
}
