/*
[INPUT]:  Field-checked trading parameters from the validation layer
[OUTPUT]: Immutable request objects whose existence proves their constraints
[POS]:    Data layer - validated request types for outbound trading calls
[UPDATE]: When request constraints or trading operations change
*/

use rust_decimal::Decimal;

use super::enums::{OrderSide, OrderType, Symbol, TimeInForce};

// Fields are private on purpose: the only constructors live in the
// `validation` module, so holding one of these values means every field
// constraint already holds and downstream code must not re-validate.

/// A market order that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct MarketOrderRequest {
    symbol: Symbol,
    side: OrderSide,
    quantity: Decimal,
}

impl MarketOrderRequest {
    pub(crate) fn new(symbol: Symbol, side: OrderSide, quantity: Decimal) -> Self {
        Self {
            symbol,
            side,
            quantity,
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn side(&self) -> OrderSide {
        self.side
    }

    pub fn order_type(&self) -> OrderType {
        OrderType::Market
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }
}

/// A limit order that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct LimitOrderRequest {
    symbol: Symbol,
    side: OrderSide,
    quantity: Decimal,
    price: Decimal,
    time_in_force: TimeInForce,
}

impl LimitOrderRequest {
    pub(crate) fn new(
        symbol: Symbol,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
        time_in_force: TimeInForce,
    ) -> Self {
        Self {
            symbol,
            side,
            quantity,
            price,
            time_in_force,
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn side(&self) -> OrderSide {
        self.side
    }

    pub fn order_type(&self) -> OrderType {
        OrderType::Limit
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn time_in_force(&self) -> TimeInForce {
        self.time_in_force
    }
}

/// An order cancellation that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelOrderRequest {
    symbol: Symbol,
    order_id: i64,
}

impl CancelOrderRequest {
    pub(crate) fn new(symbol: Symbol, order_id: i64) -> Self {
        Self { symbol, order_id }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn order_id(&self) -> i64 {
        self.order_id
    }
}

/// A leverage change that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeverageRequest {
    symbol: Symbol,
    leverage: u32,
}

impl LeverageRequest {
    pub(crate) fn new(symbol: Symbol, leverage: u32) -> Self {
        Self { symbol, leverage }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn leverage(&self) -> u32 {
        self.leverage
    }
}

/// API credentials that passed validation
#[derive(Clone)]
pub struct ApiCredentials {
    api_key: String,
    secret_key: String,
    base_url: String,
}

impl ApiCredentials {
    pub(crate) fn new(api_key: String, secret_key: String, base_url: String) -> Self {
        Self {
            api_key,
            secret_key,
            base_url,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Secret key bytes for request signing. Deliberately not exposed via
    /// Debug.
    pub fn expose_secret(&self) -> &str {
        &self.secret_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &format_args!("{}...", &self.api_key[..4]))
            .field("secret_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
