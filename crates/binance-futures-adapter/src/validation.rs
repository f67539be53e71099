/*
[INPUT]:  Raw primitive trading parameters (strings, floats, integers)
[OUTPUT]: Validated request objects or a field-level validation failure
[POS]:    Validation layer - gates every parameter set before any network call
[UPDATE]: When order constraints or credential rules change
*/

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

use crate::types::{
    ApiCredentials, CancelOrderRequest, LeverageRequest, LimitOrderRequest, MarketOrderRequest,
    OrderSide, Symbol, TimeInForce,
};

/// Quantity precision accepted by the exchange filters we target
const QUANTITY_MAX_DECIMAL_PLACES: u32 = 3;
const QUANTITY_MAX_DIGITS: u32 = 8;

/// Price precision accepted by the exchange filters we target
const PRICE_MAX_DECIMAL_PLACES: u32 = 2;
const PRICE_MAX_DIGITS: u32 = 10;

const LEVERAGE_MIN: u32 = 1;
const LEVERAGE_MAX: u32 = 125;

const API_KEY_LEN: usize = 64;

/// A rejected parameter set. Carries the logical field that failed and a
/// human-readable reason; raised before any network access, so it never
/// reflects exchange state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation error in '{field}': {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate market order parameters.
///
/// Symbol and side must belong to their closed sets; quantity must be
/// positive with at most 3 decimal places and 8 digits.
pub fn validate_market_order(
    symbol: &str,
    side: &str,
    quantity: f64,
) -> ValidationResult<MarketOrderRequest> {
    let symbol = parse_symbol(symbol)?;
    let side = parse_side(side)?;
    let quantity = validate_quantity(quantity)?;

    Ok(MarketOrderRequest::new(symbol, side, quantity))
}

/// Validate limit order parameters.
///
/// Same rules as market orders, plus a positive price with at most
/// 2 decimal places and 10 digits, and a known time-in-force.
pub fn validate_limit_order(
    symbol: &str,
    side: &str,
    quantity: f64,
    price: f64,
    time_in_force: &str,
) -> ValidationResult<LimitOrderRequest> {
    let symbol = parse_symbol(symbol)?;
    let side = parse_side(side)?;
    let quantity = validate_quantity(quantity)?;
    let price = validate_price(price)?;
    let time_in_force = TimeInForce::from_str(time_in_force)
        .map_err(|err| ValidationError::new("time_in_force", err.to_string()))?;

    Ok(LimitOrderRequest::new(
        symbol,
        side,
        quantity,
        price,
        time_in_force,
    ))
}

/// Validate order cancellation parameters.
pub fn validate_cancel_order(symbol: &str, order_id: i64) -> ValidationResult<CancelOrderRequest> {
    let symbol = parse_symbol(symbol)?;
    if order_id <= 0 {
        return Err(ValidationError::new(
            "order_id",
            "order id must be a positive integer",
        ));
    }

    Ok(CancelOrderRequest::new(symbol, order_id))
}

/// Validate API credentials.
///
/// Keys must be exactly 64 alphanumeric characters; the base URL must use
/// an http(s) scheme.
pub fn validate_credentials(
    api_key: &str,
    secret_key: &str,
    base_url: &str,
) -> ValidationResult<ApiCredentials> {
    validate_key("api_key", api_key)?;
    validate_key("secret_key", secret_key)?;

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ValidationError::new(
            "base_url",
            "base URL must start with http:// or https://",
        ));
    }

    Ok(ApiCredentials::new(
        api_key.to_string(),
        secret_key.to_string(),
        base_url.to_string(),
    ))
}

/// Validate leverage adjustment parameters. Boundary values 1 and 125 are
/// accepted.
pub fn validate_leverage(symbol: &str, leverage: u32) -> ValidationResult<LeverageRequest> {
    let symbol = parse_symbol(symbol)?;
    if !(LEVERAGE_MIN..=LEVERAGE_MAX).contains(&leverage) {
        return Err(ValidationError::new(
            "leverage",
            format!("leverage must be between {LEVERAGE_MIN} and {LEVERAGE_MAX}"),
        ));
    }

    Ok(LeverageRequest::new(symbol, leverage))
}

/// Validate symbol membership alone, for query operations that carry no
/// other parameters. The set is closed; no request may reference a symbol
/// outside it.
pub fn validate_symbol(symbol: &str) -> ValidationResult<Symbol> {
    parse_symbol(symbol)
}

fn parse_symbol(symbol: &str) -> ValidationResult<Symbol> {
    Symbol::from_str(symbol).map_err(|err| ValidationError::new("symbol", err.to_string()))
}

fn parse_side(side: &str) -> ValidationResult<OrderSide> {
    OrderSide::from_str(side).map_err(|err| ValidationError::new("side", err.to_string()))
}

fn validate_quantity(quantity: f64) -> ValidationResult<Decimal> {
    let quantity = to_decimal("quantity", quantity)?;
    if quantity <= Decimal::ZERO {
        return Err(ValidationError::new(
            "quantity",
            "quantity must be greater than zero",
        ));
    }
    check_precision(
        "quantity",
        quantity,
        QUANTITY_MAX_DECIMAL_PLACES,
        QUANTITY_MAX_DIGITS,
    )?;
    Ok(quantity)
}

fn validate_price(price: f64) -> ValidationResult<Decimal> {
    let price = to_decimal("price", price)?;
    if price <= Decimal::ZERO {
        return Err(ValidationError::new(
            "price",
            "price must be greater than zero",
        ));
    }
    check_precision("price", price, PRICE_MAX_DECIMAL_PLACES, PRICE_MAX_DIGITS)?;
    Ok(price)
}

fn validate_key(field: &str, key: &str) -> ValidationResult<()> {
    if key.len() != API_KEY_LEN {
        return Err(ValidationError::new(
            field,
            format!("key must be exactly {API_KEY_LEN} characters"),
        ));
    }
    if !key.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::new(
            field,
            "key must contain only alphanumeric characters",
        ));
    }
    Ok(())
}

/// Convert float input to its exact decimal representation.
///
/// The `{}` formatting of an f64 yields the shortest string that round-trips,
/// which is the literal the operator typed for any value a CLI produces.
/// Checking precision on that decimal, not on the binary double, keeps
/// 0.001 at three decimal places instead of its binary expansion.
fn to_decimal(field: &str, value: f64) -> ValidationResult<Decimal> {
    if !value.is_finite() {
        return Err(ValidationError::new(field, "value must be a finite number"));
    }
    Decimal::from_str(&format!("{value}"))
        .map_err(|err| ValidationError::new(field, err.to_string()))
}

fn check_precision(
    field: &str,
    value: Decimal,
    max_decimal_places: u32,
    max_digits: u32,
) -> ValidationResult<()> {
    let normalized = value.normalize();
    let decimal_places = normalized.scale();
    if decimal_places > max_decimal_places {
        return Err(ValidationError::new(
            field,
            format!("{field} must have at most {max_decimal_places} decimal places"),
        ));
    }

    // Digit count matches the exchange filter convention: leading zeros of a
    // sub-unit value count toward the fractional digits.
    let mantissa_digits = normalized.mantissa().unsigned_abs().to_string().len() as u32;
    let digits = mantissa_digits.max(decimal_places);
    if digits > max_digits {
        return Err(ValidationError::new(
            field,
            format!("{field} must have at most {max_digits} digits"),
        ));
    }

    Ok(())
}
