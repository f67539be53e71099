/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Binance futures adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod bot;
pub mod http;
pub mod types;
pub mod validation;

// Re-export the facade and its error surface
pub use bot::{BotError, BotResult, FuturesBot};

// Re-export commonly used types from http
pub use http::{BinanceError, ClientConfig, RequestSigner, Result, UmFuturesClient};

// Re-export all types
pub use types::*;

// Re-export the validation layer
pub use validation::{
    ValidationError, ValidationResult, validate_cancel_order, validate_credentials,
    validate_leverage, validate_limit_order, validate_market_order, validate_symbol,
};
