/*
[INPUT]:  Validation failures and exchange client errors
[OUTPUT]: The two-tier error surface of the trading facade
[POS]:    Error handling layer - facade error types
[UPDATE]: When error taxonomy changes
*/

use thiserror::Error;

use crate::validation::ValidationError;

/// Error surface of the trading facade.
///
/// Validation failures pass through unchanged so callers can tell bad input
/// from exchange rejection. Everything that happens after a network attempt
/// collapses into `Runtime` carrying the original message; the underlying
/// transport error type never leaks.
#[derive(Debug, Error)]
pub enum BotError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("runtime failure: {message}")]
    Runtime { message: String },
}

impl BotError {
    pub(crate) fn runtime(err: impl std::fmt::Display) -> Self {
        BotError::Runtime {
            message: err.to_string(),
        }
    }
}

/// Result type alias for facade operations
pub type BotResult<T> = std::result::Result<T, BotError>;
