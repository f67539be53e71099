/*
[INPUT]:  Error sources (HTTP transport, exchange error bodies, serialization)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error type for the HTTP client
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Binance futures client
#[derive(Error, Debug)]
pub enum BinanceError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Exchange returned an error response ({"code": ..., "msg": ...})
    #[error("API error (code {code}): {message}")]
    Api { code: i64, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BinanceError {
    /// Create an API error from an HTTP status and a message body
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        BinanceError::Api {
            code: i64::from(status.as_u16()),
            message: message.into(),
        }
    }

    /// Check if the exchange rejected the request for credential reasons
    pub fn is_auth_error(&self) -> bool {
        // -2014 bad API key format, -2015 invalid key/IP/permissions
        matches!(self, BinanceError::Api { code, .. } if *code == -2014 || *code == -2015)
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, BinanceError>;
