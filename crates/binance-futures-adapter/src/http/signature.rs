/*
[INPUT]:  Request query parameters and the account secret key
[OUTPUT]: Signed query strings (HMAC-SHA256, hex)
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or parameter format
*/

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::types::ApiCredentials;

type HmacSha256 = Hmac<Sha256>;

/// Signs request query strings for authenticated endpoints
pub struct RequestSigner<'a> {
    credentials: &'a ApiCredentials,
}

impl<'a> RequestSigner<'a> {
    pub fn new(credentials: &'a ApiCredentials) -> Self {
        Self { credentials }
    }

    /// HMAC-SHA256 of the message with the secret key, lowercase hex
    pub fn sign(&self, message: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.credentials.expose_secret().as_bytes())
            .expect("HMAC accepts keys of any size");
        mac.update(message.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Build a signed query string.
    ///
    /// Parameter order is preserved, `timestamp` is appended last, and the
    /// signature over the resulting query is appended after it.
    pub fn signed_query(&self, params: &[(&str, String)], timestamp_ms: i64) -> String {
        let mut query_parts: Vec<String> = params
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        query_parts.push(format!("timestamp={timestamp_ms}"));

        let query_string = query_parts.join("&");
        let signature = self.sign(&query_string);
        format!("{query_string}&signature={signature}")
    }
}
