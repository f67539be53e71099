/*
[INPUT]:  HTTP configuration (timeouts) and validated API credentials
[OUTPUT]: Configured reqwest client ready for exchange calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::http::error::{BinanceError, Result};
use crate::http::signature::RequestSigner;
use crate::types::ApiCredentials;

/// Window in which the exchange accepts a signed timestamp
const RECV_WINDOW_MS: u64 = 5000;

/// API key header expected by Binance
const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the Binance USDT-M futures REST API.
///
/// The base URL comes from the validated credentials, so the same client
/// serves production and testnet.
#[derive(Debug)]
pub struct UmFuturesClient {
    http_client: Client,
    base_url: Url,
    credentials: ApiCredentials,
}

impl UmFuturesClient {
    /// Create a new client with default configuration
    pub fn new(credentials: ApiCredentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: ApiCredentials, config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        let base_url = Url::parse(credentials.base_url())?;

        Ok(Self {
            http_client,
            base_url,
            credentials,
        })
    }

    /// API key in use (for logging and diagnostics)
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn endpoint_url(&self, path: &str, query: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        url.set_query(query);
        Ok(url)
    }

    /// Build a request for a public (unsigned) endpoint
    pub(crate) fn public_request(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
    ) -> Result<RequestBuilder> {
        let url = self.endpoint_url(path, query)?;
        Ok(self.http_client.request(method, url))
    }

    /// Build a request for a signed endpoint.
    ///
    /// Appends recvWindow and timestamp, signs the query with the secret
    /// key, and attaches the API key header.
    pub(crate) fn signed_request(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<RequestBuilder> {
        let mut all_params: Vec<(&str, String)> = params.to_vec();
        all_params.push(("recvWindow", RECV_WINDOW_MS.to_string()));

        let signer = RequestSigner::new(&self.credentials);
        let signed_query = signer.signed_query(&all_params, timestamp_ms());

        let url = self.endpoint_url(path, Some(&signed_query))?;
        Ok(self
            .http_client
            .request(method, url)
            .header(API_KEY_HEADER, self.credentials.api_key()))
    }

    /// Send a request and decode the JSON response.
    ///
    /// Non-success statuses are mapped to `BinanceError::Api`, using the
    /// exchange's `{"code": ..., "msg": ...}` body when it parses and the
    /// raw body text otherwise.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if let Ok(api_error) = serde_json::from_str::<ApiErrorBody>(&body) {
                return Err(BinanceError::Api {
                    code: api_error.code,
                    message: api_error.msg,
                });
            }
            return Err(BinanceError::api_error(status, body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|err| BinanceError::InvalidResponse(format!("{err}: {body}")))
    }
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    code: i64,
    msg: String,
}

fn timestamp_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64
}
