//! HTTP transport for the AI provider.
//!
//! The retrying client talks to the network only through [`Transport`], so
//! tests can script replies (and network failures) without a server.
//! [`ReqwestTransport`] is the production implementation on top of
//! `reqwest::blocking`.

use std::time::Duration;

use super::error::RequestError;

/// A completed HTTP exchange: status code and the full response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a JSON body with POST (Strategy pattern).
///
/// Implementations return `Ok` for every response that was read completely,
/// whatever its status, and `Err(RequestError::Network)` when the exchange
/// itself failed (connect, TLS, timeout, body read).
pub trait Transport: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// POST `body` as `application/json` to `url`.
    fn post_json(&self, url: &str, body: &str) -> Result<HttpReply, RequestError>;
}

/// Blocking `reqwest` transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Build a transport whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, RequestError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("loggar/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RequestError::Network(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    fn post_json(&self, url: &str, body: &str) -> Result<HttpReply, RequestError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_owned())
            .send()
            // Strip the URL: it carries the API key in its query string.
            .map_err(|e| RequestError::Network(e.without_url().to_string()))?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| {
            RequestError::Network(format!(
                "failed to read response body: {}",
                e.without_url()
            ))
        })?;

        Ok(HttpReply { status, body })
    }
}
