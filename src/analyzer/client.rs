//! Retrying client for the generative-language `generateContent` endpoint.
//!
//! One call is a sequence of strictly sequential attempts:
//!
//! 1. Pause according to [`RetryPolicy`] (nothing before the first attempt)
//! 2. POST the request body; the API key travels in the `key` query parameter
//! 3. 2xx: return the body
//! 4. Network error, 429 or 5xx: remember it and try again
//! 5. Any other status: fail immediately with status and body
//!
//! When every attempt failed transiently the last error is wrapped in
//! [`ClientError::Exhausted`].

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use super::error::{is_retryable_status, ClientError, ConfigError, RequestError};
use super::retry::RetryPolicy;
use super::transport::Transport;
use crate::pacing::Pacer;

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f64 = 0.2;

/// Output token budget sent with every request.
pub const MAX_OUTPUT_TOKENS: u32 = 2048;

/// `generateContent` request body.
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Part<'a> {
    pub text: &'a str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenerationConfig {
    pub temperature: f64,
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }
}

impl<'a> GenerateRequest<'a> {
    /// Single-turn request carrying `prompt` as its only part.
    pub fn new(prompt: &'a str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig::default(),
        }
    }
}

/// Build `<endpoint>?key=<api_key>` with the key percent-encoded.
pub fn request_url(endpoint: &str, api_key: &str) -> Result<String, ConfigError> {
    reqwest::Url::parse_with_params(endpoint, &[("key", api_key)])
        .map(String::from)
        .map_err(|e| ConfigError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })
}

/// Sends prompts to the provider, retrying transient failures.
pub struct ResilientClient {
    transport: Box<dyn Transport>,
    pacer: Arc<dyn Pacer>,
    policy: RetryPolicy,
}

impl ResilientClient {
    pub fn new(transport: Box<dyn Transport>, pacer: Arc<dyn Pacer>, policy: RetryPolicy) -> Self {
        Self {
            transport,
            pacer,
            policy,
        }
    }

    /// Get the retry policy.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// POST `prompt` to `url` and return the raw 2xx response body.
    ///
    /// `url` must already carry the API key (see [`request_url`]); it is
    /// never logged.
    pub fn call(&self, url: &str, prompt: &str) -> Result<String, ClientError> {
        let body = serde_json::to_string(&GenerateRequest::new(prompt))?;

        let mut attempt = 0;
        let mut last_error: Option<RequestError> = None;

        while self.policy.allows_attempt(attempt) {
            let delay = self.policy.delay_before_attempt(attempt);
            if !delay.is_zero() {
                debug!(
                    attempt = attempt + 1,
                    max_attempts = self.policy.max_attempts,
                    ?delay,
                    "retrying AI request after backoff"
                );
                self.pacer.pause(delay);
            }

            debug!(
                attempt = attempt + 1,
                transport = self.transport.name(),
                bytes = body.len(),
                "sending AI request"
            );

            let outcome = match self.transport.post_json(url, &body) {
                Ok(reply) if reply.is_success() => return Ok(reply.body),
                Ok(reply) if !is_retryable_status(reply.status) => {
                    warn!(status = reply.status, "AI request failed with a terminal status");
                    return Err(ClientError::Terminal {
                        status: reply.status,
                        body: reply.body,
                    });
                }
                Ok(reply) => RequestError::Status {
                    status: reply.status,
                    body: reply.body,
                },
                Err(e) => e,
            };

            warn!(attempt = attempt + 1, error = %outcome, "AI request failed, will retry");
            last_error = Some(outcome);
            attempt += 1;
        }

        Err(ClientError::Exhausted {
            attempts: attempt,
            last: last_error
                .unwrap_or_else(|| RequestError::Network("no attempt was made".to_string())),
        })
    }
}

impl std::fmt::Debug for ResilientClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResilientClient")
            .field("transport", &self.transport.name())
            .field("policy", &self.policy)
            .finish()
    }
}
