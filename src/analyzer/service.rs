//! Analyzer facade: the whole triage pipeline behind one call.
//!
//! `analyze` runs strictly in sequence:
//! 1. Check the credential (fails before any I/O)
//! 2. Build the prompt
//! 3. Call the provider with retries
//! 4. Unwrap, sanitize and validate the response
//!
//! The analyzer owns its settings and client; nothing is shared between
//! calls, and each successful call hands a fresh [`AnalysisResult`] to the
//! caller.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use super::client::{request_url, ResilientClient};
use super::error::{AnalysisError, ClientError, ConfigError};
use super::parser;
use super::prompt::build_prompt;
use super::result::{AnalysisResult, SchemaVersion};
use super::retry::RetryPolicy;
use super::transport::{ReqwestTransport, Transport};
use crate::pacing::Pacer;

/// Default `generateContent` endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent";

/// Environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_AI_KEY";

/// Options for building an [`Analyzer`].
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Full `generateContent` URL, without the key
    pub endpoint: String,
    /// Provider credential; `None` or empty fails every analysis
    pub api_key: Option<String>,
    /// Name of the variable the credential is expected in (for errors)
    pub api_key_env: String,
    /// Result shape requested in the prompt
    pub schema: SchemaVersion,
    /// Timeout for a single HTTP attempt
    pub request_timeout: Duration,
    /// Retry behavior
    pub retry: RetryPolicy,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            schema: SchemaVersion::default(),
            request_timeout: Duration::from_secs(60),
            retry: RetryPolicy::default(),
        }
    }
}

impl AnalyzeOptions {
    /// Options with the given credential and defaults for everything else.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Set the endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the requested result schema.
    pub fn schema(mut self, schema: SchemaVersion) -> Self {
        self.schema = schema;
        self
    }

    /// Set the per-request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the retry policy.
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// The credential, or the config error raised when it is absent.
    pub fn credential(&self) -> Result<&str, ConfigError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ConfigError::MissingCredential {
                env_var: self.api_key_env.clone(),
            }),
        }
    }
}

/// Runs log triage against the AI provider.
#[derive(Debug)]
pub struct Analyzer {
    options: AnalyzeOptions,
    client: ResilientClient,
}

impl Analyzer {
    /// Create an analyzer that sends requests through `transport`.
    pub fn new(options: AnalyzeOptions, transport: Box<dyn Transport>, pacer: Arc<dyn Pacer>) -> Self {
        let client = ResilientClient::new(transport, pacer, options.retry.clone());
        Self { options, client }
    }

    /// Create an analyzer backed by a blocking `reqwest` client.
    pub fn with_http(options: AnalyzeOptions, pacer: Arc<dyn Pacer>) -> Result<Self, AnalysisError> {
        let transport = ReqwestTransport::new(options.request_timeout).map_err(ClientError::Setup)?;
        Ok(Self::new(options, Box::new(transport), pacer))
    }

    /// Get the analyzer options.
    pub fn options(&self) -> &AnalyzeOptions {
        &self.options
    }

    /// Triage `log_text` and return the provider's verdict.
    pub fn analyze(&self, log_text: &str) -> Result<AnalysisResult, AnalysisError> {
        let api_key = self.options.credential()?;
        let url = request_url(&self.options.endpoint, api_key)?;

        let prompt = build_prompt(self.options.schema, log_text);
        info!(
            schema = %self.options.schema,
            log_bytes = log_text.len(),
            prompt_bytes = prompt.len(),
            "analyzing logs"
        );

        let raw = self.client.call(&url, &prompt)?;
        debug!(response_bytes = raw.len(), "AI response received");

        Ok(parser::parse(&raw)?)
    }
}
