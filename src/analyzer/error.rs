//! Error types for the analysis pipeline.
//!
//! Every stage has its own error enum; [`AnalysisError`] wraps them with the
//! stage that failed so the caller sees "failed to call AI: ..." or
//! "failed to parse AI response: ..." without losing the source chain.
//!
//! # Categories
//!
//! - [`ConfigError`] - missing credential or bad endpoint, raised before any I/O
//! - [`RequestError`] - one failed HTTP attempt (network or non-2xx status)
//! - [`ClientError`] - terminal status or exhausted retries
//! - [`ParseError`] - empty envelope, malformed JSON, schema mismatch

use thiserror::Error;

/// Configuration problems detected before any network attempt.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{env_var} environment variable not set")]
    MissingCredential {
        /// Environment variable that was consulted
        env_var: String,
    },

    #[error("invalid AI endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

/// Outcome of a single failed HTTP attempt.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("network error: {0}")]
    Network(String),

    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },
}

impl RequestError {
    /// Network errors, rate limits (429) and server errors (5xx) may resolve
    /// on their own; everything else will fail the same way again.
    pub fn is_retryable(&self) -> bool {
        match self {
            RequestError::Network(_) => true,
            RequestError::Status { status, .. } => is_retryable_status(*status),
        }
    }
}

/// Rate limits (429) and server errors (5xx) are worth another attempt.
pub fn is_retryable_status(status: u16) -> bool {
    status == 429 || (500..600).contains(&status)
}

/// Failure of the retrying client as a whole.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("API request failed with status {status}: {body}")]
    Terminal { status: u16, body: String },

    #[error("all {attempts} retry attempts failed: {last}")]
    Exhausted {
        attempts: usize,
        #[source]
        last: RequestError,
    },

    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("HTTP client setup failed: {0}")]
    Setup(RequestError),
}

impl ClientError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Terminal { status, .. } => Some(*status),
            ClientError::Exhausted {
                last: RequestError::Status { status, .. },
                ..
            } => Some(*status),
            _ => None,
        }
    }
}

/// The provider answered, but not with a usable result.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no response content from AI")]
    EmptyResponse,

    #[error("malformed provider envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    #[error("result is not valid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("result is not a JSON object")]
    NotAnObject,

    #[error("result matches no known schema (expected 'summary' or 'primary_issue')")]
    UnknownShape,

    #[error("result does not match the {schema} schema: {source}")]
    SchemaMismatch {
        schema: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Error returned by [`crate::analyzer::Analyzer::analyze`].
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to call AI: {0}")]
    Call(#[from] ClientError),

    #[error("failed to parse AI response: {0}")]
    Parse(#[from] ParseError),
}

impl AnalysisError {
    /// True when the failure happened before any network I/O.
    pub fn is_config(&self) -> bool {
        matches!(self, AnalysisError::Config(_))
    }
}
