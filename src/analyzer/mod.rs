//! Log triage pipeline.
//!
//! Raw log text goes through three stages, each in its own module:
//!
//! - [`prompt`] - fixed instruction header + verbatim logs
//! - [`client`] - retrying POST to the provider ([`transport`] does the I/O,
//!   [`retry`] decides the backoff)
//! - [`parser`] - envelope unwrapping, fence stripping, schema validation
//!
//! [`Analyzer`] ties them together. Results are described in [`result`],
//! failures in [`error`].

pub mod client;
pub mod error;
pub mod parser;
pub mod prompt;
pub mod result;
pub mod retry;
pub mod service;
pub mod transport;

pub use client::ResilientClient;
pub use error::{AnalysisError, ClientError, ConfigError, ParseError, RequestError};
pub use prompt::build_prompt;
pub use result::{
    AnalysisResult, LikelyCause, NarrativeResult, PastIncident, Report, SchemaVersion, Section,
    StructuredResult,
};
pub use retry::RetryPolicy;
pub use service::{AnalyzeOptions, Analyzer, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT};
pub use transport::{HttpReply, ReqwestTransport, Transport};
