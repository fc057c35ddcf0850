//! loggar library
//!
//! AI-powered log triage: build a prompt from raw logs, call a generative AI
//! endpoint with retries, validate the JSON verdict and render it as an
//! animated terminal report.

pub mod analyzer;
pub mod api;
pub mod cli;
pub mod config;
pub mod pacing;
pub mod render;
pub mod theme;

pub use analyzer::{AnalysisError, AnalysisResult, AnalyzeOptions, Analyzer, SchemaVersion};
pub use config::Config;
pub use pacing::{InstantPacer, Pacer, RealTimePacer};
pub use render::Renderer;
pub use theme::Theme;
