//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::analyzer::SchemaVersion;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// AI provider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    /// API base URL; the model path is appended to it
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Fallback key when the environment variable is unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Timeout for a single HTTP attempt in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Result shape requested from the model
    #[serde(default)]
    pub schema: SchemaVersion,
}

pub fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

pub fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

pub fn default_api_key_env() -> String {
    "GOOGLE_AI_KEY".to_string()
}

pub fn default_timeout_secs() -> u64 {
    60
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            schema: SchemaVersion::default(),
        }
    }
}

impl AiConfig {
    /// Full `generateContent` URL for the configured model.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model.trim()
        )
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("ai.endpoint must not be empty".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("ai.model must not be empty".to_string());
        }
        if self.api_key_env.trim().is_empty() {
            return Err("ai.api_key_env must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("ai.timeout_secs must be > 0".to_string());
        }
        if self.timeout_secs > 600 {
            return Err(format!(
                "ai.timeout_secs {} exceeds maximum (600s)",
                self.timeout_secs
            ));
        }
        Ok(())
    }
}

/// Backoff settings for provider calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Attempts in total, including the first
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

pub fn default_max_attempts() -> usize {
    5
}

pub fn default_initial_delay_ms() -> u64 {
    1000
}

pub fn default_max_delay_ms() -> u64 {
    10_000
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_delay_ms: default_initial_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

impl RetryConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("retry.max_attempts must be > 0".to_string());
        }
        if self.max_attempts > 10 {
            return Err(format!(
                "retry.max_attempts {} exceeds maximum (10)",
                self.max_attempts
            ));
        }
        if self.max_delay_ms < self.initial_delay_ms {
            return Err(format!(
                "retry.max_delay_ms {} is below retry.initial_delay_ms {}",
                self.max_delay_ms, self.initial_delay_ms
            ));
        }
        Ok(())
    }
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Animated, highlighted terminal report
    #[default]
    Report,
    /// Indented JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Report => f.write_str("report"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "report" => Ok(OutputFormat::Report),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown format '{}'. Valid: report, json", other)),
        }
    }
}

/// Report output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Type the report out character by character
    #[serde(default = "default_animate")]
    pub animate: bool,
    #[serde(default = "default_summary_char_delay_ms")]
    pub summary_char_delay_ms: u64,
    #[serde(default = "default_item_char_delay_ms")]
    pub item_char_delay_ms: u64,
    #[serde(default = "default_section_pause_ms")]
    pub section_pause_ms: u64,
}

pub fn default_animate() -> bool {
    true
}

pub fn default_summary_char_delay_ms() -> u64 {
    5
}

pub fn default_item_char_delay_ms() -> u64 {
    15
}

pub fn default_section_pause_ms() -> u64 {
    150
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            animate: default_animate(),
            summary_char_delay_ms: default_summary_char_delay_ms(),
            item_char_delay_ms: default_item_char_delay_ms(),
            section_pause_ms: default_section_pause_ms(),
        }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("output.summary_char_delay_ms", self.summary_char_delay_ms),
            ("output.item_char_delay_ms", self.item_char_delay_ms),
        ] {
            if value > 1000 {
                return Err(format!("{} {} exceeds maximum (1000)", name, value));
            }
        }
        if self.section_pause_ms > 10_000 {
            return Err(format!(
                "output.section_pause_ms {} exceeds maximum (10000)",
                self.section_pause_ms
            ));
        }
        Ok(())
    }
}
