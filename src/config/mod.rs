//! Configuration management for loggar

mod io;
mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::analyzer::{AnalyzeOptions, RetryPolicy};
use crate::render::RenderTiming;

impl Config {
    /// Get the config file path (~/.config/loggar/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/loggar)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from the default path, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load_from(&io::config_path()?)
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Validate every section, returning the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        self.ai.validate()?;
        self.retry.validate()?;
        self.output.validate()
    }

    /// Resolve the API key from the process environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key, looking variables up through `lookup`.
    ///
    /// The variable named by `ai.api_key_env` wins over `ai.api_key`.
    /// Empty values count as missing.
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |value: String| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        lookup(&self.ai.api_key_env)
            .and_then(non_empty)
            .or_else(|| self.ai.api_key.clone().and_then(non_empty))
    }

    /// Retry policy built from `[retry]`.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retry.max_attempts,
            self.retry.initial_delay_ms,
            self.retry.max_delay_ms,
        )
    }

    /// Analyzer options for this configuration and the given credential.
    pub fn analyze_options(&self, api_key: Option<String>) -> AnalyzeOptions {
        AnalyzeOptions {
            endpoint: self.ai.generate_url(),
            api_key,
            api_key_env: self.ai.api_key_env.clone(),
            schema: self.ai.schema,
            request_timeout: Duration::from_secs(self.ai.timeout_secs),
            retry: self.retry_policy(),
        }
    }

    /// Typing speed and pauses from `[output]`.
    pub fn render_timing(&self) -> RenderTiming {
        RenderTiming {
            headline_char_delay: Duration::from_millis(self.output.summary_char_delay_ms),
            item_char_delay: Duration::from_millis(self.output.item_char_delay_ms),
            section_pause: Duration::from_millis(self.output.section_pause_ms),
        }
    }
}
