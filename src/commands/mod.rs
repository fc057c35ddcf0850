//! Command handlers for the loggar CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod analyze;
pub mod completions;
pub mod config;
pub mod render;
pub mod version;

use anyhow::{Context, Result};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use loggar::config::OutputFormat;
use loggar::{AnalysisResult, Config, InstantPacer, Pacer, RealTimePacer, Renderer, Theme};

/// Config file to use: the `--config` override or the default location.
pub fn config_path(override_path: Option<&Path>) -> Result<PathBuf> {
    match override_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}

/// Load the configuration from the `--config` override or the default location.
pub fn load_config(override_path: Option<&Path>) -> Result<Config> {
    Config::load_from(&config_path(override_path)?)
}

/// Read all text from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read input file: {:?}", p)),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// How a result should be written, after combining flags with `[output]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputMode {
    pub json: bool,
    pub animate: bool,
}

impl OutputMode {
    /// Flags win over config; the animation only runs on a terminal.
    pub fn resolve(config: &Config, json_flag: bool, no_animate_flag: bool, is_tty: bool) -> Self {
        Self {
            json: json_flag || config.output.format == OutputFormat::Json,
            animate: config.output.animate && !no_animate_flag && is_tty,
        }
    }
}

/// Write `result` to stdout as a report or as JSON.
#[cfg(not(tarpaulin_include))]
pub fn emit(config: &Config, result: &AnalysisResult, mode: OutputMode) -> Result<()> {
    let mut renderer = stdout_renderer(config, mode)?;
    if mode.json {
        renderer.render_json(&result.to_json()?)?;
    } else {
        renderer.render_report(result)?;
    }
    Ok(())
}

/// Renderer bound to stdout with the detected theme and configured timing.
pub fn stdout_renderer(config: &Config, mode: OutputMode) -> Result<Renderer<io::StdoutLock<'static>>> {
    let pacer: Arc<dyn Pacer> = if mode.animate {
        Arc::new(RealTimePacer)
    } else {
        Arc::new(InstantPacer)
    };
    let renderer = Renderer::new(io::stdout().lock(), Theme::detect(), pacer)
        .context("Failed to build renderer")?
        .with_timing(config.render_timing());
    Ok(renderer)
}
