//! Analyze command handler
//!
//! 1. Resolve the credential (fails before reading input or touching the network)
//! 2. Read logs from a file or stdin
//! 3. Run the analyzer (prompt, retrying call, parse)
//! 4. Render the verdict as a report or as JSON

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Result};
use tracing::info;

use loggar::{Analyzer, Config, RealTimePacer, SchemaVersion};

use super::{emit, read_input, OutputMode};

/// Analyze logs and print the verdict.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    config: &Config,
    file: Option<&Path>,
    json: bool,
    no_animate: bool,
    schema: Option<SchemaVersion>,
) -> Result<()> {
    let mut options = config.analyze_options(config.resolve_api_key());
    if let Some(schema) = schema {
        options = options.schema(schema);
    }
    options.credential()?;

    let logs = read_input(file)?;
    if logs.trim().is_empty() {
        bail!("No log input: pass a file or pipe logs into 'loggar analyze'");
    }

    info!(
        bytes = logs.len(),
        lines = logs.lines().count(),
        "read log input"
    );

    let analyzer = Analyzer::with_http(options, Arc::new(RealTimePacer))?;
    let result = analyzer.analyze(&logs)?;

    let mode = OutputMode::resolve(config, json, no_animate, atty::is(atty::Stream::Stdout));
    emit(config, &result, mode)
}
