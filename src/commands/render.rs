//! Render command handler
//!
//! Re-draws a result saved with `loggar analyze --json` without calling the AI.

use std::path::Path;

use anyhow::{Context, Result};

use loggar::analyzer::parser::{parse_result, sanitize};
use loggar::Config;

use super::{read_input, stdout_renderer, OutputMode};

/// Render a saved result file.
///
/// The file is validated against both result shapes first, so a malformed
/// file is reported instead of partially drawn.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, file: &Path, json: bool, no_animate: bool) -> Result<()> {
    let text = read_input(Some(file))?;
    let cleaned = sanitize(&text);
    let result = parse_result(cleaned)
        .with_context(|| format!("Failed to load analysis result: {:?}", file))?;

    let mode = OutputMode::resolve(config, json, no_animate, atty::is(atty::Stream::Stdout));
    let mut renderer = stdout_renderer(config, mode)?;
    if mode.json {
        renderer.render_json(cleaned)?;
    } else {
        renderer.render_report(&result)?;
    }
    Ok(())
}
