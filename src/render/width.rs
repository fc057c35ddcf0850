//! Reading width for the report.

use terminal_size::{terminal_size, Width};

/// Width used when the terminal cannot be measured or is too narrow.
pub const FALLBACK_WIDTH: usize = 110;

/// Terminals narrower than this use [`FALLBACK_WIDTH`].
pub const MIN_WIDTH: usize = 80;

/// Wider terminals are clamped to this.
pub const MAX_WIDTH: usize = 120;

/// Columns kept free on the right edge.
pub const MARGIN: usize = 2;

/// Pick a comfortable reading width from a detected column count.
pub fn resolve_width(detected: Option<usize>) -> usize {
    match detected {
        Some(cols) if cols > MAX_WIDTH => MAX_WIDTH,
        Some(cols) if cols >= MIN_WIDTH => cols - MARGIN,
        _ => FALLBACK_WIDTH,
    }
}

/// Reading width for the terminal attached to stdout.
pub fn compute_width() -> usize {
    let detected = terminal_size().map(|(Width(cols), _)| cols as usize);
    resolve_width(detected)
}
