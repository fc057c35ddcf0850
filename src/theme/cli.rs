//! ANSI color helpers for CLI output
//!
//! Converts ratatui colors and styles to ANSI escape codes and decides
//! whether color should be used at all.

use ratatui::style::{Color, Modifier, Style};

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
pub fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}

/// Convert a ratatui Style (foreground + bold/dim/italic/underline) to an
/// ANSI prefix. Modifiers come first, then the color.
pub fn style_to_ansi(style: Style) -> String {
    let mut out = String::new();
    let modifiers = style.add_modifier;

    if modifiers.contains(Modifier::BOLD) {
        out.push_str("\x1b[1m");
    }
    if modifiers.contains(Modifier::DIM) {
        out.push_str("\x1b[2m");
    }
    if modifiers.contains(Modifier::ITALIC) {
        out.push_str("\x1b[3m");
    }
    if modifiers.contains(Modifier::UNDERLINED) {
        out.push_str("\x1b[4m");
    }
    if let Some(fg) = style.fg {
        out.push_str(color_to_ansi(fg));
    }
    out
}

/// Whether colored output should be produced on stdout.
///
/// `NO_COLOR` (any value) disables color, `FORCE_COLOR` enables it even
/// without a TTY; otherwise color follows whether stdout is a terminal.
pub fn color_enabled() -> bool {
    color_enabled_with(
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var_os("FORCE_COLOR").is_some(),
        atty::is(atty::Stream::Stdout),
    )
}

fn color_enabled_with(no_color: bool, force_color: bool, is_tty: bool) -> bool {
    if no_color {
        return false;
    }
    force_color || is_tty
}
