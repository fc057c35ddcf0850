//! Theme configuration for terminal output
//!
//! Centralizes all color and emphasis definitions for the report renderer.
//! Styles are expressed as ratatui [`Style`]s and converted to ANSI escape
//! codes by [`cli`].

use ratatui::style::{Color, Modifier, Style};

pub mod cli;

pub use cli::{color_enabled, color_to_ansi, style_to_ansi, ANSI_RESET};

/// Theme configuration for the report renderer.
///
/// All colors are defined here for easy customization.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Whether any escape codes are emitted at all
    pub enabled: bool,
    /// Headline text and its marker
    pub headline: Style,
    /// Section titles
    pub title: Style,
    /// Section titles mentioning a resolution
    pub resolution_title: Style,
    /// Default bullet glyph
    pub bullet: Style,
    /// Arrow glyph (action items)
    pub arrow: Style,
    /// Durations, sizes and percentages
    pub measure: Style,
    /// IDs, codes and paths
    pub identifier: Style,
    /// Quoted text
    pub quoted: Style,
    /// Severity words (error, timeout, ...)
    pub severity: Style,
    /// Success words (resolved, healthy, ...)
    pub success: Style,
    /// Version footer
    pub footer: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::loggar()
    }
}

impl Theme {
    /// Loggar theme - bright ANSI colors on the terminal's own background.
    pub fn loggar() -> Self {
        Self {
            enabled: true,
            headline: Style::new().fg(Color::White),
            title: Style::new()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
            resolution_title: Style::new()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
            bullet: Style::new().fg(Color::LightYellow),
            arrow: Style::new().fg(Color::LightRed),
            measure: Style::new().fg(Color::LightYellow),
            identifier: Style::new().fg(Color::LightCyan),
            quoted: Style::new().fg(Color::LightCyan),
            severity: Style::new().fg(Color::LightRed),
            success: Style::new().fg(Color::LightGreen),
            footer: Style::new().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        }
    }

    /// No escape codes at all (NO_COLOR, pipes, files).
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::loggar()
        }
    }

    /// Pick [`Theme::loggar`] or [`Theme::plain`] for the current stdout.
    pub fn detect() -> Self {
        if color_enabled() {
            Self::loggar()
        } else {
            Self::plain()
        }
    }

    /// Wrap `text` in the escape codes for `style`.
    ///
    /// Returns `text` unchanged when the theme is disabled or the style has
    /// no ANSI representation.
    pub fn paint(&self, style: Style, text: &str) -> String {
        if !self.enabled || text.is_empty() {
            return text.to_string();
        }
        let prefix = style_to_ansi(style);
        if prefix.is_empty() {
            return text.to_string();
        }
        format!("{}{}{}", prefix, text, ANSI_RESET)
    }
}
