//! Animated terminal report.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use ratatui::style::Style;

use super::highlight::Highlighter;
use super::json::pretty_json;
use super::typing::progressive_print;
use super::width::compute_width;
use super::wrap::wrap_text;
use crate::analyzer::AnalysisResult;
use crate::pacing::Pacer;
use crate::theme::Theme;

const HEADLINE_MARKER: &str = "💡 ";
const HEADLINE_INDENT: &str = "   ";
const ITEM_INDENT: &str = "  ";
const BULLET: &str = "• ";
const ARROW: &str = "→ ";
/// Columns taken by the marker or glyph in front of wrapped text.
const GUTTER: usize = 3;

/// Typing speed and pauses for the report animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTiming {
    pub headline_char_delay: Duration,
    pub item_char_delay: Duration,
    pub section_pause: Duration,
}

impl Default for RenderTiming {
    fn default() -> Self {
        Self {
            headline_char_delay: Duration::from_millis(5),
            item_char_delay: Duration::from_millis(15),
            section_pause: Duration::from_millis(150),
        }
    }
}

/// Draws analysis results on a writer.
pub struct Renderer<W: Write> {
    out: W,
    theme: Theme,
    highlighter: Highlighter,
    pacer: Arc<dyn Pacer>,
    width: usize,
    timing: RenderTiming,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer sized to the current terminal.
    pub fn new(out: W, theme: Theme, pacer: Arc<dyn Pacer>) -> Result<Self, regex::Error> {
        Ok(Self {
            out,
            theme,
            highlighter: Highlighter::new()?,
            pacer,
            width: compute_width(),
            timing: RenderTiming::default(),
        })
    }

    /// Override the reading width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_timing(mut self, timing: RenderTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Draw the headline, every section and the version footer.
    pub fn render_report(&mut self, result: &AnalysisResult) -> io::Result<()> {
        let report = result.to_report();
        let text_width = self.width.saturating_sub(GUTTER);

        writeln!(self.out)?;

        if !report.headline.trim().is_empty() {
            let marker = self.theme.paint(self.theme.headline, HEADLINE_MARKER);
            write!(self.out, "{}", marker)?;
            let lines = self.decorate(wrap_text(&report.headline, text_width, HEADLINE_INDENT));
            progressive_print(
                &mut self.out,
                self.pacer.as_ref(),
                &lines,
                self.timing.headline_char_delay,
            )?;
            writeln!(self.out)?;
            self.out.flush()?;
            self.pacer.pause(self.timing.section_pause);
        }

        for section in &report.sections {
            let title = section.title.to_uppercase();
            let title_style = if title.contains("RESOLUTION") {
                self.theme.resolution_title
            } else {
                self.theme.title
            };
            writeln!(self.out, "{}", self.theme.paint(title_style, &title))?;

            for item in &section.content {
                let (glyph, glyph_style, text) = self.split_glyph(item);
                write!(self.out, "{}", self.theme.paint(glyph_style, glyph))?;
                let lines = self.decorate(wrap_text(text, text_width, ITEM_INDENT));
                progressive_print(
                    &mut self.out,
                    self.pacer.as_ref(),
                    &lines,
                    self.timing.item_char_delay,
                )?;
                writeln!(self.out)?;
            }

            self.out.flush()?;
            self.pacer.pause(self.timing.section_pause);
            writeln!(self.out)?;
        }

        let footer = format!("loggar v{}", env!("CARGO_PKG_VERSION"));
        writeln!(self.out, "{}", self.theme.paint(self.theme.footer, &footer))?;
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Print JSON text re-indented with two spaces; invalid JSON is printed as-is.
    pub fn render_json(&mut self, json_text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", pretty_json(json_text))?;
        self.out.flush()
    }

    fn decorate(&self, lines: Vec<String>) -> Vec<String> {
        lines
            .iter()
            .map(|line| self.highlighter.highlight(&self.theme, line))
            .collect()
    }

    // Items already starting with an arrow or bullet keep it as their glyph.
    fn split_glyph<'a>(&self, item: &'a str) -> (&'static str, Style, &'a str) {
        let trimmed = item.trim_start();
        if let Some(rest) = trimmed.strip_prefix('→') {
            (ARROW, self.theme.arrow, rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix('•') {
            (BULLET, self.theme.bullet, rest.trim())
        } else {
            (BULLET, self.theme.bullet, trimmed.trim_end())
        }
    }
}
