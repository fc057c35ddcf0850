//! Keyword emphasis for report lines.
//!
//! Five passes run in a fixed order over the plain text of a line. Each pass
//! marks the byte ranges it matches with a [`Emphasis`]; a later pass
//! overwrites whatever an earlier one marked in the same range, so a severity
//! word inside a quoted string ends up red inside a cyan quote. Escape codes
//! are only produced once all passes are done, which keeps the matchers away
//! from them.

use regex::Regex;

use crate::theme::Theme;

/// What a highlighted span represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// Durations, sizes and percentages (`104ms`, `2.5s`, `98%`)
    Measure,
    /// IDs, codes and paths containing digits (`TX_9921`, `/v1/items`, `5432`)
    Identifier,
    /// Double-quoted text
    Quoted,
    /// Failure vocabulary
    Severity,
    /// Recovery vocabulary
    Success,
}

impl Emphasis {
    fn style(self, theme: &Theme) -> ratatui::style::Style {
        match self {
            Emphasis::Measure => theme.measure,
            Emphasis::Identifier => theme.identifier,
            Emphasis::Quoted => theme.quoted,
            Emphasis::Severity => theme.severity,
            Emphasis::Success => theme.success,
        }
    }
}

/// A run of text with the emphasis that ended up on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub emphasis: Option<Emphasis>,
}

struct Pass {
    emphasis: Emphasis,
    pattern: Regex,
}

/// Compiled emphasis passes.
pub struct Highlighter {
    passes: Vec<Pass>,
    measure_token: Regex,
    date_token: Regex,
}

impl Highlighter {
    pub fn new() -> Result<Self, regex::Error> {
        let passes = vec![
            Pass {
                emphasis: Emphasis::Measure,
                pattern: Regex::new(r"\b\d+(?:\.\d+)?(?:%|(?i:ms|s|kb|mb|gb)\b)")?,
            },
            Pass {
                emphasis: Emphasis::Identifier,
                pattern: Regex::new(r"[A-Za-z0-9_/\-]{4,}")?,
            },
            Pass {
                emphasis: Emphasis::Quoted,
                pattern: Regex::new(r#""[^"\n]+""#)?,
            },
            Pass {
                emphasis: Emphasis::Severity,
                pattern: Regex::new(
                    r"(?i)\b(?:timeout|failed|failure|error|critical|collapsed|prohibited|refused)\b",
                )?,
            },
            Pass {
                emphasis: Emphasis::Success,
                pattern: Regex::new(r"(?i)\b(?:success|resolved|healthy|stable|ok)\b")?,
            },
        ];

        Ok(Self {
            passes,
            measure_token: Regex::new(r"^\d+(?:%|(?i:ms|s|kb|mb|gb))$")?,
            date_token: Regex::new(r"^\d{4}-\d{2}-\d{2}$")?,
        })
    }

    /// Split `text` into spans tagged with their final emphasis.
    pub fn spans(&self, text: &str) -> Vec<Span> {
        let mut marks: Vec<Option<Emphasis>> = vec![None; text.len()];

        for pass in &self.passes {
            for m in pass.pattern.find_iter(text) {
                if pass.emphasis == Emphasis::Identifier && !self.is_identifier(m.as_str()) {
                    continue;
                }
                for mark in &mut marks[m.start()..m.end()] {
                    *mark = Some(pass.emphasis);
                }
            }
        }

        let mut spans: Vec<Span> = Vec::new();
        let mut start = 0;
        for (idx, _) in text.char_indices().skip(1) {
            if marks[idx] != marks[start] {
                spans.push(Span {
                    text: text[start..idx].to_string(),
                    emphasis: marks[start],
                });
                start = idx;
            }
        }
        if start < text.len() {
            spans.push(Span {
                text: text[start..].to_string(),
                emphasis: marks[start],
            });
        }
        spans
    }

    /// Render `text` with escape codes for every emphasized span.
    pub fn highlight(&self, theme: &Theme, text: &str) -> String {
        self.spans(text)
            .into_iter()
            .map(|span| match span.emphasis {
                Some(emphasis) => theme.paint(emphasis.style(theme), &span.text),
                None => span.text,
            })
            .collect()
    }

    // Measurements keep their own emphasis and calendar dates stay plain.
    fn is_identifier(&self, token: &str) -> bool {
        token.chars().any(|c| c.is_ascii_digit())
            && !self.measure_token.is_match(token)
            && !self.date_token.is_match(token)
    }
}
