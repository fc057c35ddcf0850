//! Response unwrapping and validation.
//!
//! The provider wraps the model's text in an envelope:
//!
//! ```json
//! {"candidates":[{"content":{"parts":[{"text":"<result JSON>"}]}}]}
//! ```
//!
//! Parsing takes the first part of the first candidate, strips any markdown
//! code fence the model added, and deserializes the remaining text into an
//! [`AnalysisResult`]. The shape is detected from its discriminating key.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::error::ParseError;
use super::result::{AnalysisResult, NarrativeResult, StructuredResult};

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Extract the model text from a raw provider response body.
pub fn unwrap_envelope(raw_body: &str) -> Result<String, ParseError> {
    let envelope: Envelope = serde_json::from_str(raw_body).map_err(ParseError::Envelope)?;

    envelope
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or(ParseError::EmptyResponse)
}

/// Remove a surrounding markdown code fence and whitespace.
///
/// Handles an opening fence with or without a language tag
/// (```` ```json ````, ```` ``` ````) and a closing fence; either may be
/// missing.
pub fn sanitize(text: &str) -> &str {
    let mut s = text.trim();

    if let Some(rest) = s.strip_prefix("```") {
        // Drop the language tag: everything up to the end of the fence line.
        s = match rest.find('\n') {
            Some(newline) if is_language_tag(&rest[..newline]) => &rest[newline + 1..],
            _ => rest.strip_prefix("json").unwrap_or(rest),
        };
    }

    let s = s.trim();
    s.strip_suffix("```").unwrap_or(s).trim()
}

fn is_language_tag(tag: &str) -> bool {
    tag.trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Deserialize sanitized result text into either schema shape.
pub fn parse_result(text: &str) -> Result<AnalysisResult, ParseError> {
    let value: Value = serde_json::from_str(text).map_err(ParseError::MalformedJson)?;
    let object = value.as_object().ok_or(ParseError::NotAnObject)?;

    match detect_shape(object) {
        Some(Shape::Structured) => serde_json::from_value::<StructuredResult>(value)
            .map(AnalysisResult::Structured)
            .map_err(|source| ParseError::SchemaMismatch {
                schema: "structured",
                source,
            }),
        Some(Shape::Narrative) => serde_json::from_value::<NarrativeResult>(value)
            .map(AnalysisResult::Narrative)
            .map_err(|source| ParseError::SchemaMismatch {
                schema: "narrative",
                source,
            }),
        None => Err(ParseError::UnknownShape),
    }
}

enum Shape {
    Narrative,
    Structured,
}

fn detect_shape(object: &Map<String, Value>) -> Option<Shape> {
    if object.contains_key("primary_issue") {
        Some(Shape::Structured)
    } else if object.contains_key("summary") || object.contains_key("sections") {
        Some(Shape::Narrative)
    } else {
        None
    }
}

/// Full response pipeline: unwrap, sanitize, deserialize.
pub fn parse(raw_body: &str) -> Result<AnalysisResult, ParseError> {
    let text = unwrap_envelope(raw_body)?;
    let cleaned = sanitize(&text);
    let result = parse_result(cleaned)?;
    debug!(schema = %result.schema(), bytes = cleaned.len(), "parsed AI response");
    Ok(result)
}
