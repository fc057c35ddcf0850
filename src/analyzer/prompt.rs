//! Prompt construction for log triage.
//!
//! A prompt is a fixed instruction header followed directly by the raw log
//! text. The header describes the requested result schema and ends with the
//! "Logs to analyze:" line, so the log text starts on the line after it.
//! The log text is never rewritten or truncated.

use super::result::SchemaVersion;

/// Instruction header asking for the narrative (`summary` + `sections`) shape.
pub const NARRATIVE_HEADER: &str = include_str!("prompts/narrative.txt");

/// Instruction header asking for the structured incident-record shape.
pub const STRUCTURED_HEADER: &str = include_str!("prompts/structured.txt");

/// Instruction header for the given schema.
pub fn instruction_header(schema: SchemaVersion) -> &'static str {
    match schema {
        SchemaVersion::Narrative => NARRATIVE_HEADER,
        SchemaVersion::Structured => STRUCTURED_HEADER,
    }
}

/// Build the provider prompt for `log_text`.
pub fn build_prompt(schema: SchemaVersion, log_text: &str) -> String {
    let header = instruction_header(schema);
    let mut prompt = String::with_capacity(header.len() + log_text.len());
    prompt.push_str(header);
    prompt.push_str(log_text);
    prompt
}
