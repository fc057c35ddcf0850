//! Triage verdict types.
//!
//! The provider has answered in two shapes over time: a free-form narrative
//! (`summary` + titled `sections`) and a structured incident record
//! (`primary_issue`, `likely_causes`, ...). Both are accepted and kept as
//! distinct variants of [`AnalysisResult`]; [`AnalysisResult::to_report`]
//! normalizes either one into the [`Report`] the renderer draws.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which result shape the prompt asks the provider for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    /// `summary` + `sections`
    #[default]
    Narrative,
    /// `primary_issue` + causes, actions and past incidents
    Structured,
}

impl SchemaVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaVersion::Narrative => "narrative",
            SchemaVersion::Structured => "structured",
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "narrative" => Ok(SchemaVersion::Narrative),
            "structured" => Ok(SchemaVersion::Structured),
            other => Err(format!(
                "Unknown schema '{}'. Valid: narrative, structured",
                other
            )),
        }
    }
}

/// A parsed triage verdict in whichever shape the provider returned.
///
/// Serializes as the bare inner object, so the JSON output of a result is
/// exactly the provider's schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Narrative(NarrativeResult),
    Structured(StructuredResult),
}

/// Narrative form: one dense summary plus titled bullet sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeResult {
    pub summary: String,
    pub sections: Vec<Section>,
}

/// A titled group of content lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: Vec<String>,
}

/// Structured form: a single incident record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredResult {
    pub primary_issue: String,
    #[serde(default)]
    pub secondary_effects: Vec<String>,
    #[serde(default)]
    pub first_seen: String,
    #[serde(default)]
    pub likely_causes: Vec<LikelyCause>,
    #[serde(default)]
    pub recommended_actions: Vec<String>,
    #[serde(default)]
    pub similar_past_incidents: Vec<PastIncident>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikelyCause {
    pub cause: String,
    /// Always within `[0.0, 1.0]`; out-of-range provider values are clamped.
    #[serde(deserialize_with = "clamped_confidence")]
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastIncident {
    pub date: String,
    pub resolution: String,
}

fn clamped_confidence<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(clamp_confidence(raw))
}

/// Clamp a confidence score into `[0.0, 1.0]`.
pub fn clamp_confidence(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Shape-independent view used by the renderer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    /// Summary or primary issue. May be empty.
    pub headline: String,
    pub sections: Vec<Section>,
}

impl AnalysisResult {
    /// Which schema this result follows.
    pub fn schema(&self) -> SchemaVersion {
        match self {
            AnalysisResult::Narrative(_) => SchemaVersion::Narrative,
            AnalysisResult::Structured(_) => SchemaVersion::Structured,
        }
    }

    /// Normalize into the canonical [`Report`]. Ordering is preserved.
    pub fn to_report(&self) -> Report {
        match self {
            AnalysisResult::Narrative(n) => Report {
                headline: n.summary.clone(),
                sections: n.sections.clone(),
            },
            AnalysisResult::Structured(s) => s.to_report(),
        }
    }

    /// Compact JSON text of the result in its own schema.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl StructuredResult {
    fn to_report(&self) -> Report {
        let mut sections = Vec::new();

        push_section(&mut sections, "Secondary Effects", self.secondary_effects.clone());

        if !self.first_seen.trim().is_empty() {
            push_section(&mut sections, "First Seen", vec![self.first_seen.clone()]);
        }

        push_section(
            &mut sections,
            "Likely Causes",
            self.likely_causes
                .iter()
                .map(|c| {
                    format!(
                        "{} ({:.0}% confidence)",
                        c.cause,
                        clamp_confidence(c.confidence) * 100.0
                    )
                })
                .collect(),
        );

        push_section(
            &mut sections,
            "Recommended Actions",
            self.recommended_actions
                .iter()
                .map(|a| format!("→ {}", a))
                .collect(),
        );

        push_section(
            &mut sections,
            "Similar Past Incidents",
            self.similar_past_incidents
                .iter()
                .map(|i| format!("{}: {}", i.date, i.resolution))
                .collect(),
        );

        Report {
            headline: self.primary_issue.clone(),
            sections,
        }
    }
}

fn push_section(sections: &mut Vec<Section>, title: &str, content: Vec<String>) {
    if content.is_empty() {
        return;
    }
    sections.push(Section {
        title: title.to_string(),
        content,
    });
}
