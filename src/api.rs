//! Transport-neutral request handler for exposing analysis over HTTP.
//!
//! [`handle_analyze`] takes the raw request body and returns a status code
//! with a JSON body. Binding it to a concrete server is left to the caller.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analyzer::Analyzer;

/// Body of an analyze request: `{"logs": "..."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub logs: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Status code plus JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    fn error(status: u16, message: &str) -> Self {
        let body = serde_json::to_string(&ErrorBody { error: message })
            .unwrap_or_else(|_| String::from(r#"{"error":"internal error"}"#));
        Self { status, body }
    }
}

/// Run one analysis for an HTTP request body.
///
/// - missing, empty or unparseable body: 400 `{"error":"logs field is required"}`;
///   whitespace-only logs still count as present
/// - analysis failure: 500 `{"error":"<message>"}`
/// - success: 200 with the indented result JSON
pub fn handle_analyze(analyzer: &Analyzer, body: &str) -> ApiResponse {
    let logs = match serde_json::from_str::<AnalyzeRequest>(body) {
        Ok(request) if !request.logs.is_empty() => request.logs,
        _ => return ApiResponse::error(400, "logs field is required"),
    };

    let result = match analyzer.analyze(&logs) {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, "analysis request failed");
            return ApiResponse::error(500, &e.to_string());
        }
    };

    match serde_json::to_string_pretty(&result) {
        Ok(body) => ApiResponse { status: 200, body },
        Err(e) => ApiResponse::error(500, &e.to_string()),
    }
}
