//! Unit tests for the analyzer pipeline

use std::sync::Arc;
use std::time::Duration;

use loggar::analyzer::{
    build_prompt, AnalysisError, AnalysisResult, AnalyzeOptions, Analyzer, ClientError,
    ConfigError, HttpReply, ParseError, RequestError, RetryPolicy, SchemaVersion,
};
use loggar::pacing::RecordingPacer;

use crate::helpers::{envelope, load_fixture, ScriptedTransport};

const NARRATIVE: &str = r#"{"summary":"db down","sections":[{"title":"Core","content":["pool exhausted"]}]}"#;

fn analyzer_with(
    options: AnalyzeOptions,
    transport: &ScriptedTransport,
) -> (Analyzer, RecordingPacer) {
    let pacer = RecordingPacer::new();
    let analyzer = Analyzer::new(
        options,
        Box::new(transport.clone()),
        Arc::new(pacer.clone()),
    );
    (analyzer, pacer)
}

fn options() -> AnalyzeOptions {
    AnalyzeOptions::with_api_key("test-key").endpoint("https://ai.example/v1/models/m:generateContent")
}

#[test]
fn request_body_follows_wire_contract() {
    let transport = ScriptedTransport::always(200, &envelope(NARRATIVE));
    let (analyzer, _) = analyzer_with(options(), &transport);

    analyzer.analyze("ERROR db timeout").unwrap();

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].url,
        "https://ai.example/v1/models/m:generateContent?key=test-key"
    );

    let body: serde_json::Value = serde_json::from_str(&sent[0].body).unwrap();
    assert_eq!(
        body["contents"][0]["parts"][0]["text"],
        build_prompt(SchemaVersion::Narrative, "ERROR db timeout")
    );
    assert_eq!(body["generationConfig"]["temperature"], 0.2);
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 2048);
}

#[test]
fn prompt_is_header_plus_verbatim_logs() {
    let logs = "line one\n\tline two  \n";
    let prompt = build_prompt(SchemaVersion::Narrative, logs);
    assert!(prompt.ends_with(logs));
    assert!(prompt.contains("Logs to analyze:\n"));
    assert_eq!(
        build_prompt(SchemaVersion::Narrative, ""),
        build_prompt(SchemaVersion::Narrative, "x").trim_end_matches('x')
    );
}

#[test]
fn structured_schema_changes_the_prompt() {
    let narrative = build_prompt(SchemaVersion::Narrative, "x");
    let structured = build_prompt(SchemaVersion::Structured, "x");
    assert_ne!(narrative, structured);
    assert!(structured.contains("primary_issue"));
}

#[test]
fn missing_credential_never_touches_the_network() {
    let transport = ScriptedTransport::always(200, &envelope(NARRATIVE));
    let (analyzer, _) = analyzer_with(AnalyzeOptions::default(), &transport);

    let err = analyzer.analyze("ERROR").unwrap_err();
    assert!(err.is_config());
    assert!(matches!(
        err,
        AnalysisError::Config(ConfigError::MissingCredential { .. })
    ));
    assert_eq!(err.to_string(), "GOOGLE_AI_KEY environment variable not set");
    assert_eq!(transport.calls(), 0);
}

#[test]
fn always_unavailable_exhausts_five_attempts() {
    let transport = ScriptedTransport::always(503, "overloaded");
    let (analyzer, pacer) = analyzer_with(options(), &transport);

    let err = analyzer.analyze("ERROR").unwrap_err();

    assert_eq!(transport.calls(), 5);
    assert_eq!(
        pacer.pauses(),
        vec![
            Duration::from_secs(1),
            Duration::from_secs(2),
            Duration::from_secs(4),
            Duration::from_secs(8),
        ]
    );
    match err {
        AnalysisError::Call(ClientError::Exhausted { attempts, last }) => {
            assert_eq!(attempts, 5);
            assert_eq!(
                last,
                RequestError::Status {
                    status: 503,
                    body: "overloaded".to_string()
                }
            );
        }
        other => panic!("expected exhausted retries, got {:?}", other),
    }
}

#[test]
fn bad_request_is_terminal() {
    let transport = ScriptedTransport::always(400, "bad prompt");
    let (analyzer, pacer) = analyzer_with(options(), &transport);

    let err = analyzer.analyze("ERROR").unwrap_err();

    assert_eq!(transport.calls(), 1);
    assert!(pacer.pauses().is_empty());
    let message = err.to_string();
    assert!(message.starts_with("failed to call AI: "));
    assert!(message.contains("400"));
    assert!(message.contains("bad prompt"));
}

#[test]
fn recovers_after_rate_limit_and_network_error() {
    let transport = ScriptedTransport::new(vec![
        Ok(HttpReply::new(429, "slow down")),
        Err(RequestError::Network("connection reset".to_string())),
        Ok(HttpReply::new(200, envelope(NARRATIVE))),
    ]);
    let (analyzer, pacer) = analyzer_with(options(), &transport);

    let result = analyzer.analyze("ERROR").unwrap();

    assert_eq!(transport.calls(), 3);
    assert_eq!(
        pacer.pauses(),
        vec![Duration::from_secs(1), Duration::from_secs(2)]
    );
    assert_eq!(result.to_report().headline, "db down");
}

#[test]
fn custom_retry_policy_is_honored() {
    let transport = ScriptedTransport::always(500, "boom");
    let options = options().retry(RetryPolicy::new(3, 100, 150));
    let (analyzer, pacer) = analyzer_with(options, &transport);

    analyzer.analyze("ERROR").unwrap_err();

    assert_eq!(transport.calls(), 3);
    assert_eq!(
        pacer.pauses(),
        vec![Duration::from_millis(100), Duration::from_millis(150)]
    );
}

#[test]
fn fenced_result_is_accepted() {
    let fenced = format!("```json\n{}\n```", NARRATIVE);
    let transport = ScriptedTransport::always(200, &envelope(&fenced));
    let (analyzer, _) = analyzer_with(options(), &transport);

    let result = analyzer.analyze("ERROR").unwrap();
    assert_eq!(result.schema(), SchemaVersion::Narrative);
}

#[test]
fn empty_candidates_is_a_parse_error() {
    let transport = ScriptedTransport::always(200, r#"{"candidates": []}"#);
    let (analyzer, _) = analyzer_with(options(), &transport);

    let err = analyzer.analyze("ERROR").unwrap_err();
    assert!(matches!(err, AnalysisError::Parse(ParseError::EmptyResponse)));
    assert_eq!(
        err.to_string(),
        "failed to parse AI response: no response content from AI"
    );
}

#[test]
fn non_json_result_is_a_parse_error() {
    let transport = ScriptedTransport::always(200, &envelope("I could not analyze this."));
    let (analyzer, _) = analyzer_with(options(), &transport);

    let err = analyzer.analyze("ERROR").unwrap_err();
    assert!(matches!(err, AnalysisError::Parse(_)));
}

#[test]
fn structured_result_from_fixture() {
    let text = load_fixture("structured_result.json");
    let transport = ScriptedTransport::always(200, &envelope(&text));
    let options = options().schema(SchemaVersion::Structured);
    let (analyzer, _) = analyzer_with(options, &transport);

    let result = analyzer.analyze(&load_fixture("app.log")).unwrap();

    let AnalysisResult::Structured(structured) = &result else {
        panic!("expected structured result");
    };
    assert_eq!(structured.likely_causes.len(), 2);

    let report = result.to_report();
    assert_eq!(
        report.headline,
        "Database connection pool exhausted on payments-db-02"
    );
    let causes = report
        .sections
        .iter()
        .find(|s| s.title == "Likely Causes")
        .unwrap();
    assert_eq!(
        causes.content,
        vec![
            "Connection leak in checkout worker (80% confidence)",
            "Traffic spike (35% confidence)",
        ]
    );
}

#[test]
fn result_json_keeps_provider_schema() {
    let text = load_fixture("narrative_result.json");
    let transport = ScriptedTransport::always(200, &envelope(&text));
    let (analyzer, _) = analyzer_with(options(), &transport);

    let result = analyzer.analyze("ERROR").unwrap();
    let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
    let original: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json, original);
}
