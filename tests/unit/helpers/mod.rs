//! Test helper utilities

#![allow(dead_code)]

use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use loggar::analyzer::{HttpReply, RequestError, Transport};

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Wrap result text in a `generateContent` response envelope.
pub fn envelope(text: &str) -> String {
    serde_json::json!({
        "candidates": [{"content": {"parts": [{"text": text}]}}]
    })
    .to_string()
}

/// One recorded request.
#[derive(Debug, Clone)]
pub struct SentRequest {
    pub url: String,
    pub body: String,
}

/// Transport that replays scripted outcomes and records every request.
///
/// The last outcome repeats once the script runs out.
#[derive(Clone)]
pub struct ScriptedTransport {
    outcomes: Arc<Mutex<VecDeque<Result<HttpReply, RequestError>>>>,
    last: Arc<Mutex<Option<Result<HttpReply, RequestError>>>>,
    sent: Arc<Mutex<Vec<SentRequest>>>,
}

impl ScriptedTransport {
    pub fn new(outcomes: Vec<Result<HttpReply, RequestError>>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(outcomes.into())),
            last: Arc::new(Mutex::new(None)),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every call answers with `status` and `body`.
    pub fn always(status: u16, body: &str) -> Self {
        Self::new(vec![Ok(HttpReply::new(status, body))])
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl Transport for ScriptedTransport {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn post_json(&self, url: &str, body: &str) -> Result<HttpReply, RequestError> {
        self.sent.lock().unwrap().push(SentRequest {
            url: url.to_string(),
            body: body.to_string(),
        });

        let next = self.outcomes.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        match next {
            Some(outcome) => {
                *last = Some(outcome.clone());
                outcome
            }
            None => last
                .clone()
                .unwrap_or_else(|| Err(RequestError::Network("script is empty".to_string()))),
        }
    }
}
