//! CLI tests against the loggar binary.
//!
//! Every run gets its own HOME and config path so the developer's real
//! configuration and API key never leak in.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// loggar command isolated in `home`, with colors off and no credential.
fn loggar(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("loggar").expect("binary builds");
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("FORCE_COLOR")
        .env_remove("GOOGLE_AI_KEY")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(home.join("config.toml"));
    cmd
}

#[test]
fn version_command() {
    let home = TempDir::new().unwrap();
    loggar(home.path())
        .arg("version")
        .assert()
        .success()
        .stdout(format!("loggar v{}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    loggar(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn analyze_without_key_fails_before_network() {
    let home = TempDir::new().unwrap();
    loggar(home.path())
        .arg("analyze")
        .arg(fixture("app.log"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "GOOGLE_AI_KEY environment variable not set",
        ));
}

#[test]
fn analyze_with_empty_key_fails() {
    let home = TempDir::new().unwrap();
    loggar(home.path())
        .env("GOOGLE_AI_KEY", "   ")
        .arg("analyze")
        .arg(fixture("app.log"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("GOOGLE_AI_KEY"));
}

#[test]
fn analyze_unreachable_endpoint_reports_call_failure() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("config.toml"),
        "[ai]\nendpoint = \"http://127.0.0.1:9/v1\"\ntimeout_secs = 2\n\n\
         [retry]\nmax_attempts = 1\ninitial_delay_ms = 0\nmax_delay_ms = 0\n",
    )
    .unwrap();

    loggar(home.path())
        .env("GOOGLE_AI_KEY", "sekrit-value")
        .arg("analyze")
        .arg(fixture("app.log"))
        .arg("--no-animate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to call AI"))
        .stderr(predicate::str::contains("sekrit-value").not());
}

#[test]
fn analyze_empty_stdin_is_rejected() {
    let home = TempDir::new().unwrap();
    loggar(home.path())
        .env("GOOGLE_AI_KEY", "k")
        .arg("analyze")
        .write_stdin("   \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No log input"));
}

#[test]
fn render_narrative_report() {
    let home = TempDir::new().unwrap();
    loggar(home.path())
        .arg("render")
        .arg(fixture("narrative_result.json"))
        .arg("--no-animate")
        .assert()
        .success()
        .stdout(predicate::str::contains("💡 Checkout failed"))
        .stdout(predicate::str::contains("CORE DIAGNOSIS\n"))
        .stdout(predicate::str::contains("→ Raise the pool limit"))
        .stdout(predicate::str::contains(format!(
            "loggar v{}",
            env!("CARGO_PKG_VERSION")
        )))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn render_structured_report() {
    let home = TempDir::new().unwrap();
    loggar(home.path())
        .arg("render")
        .arg(fixture("structured_result.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "💡 Database connection pool exhausted",
        ))
        .stdout(predicate::str::contains("LIKELY CAUSES"))
        .stdout(predicate::str::contains("(80% confidence)"));
}

#[test]
fn render_json_is_indented_and_complete() {
    let home = TempDir::new().unwrap();
    let output = loggar(home.path())
        .arg("render")
        .arg(fixture("narrative_result.json"))
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("{\n  \"summary\": "));
    let printed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let original: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(fixture("narrative_result.json")).unwrap())
            .unwrap();
    assert_eq!(printed, original);
}

#[test]
fn render_json_from_config_format() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("config.toml"), "[output]\nformat = \"json\"\n").unwrap();
    loggar(home.path())
        .arg("render")
        .arg(fixture("structured_result.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\n  \"primary_issue\""));
}

#[test]
fn render_rejects_malformed_result() {
    let home = TempDir::new().unwrap();
    let bad = home.path().join("bad.json");
    fs::write(&bad, r#"{"unexpected": true}"#).unwrap();

    loggar(home.path())
        .arg("render")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load analysis result"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn render_missing_file() {
    let home = TempDir::new().unwrap();
    loggar(home.path())
        .arg("render")
        .arg(home.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("config.toml"), "[ai]\ntimeout_secs = 0\n").unwrap();
    loggar(home.path())
        .arg("render")
        .arg(fixture("narrative_result.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("ai.timeout_secs must be > 0"));
}

#[test]
fn config_path_init_and_show() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("config.toml");

    loggar(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", path.display()));

    loggar(home.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(path.exists());

    loggar(home.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    loggar(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ai]"))
        .stdout(predicate::str::contains("API key: not set (export GOOGLE_AI_KEY)"));
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    loggar(home.path())
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("loggar"));
}
