//! Integration tests for top-level CLI behavior.

use std::path::Path;
use std::process::Command;

use chrono::Utc;
use serde_json::{json, Value};

use triage::cassette::format::{Cassette, Interaction};

fn run_triage(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_triage");
    Command::new(bin)
        .args(args)
        .env_remove("TRIAGE_RECORD")
        .env_remove("TRIAGE_REPLAY")
        .env_remove("TRIAGE_MCP_URL")
        .output()
        .expect("failed to run triage binary")
}

fn run_triage_replaying(args: &[&str], cassette: &Path) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_triage");
    Command::new(bin)
        .args(args)
        .env_remove("TRIAGE_RECORD")
        .env_remove("TRIAGE_MCP_URL")
        .env("TRIAGE_REPLAY", cassette)
        .output()
        .expect("failed to run triage binary")
}

fn write_cassette(path: &Path, output: Value) {
    let cassette = Cassette {
        name: "cli-test".into(),
        recorded_at: Utc::now(),
        commit: "unknown".into(),
        interactions: vec![Interaction {
            seq: 0,
            port: "provider".into(),
            method: "call_tool".into(),
            input: json!({}),
            output,
        }],
    };
    std::fs::write(path, serde_yaml::to_string(&cassette).unwrap()).unwrap();
}

#[test]
fn ask_renders_issue_with_suggestions_from_replay() {
    let dir = std::env::temp_dir().join("triage_cli_test_issue");
    std::fs::create_dir_all(&dir).unwrap();
    let cassette = dir.join("provider.cassette.yaml");

    write_cassette(
        &cassette,
        json!({"Ok": {
            "key": "SUP-129",
            "fields": {
                "issuetype": {"name": "Bug"},
                "priority": {"name": "High"},
                "summary": "Payment gateway times out"
            }
        }}),
    );

    let output = run_triage_replaying(&["ask", "What's the status of SUP-129?"], &cassette);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("**Issue: SUP-129**"));
    assert!(stdout.contains("Summary: Payment gateway times out"));

    // Escalation entry first, debugging entry second.
    let escalate =
        stdout.find("1. This is a high priority issue requiring immediate attention.").unwrap();
    let debug = stdout.find("2. Review recent code changes and check error logs").unwrap();
    assert!(escalate < debug);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn ask_without_key_renders_no_results_sentence() {
    let dir = std::env::temp_dir().join("triage_cli_test_search");
    std::fs::create_dir_all(&dir).unwrap();
    let cassette = dir.join("provider.cassette.yaml");

    write_cassette(&cassette, json!({"Ok": {"issues": []}}));

    let output = run_triage_replaying(&["ask", "payment failures"], &cassette);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout.trim_end(), "No issues found matching your query.");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn ask_renders_retrieval_failure_as_a_sentence() {
    let dir = std::env::temp_dir().join("triage_cli_test_failure");
    std::fs::create_dir_all(&dir).unwrap();
    let cassette = dir.join("provider.cassette.yaml");

    write_cassette(&cassette, json!({"Err": "issue does not exist"}));

    let output = run_triage_replaying(&["ask", "Tell me about SUP-404"], &cassette);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(
        stdout.trim_end(),
        "Could not retrieve issue SUP-404: issue does not exist"
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn ask_without_provider_url_reports_failure_in_the_answer() {
    let output = run_triage(&["ask", "payment failures"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Search failed:"));
    assert!(stdout.contains("TRIAGE_MCP_URL"));
}

#[test]
fn ask_help_shows_question_argument() {
    let output = run_triage(&["ask", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("QUESTION") || stdout.contains("question"));
}

#[test]
fn ask_without_question_exits_with_error() {
    let output = run_triage(&["ask"]);
    assert!(!output.status.success());
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_triage(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}

#[test]
fn replay_with_missing_cassette_exits_with_error() {
    let output =
        run_triage_replaying(&["ask", "anything"], Path::new("/nonexistent/none.cassette.yaml"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Failed to read cassette file"));
}
