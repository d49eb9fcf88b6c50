//! CLI integration tests for vemoctl
//!
//! Tests the one-shot surface:
//! - vemoctl ask --json TEXT     reply as JSON
//! - vemoctl action --json ID    action result as JSON
//! - vemoctl speak --dry-run T   normalized sentences
//! - vemoctl config              effective TOML
//!
//! Every run points VEMO_CONFIG at a file that does not exist so the user's
//! own config never leaks in.

use std::path::Path;
use std::process::{Command, Output};

fn vemoctl(config_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vemoctl"))
        .args(args)
        .env("VEMO_CONFIG", config_dir.join("missing.toml"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run vemoctl")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_ask_json_greeting() {
    let dir = tempfile::tempdir().unwrap();
    let output = vemoctl(dir.path(), &["ask", "--json", "--seed", "7", "hello", "there"]);
    assert!(output.status.success());

    let reply: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(reply["category"], "greeting");
    assert!(!reply["actions"].as_array().unwrap().is_empty());
    let confidence = reply["confidence"].as_f64().unwrap();
    assert!((0.8..1.0).contains(&confidence));
}

#[test]
fn test_ask_seed_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let run = || {
        let output = vemoctl(dir.path(), &["ask", "--json", "--seed", "42", "asdkjasd"]);
        let reply: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
        (reply["text"].clone(), reply["category"].clone())
    };
    let first = run();
    assert_eq!(first.1, "fallback");
    assert_eq!(first, run());
}

#[test]
fn test_ask_requires_text() {
    let dir = tempfile::tempdir().unwrap();
    let output = vemoctl(dir.path(), &["ask"]);
    assert!(!output.status.success());
}

#[test]
fn test_action_unknown_id() {
    let dir = tempfile::tempdir().unwrap();
    let output = vemoctl(dir.path(), &["action", "--json", "unknown_id_xyz"]);
    assert!(output.status.success());

    let outcome: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert!(outcome["text"]
        .as_str()
        .unwrap()
        .starts_with("✅ Action completed successfully."));
    assert_eq!(outcome["processing_time"], 1500);
    assert_eq!(outcome["follow_ups"].as_array().unwrap().len(), 4);
}

#[test]
fn test_speak_dry_run() {
    let dir = tempfile::tempdir().unwrap();
    let output = vemoctl(
        dir.path(),
        &["speak", "--dry-run", "*waves* Hello there! How are you?"],
    );
    assert!(output.status.success());

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("Hello there!"));
    assert!(lines[1].ends_with("How are you?"));
}

#[test]
fn test_speak_without_voice_lists_sentences() {
    let dir = tempfile::tempdir().unwrap();
    let output = vemoctl(dir.path(), &["--no-voice", "speak", "Latency is 12ms."]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Latency is 12 milliseconds."));
}

#[test]
fn test_config_prints_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let output = vemoctl(dir.path(), &["config"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("not found, defaults"));
    assert!(text.contains("[voice]"));
    assert!(text.contains("rate = 0.95"));
    assert!(text.contains("context_capacity = 5"));
}

#[test]
fn test_config_file_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vemo.toml");
    std::fs::write(&path, "[voice]\nrate = 1.5\n").unwrap();

    let output = vemoctl(dir.path(), &["--config", path.to_str().unwrap(), "config"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("rate = 1.5"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[chat]\nthinking_cap_ms = 999999\n").unwrap();

    let output = vemoctl(dir.path(), &["--config", path.to_str().unwrap(), "config"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("thinking_cap_ms"));
}

#[test]
fn test_version() {
    let dir = tempfile::tempdir().unwrap();
    let output = vemoctl(dir.path(), &["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("vemoctl "));
}
