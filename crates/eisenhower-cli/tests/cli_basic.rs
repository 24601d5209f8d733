//! Basic CLI E2E tests.
//!
//! Each test runs the built binary with HOME pointed at a fresh temp
//! directory so the user's real config is never touched.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &std::path::Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_eisenhower-cli"))
        .args(args)
        .env("HOME", home)
        .env_remove("EISENHOWER_ENV")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_classify_json() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, stderr, code) = run_cli(
        home.path(),
        &["classify", "ping team ASAP", "--tags", "finance", "--no-refine", "--json"],
    );
    assert_eq!(code, 0, "classify failed: {stderr}");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["urgency"], 3);
    assert_eq!(parsed["importance"], 3);
    assert_eq!(parsed["quadrant"], "do");
    assert_eq!(parsed["reasoning"], "finance");
    assert!(parsed.get("ai_suggested").is_none());
}

#[test]
fn test_classify_human_output() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["classify", "tweak theme", "--no-refine"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Quadrant:   eliminate"));
    assert!(stdout.contains("Borderline: yes"));
}

#[test]
fn test_classify_negative_hint() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(
        home.path(),
        &["classify", "asap", "--urgency-hint", "-1000", "--json"],
    );
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["urgency"], 0);
}

#[test]
fn test_classify_rejects_bad_due_date() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["classify", "x", "--due", "someday"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("invalid due date"));
}

#[test]
fn test_batch_from_file() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("tasks.json");
    std::fs::write(
        &file,
        r#"[{"text": "plan OKR", "tags": ["learning-core"]}, {"text": "clean inbox"}]"#,
    )
    .unwrap();

    let (stdout, stderr, code) = run_cli(home.path(), &["batch", file.to_str().unwrap()]);
    assert_eq!(code, 0, "batch failed: {stderr}");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["quadrant"], "schedule");
    assert_eq!(items[1]["quadrant"], "eliminate");
}

#[test]
fn test_sanitize() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(
        home.path(),
        &["sanitize", "contact me at a@b.com or 415-555-0101"],
    );
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "contact me at [email] or [phone]");
}

#[test]
fn test_config_set_get_roundtrip() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(home.path(), &["config", "set", "refine.timeout_ms", "1500"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "refine.timeout_ms"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "1500");
}

#[test]
fn test_config_rejects_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["config", "set", "refine.colour", "blue"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown config key"));
}
