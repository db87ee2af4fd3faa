//! Integration tests for `extract` and `summary`

use super::common::workspace::TestWorkspace;
use predicates::prelude::*;
use predicates::str::contains;

/// Base64 artifacts are decoded into the output directory
#[test]
fn test_extract_decodes_artifacts() {
    let ws = TestWorkspace::new();
    let payload = ws.write(
        "payload.json",
        r#"{"artifacts":{"a.txt":{"content":"aGVsbG8="}}}"#,
    );

    ws.cmd()
        .arg("extract")
        .arg(&payload)
        .arg(ws.join("out"))
        .assert()
        .success()
        .stdout(contains("📦 Extracting artifacts...").and(contains("✅ Decoded: a.txt")));

    assert_eq!(ws.read("out/a.txt"), "hello");
}

/// Line-wrapped base64, as written by `base64 FILE`, is accepted
#[test]
fn test_extract_accepts_wrapped_base64() {
    let ws = TestWorkspace::new();
    // "hello world " x 8, wrapped at 76 columns
    let payload = ws.write(
        "payload.json",
        concat!(
            r#"{"artifacts":{"log.txt":{"content":""#,
            r#"aGVsbG8gd29ybGQgaGVsbG8gd29ybGQgaGVsbG8gd29ybGQgaGVsbG8gd29ybGQgaGVsbG8gd29y\n"#,
            r#"bGQgaGVsbG8gd29ybGQgaGVsbG8gd29ybGQgaGVsbG8gd29ybGQg\n"#,
            r#""}}}"#,
        ),
    );

    ws.cmd()
        .arg("extract")
        .arg(&payload)
        .arg(ws.join("out"))
        .assert()
        .success()
        .stdout(contains("✅ Decoded: log.txt"));

    assert_eq!(ws.read("out/log.txt"), "hello world ".repeat(8));
}

/// "null" content is skipped with a warning, not an error
#[test]
fn test_extract_skips_null_content() {
    let ws = TestWorkspace::new();
    let payload = ws.write(
        "payload.json",
        r#"{"artifacts":{"a.txt":{"content":"null"},"b.txt":{"content":""}}}"#,
    );
    std::fs::create_dir_all(ws.join("out")).unwrap();

    ws.cmd()
        .arg("extract")
        .arg(&payload)
        .arg(ws.join("out"))
        .assert()
        .success()
        .stdout(contains("Skipping empty artifact: a.txt").and(contains("Skipping empty artifact: b.txt")));

    let entries = std::fs::read_dir(ws.join("out")).unwrap().count();
    assert_eq!(entries, 0);
}

/// Invalid base64 aborts with the artifact name
#[test]
fn test_extract_rejects_invalid_base64() {
    let ws = TestWorkspace::new();
    let payload = ws.write(
        "payload.json",
        r#"{"artifacts":{"broken.bin":{"content":"%%%"}}}"#,
    );

    ws.cmd()
        .arg("extract")
        .arg(&payload)
        .arg(ws.join("out"))
        .assert()
        .failure()
        .stderr(contains("Failed to decode artifact broken.bin"));
}

/// Artifact names cannot climb out of the output directory
#[test]
fn test_extract_rejects_path_traversal() {
    let ws = TestWorkspace::new();
    let payload = ws.write(
        "payload.json",
        r#"{"artifacts":{"../escape.txt":{"content":"aGVsbG8="}}}"#,
    );

    ws.cmd()
        .arg("extract")
        .arg(&payload)
        .arg(ws.join("out"))
        .assert()
        .failure()
        .stderr(contains("outside the output directory"));

    assert!(!ws.join("escape.txt").exists());
}

/// A payload that is not JSON is a format error
#[test]
fn test_extract_rejects_malformed_payload() {
    let ws = TestWorkspace::new();
    let payload = ws.write("payload.json", "artifacts: yes");

    ws.cmd()
        .arg("extract")
        .arg(&payload)
        .arg(ws.join("out"))
        .assert()
        .failure()
        .stderr(contains("Failed to parse payload"));
}

/// The execution table goes to stdout outside of GitHub Actions
#[test]
fn test_summary_to_stdout() {
    let ws = TestWorkspace::new();
    let payload = ws.write(
        "payload.json",
        r#"{"success":true,"source":"home-lab","branch":"main","commit":"abc123","artifact_name":"e2e"}"#,
    );

    ws.cmd()
        .arg("summary")
        .arg(&payload)
        .assert()
        .success()
        .stdout(
            contains("## ✅ External Test Results: SUCCESS")
                .and(contains("| **Source** | home-lab |"))
                .and(contains("| **Branch** | `main` |"))
                .and(contains("| **Artifact Name** | e2e |")),
        );
}

/// With GITHUB_STEP_SUMMARY set, the table is appended to that file
#[test]
fn test_summary_to_step_summary() {
    let ws = TestWorkspace::new();
    let payload = ws.write("payload.json", r#"{"success":false}"#);
    let summary = ws.write("step_summary.md", "");

    ws.cmd_with_step_summary(&summary)
        .arg("summary")
        .arg(&payload)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(ws
        .read("step_summary.md")
        .starts_with("## ❌ External Test Results: FAILURE\n"));
}

/// Missing payload files are reported with their path
#[test]
fn test_summary_missing_payload() {
    let ws = TestWorkspace::new();

    ws.cmd()
        .args(["summary", "nope.json"])
        .assert()
        .failure()
        .stderr(contains("nope.json"));
}
