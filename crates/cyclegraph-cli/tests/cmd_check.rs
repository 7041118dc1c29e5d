//! Integration tests for `cyclegraph check`.
#![allow(clippy::expect_used)]

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Path to the compiled `cyclegraph` binary.
fn cyclegraph_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    // current_exe is something like .../deps/cmd_check-<hash>; the binary
    // lives in the parent directory.
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("cyclegraph");
    path
}

/// Path to a shared fixture file.
fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures");
    path.push(name);
    path
}

fn check(args: &[&str], fixture_name: &str) -> std::process::Output {
    let path = fixture(fixture_name);
    Command::new(cyclegraph_bin())
        .arg("check")
        .args(args)
        .arg(path.to_str().expect("path"))
        .output()
        .expect("run cyclegraph check")
}

// ---------------------------------------------------------------------------
// check: human mode
// ---------------------------------------------------------------------------

#[test]
fn check_ring_reports_cycle() {
    let out = check(&[], "ring.json");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "cycle");
}

#[test]
fn check_diamond_reports_acyclic() {
    let out = check(&[], "diamond.json");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "acyclic");
}

#[test]
fn check_empty_graph_is_acyclic() {
    let out = check(&[], "empty.json");
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "acyclic");
}

#[test]
fn check_each_detector_on_self_loop() {
    for detector in ["recursive", "iterative", "kahn", "all"] {
        let out = check(&["--detector", detector], "self-loop.json");
        assert!(out.status.success(), "{detector}: {:?}", out.status.code());
        assert_eq!(
            String::from_utf8_lossy(&out.stdout).trim(),
            "cycle",
            "{detector}"
        );
    }
}

#[test]
fn check_all_detectors_agree_on_two_components() {
    let out = check(&["--detector", "all"], "two-components.json");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "cycle");
}

// ---------------------------------------------------------------------------
// check: JSON mode
// ---------------------------------------------------------------------------

#[test]
fn check_json_single_detector() {
    let out = check(&["--detector", "kahn", "--format", "json"], "diamond.json");
    assert!(out.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout is JSON");
    assert_eq!(value["cyclic"], false);
    assert_eq!(value["detector"], "kahn");
    assert!(value.get("verdicts").is_none());
}

#[test]
fn check_json_all_detectors_lists_verdicts() {
    let out = check(&["--detector", "all", "-f", "json"], "graph-five.json");
    assert!(out.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout is JSON");
    assert_eq!(value["cyclic"], true);
    assert_eq!(value["detector"], "all");
    for name in ["recursive", "iterative", "kahn"] {
        assert_eq!(value["verdicts"][name], true, "{name}");
    }
}

// ---------------------------------------------------------------------------
// check: stdin
// ---------------------------------------------------------------------------

#[test]
fn check_reads_stdin_dash() {
    let mut child = Command::new(cyclegraph_bin())
        .args(["check", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn cyclegraph");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(br#"{"a": ["b"], "b": ["a"]}"#)
        .expect("write stdin");
    let out = child.wait_with_output().expect("wait");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "cycle");
}

// ---------------------------------------------------------------------------
// check: deep inputs
// ---------------------------------------------------------------------------

/// Writes a chain `0 -> 1 -> ... -> len` to a temporary JSON file.
fn chain_file(len: usize) -> tempfile::NamedTempFile {
    let mut json = String::with_capacity(len * 20);
    json.push('{');
    for i in 0..len {
        if i > 0 {
            json.push(',');
        }
        json.push_str(&format!("\"{i}\":[\"{}\"]", i + 1));
    }
    json.push('}');
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(json.as_bytes()).expect("write chain");
    file
}

fn check_path(args: &[&str], path: &std::path::Path) -> std::process::Output {
    Command::new(cyclegraph_bin())
        .arg("check")
        .args(args)
        .arg(path)
        .output()
        .expect("run cyclegraph check")
}

#[test]
fn check_all_detectors_on_long_chain() {
    let file = chain_file(500_000);
    let out = check_path(&["--detector", "all"], file.path());
    assert!(
        out.status.success(),
        "exit code: {:?}, stderr: {}",
        out.status.code(),
        String::from_utf8_lossy(&out.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "acyclic");
}

#[test]
fn check_recursive_detector_on_long_chain() {
    let file = chain_file(500_000);
    let out = check_path(&["--detector", "recursive"], file.path());
    assert!(
        out.status.success(),
        "exit code: {:?}, stderr: {}",
        out.status.code(),
        String::from_utf8_lossy(&out.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "acyclic");
}
