//! Integration tests for `cyclegraph order`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::Command;

/// Path to the compiled `cyclegraph` binary.
fn cyclegraph_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
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

fn order(args: &[&str], fixture_name: &str) -> std::process::Output {
    let path = fixture(fixture_name);
    Command::new(cyclegraph_bin())
        .args(args)
        .arg("order")
        .arg(path.to_str().expect("path"))
        .output()
        .expect("run cyclegraph order")
}

fn stdout_lines(out: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&out.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn order_diamond_one_node_per_line() {
    let out = order(&[], "diamond.json");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    assert_eq!(stdout_lines(&out), vec!["0", "1", "2", "3"]);
}

#[test]
fn order_build_deps_puts_shared_leaf_last() {
    let out = order(&[], "build-deps.json");
    assert!(out.status.success());
    assert_eq!(
        stdout_lines(&out),
        vec!["app", "http", "db", "tls", "pool", "crypto", "log"]
    );
}

#[test]
fn order_empty_graph_prints_nothing() {
    let out = order(&[], "empty.json");
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn order_cyclic_exits_1_and_lists_remaining() {
    let out = order(&[], "two-components.json");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty(), "no partial order on stdout");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("3, 4, 5"), "stderr: {stderr}");
    assert!(stderr.contains("3 of 6"), "stderr: {stderr}");
}

#[test]
fn order_cyclic_quiet_keeps_error_line() {
    let out = order(&["--quiet"], "ring.json");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(!stderr.contains("cannot be ordered:"), "stderr: {stderr}");
    assert!(stderr.contains("error: graph is cyclic"), "stderr: {stderr}");
}

#[test]
fn order_json_acyclic() {
    let out = order(&["--format", "json"], "diamond.json");
    assert!(out.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout is JSON");
    assert_eq!(value, serde_json::json!({"order": ["0", "1", "2", "3"]}));
}

#[test]
fn order_json_cyclic_reports_partial_order() {
    let out = order(&["--format", "json"], "two-components.json");
    assert_eq!(out.status.code(), Some(1));
    let value: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout is JSON");
    assert!(value["order"].is_null());
    assert_eq!(value["emitted"], serde_json::json!(["0", "1", "2"]));
    assert_eq!(value["remaining"], serde_json::json!(["3", "4", "5"]));
}
