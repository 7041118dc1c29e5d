//! Integration tests for `cyclegraph components` and `cyclegraph inspect`.
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

fn run(subcommand: &str, args: &[&str], fixture_name: &str) -> std::process::Output {
    let path = fixture(fixture_name);
    Command::new(cyclegraph_bin())
        .arg(subcommand)
        .args(args)
        .arg(path.to_str().expect("path"))
        .output()
        .expect("run cyclegraph")
}

// ---------------------------------------------------------------------------
// components
// ---------------------------------------------------------------------------

#[test]
fn components_two_components_human() {
    let out = run("components", &[], "two-components.json");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "component 1 (3 nodes, acyclic): 0, 1, 2\ncomponent 2 (3 nodes, cyclic): 3, 4, 5\n"
    );
}

#[test]
fn components_json() {
    let out = run("components", &["--format", "json"], "build-deps.json");
    assert!(out.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout is JSON");
    assert_eq!(value["count"], 1);
    assert_eq!(value["components"][0]["cyclic"], false);
    assert_eq!(
        value["components"][0]["nodes"]
            .as_array()
            .expect("nodes array")
            .len(),
        7
    );
}

#[test]
fn components_empty_graph_prints_nothing() {
    let out = run("components", &[], "empty.json");
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

// ---------------------------------------------------------------------------
// inspect
// ---------------------------------------------------------------------------

#[test]
fn inspect_human_lists_counts() {
    let out = run("inspect", &[], "build-deps.json");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("nodes:       7"), "stdout: {stdout}");
    assert!(stdout.contains("edges:       9"), "stdout: {stdout}");
    assert!(stdout.contains("sources:     1"), "stdout: {stdout}");
    assert!(stdout.contains("sinks:       2"), "stdout: {stdout}");
}

#[test]
fn inspect_json() {
    let out = run("inspect", &["-f", "json"], "self-loop.json");
    assert!(out.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout is JSON");
    assert_eq!(
        value,
        serde_json::json!({
            "node_count": 1,
            "edge_count": 1,
            "self_loops": 1,
            "sources": 0,
            "sinks": 0,
            "components": 1,
        })
    );
}
