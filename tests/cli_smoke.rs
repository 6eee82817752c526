use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

// Bottom-up: simple CLI smoke test over a prebuilt adjacency file
#[test]
fn cli_order_and_tree_smoke() {
    // Arrange: adjacency JSON with a diamond
    let dir = tempdir().unwrap();
    let graph_path = dir.path().join("graph.json");
    write_file(
        &graph_path,
        r#"{"app": ["http", "fs"], "http": ["net", "fs"], "net": [], "fs": []}"#,
    );

    // Act: load order (dependencies first, root last)
    let mut cmd = Command::cargo_bin("depviz").unwrap();
    cmd.arg("order").arg("app").arg("--graph").arg(&graph_path);
    let out = cmd.assert().success();
    let stdout = String::from_utf8(out.get_output().stdout.clone()).unwrap();
    let order: Vec<&str> = stdout.lines().collect();
    assert_eq!(order.last(), Some(&"app"));
    let pos = |n: &str| order.iter().position(|o| *o == n).unwrap();
    assert!(pos("net") < pos("http"));
    assert!(pos("fs") < pos("http"));

    // Act: tree output with branch glyphs
    let mut cmd2 = Command::cargo_bin("depviz").unwrap();
    cmd2.arg("tree").arg("app").arg("--graph").arg(&graph_path);
    cmd2.assert()
        .success()
        .stdout(predicate::str::contains("├─ http"))
        .stdout(predicate::str::contains("│  ├─ net"))
        .stdout(predicate::str::contains("└─ fs"));
}

#[test]
fn cli_order_reports_cycles_on_stderr() {
    let dir = tempdir().unwrap();
    let graph_path = dir.path().join("graph.json");
    write_file(&graph_path, r#"{"a": ["b"], "b": ["a"]}"#);

    let mut cmd = Command::cargo_bin("depviz").unwrap();
    cmd.arg("order").arg("a").arg("--graph").arg(&graph_path);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("cycle: a -> b -> a"))
        .stdout(predicate::str::contains("a"));
}

#[test]
fn cli_missing_graph_file_fails_cleanly() {
    let mut cmd = Command::cargo_bin("depviz").unwrap();
    cmd.arg("order").arg("app").arg("--graph").arg("no/such/graph.json");
    cmd.assert().failure().stderr(predicate::str::contains("graph.json"));
}

fn write_file(path: &PathBuf, content: &str) {
    fs::write(path, content).unwrap();
}
