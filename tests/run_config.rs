use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn run_writes_the_configured_outputs() {
    let dir = tempdir().unwrap();
    let graph = dir.path().join("graph.json");
    fs::write(&graph, r#"{"app": ["b", "c"], "b": ["d"], "c": [], "d": []}"#).unwrap();

    let order_out = dir.path().join("out/order.txt");
    let puml_out = dir.path().join("out/deps.puml");
    let config = dir.path().join("depviz.toml");
    fs::write(
        &config,
        format!(
            "package = \"app\"\ngraph = {:?}\n\n[output]\norder = {:?}\npuml = {:?}\n",
            graph, order_out, puml_out
        ),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("depviz").unwrap();
    cmd.arg("run").arg("--config").arg(&config);
    cmd.assert().success().stdout(predicate::str::contains("Processing config"));

    let order = fs::read_to_string(&order_out).unwrap();
    assert_eq!(order.lines().last(), Some("app"));
    let puml = fs::read_to_string(&puml_out).unwrap();
    assert!(puml.contains("N_app --> N_b"));
    assert!(puml.contains("#LightBlue"));
}

#[test]
fn run_respects_max_depth_and_exclude() {
    let dir = tempdir().unwrap();
    let graph = dir.path().join("graph.json");
    fs::write(&graph, r#"{"app": ["libx", "b"], "libx": ["deep"], "b": ["deep"], "deep": ["deeper"]}"#)
        .unwrap();

    let order_out = dir.path().join("order.txt");
    let config = dir.path().join("depviz.toml");
    fs::write(
        &config,
        format!(
            "package = \"app\"\ngraph = {:?}\nmax_depth = 2\nexclude = \"lib\"\n\n[output]\norder = {:?}\n",
            graph, order_out
        ),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("depviz").unwrap();
    cmd.arg("--quiet").arg("run").arg("--config").arg(&config);
    cmd.assert().success();

    let order = fs::read_to_string(&order_out).unwrap();
    let lines: Vec<&str> = order.lines().collect();
    // libx pruned by the exclude substring; deeper cut by the depth limit.
    assert_eq!(lines, ["deep", "b", "app"]);
}

#[test]
fn run_with_missing_package_fails_that_run() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("broken.toml");
    fs::write(&config, "version = \"latest\"\n").unwrap();

    let mut cmd = Command::cargo_bin("depviz").unwrap();
    cmd.arg("run").arg("--config").arg(&config);
    cmd.assert().failure().stderr(predicate::str::contains("Missing package name"));
}

#[test]
fn run_continues_past_a_failing_config() {
    let dir = tempdir().unwrap();
    let graph = dir.path().join("graph.json");
    fs::write(&graph, r#"{"ok": []}"#).unwrap();

    let broken = dir.path().join("broken.toml");
    fs::write(&broken, "version = \"latest\"\n").unwrap();
    let good = dir.path().join("good.toml");
    let order_out = dir.path().join("order.txt");
    fs::write(
        &good,
        format!("package = \"ok\"\ngraph = {:?}\n\n[output]\norder = {:?}\n", graph, order_out),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("depviz").unwrap();
    cmd.arg("run").arg("--config").arg(&broken).arg(&good);
    // Exit code reflects the failure, but the good config still ran.
    cmd.assert().failure();
    assert_eq!(fs::read_to_string(&order_out).unwrap(), "ok\n");
}
