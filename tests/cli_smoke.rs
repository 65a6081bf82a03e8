use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn bin() -> String {
    // Cargo sets this for bin targets in integration tests
    env!("CARGO_BIN_EXE_curvelab").to_string()
}

/// Runs the binary with HOME pointed at `home` so no user config leaks in.
fn run(home: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .args(args)
        .output()
        .expect("run")
}

fn stdout(o: &Output) -> String {
    String::from_utf8_lossy(&o.stdout).into_owned()
}

fn stderr(o: &Output) -> String {
    String::from_utf8_lossy(&o.stderr).into_owned()
}

#[test]
fn quadratic_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(dir.path(), &["--json", "quadratic", "--a", "1", "--b", "-3", "--c", "2"]);
    assert!(out.status.success(), "stderr:\n{}", stderr(&out));

    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).expect("valid json");
    assert_eq!(v["kind"], "quadratic");
    assert_eq!(v["descriptors"]["kind"], "quadratic");
    assert_eq!(v["descriptors"]["nature"], "two_distinct_real");
    let roots = v["roots"].as_array().unwrap();
    assert_eq!(roots.len(), 2);
    assert_eq!(roots[0]["kind"], "real");
}

#[test]
fn zero_leading_coefficient_exits_with_2() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(dir.path(), &["quadratic", "--a", "0", "--b", "1"]);
    assert_eq!(out.status.code(), Some(2));
    let err = stderr(&out);
    assert!(err.contains("Degenerate coefficient"), "stderr:\n{err}");
    assert!(err.contains("hint:"));
}

#[test]
fn json_error_body() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(dir.path(), &["--json", "poly", "1", "2", "3", "4", "5", "6", "7", "8"]);
    assert_eq!(out.status.code(), Some(2));
    let v: serde_json::Value = serde_json::from_str(stderr(&out).trim()).expect("json error");
    assert_eq!(v["error"], "invalid_degree");
}

#[test]
fn poly_text_report_and_plot() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(dir.path(), &["--plot", "poly", "1", "0", "-3", "0"]);
    assert!(out.status.success(), "stderr:\n{}", stderr(&out));
    let text = stdout(&out);
    assert!(text.starts_with("Polynomial  y = 1.00x^3 + -3.00x"));
    assert!(text.contains("local maximum"));
    assert!(text.contains("[x] root"));
}

#[test]
fn config_file_overrides_and_config_command() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("curvelab.toml");
    fs::write(&cfg, "samples = 250\nx_range = [-2.0, 3.0]\n").unwrap();

    let out = run(dir.path(), &["--config", cfg.to_str().unwrap(), "config"]);
    assert!(out.status.success(), "stderr:\n{}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("samples = 250"));
    assert!(text.contains("ellipse_samples = 800"));

    let missing = dir.path().join("nope.toml");
    let out = run(dir.path(), &["--config", missing.to_str().unwrap(), "config"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn export_writes_samples() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("out").join("cubic.json");
    let out = run(
        dir.path(),
        &["--samples", "50", "--export", dest.to_str().unwrap(), "cubic"],
    );
    assert!(out.status.success(), "stderr:\n{}", stderr(&out));
    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&dest).unwrap()).unwrap();
    assert_eq!(v["curve"]["xs"].as_array().unwrap().len(), 50);
    assert_eq!(v["report"]["kind"], "cubic");
    assert!(v["generated_at"].as_str().is_some());
}

#[test]
fn parameter_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ellipse.toml");
    fs::write(&input, "kind = \"ellipse\"\na = 4.0\nb = 4.0\n").unwrap();
    let out = run(dir.path(), &["--json", "file", input.to_str().unwrap()]);
    assert!(out.status.success(), "stderr:\n{}", stderr(&out));
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["descriptors"]["is_circle"], true);
}

#[test]
fn watch_once_env_breaks_loop() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("line.toml");
    fs::write(&input, "kind = \"linear\"\nm = 2.0\nc = -4.0\n").unwrap();
    let out = Command::new(bin())
        .env("HOME", dir.path())
        .env("NO_COLOR", "1")
        .env("CURVELAB_WATCH_ONCE", "1")
        .args(["--json", "file", input.to_str().unwrap(), "--watch"])
        .output()
        .expect("run");
    assert!(out.status.success(), "stderr:\n{}", stderr(&out));
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["kind"], "linear");
    assert_eq!(v["roots"][0]["re"], 2.0);
}

#[test]
fn watch_keeps_going_after_bad_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.toml");
    fs::write(&input, "kind = \"quadratic\"\na = 0.0\nb = 1.0\nc = 1.0\n").unwrap();
    let out = Command::new(bin())
        .env("HOME", dir.path())
        .env("NO_COLOR", "1")
        .env("CURVELAB_WATCH_ONCE", "1")
        .args(["file", input.to_str().unwrap(), "--watch"])
        .output()
        .expect("run");
    // errors are reported inside the loop, not fatal to it
    assert!(out.status.success());
    assert!(stderr(&out).contains("Degenerate coefficient"));
}

#[test]
fn poly_leading_zeros_trim_to_a_line() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(dir.path(), &["--json", "poly", "0", "0", "3"]);
    assert!(out.status.success(), "stderr:\n{}", stderr(&out));
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["descriptors"]["degree"], 1);
    assert_eq!(v["roots"].as_array().unwrap().len(), 0);
}

#[test]
fn animate_finite_sweep() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(
        dir.path(),
        &["animate", "--frames", "3", "--interval-ms", "0", "--amp", "2"],
    );
    assert!(out.status.success(), "stderr:\n{}", stderr(&out));
    assert_eq!(stdout(&out).matches("φ = ").count(), 3);

    let out = run(dir.path(), &["--json", "animate", "--frames", "4", "--func", "cos"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["frames"].as_array().unwrap().len(), 4);
}
