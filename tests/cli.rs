use std::{
    fs,
    io::Write,
    path::Path,
    process::{Command, Output, Stdio},
};

use tempfile::tempdir;

fn run_confjson(source: &str, args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_confjson"));
    command.args(args)
           .env_remove("RUST_LOG")
           .stdin(Stdio::piped())
           .stdout(Stdio::piped())
           .stderr(Stdio::piped());

    let mut child = command.spawn()
                           .unwrap_or_else(|e| panic!("Failed to spawn confjson: {e}"));
    if let Some(mut stdin) = child.stdin.take() {
        // A usage error exits before reading, closing the pipe.
        let _ = stdin.write_all(source.as_bytes());
    }
    child.wait_with_output().unwrap()
}

fn output_arg(path: &Path) -> String {
    path.to_str().unwrap().to_string()
}

#[test]
fn writes_json_and_exits_zero() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");

    let output = run_confjson("var A 2 '(1 {A + 0.5})", &["-o", &output_arg(&path)]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, serde_json::json!([1, 2.5]));
}

#[test]
fn compact_output_is_one_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");

    let output = run_confjson("1 '(2 3)", &["--compact", "--output", &output_arg(&path)]);

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&path).unwrap().trim_end(), "[1,[2,3]]");
}

#[test]
fn syntax_error_reports_location_and_exits_one() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");

    let output = run_confjson("var A 1\n{A + B}", &["-o", &output_arg(&path)]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: line 2, column 6: Unknown variable 'B'."),
            "stderr: {stderr}");
    assert!(!path.exists(), "no output file is written on failure");
}

#[test]
fn deep_nesting_fails_cleanly() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");
    let source = format!("{}{}", "'(".repeat(10_000), ")".repeat(10_000));

    let output = run_confjson(&source, &["-o", &output_arg(&path)]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Nesting is deeper than 256 levels."), "stderr: {stderr}");
}

#[test]
fn missing_output_flag_is_a_usage_error() {
    let output = run_confjson("1", &[]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--output"));
}
