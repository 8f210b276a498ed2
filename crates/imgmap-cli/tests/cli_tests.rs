//! End-to-end tests for the replace-ids binary.
//!
//! Each test runs the compiled binary against files in a temp directory and
//! checks exit status, stdout and the written output.

use serde_json::{json, Value};
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const USAGE: &str = "Usage: replace-ids data.json mapping.json output.json";

fn run<S: AsRef<OsStr>>(args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_replace-ids"))
        .args(args)
        .output()
        .expect("Failed to run replace-ids")
}

fn run_in<S: AsRef<OsStr>>(dir: &Path, args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_replace-ids"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to run replace-ids")
}

fn write_json(path: &Path, value: &Value) {
    std::fs::write(path, serde_json::to_string(value).unwrap()).unwrap();
}

#[test]
fn test_replaces_ids_and_confirms() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let data = temp_dir.path().join("data.json");
    let mapping = temp_dir.path().join("mapping.json");
    let output = temp_dir.path().join("output.json");
    write_json(
        &data,
        &json!([{"image": {"fileName": "a.jpg", "id": 1}}, {"name": "no-image"}]),
    );
    write_json(&mapping, &json!([{"fileName": "a.jpg", "id": 99}]));

    let result = run(&[&data, &mapping, &output]);
    assert!(result.status.success());

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert_eq!(
        stdout.trim_end(),
        format!("✅ Updated JSON written to {}", output.display())
    );

    let written = std::fs::read_to_string(&output).unwrap();
    let parsed: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(
        parsed,
        json!([{"image": {"fileName": "a.jpg", "id": 99}}, {"name": "no-image"}])
    );
    assert!(written.starts_with("[\n  {\n    \"image\": {\n      \"fileName\""));
}

#[test]
fn test_two_arguments_prints_usage() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let data = temp_dir.path().join("data.json");
    let mapping = temp_dir.path().join("mapping.json");
    write_json(&data, &json!([]));
    write_json(&mapping, &json!([]));

    let result = run(&[&data, &mapping]);
    assert_eq!(result.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&result.stdout).trim_end(), USAGE);

    let entries = std::fs::read_dir(temp_dir.path()).unwrap().count();
    assert_eq!(entries, 2);
}

#[test]
fn test_four_arguments_prints_usage() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let p = temp_dir.path().join("x.json");

    let result = run(&[&p, &p, &p, &p]);
    assert_eq!(result.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&result.stdout).trim_end(), USAGE);
    assert!(!p.exists());
}

#[test]
fn test_missing_input_fails_without_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let data = temp_dir.path().join("missing.json");
    let mapping = temp_dir.path().join("mapping.json");
    let output = temp_dir.path().join("output.json");
    write_json(&mapping, &json!([]));

    let result = run(&[&data, &mapping, &output]);
    assert!(!result.status.success());
    assert!(!output.exists());
    assert!(String::from_utf8_lossy(&result.stderr).contains("missing.json"));
}

#[test]
fn test_malformed_mapping_fails_without_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let data = temp_dir.path().join("data.json");
    let mapping = temp_dir.path().join("mapping.json");
    let output = temp_dir.path().join("output.json");
    write_json(&data, &json!([]));
    std::fs::write(&mapping, "[{\"fileName\": \"a.jpg\",").unwrap();

    let result = run(&[&data, &mapping, &output]);
    assert!(!result.status.success());
    assert!(!output.exists());
}

#[test]
fn test_output_name_starting_with_hyphen() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_json(
        &temp_dir.path().join("d.json"),
        &json!([{"image": {"fileName": "a.jpg", "id": 1}}]),
    );
    write_json(
        &temp_dir.path().join("m.json"),
        &json!([{"fileName": "a.jpg", "id": 2}]),
    );

    let result = run_in(temp_dir.path(), &["d.json", "m.json", "-out.json"]);
    assert!(result.status.success());

    let written = std::fs::read_to_string(temp_dir.path().join("-out.json")).unwrap();
    let parsed: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, json!([{"image": {"fileName": "a.jpg", "id": 2}}]));
}
