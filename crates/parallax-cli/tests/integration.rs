//! Integration tests for CLI commands.

use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

fn parallax() -> Command {
    Command::new(env!("CARGO_BIN_EXE_parallax"))
}

fn write_input(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn canonicalize_sorts_keys_and_strips_whitespace() {
    let input = write_input(r#"{ "b": 1, "a": { "nested": 2 } }"#);
    let output = parallax()
        .args(["canonicalize", input.path().to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        r#"{"a":{"nested":2},"b":1}"#
    );
}

#[test]
fn canonicalize_rejects_floats_with_path() {
    let input = write_input(r#"{"patch": {"coords": [1, 2.5]}}"#);
    let output = parallax()
        .args(["canonicalize", input.path().to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("floating-point"));
    assert!(stderr.contains("patch.coords.[1]"));
}

#[test]
fn digest_without_domain_hashes_content() {
    let input = write_input(r#"{"b": 1, "a": {"nested": 2}}"#);
    let output = parallax()
        .args(["digest", input.path().to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "dc3c0a31d639949a2dc74a65ba8a196aa02a59ff20a9e729a73141d2a6488fa1"
    );
}

#[test]
fn digest_with_domain_separates() {
    let input = write_input(r#"{"x": 1000, "y": -250, "z": 17}"#);
    let geom = parallax()
        .args(["digest", input.path().to_str().unwrap(), "--domain", "geom"])
        .output()
        .unwrap();
    assert!(geom.status.success());
    assert_eq!(
        String::from_utf8_lossy(&geom.stdout).trim(),
        "0cb2e552b9fddf9307a2ce97af0a85bac213081ae557daedf73181ce7765db8e"
    );

    let patch = parallax()
        .args(["digest", input.path().to_str().unwrap(), "--domain", "patch"])
        .output()
        .unwrap();
    assert_ne!(geom.stdout, patch.stdout);
}

#[test]
fn digest_rejects_unknown_domain() {
    let input = write_input(r#"{}"#);
    let output = parallax()
        .args(["digest", input.path().to_str().unwrap(), "--domain", "bogus"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown domain tag"));
}

#[test]
fn quantize_reports_result_json() {
    let output = parallax()
        .args(["quantize", "0.0015", "--precision", "geom"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["quantized"], 2);
    assert_eq!(result["edge_cases"], serde_json::json!([]));
}

#[test]
fn quantize_accepts_negative_values() {
    // A signed measurement must parse without a `--` separator.
    let output = parallax()
        .args(["quantize", "-0.002", "--precision", "geom"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["quantized"], -2);
    assert_eq!(result["edge_cases"], serde_json::json!([]));
}

#[test]
fn fieldset_hashes_descriptor_files() {
    let input = write_input(
        r#"{"type_name":"PatchSample","fields":[
            {"name":"session","type":"string","optional":false},
            {"name":"label","type":"string","optional":true},
            {"name":"depth","type":"LengthQuantity","optional":false}
        ]}"#,
    );
    let output = parallax()
        .args(["fieldset", input.path().to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "23668fdaa8bd1d50f38dc39fdbc5f4746a1a35e8d966139b99efa526944d600c"
    );
}
