//! Exit-status and envelope contract of the sf6wire binary, driven the way
//! operators and scripts invoke it: hex payload in, report or JSON envelope
//! out. Exit code 0 means a complete decode, 1 a skipped or rejected
//! payload, 2 input that never parsed to payload bytes.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};

const EXAMPLE_HEX: &str = "09FA157C0B72157C002A";

fn run_sf6wire(args: &[&str]) -> std::process::Output {
    let mut cmd = Command::cargo_bin("sf6wire").expect("sf6wire binary");
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("run sf6wire")
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!("stdout is not valid JSON: {}\n{}", e, String::from_utf8_lossy(&output.stdout))
    })
}

// ---------------------------------------------------------------------------
// Human-readable report
// ---------------------------------------------------------------------------

#[test]
fn complete_decode_exits_zero_with_report() {
    let output = run_sf6wire(&[EXAMPLE_HEX]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Payload:  09FA157C0B72157C002A (10 bytes, port 1)"));
    assert!(stdout.contains("25.54 kg/m³"));
    assert!(stdout.contains("293.0 K (19.85 °C)"));
    assert!(stdout.contains("Modbus Counter:      42"));
    assert!(stdout.contains("2554 (0x09FA)"));
}

#[test]
fn pasted_hex_with_prefixes_and_whitespace_decodes() {
    let output = run_sf6wire(&["0x09 0xFA 0x15 0x7C 0x0B 0x72 0x15 0x7C 0x00 0x2A"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("25.54 kg/m³"));
}

// ---------------------------------------------------------------------------
// Exit codes on skipped and rejected payloads
// ---------------------------------------------------------------------------

#[test]
fn off_port_payload_exits_one() {
    let mut cmd = Command::cargo_bin("sf6wire").expect("sf6wire binary");
    cmd.arg("--port")
        .arg("2")
        .arg(EXAMPLE_HEX)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unexpected port: 2"));
}

#[test]
fn short_payload_exits_one_with_canonical_length_error() {
    // 18 hex digits parse to 9 bytes; the decoder owns the length check.
    let mut cmd = Command::cargo_bin("sf6wire").expect("sf6wire binary");
    cmd.arg("09FA157C0B72157C00")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid payload length: expected 10 bytes, got 9"));
}

#[test]
fn unparseable_hex_exits_two() {
    let mut cmd = Command::cargo_bin("sf6wire").expect("sf6wire binary");
    cmd.arg("ZZZZ")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid hex payload"));
}

#[test]
fn odd_digit_count_exits_two() {
    let mut cmd = Command::cargo_bin("sf6wire").expect("sf6wire binary");
    cmd.arg("09FA1")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid hex payload"));
}

// ---------------------------------------------------------------------------
// TTN envelope (--json)
// ---------------------------------------------------------------------------

#[test]
fn json_envelope_on_complete_decode() {
    let output = run_sf6wire(&["--json", EXAMPLE_HEX]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let expected = json!({
        "data": {
            "sf6_density": 25.54,
            "sf6_pressure_20c": 550.0,
            "sf6_temperature_k": 293.0,
            "sf6_temperature_c": 293.0 - 273.15,
            "sf6_pressure_var": 550.0,
            "modbus_counter": 42
        },
        "warnings": [],
        "errors": []
    });
    assert_eq!(stdout_json(&output), expected);
}

#[test]
fn json_envelope_off_port_warns_and_exits_one() {
    let output = run_sf6wire(&["--json", "--port", "7", EXAMPLE_HEX]);
    assert_eq!(output.status.code(), Some(1));

    let value = stdout_json(&output);
    assert_eq!(value["data"], json!({}));
    assert_eq!(value["warnings"], json!(["Unexpected port: 7"]));
    assert_eq!(value["errors"], json!([]));
}

#[test]
fn json_envelope_wrong_length_errors_and_exits_one() {
    let output = run_sf6wire(&["--json", "09FA157C0B72157C00"]);
    assert_eq!(output.status.code(), Some(1));

    let value = stdout_json(&output);
    assert_eq!(value["data"], json!({}));
    assert_eq!(value["warnings"], json!([]));
    assert_eq!(
        value["errors"],
        json!(["Invalid payload length: expected 10 bytes, got 9"])
    );
}

// ---------------------------------------------------------------------------
// ChirpStack envelope (--chirpstack)
// ---------------------------------------------------------------------------

#[test]
fn chirpstack_envelope_on_complete_decode() {
    let output = run_sf6wire(&["--chirpstack", EXAMPLE_HEX]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let value = stdout_json(&output);
    let object = value.as_object().expect("flat measurement object");
    assert_eq!(object.len(), 6);
    assert_eq!(value["sf6_pressure_20c"], 550.0);
    assert_eq!(value["modbus_counter"], 42);
    assert!(!object.contains_key("error"));
    assert!(!object.contains_key("data"));
}

#[test]
fn chirpstack_envelope_off_port_is_error_only_and_exits_one() {
    let output = run_sf6wire(&["--chirpstack", "--port", "3", EXAMPLE_HEX]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_json(&output), json!({ "error": "Unexpected port: 3" }));
}
