//! Integration tests for clusterctl
//!
//! Every command runs as a real process; exit codes are checked along with
//! the output.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Custom predicate to check if output is valid JSON
fn is_json() -> impl predicates::Predicate<[u8]> {
    predicates::function::function(|s: &[u8]| {
        if let Ok(text) = std::str::from_utf8(s) {
            serde_json::from_str::<Value>(text).is_ok()
        } else {
            false
        }
    })
}

fn clusterctl() -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("clusterctl")?;
    cmd.env_remove("CLUSTERCTL_CONFIG").env_remove("RUST_LOG");
    Ok(cmd)
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> Result<PathBuf, std::io::Error> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

const GEAR_SCENARIOS: &str = "\
duration_ms: 3000
events:
  - { action: press, at_ms: 100, input: gear }
  - { action: release, at_ms: 300, input: gear }
  - { action: press, at_ms: 1000, input: gear }
  - { action: release, at_ms: 1900, input: gear }
  - { action: press, at_ms: 2200, input: gear }
  - { action: release, at_ms: 2300, input: gear }
  - { action: press, at_ms: 2400, input: gear }
  - { action: release, at_ms: 2500, input: gear }
";

const QUIET_CONFIG: &str = "report_on_boot: false\n";

#[test]
fn test_cli_help() -> TestResult {
    clusterctl()?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("instrument cluster poll engine"));
    Ok(())
}

#[test]
fn test_cli_version() -> TestResult {
    clusterctl()?
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("clusterctl"));
    Ok(())
}

#[test]
fn test_inputs_human() -> TestResult {
    clusterctl()?
        .arg("inputs")
        .assert()
        .success()
        .stdout(predicate::str::contains("fuel_gauge"))
        .stdout(predicate::str::contains("GAUG F <0-100>"))
        .stdout(predicate::str::contains("D52"));
    Ok(())
}

#[test]
fn test_inputs_json() -> TestResult {
    let output = clusterctl()?.args(["inputs", "--json"]).output()?;
    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["success"], Value::Bool(true));
    let inputs = value["inputs"].as_array().ok_or("inputs is not an array")?;
    assert_eq!(inputs.len(), 19);
    assert_eq!(inputs[18]["id"], Value::from("gear"));
    Ok(())
}

#[test]
fn test_config_default_yaml() -> TestResult {
    clusterctl()?
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("debounce_ms: 20"))
        .stdout(predicate::str::contains("epoch_ticks: 128"));
    Ok(())
}

#[test]
fn test_config_default_json() -> TestResult {
    clusterctl()?
        .args(["config", "--json"])
        .assert()
        .success()
        .stdout(is_json());
    Ok(())
}

#[test]
fn test_config_check_valid() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_file(&dir, "engine.yaml", "debounce_ms: 10\n")?;
    clusterctl()?
        .arg("config")
        .arg("--check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration valid"));
    Ok(())
}

#[test]
fn test_config_check_out_of_range() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_file(&dir, "engine.json", r#"{"epoch_ticks": 0}"#)?;
    clusterctl()?
        .arg("config")
        .arg("--check")
        .arg(&path)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("epoch_ticks"));
    Ok(())
}

#[test]
fn test_config_check_unknown_field() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_file(&dir, "engine.json", r#"{"debounce": 5}"#)?;
    clusterctl()?
        .arg("config")
        .arg("--check")
        .arg(&path)
        .assert()
        .code(4);
    Ok(())
}

#[test]
fn test_config_check_unsupported_extension() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_file(&dir, "engine.toml", "debounce_ms = 5\n")?;
    clusterctl()?
        .arg("config")
        .arg("--check")
        .arg(&path)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unsupported file format"));
    Ok(())
}

#[test]
fn test_config_check_json_error_output() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_file(&dir, "engine.json", r#"{"gear_hold_ms": 20000}"#)?;
    clusterctl()?
        .args(["config", "--json", "--check"])
        .arg(&path)
        .assert()
        .code(4)
        .stdout(is_json())
        .stdout(predicate::str::contains("gear_hold_ms"));
    Ok(())
}

#[test]
fn test_simulate_gear_gestures() -> TestResult {
    let dir = TempDir::new()?;
    let scenario = write_file(&dir, "gear.yaml", GEAR_SCENARIOS)?;
    let config = write_file(&dir, "quiet.yaml", QUIET_CONFIG)?;
    clusterctl()?
        .arg("simulate")
        .arg(&scenario)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout("GEAR\nGEAR L\nGEAR S\n");
    Ok(())
}

#[test]
fn test_simulate_timestamps() -> TestResult {
    let dir = TempDir::new()?;
    let scenario = write_file(
        &dir,
        "hazard.json",
        r#"{"duration_ms": 100, "events": [{"action": "press", "at_ms": 10, "input": "hazard"}]}"#,
    )?;
    let config = write_file(&dir, "quiet.yaml", QUIET_CONFIG)?;
    clusterctl()?
        .arg("simulate")
        .arg(&scenario)
        .arg("--config")
        .arg(&config)
        .arg("--timestamps")
        .assert()
        .success()
        .stdout("      29 HZRD\n");
    Ok(())
}

#[test]
fn test_simulate_boot_report_and_rollover() -> TestResult {
    let dir = TempDir::new()?;
    let scenario = write_file(
        &dir,
        "rollover.yaml",
        "start_ms: 4294967200\nduration_ms: 400\nevents:\n  - { action: knob, at_ms: 0, value: 1023 }\n",
    )?;
    let output = clusterctl()?
        .args(["simulate", "--json"])
        .arg(&scenario)
        .output()?;
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout)?;
    let playback = &value["playback"];
    assert_eq!(playback["stats"]["clock_rollovers"], Value::from(1));
    let lines: Vec<&str> = playback["lines"]
        .as_array()
        .ok_or("lines is not an array")?
        .iter()
        .filter_map(|l| l["line"].as_str())
        .collect();
    assert_eq!(lines, vec!["GAUG F 100", "GAUG O 0", "GAUG T 0"]);
    Ok(())
}

#[test]
fn test_simulate_rejects_analog_press() -> TestResult {
    let dir = TempDir::new()?;
    let scenario = write_file(
        &dir,
        "bad.yaml",
        "duration_ms: 10\nevents:\n  - { action: press, at_ms: 1, input: oil_gauge }\n",
    )?;
    clusterctl()?
        .arg("simulate")
        .arg(&scenario)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("oil_gauge"));
    Ok(())
}

#[test]
fn test_simulate_missing_file() -> TestResult {
    clusterctl()?
        .args(["simulate", "does-not-exist.yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
    Ok(())
}

#[test]
fn test_completion_generation() -> TestResult {
    clusterctl()?
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clusterctl"));
    Ok(())
}
