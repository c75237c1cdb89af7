//! Binary-level tests for argument handling and config validation

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tui_mentions() -> Command {
    Command::cargo_bin("tui-mentions").unwrap()
}

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_help_lists_options() {
    tui_mentions()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--trigger"))
        .stdout(predicate::str::contains("--check-config"));
}

#[test]
fn test_check_config_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");

    tui_mentions()
        .arg("--config")
        .arg(&path)
        .arg("--check-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("trigger: \"@\""))
        .stdout(predicate::str::contains("Horizontal"));
}

#[test]
fn test_check_config_applies_cli_overrides() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[mentions]\nplaceholder = \"Say something\"\n");

    tui_mentions()
        .args(["--trigger", "#", "--vertical", "--max-rows", "4", "--check-config"])
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("trigger: \"#\""))
        .stdout(predicate::str::contains("Say something"))
        .stdout(predicate::str::contains("max_visible_rows: 4"));
}

#[test]
fn test_vertical_without_rows_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");

    tui_mentions()
        .args(["--vertical", "--check-config"])
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_visible_rows is required"));
}

#[test]
fn test_malformed_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[mentions\nhorizontal = ");

    tui_mentions()
        .arg("--config")
        .arg(&path)
        .arg("--check-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_missing_roster_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");

    tui_mentions()
        .arg("--config")
        .arg(&path)
        .arg("--roster")
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load roster"));
}
