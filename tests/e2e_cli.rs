//! CLI end-to-end tests
//!
//! Tests for the screenscore command-line interface. None of these reach
//! the network.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the screenscore binary
#[allow(deprecated)]
fn screenscore_cmd() -> Command {
    let mut cmd = Command::cargo_bin("screenscore").unwrap();
    cmd.env_remove("TMDB_API_KEY");
    cmd
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = screenscore_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = screenscore_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("screenscore"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = screenscore_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "screenscore {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_cli_start_help() {
    let mut cmd = screenscore_cmd();
    cmd.args(["start", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Start the HTTP server"));
}

#[test]
fn test_cli_slug_command() {
    let mut cmd = screenscore_cmd();
    cmd.args(["slug", "Amélie & the Kid's Return!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("amelie_and_the_kids_return_"));
}

#[test]
fn test_cli_details_rejects_unknown_media_type() {
    let mut cmd = screenscore_cmd();
    cmd.args(["details", "27205", "person"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("person"));
}

#[test]
fn test_cli_details_requires_numeric_id() {
    let mut cmd = screenscore_cmd();
    cmd.args(["details", "abc", "movie"]).assert().failure();
}

#[test]
fn test_cli_validate_config() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("config.toml");

    fs::write(
        &config_file,
        r#"
[server]
host = "127.0.0.1"
port = 8181

[tmdb]
api_key = "abc123"
"#,
    )
    .unwrap();

    let mut cmd = screenscore_cmd();
    cmd.args(["validate", config_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("127.0.0.1:8181"))
        .stdout(predicate::str::contains("API key set: true"));
}

#[test]
fn test_cli_validate_invalid_config() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("config.toml");

    fs::write(
        &config_file,
        r#"
[server]
port = 0
"#,
    )
    .unwrap();

    let mut cmd = screenscore_cmd();
    cmd.args(["validate", config_file.to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn test_cli_search_requires_query() {
    let mut cmd = screenscore_cmd();
    cmd.arg("search")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
