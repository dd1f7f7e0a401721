//! CLI surface tests — argument parsing, help, version.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn oap_setup() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("oap-setup"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_cli_help_flag_shows_help() {
    oap_setup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_cli_help_describes_purpose() {
    oap_setup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Wire Supabase authentication into Open Agent Platform agent repositories",
        ));
}

#[test]
fn test_cli_version_flag_shows_version() {
    oap_setup()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("oap-setup"));
}

#[test]
fn test_version_command_shows_version() {
    oap_setup()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "oap-setup {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_version_command_json_outputs_valid_json() {
    oap_setup()
        .args(["version", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"version":"#));
}

#[test]
fn test_help_shows_setup_command() {
    oap_setup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("setup"));
}

#[test]
fn test_help_shows_verify_command() {
    oap_setup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("verify"));
}

#[test]
fn test_help_shows_provision_command() {
    oap_setup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("provision"));
}

#[test]
fn test_unknown_command_exits_with_error() {
    oap_setup()
        .arg("nonexistent")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_global_quiet_flag_accepted() {
    oap_setup().args(["--quiet", "version"]).assert().success();
}

#[test]
fn test_global_no_color_flag_accepted() {
    oap_setup()
        .args(["--no-color", "version"])
        .assert()
        .success();
}

#[test]
fn test_no_color_env_var_accepted() {
    // NO_COLOR env var should be accepted with any truthy value
    oap_setup()
        .env("NO_COLOR", "true")
        .arg("version")
        .assert()
        .success();
}
