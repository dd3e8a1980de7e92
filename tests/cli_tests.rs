//! CLI interface tests
//!
//! Tests basic CLI functionality like --help, --version flags

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get the bundle-stats-diff binary command
fn get_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bundle-stats-diff"))
}

#[test]
fn test_cli_help_flag_displays_usage_information() {
    let mut cmd = get_bin();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Webpack bundle stats comparison for CI",
        ));
}

#[test]
fn test_cli_version_flag_displays_version_number() {
    let mut cmd = get_bin();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bundle-stats-diff"));
}

#[test]
fn test_cli_without_subcommand_shows_command_summary() {
    let mut cmd = get_bin();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage: bundle-stats-diff"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("diff"));
}

#[test]
fn test_cli_rejects_unknown_subcommand() {
    let mut cmd = get_bin();
    cmd.arg("frobnicate").assert().failure();
}

#[test]
fn test_cli_completions_bash_emits_script() {
    let mut cmd = get_bin();
    cmd.arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("bundle-stats-diff"));
}

#[test]
fn test_diff_subcommand_help_lists_exclude_flag() {
    let mut cmd = get_bin();
    cmd.arg("diff")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--exclude"))
        .stdout(predicate::str::contains("--json"));
}
