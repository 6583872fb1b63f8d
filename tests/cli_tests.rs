//! CLI surface tests
//!
//! These tests exercise argument parsing, flag validation, and the error
//! paths that fail before any request is made. Nothing here needs a
//! network or a live model runtime.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

/// Helper function to create a test command
fn create_test_cmd() -> Command {
    Command::cargo_bin("blp").unwrap()
}

/// Helper to run the binary from an empty directory with no ambient AWS
/// configuration, so the host environment cannot leak into assertions.
fn create_isolated_cmd(work_dir: &TempDir) -> Command {
    let mut cmd = create_test_cmd();
    cmd.current_dir(work_dir.path())
        .env_remove("AWS_BEARER_TOKEN_BEDROCK")
        .env_remove("AWS_PROFILE")
        .env_remove("AWS_REGION")
        .env_remove("AWS_DEFAULT_REGION");
    cmd
}

/// Test that help output documents the probe options
#[test]
fn test_help_lists_probe_options() {
    create_test_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--model"))
        .stdout(predicate::str::contains("--prompt"))
        .stdout(predicate::str::contains("--iterations"))
        .stdout(predicate::str::contains("--endpoint-url"))
        .stdout(predicate::str::contains("--no-color"));
}

/// Test that version output carries the package version
#[test]
fn test_version_output() {
    create_test_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that conflicting color flags are rejected before anything runs
#[test]
fn test_conflicting_color_flags() {
    create_test_cmd()
        .arg("--color")
        .arg("--no-color")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Cannot specify both --color and --no-color",
        ));
}

/// Test that zero iterations never reach the probe
#[test]
fn test_zero_iterations_rejected() {
    create_test_cmd()
        .arg("--iterations")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Value must be greater than 0"));
}

/// Test that zero max tokens never reach the probe
#[test]
fn test_zero_max_tokens_rejected() {
    create_test_cmd()
        .arg("--max-tokens")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Value must be greater than 0"));
}

/// Test that non-numeric iteration counts are rejected by the parser
#[test]
fn test_non_numeric_iterations_rejected() {
    create_test_cmd()
        .arg("--iterations")
        .arg("three")
        .assert()
        .failure();

    create_test_cmd()
        .arg("--iterations")
        .arg("2.5")
        .assert()
        .failure();
}

/// Test that a malformed endpoint override fails configuration validation
#[test]
fn test_invalid_endpoint_rejected() {
    let work_dir = TempDir::new().unwrap();

    create_isolated_cmd(&work_dir)
        .arg("--endpoint-url")
        .arg("not-a-url")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Invalid endpoint URL"));
}

/// Test that a non-HTTP endpoint scheme is rejected
#[test]
fn test_non_http_endpoint_rejected() {
    let work_dir = TempDir::new().unwrap();

    create_isolated_cmd(&work_dir)
        .arg("--endpoint-url")
        .arg("ftp://example.com")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("must use http or https"));
}

/// Test that a missing bearer token fails with actionable guidance
#[test]
fn test_missing_token_guidance() {
    let work_dir = TempDir::new().unwrap();

    create_isolated_cmd(&work_dir)
        .arg("--endpoint-url")
        .arg("http://127.0.0.1:1")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("No bearer token found"))
        .stderr(predicate::str::contains(
            "Set AWS_BEARER_TOKEN_BEDROCK in the environment or a .env file",
        ));
}

/// Test that the profile flag changes which token variable is named
#[test]
fn test_missing_profile_token_names_scoped_variable() {
    let work_dir = TempDir::new().unwrap();

    create_isolated_cmd(&work_dir)
        .arg("--profile")
        .arg("staging")
        .arg("--endpoint-url")
        .arg("http://127.0.0.1:1")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("AWS_BEARER_TOKEN_BEDROCK_STAGING"));
}

/// Test that unknown flags are rejected
#[test]
fn test_unknown_flag_rejected() {
    create_test_cmd()
        .arg("--frequency")
        .arg("10")
        .assert()
        .failure();
}

/// Test that options missing their value are rejected
#[test]
fn test_missing_option_value_rejected() {
    create_test_cmd().arg("--model").assert().failure();

    create_test_cmd()
        .arg("--prompt")
        .arg("hello")
        .arg("--region")
        .assert()
        .failure();
}

/// Test that the short iteration flag behaves like the long one
#[test]
fn test_short_iteration_flag() {
    create_test_cmd()
        .arg("-i")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Value must be greater than 0"));
}

/// Test that debug mode prints the build banner before failing
#[test]
fn test_debug_banner_on_stderr() {
    let work_dir = TempDir::new().unwrap();

    create_isolated_cmd(&work_dir)
        .arg("--debug")
        .arg("--endpoint-url")
        .arg("http://127.0.0.1:1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("bedrock-latency-probe v"))
        .stderr(predicate::str::contains("Debug mode enabled"));
}

/// Test that verbose mode prints the configuration summary before failing
#[test]
fn test_verbose_configuration_summary() {
    let work_dir = TempDir::new().unwrap();

    create_isolated_cmd(&work_dir)
        .arg("--verbose")
        .arg("--region")
        .arg("eu-west-1")
        .arg("--endpoint-url")
        .arg("http://127.0.0.1:1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration:"))
        .stderr(predicate::str::contains("Region: eu-west-1"))
        .stderr(predicate::str::contains("Iterations: 1"));
}
