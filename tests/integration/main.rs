//! Integration tests for stackref
//!
//! Everything here must pass without AWS access: argument-surface
//! checks only, nothing that reaches the network.

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;

    fn stackref() -> Command {
        cargo_bin_cmd!("stackref")
    }

    #[test]
    fn help_displays() {
        stackref()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("CloudFormation output/export lookup"));
    }

    #[test]
    fn version_displays() {
        stackref()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("stackref"));
    }

    #[test]
    fn output_help() {
        stackref()
            .args(["output", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("output value"));
    }

    #[test]
    fn export_help() {
        stackref()
            .args(["export", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("exported value"));
    }

    #[test]
    fn no_subcommand_fails() {
        stackref().assert().failure();
    }

    #[test]
    fn output_without_key_or_list_fails() {
        stackref()
            .args(["output", "some-stack"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("required"));
    }

    #[test]
    fn output_key_with_list_fails() {
        stackref()
            .args(["output", "some-stack", "SomeKey", "--list"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot be used"));
    }

    #[test]
    fn export_without_name_or_list_fails() {
        stackref().arg("export").assert().failure();
    }

    #[test]
    fn invalid_format_rejected() {
        stackref()
            .args(["export", "--list", "--format", "yaml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid value"));
    }
}
