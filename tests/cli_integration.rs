use assert_cmd::Command;
use predicates::prelude::*;

fn build_sweeper() -> Command {
    Command::cargo_bin("build-sweeper").unwrap()
}

#[test]
fn shows_help() {
    build_sweeper()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build-artifact directories"));
}

#[test]
fn shows_version() {
    build_sweeper()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_subcommand() {
    build_sweeper()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn scan_subcommand_help() {
    build_sweeper()
        .args(["scan", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cache the results"));
}

#[test]
fn list_subcommand_help() {
    build_sweeper()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("without rescanning"));
}

#[test]
fn forget_requires_path() {
    build_sweeper()
        .arg("forget")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<PATH>"));
}

#[test]
fn invalid_config_path_fails() {
    build_sweeper()
        .args(["--config", "/nonexistent/path.toml", "roots"])
        .assert()
        .failure();
}

#[test]
fn invalid_sort_is_rejected() {
    build_sweeper()
        .args(["list", "--sort", "mtime"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown sort field"));
}

#[test]
fn generates_bash_completions() {
    build_sweeper()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("build-sweeper"));
}
