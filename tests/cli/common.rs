//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("mdblocks")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mdblocks tokenizes a CommonMark document"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("mdblocks")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("mdblocks")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("mdblocks")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_missing_input_file() {
    cargo_bin_cmd!("mdblocks")
        .args(["render", "definitely/not/here.md"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_explicit_config() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    std::fs::write(&config_file, "no_such_key = 1\n").unwrap();

    cargo_bin_cmd!("mdblocks")
        .args(["render", "--config", config_file.to_str().unwrap()])
        .write_stdin("text\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}
