//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_stdin() {
    cargo_bin_cmd!("mdblocks")
        .arg("parse")
        .write_stdin("# Heading\n\nParagraph.")
        .assert()
        .success()
        .stdout("AtxHeading level=1 \"Heading\"\nParagraph \"Paragraph.\"\n");
}

#[test]
fn test_parse_file_shows_nesting() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "> quoted\n> > deeper\n").unwrap();

    cargo_bin_cmd!("mdblocks")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Blockquote\n  Paragraph \"quoted\"\n  Blockquote\n    Paragraph \"deeper\"\n",
        ));
}

#[test]
fn test_parse_json() {
    let output = cargo_bin_cmd!("mdblocks")
        .args(["parse", "--json"])
        .write_stdin("```rust\nfn main() {}\n```\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tree["kind"], "Root");
    let code = &tree["children"][0];
    assert_eq!(code["kind"], "FencedCode");
    assert_eq!(code["meta"]["FencedCode"]["info"], "rust");
    assert_eq!(code["inline"], "fn main() {}\n");
}

#[test]
fn test_parse_discovers_config_next_to_input() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "Para\n# Head\n").unwrap();
    fs::write(temp_dir.path().join(".mdblocks.toml"), "flavor = \"pandoc\"\n").unwrap();

    cargo_bin_cmd!("mdblocks")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("Paragraph \"Para\\n# Head\"\n");
}

#[test]
fn test_parse_with_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("custom.toml");
    fs::write(&config_file, "[blocks]\natx_headings = false\n").unwrap();

    cargo_bin_cmd!("mdblocks")
        .args(["parse", "--config", config_file.to_str().unwrap()])
        .write_stdin("# Not a heading\n")
        .assert()
        .success()
        .stdout("Paragraph \"# Not a heading\"\n");
}

#[test]
fn test_parse_empty_input() {
    cargo_bin_cmd!("mdblocks")
        .arg("parse")
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}
