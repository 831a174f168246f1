//! Render subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_render_stdin() {
    cargo_bin_cmd!("mdblocks")
        .arg("render")
        .write_stdin("Title\n=====\n\n> quoted\n\n***\n")
        .assert()
        .success()
        .stdout("<h1>Title</h1>\n<blockquote>\n<p>quoted</p>\n</blockquote>\n<hr />\n");
}

#[test]
fn test_render_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("doc.md");
    fs::write(&test_file, "Fish & chips\n").unwrap();

    cargo_bin_cmd!("mdblocks")
        .args(["render", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("<p>Fish &amp; chips</p>\n");
}

#[test]
fn test_render_unterminated_comment_reports_diagnostic() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("broken.md");
    let config_file = temp_dir.path().join("mdblocks.toml");
    fs::write(&test_file, "intro\n\n<!-- never closed\n").unwrap();
    fs::write(&config_file, "raw_html = true\n").unwrap();

    cargo_bin_cmd!("mdblocks")
        .args(["render", test_file.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("unterminated HTML comment starting at 3:1"))
        .stderr(predicate::str::contains("broken.md"));
}
