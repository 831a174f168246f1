//! Tokens subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_tokens_stdin() {
    cargo_bin_cmd!("mdblocks")
        .arg("tokens")
        .write_stdin("# Hi\n")
        .assert()
        .success()
        .stdout("1:1 Hash \"#\"\n1:2 Whitespace \" \"\n1:3 Text \"Hi\"\n1:5 Newline \"\\n\"\n");
}

#[test]
fn test_tokens_show_escapes_and_runs() {
    cargo_bin_cmd!("mdblocks")
        .arg("tokens")
        .write_stdin("\\*\n---")
        .assert()
        .success()
        .stdout(predicate::str::contains("1:1 Escaped('*') \"\\\\*\""))
        .stdout(predicate::str::contains("2:1 Minus \"---\""));
}

#[test]
fn test_tokens_unterminated_cdata() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_file = temp_dir.path().join("raw.toml");
    std::fs::write(&config_file, "raw_html = true\n").unwrap();

    cargo_bin_cmd!("mdblocks")
        .args(["tokens", "--config", config_file.to_str().unwrap()])
        .write_stdin("<![CDATA[ open")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unterminated CDATA section"))
        .stderr(predicate::str::contains("<stdin>"));
}
