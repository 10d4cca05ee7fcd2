// smart-linkify/tests/cli_integration_tests.rs
//! Command-line integration tests for the `smart-linkify` binary.
//!
//! Each test runs the compiled binary with `assert_cmd`, feeding input on stdin
//! or through temporary files, and asserts on stdout, stderr and exit status.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use test_log::test;

fn run(input: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("smart-linkify"));
    cmd.env("RUST_LOG", "debug");
    cmd.args(args);
    cmd.write_stdin(input.as_bytes());
    cmd.assert()
}

#[test]
fn test_linkify_stdin_to_stdout() {
    run("Visit https://example.com\n", &["linkify"])
        .success()
        .stdout(predicate::str::contains(r#"<a href="https://example.com" target="_blank" rel="noopener noreferrer""#))
        .stdout(predicate::str::ends_with("</a>\n"));
}

#[test]
fn test_logs_go_to_stderr_only() {
    run("a.io", &["linkify"])
        .success()
        .stdout(predicate::str::starts_with("<a "))
        .stdout(predicate::str::contains("DEBUG").not());
}

#[test]
fn test_quiet_suppresses_logs() {
    run("a.io", &["--quiet", "linkify"]).success().stderr(predicate::str::is_empty());
}

#[test]
fn test_email_and_phone_flags() {
    run("mail me@example.com or call 555-123-4567", &["linkify", "--emails", "--phones"])
        .success()
        .stdout(predicate::str::contains(r#"href="mailto:me@example.com""#))
        .stdout(predicate::str::contains(r#"href="tel:5551234567""#));
}

#[test]
fn test_hashtag_and_mention_templates() {
    run(
        "#rust by @ferris",
        &["linkify", "--hashtag-url", "https://t.test/{tag}", "--mention-url", "https://u.test/{username}"],
    )
    .success()
    .stdout(predicate::str::contains(r#"href="https://t.test/rust""#))
    .stdout(predicate::str::contains(r#"href="https://u.test/ferris""#));
}

#[test]
fn test_block_and_remove_tracking() {
    run(
        "https://spam.com https://good.com?utm_source=x&id=7",
        &["linkify", "--block", "spam.com", "--remove-tracking"],
    )
    .success()
    .stdout(predicate::str::contains(r#"href="https://spam.com""#).not())
    .stdout(predicate::str::contains(r#"href="https://good.com/?id=7""#));
}

#[test]
fn test_sanitize_with_allowed_tags() {
    run("<b>hi</b><script>x</script>", &["linkify", "--sanitize", "--allowed-tag", "b"])
        .success()
        .stdout(predicate::str::diff("<b>hi</b>&lt;script&gt;x&lt;/script&gt;"));
}

#[test]
fn test_input_too_long_fails() {
    run("a.io and more text", &["linkify", "--max-input-length", "5"])
        .failure()
        .stderr(predicate::str::contains("exceeds maximum length of 5 characters"))
        .stderr(predicate::str::contains("max_input_length"));
}

#[test]
fn test_preset_and_target_override() {
    run("a.io", &["linkify", "--preset", "professional", "--target", "self"])
        .success()
        .stdout(predicate::str::contains("color:#0066cc"))
        .stdout(predicate::str::contains(r#"target="_self""#));
}

#[test]
fn test_unknown_preset_fails() {
    run("a.io", &["linkify", "--preset", "does-not-exist"])
        .failure()
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn test_config_file_and_output_file() -> Result<()> {
    let mut config = NamedTempFile::new()?;
    writeln!(config, "color: teal\ntarget: _self")?;
    let dir = TempDir::new()?;
    let out_path = dir.path().join("out.html");

    run(
        "see example.com",
        &[
            "linkify",
            "--config",
            config.path().to_str().expect("utf-8 path"),
            "--output",
            out_path.to_str().expect("utf-8 path"),
        ],
    )
    .success()
    .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out_path)?;
    assert!(written.contains("color:teal"));
    assert!(written.contains(r#"target="_self""#));
    Ok(())
}

#[test]
fn test_input_file_line_buffered() -> Result<()> {
    let mut input = NamedTempFile::new()?;
    write!(input, "first a.io\nsecond b.io")?;
    run("", &["linkify", "--line-buffered", "--input-file", input.path().to_str().expect("utf-8 path")])
        .success()
        .stdout(predicate::str::contains("first <a href=\"https://a.io\""))
        .stdout(predicate::str::contains("second <a href=\"https://b.io\""))
        .stdout(predicate::str::ends_with("</a>\n"));
    Ok(())
}

#[test]
fn test_scan_table() {
    run("a.io b.io me@example.com", &["scan", "--emails"])
        .success()
        .stdout(predicate::str::contains("url"))
        .stdout(predicate::str::contains("email"))
        .stdout(predicate::str::contains("me@example.com"));
}

#[test]
fn test_scan_json() -> Result<()> {
    let output = Command::new(assert_cmd::cargo_bin!("smart-linkify"))
        .args(["--quiet", "scan", "--json", "--phones"])
        .write_stdin("call 555-123-4567 or 555.987.6543, see a.io")
        .output()?;
    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let items = summary.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["kind"], "url");
    assert_eq!(items[1]["kind"], "phone");
    assert_eq!(items[1]["occurrences"], 2);
    Ok(())
}

#[test]
fn test_scan_without_entities() {
    run("nothing here", &["scan"])
        .success()
        .stdout(predicate::str::contains("No linkable entities found."));
}

#[test]
fn test_presets_list_and_show() {
    run("", &["presets", "list"])
        .success()
        .stdout(predicate::str::contains("minimal"))
        .stdout(predicate::str::contains("github"))
        .stdout(predicate::str::contains("analytics"));

    run("", &["presets", "show", "social"])
        .success()
        .stdout(predicate::str::contains("color: '#1da1f2'").or(predicate::str::contains("color: \"#1da1f2\"")))
        .stdout(predicate::str::contains("https://twitter.com/hashtag/{tag}"));
}
