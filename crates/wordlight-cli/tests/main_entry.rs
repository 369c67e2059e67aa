//! Integration tests for the `wordlight` binary entry point.

use std::fs;

use anyhow::{Context, Result};
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;
use tempfile::TempDir;

fn workspace() -> Result<TempDir> {
    let dir = TempDir::new().context("create temp dir")?;
    fs::write(dir.path().join("words.txt"), "the\nof\n").context("write wordbook")?;
    fs::write(dir.path().join("notes.txt"), "The theology of leather\n").context("write notes")?;
    Ok(dir)
}

#[test]
fn highlights_a_text_file_as_json() -> Result<()> {
    let dir = workspace()?;
    let mut command = cargo_bin_cmd!("wordlight");
    command
        .arg("--settings-path")
        .arg(dir.path().join("settings.json"))
        .arg("--wordbook")
        .arg(dir.path().join("words.txt"))
        .arg("--output")
        .arg("json")
        .arg(dir.path().join("notes.txt"));
    command
        .assert()
        .success()
        .stdout(contains(r#""words":2"#))
        .stdout(contains(r#"{"start":4,"end":7}"#));
    Ok(())
}

#[test]
fn config_flag_sets_the_highlight_colour() -> Result<()> {
    let dir = workspace()?;
    let mut command = cargo_bin_cmd!("wordlight");
    command
        .arg("--settings-path")
        .arg(dir.path().join("settings.json"))
        .arg("--highlight-color=#00ff00")
        .arg("--wordbook")
        .arg(dir.path().join("words.txt"))
        .arg("--output=json")
        .arg(dir.path().join("notes.txt"));
    command
        .assert()
        .success()
        .stdout(contains(r##""color":"#00ff00""##));
    Ok(())
}

#[test]
fn human_output_without_terminal_uses_brackets() -> Result<()> {
    let dir = workspace()?;
    let mut command = cargo_bin_cmd!("wordlight");
    command
        .arg("--settings-path")
        .arg(dir.path().join("settings.json"))
        .arg("--wordbook")
        .arg(dir.path().join("words.txt"))
        .arg("--output=human")
        .arg(dir.path().join("notes.txt"));
    command
        .assert()
        .success()
        .stdout("[The] [the]ology [of] leather\n");
    Ok(())
}

#[test]
fn unknown_colour_exits_with_failure() -> Result<()> {
    let dir = workspace()?;
    let mut command = cargo_bin_cmd!("wordlight");
    command
        .arg("--settings-path")
        .arg(dir.path().join("settings.json"))
        .arg("--highlight-color")
        .arg("chartreuse-ish")
        .arg(dir.path().join("notes.txt"));
    command
        .assert()
        .failure()
        .stderr(contains("chartreuse-ish"));
    Ok(())
}

#[test]
fn missing_text_file_exits_with_failure() -> Result<()> {
    let dir = workspace()?;
    let mut command = cargo_bin_cmd!("wordlight");
    command
        .arg("--settings-path")
        .arg(dir.path().join("settings.json"));
    command
        .assert()
        .failure()
        .stderr(contains("a text file must be provided"));
    Ok(())
}
