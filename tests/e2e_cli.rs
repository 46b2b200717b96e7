//! CLI end-to-end tests
//!
//! Tests for the pixelforged command-line interface.

use assert_cmd::prelude::*;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the pixelforged binary
fn pixelforged_cmd() -> Command {
    Command::cargo_bin("pixelforged").unwrap()
}

fn write_png(path: &Path, width: u32, height: u32) {
    RgbImage::from_pixel(width, height, Rgb([128, 64, 32]))
        .save(path)
        .unwrap();
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = pixelforged_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = pixelforged_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pixelforged"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = pixelforged_cmd();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pixelforged"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = pixelforged_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pixelforged"));
}

#[test]
fn test_cli_run_help() {
    let mut cmd = pixelforged_cmd();
    cmd.args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert all images"));
}

#[test]
fn test_cli_run_converts_directory() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("orig");
    let output = temp.path().join("out");
    fs::create_dir(&input).unwrap();
    write_png(&input.join("photo1.png"), 64, 48);
    write_png(&input.join("photo2.png"), 64, 48);

    let mut cmd = pixelforged_cmd();
    cmd.args(["run", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("Done."));

    // 2 sources x (1 full + 4 variants)
    let count = fs::read_dir(&output).unwrap().count();
    assert_eq!(count, 10);
}

#[test]
fn test_cli_run_dry_run_writes_nothing() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("orig");
    let output = temp.path().join("out");
    fs::create_dir(&input).unwrap();
    write_png(&input.join("photo.png"), 64, 48);

    let mut cmd = pixelforged_cmd();
    cmd.args(["run", "--dry-run", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("[DRY RUN]"))
        .stdout(predicate::str::contains("1-640.webp"));

    assert!(!output.exists());
}

#[test]
fn test_cli_run_nonexistent_input_fails() {
    let temp = tempdir().unwrap();

    let mut cmd = pixelforged_cmd();
    cmd.args(["run", "--input"])
        .arg(temp.path().join("missing"))
        .arg("--output")
        .arg(temp.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("exist"));
}

#[test]
fn test_cli_manifest_after_run() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("orig");
    let output = temp.path().join("out");
    let manifest_path = temp.path().join("content").join("images-manifest.json");
    fs::create_dir(&input).unwrap();
    write_png(&input.join("photo.png"), 64, 48);

    pixelforged_cmd()
        .args(["run", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    pixelforged_cmd()
        .args(["manifest", "--media-dir"])
        .arg(&output)
        .arg("--out")
        .arg(&manifest_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Manifest written"))
        .stdout(predicate::str::contains("1 entries"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&manifest_path).unwrap()).unwrap();
    assert_eq!(json["1"]["original"], "1.webp");
    assert_eq!(json["1"]["variants"].as_array().unwrap().len(), 4);
}

#[test]
fn test_cli_validate_default_config() {
    let mut cmd = pixelforged_cmd();
    cmd.arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("defaults"));
}

#[test]
fn test_cli_validate_config_file() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("pixelforged.toml");
    fs::write(
        &config_file,
        r#"
[convert]
input_dir = "in"
output_dir = "out"
sizes = [320, 640]
quality_full = 92
"#,
    )
    .unwrap();

    let mut cmd = pixelforged_cmd();
    cmd.arg("validate")
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("320, 640"));
}

#[test]
fn test_cli_validate_rejects_bad_config() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("pixelforged.toml");
    fs::write(
        &config_file,
        r#"
[convert]
sizes = [960, 640]
"#,
    )
    .unwrap();

    let mut cmd = pixelforged_cmd();
    cmd.arg("validate")
        .arg(&config_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("ascending"));
}

#[test]
fn test_cli_run_uses_config_file() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("orig");
    let output = temp.path().join("out");
    fs::create_dir(&input).unwrap();
    write_png(&input.join("photo.png"), 800, 400);

    let config_file = temp.path().join("pixelforged.toml");
    fs::write(
        &config_file,
        format!(
            r#"
[convert]
input_dir = {:?}
output_dir = {:?}
sizes = [320]
"#,
            input, output
        ),
    )
    .unwrap();

    pixelforged_cmd()
        .args(["--config"])
        .arg(&config_file)
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Done."));

    assert!(output.join("1.webp").exists());
    assert!(output.join("1-320.webp").exists());
    assert!(!output.join("1-640.webp").exists());
}
