use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("evdash")
        .env("EVDASH_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    assert!(!config_path.exists());

    cargo_bin_cmd!("evdash")
        .env("EVDASH_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("language ="));
    assert!(contents.contains("view_mode ="));
}

#[test]
fn test_config_init_fails_if_exists() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "# existing config").unwrap();

    cargo_bin_cmd!("evdash")
        .env("EVDASH_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_generate_prints_defaults() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("evdash")
        .env("EVDASH_HOME", dir.path())
        .args(["config", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("language = \"en\""));
}

#[test]
fn test_configured_language_applies_to_commands() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "language = \"ar\"\n").unwrap();

    cargo_bin_cmd!("evdash")
        .env("EVDASH_HOME", dir.path())
        .args(["events", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("معرض البحر الأحمر للسياحة"));
}
