use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("evdash")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("events"))
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("store"))
        .stdout(predicate::str::contains("--lang"));
}

#[test]
fn test_events_help_shows_subcommands() {
    cargo_bin_cmd!("evdash")
        .args(["events", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn test_import_help_shows_dry_run() {
    cargo_bin_cmd!("evdash")
        .args(["import", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("evdash")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_dashboard_requires_terminal() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("evdash")
        .env("EVDASH_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
