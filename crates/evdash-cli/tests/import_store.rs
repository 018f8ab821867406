use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

const SHEET: &str = "\
Event Name English,Event Name Arabic,City English,City Arabic,Start Date,End Date,Region English
AI Week,أسبوع الذكاء الاصطناعي,Dubai,دبي,2026-05-01,2026-05-03,Middle East
,,,,,,
Water Forum,منتدى المياه,Cairo,القاهرة,2026-06-10,2026-06-11,Africa
";

fn write_sheet(dir: &Path) -> PathBuf {
    let path = dir.join("events.csv");
    fs::write(&path, SHEET).unwrap();
    path
}

fn stored_count(home: &Path) -> usize {
    let contents = fs::read_to_string(home.join("events_data.json")).unwrap();
    let events: serde_json::Value = serde_json::from_str(&contents).unwrap();
    events.as_array().unwrap().len()
}

#[test]
fn test_import_appends_to_store() {
    let home = tempdir().unwrap();
    let sheet = write_sheet(home.path());

    cargo_bin_cmd!("evdash")
        .env("EVDASH_HOME", home.path())
        .arg("import")
        .arg(&sheet)
        .assert()
        .success()
        .stdout(predicate::str::contains("AI Week"))
        .stdout(predicate::str::contains("Imported 2 events (2 stored)"))
        .stderr(predicate::str::contains("Skipped 1 blank rows"));
    assert_eq!(stored_count(home.path()), 2);

    // A second import keeps the earlier records.
    cargo_bin_cmd!("evdash")
        .env("EVDASH_HOME", home.path())
        .arg("import")
        .arg(&sheet)
        .assert()
        .success()
        .stdout(predicate::str::contains("(4 stored)"));
    assert_eq!(stored_count(home.path()), 4);
}

#[test]
fn test_imported_events_join_the_list() {
    let home = tempdir().unwrap();
    let sheet = write_sheet(home.path());

    cargo_bin_cmd!("evdash")
        .env("EVDASH_HOME", home.path())
        .arg("import")
        .arg(&sheet)
        .assert()
        .success();

    cargo_bin_cmd!("evdash")
        .env("EVDASH_HOME", home.path())
        .args(["events", "list", "--region", "Africa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Water Forum"))
        .stdout(predicate::str::contains("Future Industries Summit").not());
}

#[test]
fn test_import_dry_run_saves_nothing() {
    let home = tempdir().unwrap();
    let sheet = write_sheet(home.path());

    cargo_bin_cmd!("evdash")
        .env("EVDASH_HOME", home.path())
        .arg("import")
        .arg(&sheet)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run: parsed 2 events (csv)"));
    assert!(!home.path().join("events_data.json").exists());
}

#[test]
fn test_import_rejects_unsupported_file() {
    let home = tempdir().unwrap();
    let notes = home.path().join("notes.txt");
    fs::write(&notes, "not a spreadsheet").unwrap();

    cargo_bin_cmd!("evdash")
        .env("EVDASH_HOME", home.path())
        .arg("import")
        .arg(&notes)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file type"));
}

#[test]
fn test_store_path_and_clear() {
    let home = tempdir().unwrap();
    let sheet = write_sheet(home.path());

    cargo_bin_cmd!("evdash")
        .env("EVDASH_HOME", home.path())
        .args(["store", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("events_data.json"));

    cargo_bin_cmd!("evdash")
        .env("EVDASH_HOME", home.path())
        .arg("import")
        .arg(&sheet)
        .assert()
        .success();

    cargo_bin_cmd!("evdash")
        .env("EVDASH_HOME", home.path())
        .args(["store", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 imported events"));
    assert!(!home.path().join("events_data.json").exists());

    cargo_bin_cmd!("evdash")
        .env("EVDASH_HOME", home.path())
        .args(["store", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already empty"));
}
