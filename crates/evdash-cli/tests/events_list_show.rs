use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_events_list_shows_bundled_events() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("evdash")
        .env("EVDASH_HOME", dir.path())
        .args(["events", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Future Industries Summit"))
        .stdout(predicate::str::contains("Euro Health Innovation Forum"));
}

#[test]
fn test_events_list_filters_by_region_and_type() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("evdash")
        .env("EVDASH_HOME", dir.path())
        .args(["events", "list", "--region", "Middle East", "--type", "Exhibition"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gulf Fintech Week"))
        .stdout(predicate::str::contains("Red Sea Tourism Expo"))
        .stdout(predicate::str::contains("Future Industries Summit").not())
        .stdout(predicate::str::contains("Euro Health").not());
}

#[test]
fn test_events_list_arabic_filter_values() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("evdash")
        .env("EVDASH_HOME", dir.path())
        .args(["--lang", "ar", "events", "list", "--region", "أوروبا"])
        .assert()
        .success()
        .stdout(predicate::str::contains("منتدى الابتكار الصحي الأوروبي"))
        .stdout(predicate::str::contains("المنطقة"));
}

#[test]
fn test_events_list_no_matches() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("evdash")
        .env("EVDASH_HOME", dir.path())
        .args(["events", "list", "--region", "Antarctica"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No events match"));
}

#[test]
fn test_events_show_prints_both_languages() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("evdash")
        .env("EVDASH_HOME", dir.path())
        .args(["events", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Euro Health Innovation Forum"))
        .stdout(predicate::str::contains("منتدى الابتكار الصحي الأوروبي"))
        .stdout(predicate::str::contains("Europe"));
}

#[test]
fn test_events_show_out_of_range() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("evdash")
        .env("EVDASH_HOME", dir.path())
        .args(["events", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No event at index 99"));
}

#[test]
fn test_unknown_language_is_rejected() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("evdash")
        .env("EVDASH_HOME", dir.path())
        .args(["--lang", "fr", "events", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown language"));
}
