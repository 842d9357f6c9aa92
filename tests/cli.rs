use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn addrbook(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("addrbook").unwrap();
    cmd.env("ADDRBOOK_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn add_then_show() {
    let home = TempDir::new().unwrap();

    addrbook(&home)
        .args(["add", "Ann", "5551234567", "--birthday", "15-03-1990"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added: Ann"));

    assert!(home.path().join("contacts.json").exists());

    addrbook(&home)
        .args(["show", "Ann"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5551234567"))
        .stdout(predicate::str::contains("15-03-1990"));
}

#[test]
fn invalid_phone_fails_without_saving() {
    let home = TempDir::new().unwrap();

    addrbook(&home)
        .args(["add", "Ann", "12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid phone"));

    assert!(!home.path().join("contacts.json").exists());
}

#[test]
fn phone_edit_and_search() {
    let home = TempDir::new().unwrap();

    addrbook(&home)
        .args(["add", "Ann", "0000000000"])
        .assert()
        .success();
    addrbook(&home)
        .args(["add", "Bo", "1234567890"])
        .assert()
        .success();
    addrbook(&home)
        .args(["phone", "edit", "Ann", "0000000000", "5551234567"])
        .assert()
        .success();

    addrbook(&home)
        .args(["search", "555"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann"))
        .stdout(predicate::str::contains("Bo").not());
}

#[test]
fn editing_missing_phone_reports_not_found() {
    let home = TempDir::new().unwrap();

    addrbook(&home)
        .args(["add", "Ann", "0000000000"])
        .assert()
        .success();
    addrbook(&home)
        .args(["phone", "edit", "Ann", "9999999999", "5551234567"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn list_pages_contacts() {
    let home = TempDir::new().unwrap();
    for name in ["Ann", "Bo", "Cy"] {
        addrbook(&home).args(["add", name]).assert().success();
    }

    addrbook(&home)
        .args(["list", "--page-size", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1/2"))
        .stdout(predicate::str::contains("Page 2/2"));

    addrbook(&home)
        .args(["list", "--page-size", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("page size"));
}

#[test]
fn config_page_size_is_used_by_list() {
    let home = TempDir::new().unwrap();
    for name in ["Ann", "Bo"] {
        addrbook(&home).args(["add", name]).assert().success();
    }

    addrbook(&home)
        .args(["config", "page-size", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size set to 1"));

    addrbook(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 2/2"));
}

#[test]
fn corrupt_data_file_is_reported() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("contacts.json"), "not json").unwrap();

    addrbook(&home)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt data"));
}

#[test]
fn config_errors_exit_nonzero() {
    let home = TempDir::new().unwrap();

    addrbook(&home)
        .args(["config", "page-size", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Config error"));
    assert!(!home.path().join("config.json").exists());

    addrbook(&home)
        .args(["config", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn config_show_lists_every_key() {
    let home = TempDir::new().unwrap();

    addrbook(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("data-file = contacts.json"))
        .stdout(predicate::str::contains("page-size = 5"))
        .stdout(predicate::str::contains("upcoming-days = 7"));
}

#[test]
fn invalid_config_file_is_reported() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.json"), r#"{"page_size": 0}"#).unwrap();

    addrbook(&home)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"))
        .stderr(predicate::str::contains("page-size"));
}
