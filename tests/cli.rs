use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tally(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env("TALLY_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn list_shows_defaults_on_fresh_data_dir() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("ellipsis-horizontal"));

    tally(&dir)
        .args(["category", "list", "--kind", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Food").not());
}

#[test]
fn added_category_is_listed_afterwards() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["category", "add", "Pets", "--icon", "paw", "--color", "#AF52DE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New expense category added: Pets"));

    tally(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pets"));

    assert!(dir.path().join("store.json").exists());
}

#[test]
fn empty_name_is_rejected() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["category", "add", "", "--icon", "home", "--color", "#FF0000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category name cannot be empty"));

    assert!(!dir.path().join("store.json").exists());
}

#[test]
fn settings_set_then_show() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["settings", "set", "budget-period", "quarter"])
        .assert()
        .success();

    tally(&dir)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quarterly"));
}
