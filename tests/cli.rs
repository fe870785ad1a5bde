use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn contactbook(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("contactbook").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn add_bob(dir: &Path) {
    contactbook(dir)
        .args(["add", "Bob", "-p", "1", "-e", "b@x.com", "-a", "addr"])
        .assert()
        .success();
}

#[test]
fn test_add_then_list() {
    let temp = TempDir::new().unwrap();

    contactbook(temp.path())
        .args(["add", "Bob", "--phone", "1", "--email", "b@x.com", "--address", "addr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 'Bob' added successfully!"));

    contactbook(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob"))
        .stdout(predicate::str::contains("b@x.com"));
}

#[test]
fn test_file_is_indented_json_object() {
    let temp = TempDir::new().unwrap();
    add_bob(temp.path());

    let written = fs::read_to_string(temp.path().join("contacts.txt")).unwrap();
    assert_eq!(
        written,
        "{\n    \"Bob\": {\n        \"phone\": \"1\",\n        \"email\": \"b@x.com\",\n        \"address\": \"addr\"\n    }\n}"
    );
}

#[test]
fn test_duplicate_add_fails() {
    let temp = TempDir::new().unwrap();
    add_bob(temp.path());

    contactbook(temp.path())
        .args(["add", "Bob", "-p", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact 'Bob' already exists"));

    contactbook(temp.path())
        .args(["search", "Bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone: 1"));
}

#[test]
fn test_blank_name_fails() {
    let temp = TempDir::new().unwrap();

    contactbook(temp.path())
        .args(["add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name cannot be empty"));

    assert!(!temp.path().join("contacts.txt").exists());
}

#[test]
fn test_search_miss() {
    let temp = TempDir::new().unwrap();
    add_bob(temp.path());

    contactbook(temp.path())
        .args(["search", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contact found with name 'bob'"));
}

#[test]
fn test_update_rename_keeps_other_fields() {
    let temp = TempDir::new().unwrap();
    add_bob(temp.path());

    contactbook(temp.path())
        .args(["update", "Bob", "--name", "Robert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("renamed to 'Robert'"));

    contactbook(temp.path())
        .args(["search", "Robert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Email: b@x.com"));

    contactbook(temp.path())
        .args(["search", "Bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contact found"));
}

#[test]
fn test_update_rename_onto_existing_warns() {
    let temp = TempDir::new().unwrap();
    add_bob(temp.path());
    contactbook(temp.path())
        .args(["add", "Alice", "-p", "9"])
        .assert()
        .success();

    contactbook(temp.path())
        .args(["update", "Bob", "-n", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Existing contact 'Alice' was replaced."));

    contactbook(temp.path())
        .args(["search", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone: 1"));
}

#[test]
fn test_update_unknown_fails() {
    let temp = TempDir::new().unwrap();

    contactbook(temp.path())
        .args(["update", "Ghost", "-p", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No contact found with name 'Ghost'"));
}

#[test]
fn test_delete_with_yes() {
    let temp = TempDir::new().unwrap();
    add_bob(temp.path());

    contactbook(temp.path())
        .args(["delete", "Bob", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 'Bob' deleted successfully!"))
        .stdout(predicate::str::contains("No contacts yet."));

    let written = fs::read_to_string(temp.path().join("contacts.txt")).unwrap();
    assert_eq!(written, "{}");
}

#[test]
fn test_delete_confirmation() {
    let temp = TempDir::new().unwrap();
    add_bob(temp.path());

    contactbook(temp.path())
        .args(["rm", "Bob"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));

    contactbook(temp.path())
        .args(["rm", "Bob"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted successfully"));
}

#[test]
fn test_delete_unknown_fails() {
    let temp = TempDir::new().unwrap();

    contactbook(temp.path())
        .args(["delete", "Ghost", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No contact found with name 'Ghost'"));
}

#[test]
fn test_corrupt_file_starts_empty_with_warning() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("contacts.txt"), "{ definitely not json").unwrap();

    contactbook(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("contacts file was unreadable"))
        .stdout(predicate::str::contains("No contacts yet."))
        .stderr(predicate::str::contains("contacts file malformed"));

    add_bob(temp.path());
    let written = fs::read_to_string(temp.path().join("contacts.txt")).unwrap();
    assert!(written.contains("\"Bob\""));
}

#[test]
fn test_missing_fields_show_placeholder() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("contacts.txt"),
        r#"{"Bob": {"phone": "1"}}"#,
    )
    .unwrap();

    contactbook(temp.path())
        .args(["search", "Bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Email: N/A"))
        .stdout(predicate::str::contains("Address: N/A"));
}

#[test]
fn test_config_placeholder() {
    let temp = TempDir::new().unwrap();

    contactbook(temp.path())
        .args(["config", "placeholder", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("placeholder = -"));

    contactbook(temp.path())
        .args(["add", "Bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("N/A").not());
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();

    contactbook(temp.path())
        .args(["config", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));
}
