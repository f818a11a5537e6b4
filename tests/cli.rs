use appointments::format;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn backend(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("appointments").unwrap();
    cmd.env("APPOINTMENTS_HOME", home)
        .env_remove("APPOINTMENTS_FILE")
        .env_remove("APPOINTMENTS_LOG");
    cmd
}

fn add(home: &Path, args: [&str; 5]) {
    backend(home)
        .arg("add")
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("Appointment added"));
}

fn list_output(home: &Path, fragment: Option<&str>) -> String {
    let mut cmd = backend(home);
    cmd.arg("list");
    if let Some(fragment) = fragment {
        cmd.arg(fragment);
    }
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn add_then_list_shows_the_block() {
    let temp = tempfile::tempdir().unwrap();
    add(temp.path(), ["Alice", "Therapy", "Dr. Lee", "2024-06-01", "09:00"]);

    backend(temp.path())
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::contains(
            "Client: Alice\nService: Therapy\nStaff: Dr. Lee\nDate: 2024-06-01 | Time: 09:00\n--------------------------",
        ));
}

#[test]
fn empty_store_lists_literal_message() {
    let temp = tempfile::tempdir().unwrap();
    backend(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::eq("No appointments found\n"));
}

#[test]
fn listing_parses_back_in_order() {
    let temp = tempfile::tempdir().unwrap();
    add(temp.path(), ["Alice", "Therapy", "Dr. Lee", "2024-06-01", "09:00"]);
    add(temp.path(), ["Bob", "Checkup", "Dr. Perez", "2024-06-02", "14:30"]);
    add(temp.path(), ["Carol", "Treatment", "Dr. Gomez", "2024-06-03", "08:15"]);

    let parsed = format::parse(&list_output(temp.path(), None)).records;
    let clients: Vec<&str> = parsed.iter().map(|a| a.client.as_str()).collect();
    assert_eq!(clients, vec!["Alice", "Bob", "Carol"]);
    assert_eq!(parsed[1].staff, "Dr. Perez");
    assert_eq!(parsed[1].time, "14:30");
}

#[test]
fn search_filters_by_staff() {
    let temp = tempfile::tempdir().unwrap();
    add(temp.path(), ["Alice", "Therapy", "Dr. Lee", "2024-06-01", "09:00"]);
    add(temp.path(), ["Bob", "Checkup", "Dr. Perez", "2024-06-01", "10:00"]);
    add(temp.path(), ["Carol", "Consultation", "Dr. Lee", "2024-06-01", "11:00"]);

    let filtered = format::parse(&list_output(temp.path(), Some("lee"))).records;
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|a| a.staff == "Dr. Lee"));

    let all = format::parse(&list_output(temp.path(), None)).records;
    let clients: Vec<&str> = all.iter().map(|a| a.client.as_str()).collect();
    assert_eq!(clients, vec!["Alice", "Bob", "Carol"]);
}

#[test]
fn search_without_matches_reports_none() {
    let temp = tempfile::tempdir().unwrap();
    add(temp.path(), ["Alice", "Therapy", "Dr. Lee", "2024-06-01", "09:00"]);
    assert_eq!(
        list_output(temp.path(), Some("gomez")),
        "No appointments found\n"
    );
}

#[test]
fn delete_removes_first_of_shared_key() {
    let temp = tempfile::tempdir().unwrap();
    add(temp.path(), ["Alice", "Therapy", "Dr. Lee", "2024-06-01", "09:00"]);
    add(temp.path(), ["Alice", "Checkup", "Dr. Perez", "2024-06-01", "09:00"]);

    backend(temp.path())
        .args(["delete", "Alice", "2024-06-01", "09:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Appointment deleted"))
        .stdout(predicate::str::contains("Therapy"));

    let remaining = format::parse(&list_output(temp.path(), None)).records;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].service, "Checkup");
    assert_eq!(remaining[0].staff, "Dr. Perez");
}

#[test]
fn delete_not_found_exits_zero_and_changes_nothing() {
    let temp = tempfile::tempdir().unwrap();
    add(temp.path(), ["Alice", "Therapy", "Dr. Lee", "2024-06-01", "09:00"]);
    let before = list_output(temp.path(), None);

    backend(temp.path())
        .args(["delete", "Alice", "2024-06-01", "10:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"));

    assert_eq!(list_output(temp.path(), None), before);
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    let temp = tempfile::tempdir().unwrap();
    backend(temp.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn unknown_command_prints_usage_and_fails() {
    let temp = tempfile::tempdir().unwrap();
    backend(temp.path())
        .args(["edit", "Alice"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn wrong_arity_is_a_usage_error() {
    let temp = tempfile::tempdir().unwrap();
    backend(temp.path())
        .args(["add", "Alice", "Therapy", "Dr. Lee", "2024-06-01"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Usage"));

    backend(temp.path())
        .args(["delete", "Alice", "2024-06-01", "09:00", "extra"])
        .assert()
        .code(2);

    backend(temp.path())
        .args(["list", "a", "b"])
        .assert()
        .code(2);
}

#[test]
fn help_exits_zero() {
    let temp = tempfile::tempdir().unwrap();
    backend(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("add"));
}

#[test]
fn invalid_date_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    backend(temp.path())
        .args(["add", "Alice", "Therapy", "Dr. Lee", "06/01/2024", "09:00"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Invalid appointment"));

    assert_eq!(list_output(temp.path(), None), "No appointments found\n");
}

#[test]
fn unreachable_storage_fails_with_status_one() {
    let temp = tempfile::tempdir().unwrap();
    backend(temp.path())
        .args(["--file", "missing-dir/appointments.txt", "list"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Storage unavailable"));
}

#[test]
fn state_lives_in_home_not_cwd() {
    let home = tempfile::tempdir().unwrap();
    let elsewhere = tempfile::tempdir().unwrap();

    backend(home.path())
        .current_dir(elsewhere.path())
        .args(["add", "Alice", "Therapy", "Dr. Lee", "2024-06-01", "09:00"])
        .assert()
        .success();

    assert!(home.path().join("appointments.txt").exists());
    assert!(home.path().join("appointments.txt.lock").exists());
    assert!(!elsewhere.path().join("appointments.txt").exists());
}

#[test]
fn staff_conflicts_rejected_when_configured() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(
        temp.path().join("config.json"),
        r#"{ "reject_staff_conflicts": true }"#,
    )
    .unwrap();
    add(temp.path(), ["Alice", "Therapy", "Dr. Lee", "2024-06-01", "09:00"]);

    backend(temp.path())
        .args(["add", "Bob", "Checkup", "Dr. Lee", "2024-06-01", "09:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conflict: Dr. Lee"));

    let records = format::parse(&list_output(temp.path(), None)).records;
    assert_eq!(records.len(), 1);
}

#[test]
fn garbled_records_are_skipped() {
    let temp = tempfile::tempdir().unwrap();
    add(temp.path(), ["Alice", "Therapy", "Dr. Lee", "2024-06-01", "09:00"]);

    let path = temp.path().join("appointments.txt");
    let mut text = fs::read_to_string(&path).unwrap();
    text.push_str("Client: Broken\n--------------------------\n");
    fs::write(&path, text).unwrap();

    let records = format::parse(&list_output(temp.path(), None)).records;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].client, "Alice");
}

#[test]
fn garbled_records_survive_add_and_delete() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("appointments.txt");
    fs::write(
        &path,
        "Client: Zed\nService: Therapy\n--------------------------\n",
    )
    .unwrap();

    add(temp.path(), ["Alice", "Therapy", "Dr. Lee", "2024-06-01", "09:00"]);
    assert!(fs::read_to_string(&path).unwrap().contains("Client: Zed"));

    backend(temp.path())
        .args(["delete", "Alice", "2024-06-01", "09:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Appointment deleted"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Client: Zed\nService: Therapy\n--------------------------\n"
    );

    assert_eq!(list_output(temp.path(), None), "No appointments found\n");
}

#[test]
fn records_missing_client_are_not_listed() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(
        temp.path().join("appointments.txt"),
        "Client:\nService: Therapy\nStaff: Dr. Lee\nDate: 2024-06-01 | Time: 09:00\n",
    )
    .unwrap();

    assert_eq!(list_output(temp.path(), None), "No appointments found\n");
}
