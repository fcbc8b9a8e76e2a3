//! End-to-end tests for the teller binary
//!
//! Each test runs the menu loop against a temp storage file with a scripted
//! stdin session and checks both the console output and the resulting file
//! contents.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn teller(file: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("teller").unwrap();
    cmd.arg("--file").arg(file);
    cmd
}

fn seed(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("clients.txt");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_exit_immediately() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("clients.txt");

    teller(&file)
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Main Menu Screen"))
        .stdout(predicate::str::contains("Program Ends"));
}

#[test]
fn test_invalid_menu_choice_reprompts() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("clients.txt");

    teller(&file)
        .write_stdin("9\nabc\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid choice, please enter a number from 1 to 7.",
        ));
}

#[test]
fn test_add_then_list() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("clients.txt");

    teller(&file)
        .write_stdin("2\nA101\n1111\nAlice Smith\n555-0001\n100\n1\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Client Added Successfully"))
        .stdout(predicate::str::contains("Client List (1) Client(s)."));

    let contents = fs::read_to_string(&file).unwrap();
    assert_eq!(
        contents,
        "A101#//#1111#//#Alice Smith#//#555-0001#//#100.000000\n"
    );
}

#[test]
fn test_add_rejects_duplicate_account_number() {
    let dir = TempDir::new().unwrap();
    let file = seed(&dir, "A101#//#1111#//#Alice Smith#//#555-0001#//#100.000000\n");

    teller(&file)
        .write_stdin("2\nA101\nB202\n2222\nBob Jones\n555-0002\n50\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Client with Account Number [A101] already exists.",
        ));

    let contents = fs::read_to_string(&file).unwrap();
    assert!(contents.contains("B202#//#2222#//#Bob Jones#//#555-0002#//#50.000000"));
}

#[test]
fn test_withdraw_reprompts_then_commits() {
    let dir = TempDir::new().unwrap();
    let file = seed(&dir, "A1#//#1111#//#Alice#//#555-0001#//#100.000000\n");

    // 150 exceeds the balance and is re-asked; 40 is confirmed and committed
    teller(&file)
        .write_stdin("6\n2\nA1\n150\n40\ny\n4\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Insufficient funds for account 'A1': need 150.00, have 100.00",
        ))
        .stdout(predicate::str::contains("Done Successfully. New balance is: 60.00"));

    let contents = fs::read_to_string(&file).unwrap();
    assert_eq!(contents, "A1#//#1111#//#Alice#//#555-0001#//#60.000000\n");
}

#[test]
fn test_deposit_declined_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let file = seed(&dir, "A1#//#1111#//#Alice#//#555-0001#//#100.000000\n");

    teller(&file)
        .write_stdin("6\n1\nA1\n40\nn\n4\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction cancelled, nothing changed."));

    let contents = fs::read_to_string(&file).unwrap();
    assert_eq!(contents, "A1#//#1111#//#Alice#//#555-0001#//#100.000000\n");
}

#[test]
fn test_delete_confirmed_removes_record() {
    let dir = TempDir::new().unwrap();
    let file = seed(
        &dir,
        "A1#//#1111#//#Alice#//#555-0001#//#100.000000\n\
         B2#//#2222#//#Bob#//#555-0002#//#50.000000\n",
    );

    teller(&file)
        .write_stdin("3\nA1\ny\n1\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Client Deleted Successfully."))
        .stdout(predicate::str::contains("Client List (1) Client(s)."));

    let contents = fs::read_to_string(&file).unwrap();
    assert_eq!(contents, "B2#//#2222#//#Bob#//#555-0002#//#50.000000\n");
}

#[test]
fn test_delete_declined_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let file = seed(&dir, "A1#//#1111#//#Alice#//#555-0001#//#100.000000\n");

    teller(&file)
        .write_stdin("3\nA1\nn\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete cancelled, nothing changed."));

    let contents = fs::read_to_string(&file).unwrap();
    assert_eq!(contents, "A1#//#1111#//#Alice#//#555-0001#//#100.000000\n");
}

#[test]
fn test_find_not_found_keeps_session_running() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("clients.txt");

    teller(&file)
        .write_stdin("5\nZ999\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Client with Account Number (Z999) is Not Found!",
        ))
        .stdout(predicate::str::contains("Program Ends"));
}

#[test]
fn test_corrupt_line_is_skipped_on_load() {
    let dir = TempDir::new().unwrap();
    let file = seed(
        &dir,
        "A1#//#1111#//#Alice#//#555-0001#//#100.000000\n\
         A2#//#broken-line\n",
    );

    teller(&file)
        .write_stdin("1\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Client List (1) Client(s)."));
}

#[test]
fn test_total_balances() {
    let dir = TempDir::new().unwrap();
    let file = seed(
        &dir,
        "A1#//#1111#//#Alice#//#555-0001#//#100.000000\n\
         B2#//#2222#//#Bob#//#555-0002#//#50.500000\n",
    );

    teller(&file)
        .write_stdin("6\n3\n4\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Balances = 150.50"));
}

#[test]
fn test_default_storage_path_from_env() {
    let dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("teller").unwrap();
    cmd.env("TELLER_CLI_DATA_DIR", dir.path())
        .write_stdin("2\nA101\n1111\nAlice Smith\n555-0001\n0\n7\n")
        .assert()
        .success();

    let file = dir.path().join("data").join("clients.txt");
    let contents = fs::read_to_string(&file).unwrap();
    assert_eq!(
        contents,
        "A101#//#1111#//#Alice Smith#//#555-0001#//#0.000000\n"
    );
}
