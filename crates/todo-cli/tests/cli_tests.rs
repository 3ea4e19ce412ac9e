use assert_cmd::Command;
use predicates::prelude::*;

/// Helper function to create a Command with --no-color flag for testing
fn todo_cmd() -> Command {
    let mut cmd = Command::cargo_bin("todo").expect("Failed to find todo binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_menu_is_default() {
    todo_cmd()
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Choose an option:\n1. Add Task\n2. Remove Task\n3. View Tasks\n4. Exit\n",
        ))
        .stdout(predicate::str::ends_with("Exiting...\n"));
}

#[test]
fn test_cli_menu_session_scenario() {
    let output = todo_cmd()
        .arg("menu")
        .write_stdin("1\nwrite spec\n1\ntest it\n3\n2\n1\n2\n5\n4\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output).expect("Invalid UTF-8");

    assert!(output.contains("Your To-Do List:\n1. write spec\n2. test it\n"));
    assert!(output.contains("Removed: \"write spec\"\n\nYour To-Do List:\n1. test it\n"));
    assert!(output.contains("Invalid task number.\n\nYour To-Do List:\n1. test it\n"));
}

#[test]
fn test_cli_menu_rejects_blank_task() {
    todo_cmd()
        .write_stdin("1\n    \n3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No task entered."))
        .stdout(predicate::str::contains("No tasks yet."))
        .stdout(predicate::str::contains("Added:").not());
}

#[test]
fn test_cli_menu_invalid_choice_loops() {
    todo_cmd()
        .write_stdin("7\nadd\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice.").count(2));
}

#[test]
fn test_cli_menu_closed_stdin_exits_cleanly() {
    todo_cmd()
        .write_stdin("1\nunfinished\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: \"unfinished\""))
        .stdout(predicate::str::contains("Exiting...").not());
}

#[test]
fn test_cli_events_round_trip() {
    let input = [
        r#"{"gesture":"submit","text":"a"}"#,
        r#"{"gesture":"submit","text":"b"}"#,
        r#"{"gesture":"toggle","position":1}"#,
        r#"{"gesture":"delete","position":0}"#,
        r#"{"gesture":"delete","position":4}"#,
    ]
    .join("\n");

    todo_cmd()
        .arg("events")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"patch":"set_done","position":1,"done":true}"#,
        ))
        .stdout(predicate::str::contains(r#"{"patch":"remove","position":0}"#))
        .stdout(predicate::str::contains(r#""kind":"out_of_range""#));
}

#[test]
fn test_cli_help() {
    todo_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("menu"))
        .stdout(predicate::str::contains("events"));
}
