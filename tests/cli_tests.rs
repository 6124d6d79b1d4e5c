use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use std::path::Path;
use tempfile::TempDir;

// Helper function to set up a test Command instance against a scratch database
fn set_up_command(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("daybook").unwrap();
    cmd.env_clear()
        .env("HOME", "/tmp")
        .env("DAYBOOK_DB", db_path);
    cmd
}

fn scratch_db() -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("journal").join("daybook.db");
    (temp_dir, db_path)
}

#[test]
#[serial]
fn test_cli_write_with_flags_prints_advice() {
    let (_temp_dir, db_path) = scratch_db();

    set_up_command(&db_path)
        .args([
            "write",
            "--mood",
            "sad",
            "--feeling",
            "I felt tired",
            "--bothering",
            "being alone",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("You’re feeling sad today."))
        .stdout(predicate::str::contains("You mentioned feeling tired."))
        .stdout(predicate::str::contains("You also mentioned feeling alone."))
        .stdout(predicate::str::contains("Your journal entry has been saved."));

    assert!(db_path.exists());
}

#[test]
#[serial]
fn test_cli_write_blank_entry_fails() {
    let (_temp_dir, db_path) = scratch_db();

    set_up_command(&db_path)
        .args(["write", "--feeling", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please write something in at least one of the questions before saving.",
        ));

    // Nothing was saved
    set_up_command(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No journal entries yet."));
}

#[test]
#[serial]
fn test_cli_write_interactive() {
    let (_temp_dir, db_path) = scratch_db();

    set_up_command(&db_path)
        .arg("write")
        .write_stdin("2\nSo proud of myself\n\nnothing much\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("How are you feeling today?"))
        .stdout(predicate::str::contains("2. What is something that went well today?"))
        .stdout(predicate::str::contains("You’re feeling pretty good today."))
        .stdout(predicate::str::contains("celebrate that!"));

    set_up_command(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[1\] \d{4}-\d{2}-\d{2} - Happy\n$").unwrap());
}

#[test]
#[serial]
fn test_cli_list_newest_first_and_show() {
    let (_temp_dir, db_path) = scratch_db();

    for (mood, feeling) in [("happy", "good"), ("anxious", "too much going on")] {
        set_up_command(&db_path)
            .args(["write", "--mood", mood, "--feeling", feeling])
            .assert()
            .success();
    }

    let output = set_up_command(&db_path).arg("list").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("[2] ") && lines[0].ends_with(" - Anxious"));
    assert!(lines[1].starts_with("[1] ") && lines[1].ends_with(" - Happy"));

    set_up_command(&db_path)
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood: Anxious"))
        .stdout(predicate::str::contains(
            "1. What are you feeling right now?\ntoo much going on",
        ))
        .stdout(predicate::str::contains("Advice:\nYou’re feeling anxious."))
        .stdout(predicate::str::contains("Feeling overwhelmed is a signal"));
}

#[test]
#[serial]
fn test_cli_show_missing_entry_is_silent() {
    let (_temp_dir, db_path) = scratch_db();

    set_up_command(&db_path)
        .args(["show", "99"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
#[serial]
fn test_cli_json_output() {
    let (_temp_dir, db_path) = scratch_db();

    set_up_command(&db_path)
        .args(["write", "--went-well", "finished a project, felt accomplished"])
        .assert()
        .success();

    let output = set_up_command(&db_path)
        .args(["list", "--json"])
        .output()
        .unwrap();
    let summaries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summaries.as_array().unwrap().len(), 1);
    assert_eq!(summaries[0]["id"], 1);
    assert_eq!(summaries[0]["mood"], "Not specified");

    let output = set_up_command(&db_path)
        .args(["show", "1", "--json"])
        .output()
        .unwrap();
    let entry: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entry["answer_1"], "");
    assert_eq!(entry["answer_2"], "finished a project, felt accomplished");
    assert!(entry["advice"]
        .as_str()
        .unwrap()
        .starts_with("You didn’t choose a mood"));
}

#[test]
#[serial]
fn test_cli_advice_preview_does_not_save() {
    let (_temp_dir, db_path) = scratch_db();

    set_up_command(&db_path)
        .args(["advice", "--mood", "Stressed", "exhausted", "and", "overwhelmed"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("You’re feeling stressed."))
        .stdout(predicate::str::contains("You mentioned feeling tired."))
        .stdout(predicate::str::contains("Feeling overwhelmed"));

    assert!(!db_path.exists());
}

#[test]
#[serial]
fn test_cli_remind_with_count() {
    let (_temp_dir, db_path) = scratch_db();

    set_up_command(&db_path)
        .args(["remind", "--interval", "1", "--count", "1"])
        .assert()
        .success()
        .stdout("Take a moment to journal your thoughts today 💭\n");
}

#[test]
#[serial]
fn test_cli_invalid_remind_interval_env() {
    let (_temp_dir, db_path) = scratch_db();

    set_up_command(&db_path)
        .env("DAYBOOK_REMIND_INTERVAL", "never")
        .args(["remind", "--count", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive number of seconds"));
}

#[test]
#[serial]
fn test_cli_relative_db_path_rejected() {
    let mut cmd = Command::cargo_bin("daybook").unwrap();
    cmd.env_clear()
        .env("DAYBOOK_DB", "relative/journal.db")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Database path must be absolute"));
}

#[test]
#[serial]
fn test_cli_json_logs_carry_correlation_id() {
    let (_temp_dir, db_path) = scratch_db();

    set_up_command(&db_path)
        .args(["--log-format", "json", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"correlation_id\""))
        .stderr(predicate::str::contains("app_invocation"));
}

#[test]
#[serial]
fn test_cli_invalid_mood() {
    let (_temp_dir, db_path) = scratch_db();

    set_up_command(&db_path)
        .args(["write", "--mood", "grumpy", "--feeling", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown mood 'grumpy'"));
}
