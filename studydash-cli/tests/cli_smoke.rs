//! End-to-end runs of the `studydash` binary against a temporary data dir.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn studydash(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("studydash").unwrap();
    cmd.env("STUDYDASH_CONFIG", dir.join("config.toml"))
        .env_remove("STUDYDASH_DATA_DIR")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(dir);
    cmd
}

fn add_todos(dir: &Path, names: &[&str]) {
    for name in names {
        studydash(dir).args(["todo", "add", name, "--priority", "low"]).assert().success();
    }
}

#[test]
fn todo_add_complete_and_progress() {
    let tmp = TempDir::new().unwrap();
    add_todos(tmp.path(), &["Alpha", "Bravo", "Charlie"]);

    studydash(tmp.path())
        .args(["todo", "done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] (low)    Charlie"))
        .stdout(predicate::str::contains("Bravo").not());

    studydash(tmp.path())
        .arg("progress")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Tasks Completed +1 ").unwrap());

    let raw = fs::read_to_string(tmp.path().join("dashboard.json")).unwrap();
    assert!(raw.contains("tasksCompleted"));
}

#[test]
fn todo_move_to_end() {
    let tmp = TempDir::new().unwrap();
    add_todos(tmp.path(), &["A", "B", "C"]);

    studydash(tmp.path())
        .args(["todo", "move", "0", "end"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"\[0\] \(low\) +B\n  \[1\] \(low\) +C\n  \[2\] \(low\) +A").unwrap());
}

#[test]
fn out_of_range_index_is_rejected() {
    let tmp = TempDir::new().unwrap();
    add_todos(tmp.path(), &["Only"]);

    studydash(tmp.path())
        .args(["todo", "done", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn malformed_store_is_not_overwritten() {
    let tmp = TempDir::new().unwrap();
    let store = tmp.path().join("dashboard.json");
    fs::write(&store, "{ definitely not json").unwrap();

    studydash(tmp.path())
        .args(["todo", "add", "Lost?"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open dashboard data"));

    assert_eq!(fs::read_to_string(&store).unwrap(), "{ definitely not json");
}

#[test]
fn reminders_within_window() {
    let tmp = TempDir::new().unwrap();
    studydash(tmp.path())
        .args(["assignment", "add", "Essay", "2024-05-01T14:30"])
        .assert()
        .success();
    studydash(tmp.path())
        .args(["assignment", "add", "Lab", "2024-05-02T09:00"])
        .assert()
        .success();

    studydash(tmp.path())
        .args(["reminders", "--at", "2024-05-01T14:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reminder: Assignment \"Essay\" is due within 1 hour!"))
        .stdout(predicate::str::contains("Lab").not());

    studydash(tmp.path())
        .args(["reminders", "--at", "2024-05-03T00:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No assignments due"));
}

#[test]
fn schedule_and_theme_persist() {
    let tmp = TempDir::new().unwrap();
    studydash(tmp.path())
        .args(["schedule", "add", "Physics", "Mon 09:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] Physics - Mon 09:00"));

    studydash(tmp.path())
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("dark"));
    studydash(tmp.path())
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("dark"));
}

#[test]
fn preview_text_and_unsupported() {
    let tmp = TempDir::new().unwrap();
    let notes = tmp.path().join("notes.txt");
    fs::write(&notes, "Mitochondria is the powerhouse of the cell").unwrap();
    let slides = tmp.path().join("slides.pptx");
    fs::write(&slides, [0u8; 4]).unwrap();

    studydash(tmp.path())
        .arg("preview")
        .arg(&notes)
        .assert()
        .success()
        .stdout(predicate::str::contains("powerhouse"));

    studydash(tmp.path())
        .arg("preview")
        .arg(&slides)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorry, preview not available for this file type."));
}

#[test]
fn short_timer_completes() {
    let tmp = TempDir::new().unwrap();
    studydash(tmp.path())
        .args(["timer", "--seconds", "1"])
        .timeout(std::time::Duration::from_secs(20))
        .assert()
        .success()
        .stdout(predicate::str::contains("Pomodoro session complete! Take a break."));
}

#[test]
fn config_show_uses_flag_data_dir() {
    let tmp = TempDir::new().unwrap();
    studydash(tmp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(tmp.path().join("dashboard.json").display().to_string()));
}
