use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use pomodoro::focus::{SessionRecord, SessionStore, SqliteStore};
use pomodoro::storage::Database;

fn pomodoro(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pomodoro").unwrap();
    cmd.env("HOME", home)
        .env_remove("POMODORO_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn status_on_fresh_home() {
    let home = TempDir::new().unwrap();
    pomodoro(home.path())
        .args(["status", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"completed_sessions\": 0"))
        .stdout(predicate::str::contains("\"next_break\": \"short\""));

    assert!(home.path().join(".pomodoro/pomodoro.db").exists());
}

#[test]
fn status_reads_todays_record() {
    let home = TempDir::new().unwrap();
    let root = home.path().join(".pomodoro");
    fs::create_dir_all(&root).unwrap();

    let store = SqliteStore::with_database(Database::open_at(&root.join("pomodoro.db")).unwrap());
    store
        .write(&SessionRecord {
            completed_sessions: 3,
            date: chrono::Local::now().date_naive(),
        })
        .unwrap();
    drop(store);

    pomodoro(home.path())
        .args(["status", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"completed_sessions\": 3"))
        .stdout(predicate::str::contains("\"next_break\": \"long\""));
}

#[test]
fn status_with_unreadable_database() {
    let home = TempDir::new().unwrap();
    let root = home.path().join(".pomodoro");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("pomodoro.db"), b"this is not sqlite, just junk bytes padding the header").unwrap();

    pomodoro(home.path())
        .args(["status", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"completed_sessions\": 0"))
        .stderr(predicate::str::contains("session storage unavailable"));
}

#[test]
fn status_pretty_by_default() {
    let home = TempDir::new().unwrap();
    pomodoro(home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sessions completed"));
}

#[test]
fn config_shows_defaults() {
    let home = TempDir::new().unwrap();
    pomodoro(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("work_minutes: 25"))
        .stdout(predicate::str::contains("long_break_interval: 4"));
}

#[test]
fn config_file_overrides_and_sets_output() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom.yaml");
    fs::write(
        &path,
        "general:\n  default_output: json\ntimer:\n  work_minutes: 50\n",
    )
    .unwrap();

    pomodoro(home.path())
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"work_minutes\": 50"))
        .stdout(predicate::str::contains("\"short_break_minutes\": 5"));
}

#[test]
fn config_from_env_var() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("env.yaml");
    fs::write(&path, "timer:\n  long_break_interval: 2\n").unwrap();

    pomodoro(home.path())
        .env("POMODORO_CONFIG", &path)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("long_break_interval: 2"));
}

#[test]
fn zero_duration_is_rejected() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bad.yaml");
    fs::write(&path, "timer:\n  work_minutes: 0\n").unwrap();

    pomodoro(home.path())
        .arg("--config")
        .arg(&path)
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("work_minutes"));
}

#[test]
fn malformed_config_is_rejected() {
    let home = TempDir::new().unwrap();
    let root = home.path().join(".pomodoro");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("config.yaml"), "timer: [unclosed").unwrap();

    pomodoro(home.path())
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not load configuration"));
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    pomodoro(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pomodoro"));
}

#[test]
fn unknown_command_fails() {
    let home = TempDir::new().unwrap();
    pomodoro(home.path()).arg("launch").assert().failure();
}
