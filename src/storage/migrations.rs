//! Database migrations for pomodoro.
//!
//! Each migration upgrades the schema by one version. The version lives in
//! `PRAGMA user_version` and migrations run when the database is opened.

use rusqlite::Connection;

use crate::error::PomodoroError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 for a fresh database.
pub fn get_version(conn: &Connection) -> Result<i32, PomodoroError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| PomodoroError::Database(format!("Failed to get schema version: {e}")))
}

fn set_version(conn: &Connection, version: i32) -> Result<(), PomodoroError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| PomodoroError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), PomodoroError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        tracing::debug!(version, "applying migration");
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

fn run_migration(conn: &Connection, version: i32) -> Result<(), PomodoroError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(PomodoroError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: the key-value table holding the session record.
fn migrate_v1(conn: &Connection) -> Result<(), PomodoroError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );
        ",
    )
    .map_err(|e| PomodoroError::Database(format!("Migration v1 failed: {e}")))
}
