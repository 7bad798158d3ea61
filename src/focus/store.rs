//! Persistence of the daily session count.
//!
//! A single JSON record lives under a fixed key. Readers decide whether the
//! record still applies by comparing its date with today.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::PomodoroError;
use crate::storage::Database;

/// Key of the session record.
pub const STATE_KEY: &str = "pomodoroState";

/// The persisted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Work sessions completed on `date`.
    pub completed_sessions: u32,
    /// Calendar day the count belongs to.
    pub date: NaiveDate,
}

impl SessionRecord {
    /// Encode as JSON text.
    ///
    /// # Errors
    ///
    /// Returns `PomodoroError::Parse` if serialization fails.
    pub fn to_json(&self) -> Result<String, PomodoroError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `PomodoroError::Parse` for malformed text.
    pub fn from_json(text: &str) -> Result<Self, PomodoroError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Storage for the session record.
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore {
    /// Read the record, if one was ever written.
    ///
    /// # Errors
    ///
    /// Returns an error if storage is unreadable or the record is malformed.
    fn read(&self) -> Result<Option<SessionRecord>, PomodoroError>;

    /// Replace the record.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written.
    fn write(&self, record: &SessionRecord) -> Result<(), PomodoroError>;
}

/// Session count that applies on `today`, and the day it belongs to.
///
/// A record from another day, a missing record, and any read failure all
/// count as zero sessions.
pub fn sessions_today(store: &dyn SessionStore, today: NaiveDate) -> (u32, Option<NaiveDate>) {
    match store.read() {
        Ok(Some(record)) if record.date == today => {
            debug!(count = record.completed_sessions, "restored session count");
            (record.completed_sessions, Some(record.date))
        }
        Ok(Some(record)) => {
            debug!(saved = %record.date, "saved count is from another day, starting at 0");
            (0, None)
        }
        Ok(None) => (0, None),
        Err(e) => {
            warn!(error = %e, "could not load session count, starting at 0");
            (0, None)
        }
    }
}

/// Session store backed by the SQLite key-value table.
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    /// Open the store at the default database location.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new() -> Result<Self, PomodoroError> {
        Ok(Self {
            db: Database::open()?,
        })
    }

    /// Create a store over an existing database.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }
}

impl SessionStore for SqliteStore {
    fn read(&self) -> Result<Option<SessionRecord>, PomodoroError> {
        self.db
            .get(STATE_KEY)?
            .map(|text| SessionRecord::from_json(&text))
            .transpose()
    }

    fn write(&self, record: &SessionRecord) -> Result<(), PomodoroError> {
        self.db.put(STATE_KEY, &record.to_json()?)
    }
}

/// In-memory store.
///
/// Clones share the same slot, so a caller can keep a handle after giving
/// one to the engine. The slot holds raw text and may be seeded with
/// anything, including malformed JSON.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `text` verbatim.
    #[must_use]
    pub fn with_raw(text: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(text.into()))),
        }
    }

    /// The raw stored text.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SessionStore for MemoryStore {
    fn read(&self) -> Result<Option<SessionRecord>, PomodoroError> {
        self.slot
            .borrow()
            .as_deref()
            .map(SessionRecord::from_json)
            .transpose()
    }

    fn write(&self, record: &SessionRecord) -> Result<(), PomodoroError> {
        *self.slot.borrow_mut() = Some(record.to_json()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    #[test]
    fn test_record_json_shape() {
        let record = SessionRecord {
            completed_sessions: 7,
            date: today(),
        };
        assert_eq!(
            record.to_json().unwrap(),
            r#"{"completedSessions":7,"date":"2024-05-20"}"#
        );
    }

    #[test]
    fn test_sessions_today() {
        let store = MemoryStore::new();
        assert_eq!(sessions_today(&store, today()), (0, None));

        store
            .write(&SessionRecord {
                completed_sessions: 7,
                date: today(),
            })
            .unwrap();
        assert_eq!(sessions_today(&store, today()), (7, Some(today())));
        assert_eq!(sessions_today(&store, today().succ_opt().unwrap()), (0, None));

        let broken = MemoryStore::with_raw("[]");
        assert_eq!(sessions_today(&broken, today()), (0, None));
    }

    #[test]
    fn test_memory_store_shared_slot() {
        let store = MemoryStore::new();
        let handle = store.clone();
        assert!(store.read().unwrap().is_none());

        let record = SessionRecord {
            completed_sessions: 2,
            date: today(),
        };
        store.write(&record).unwrap();
        assert_eq!(handle.read().unwrap(), Some(record));
    }

    #[test]
    fn test_memory_store_corrupt() {
        let store = MemoryStore::with_raw("{not json");
        assert!(matches!(store.read(), Err(PomodoroError::Parse(_))));
    }

    #[test]
    fn test_sqlite_store_round_trip() {
        let store = SqliteStore::with_database(Database::open_in_memory().unwrap());
        assert!(store.read().unwrap().is_none());

        let record = SessionRecord {
            completed_sessions: 7,
            date: today(),
        };
        store.write(&record).unwrap();
        assert_eq!(store.read().unwrap(), Some(record));

        let later = SessionRecord {
            completed_sessions: 8,
            date: today(),
        };
        store.write(&later).unwrap();
        assert_eq!(store.read().unwrap(), Some(later));
    }

    #[test]
    fn test_sqlite_store_bad_date() {
        let db = Database::open_in_memory().unwrap();
        db.put(STATE_KEY, r#"{"completedSessions":3,"date":"Mon May 20 2024"}"#)
            .unwrap();
        let store = SqliteStore::with_database(db);
        assert!(store.read().is_err());
    }
}
