//! Journal storage backed by SQLite.
//!
//! This module provides the append-only entry store. A [`Database`] owns a
//! single connection for its whole lifetime: it is opened once at startup,
//! passed by reference to whatever needs it, and closed when dropped (or
//! explicitly through [`Database::close`]).
//!
//! # Module Structure
//!
//! - `schema`: Table definition and schema initialization
//! - `entries`: Append, list, and point lookup of entries
//!
//! # Example
//!
//! ```no_run
//! use daybook::db::{Database, NewEntry};
//! use chrono::NaiveDate;
//! use std::path::Path;
//!
//! let db = Database::open(Path::new("/tmp/daybook/journal.db"))?;
//! db.initialize_schema()?;
//! let id = db.append(&NewEntry {
//!     date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
//!     mood: Some("Happy".to_string()),
//!     answer_1: "Rested".to_string(),
//!     answer_2: String::new(),
//!     answer_3: String::new(),
//!     advice: "Keep it up.".to_string(),
//! })?;
//! assert!(db.get(id)?.is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod entries;
pub mod schema;

pub use entries::{Entry, EntrySummary, NewEntry};

use crate::errors::{AppResult, StorageError};
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Owned handle to the journal store.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens or creates the journal database at `db_path`.
    ///
    /// The parent directory is created first if it is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory cannot be created
    /// - The file cannot be opened as a SQLite database
    pub fn open(db_path: &Path) -> AppResult<Self> {
        debug!("Opening database at: {:?}", db_path);

        if let Some(parent) = db_path.parent() {
            ensure_directory_exists(parent)?;
        }

        let conn = Connection::open(db_path).map_err(StorageError::Sqlite)?;

        // Fail early on files that are not SQLite databases
        conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(StorageError::Sqlite)?;

        info!("Database opened successfully");
        Ok(Database { conn })
    }

    /// Opens a private in-memory database, mainly for tests.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory().map_err(StorageError::Sqlite)?;
        Ok(Database { conn })
    }

    /// Initializes the database schema.
    ///
    /// Creates the entries table if it doesn't exist. This is idempotent and
    /// safe to call on every startup.
    ///
    /// # Errors
    ///
    /// Returns an error if schema creation fails.
    pub fn initialize_schema(&self) -> AppResult<()> {
        schema::create_tables(&self.conn)?;
        info!("Database schema initialized");
        Ok(())
    }

    /// Appends a new immutable entry and returns its id.
    pub fn append(&self, entry: &NewEntry) -> AppResult<i64> {
        entries::insert_entry(&self.conn, entry)
    }

    /// All entry summaries, most recent first.
    pub fn list_summaries(&self) -> AppResult<Vec<EntrySummary>> {
        entries::list_summaries(&self.conn)
    }

    /// Looks up one entry; `Ok(None)` when the id does not exist.
    pub fn get(&self, entry_id: i64) -> AppResult<Option<Entry>> {
        entries::get_entry(&self.conn, entry_id)
    }

    /// Closes the connection, reporting any error from SQLite.
    ///
    /// Dropping a `Database` also closes it, but silently.
    pub fn close(self) -> AppResult<()> {
        self.conn
            .close()
            .map_err(|(_, e)| StorageError::Sqlite(e))?;
        debug!("Database closed");
        Ok(())
    }
}

/// Creates `dir` (and parents) if missing, restricting it to the owner on Unix.
pub fn ensure_directory_exists(dir: &Path) -> AppResult<()> {
    if dir.as_os_str().is_empty() || dir.exists() {
        return Ok(());
    }

    fs::create_dir_all(dir).map_err(|source| StorageError::Directory {
        path: dir.to_path_buf(),
        source,
    })?;

    #[cfg(unix)]
    {
        use crate::constants::DEFAULT_DIR_PERMISSIONS;
        use std::os::unix::fs::PermissionsExt;

        let permissions = fs::Permissions::from_mode(DEFAULT_DIR_PERMISSIONS);
        fs::set_permissions(dir, permissions).map_err(|source| StorageError::Directory {
            path: dir.to_path_buf(),
            source,
        })?;
        debug!("Set 0o700 permissions on journal directory");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_entry() -> NewEntry {
        NewEntry {
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            mood: Some("Stressed".to_string()),
            answer_1: "Busy".to_string(),
            answer_2: "Lunch".to_string(),
            answer_3: "Deadlines".to_string(),
            advice: "Slow down.".to_string(),
        }
    }

    #[test]
    fn test_database_open_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("journal.db");

        let db = Database::open(&db_path).unwrap();
        db.initialize_schema().unwrap();

        assert!(db_path.exists());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(db_path.parent().unwrap())
                .unwrap()
                .permissions()
                .mode();
            assert_eq!(mode & 0o777, 0o700);
        }
    }

    #[test]
    fn test_initialize_schema_idempotent() {
        let db = Database::open_in_memory().unwrap();
        db.initialize_schema().unwrap();
        db.initialize_schema().unwrap();
    }

    #[test]
    fn test_entries_persist_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("journal.db");

        let db = Database::open(&db_path).unwrap();
        db.initialize_schema().unwrap();
        let id = db.append(&sample_entry()).unwrap();
        db.close().unwrap();

        let reopened = Database::open(&db_path).unwrap();
        reopened.initialize_schema().unwrap();
        let entry = reopened.get(id).unwrap().unwrap();
        assert_eq!(entry.answer_3, "Deadlines");
        assert_eq!(reopened.list_summaries().unwrap().len(), 1);
    }

    #[test]
    fn test_open_rejects_non_database_file() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("journal.db");
        fs::write(&db_path, "not a sqlite file\n".repeat(512)).unwrap();

        let result = Database::open(&db_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_append_before_initialize_fails() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.append(&sample_entry()).is_err());
    }
}
