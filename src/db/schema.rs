//! Database schema definition and initialization.
//!
//! The journal uses a single table. There is no versioning or migration
//! scheme: the table is created once if absent and never altered.

use crate::errors::{AppResult, StorageError};
use rusqlite::Connection;
use tracing::debug;

/// Creates the `entries` table if it does not exist.
///
/// This function is idempotent - it uses `CREATE TABLE IF NOT EXISTS`
/// so it's safe to call on every startup.
///
/// # Errors
///
/// Returns an error if the DDL statement fails.
pub fn create_tables(conn: &Connection) -> AppResult<()> {
    debug!("Creating database tables");

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            mood TEXT,
            answer_1 TEXT,
            answer_2 TEXT,
            answer_3 TEXT,
            advice TEXT
        );
        "#,
    )
    .map_err(StorageError::Sqlite)?;

    Ok(())
}
