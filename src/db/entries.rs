//! Entry operations.
//!
//! The journal is append-only: entries can be inserted, listed, and read
//! back by id. There are deliberately no update or delete functions.

use crate::constants::DATE_FORMAT_ISO;
use crate::errors::{AppResult, StorageError};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::Serialize;
use tracing::debug;

/// A journal entry as stored in the database.
///
/// `date` is the stored text. Rows written by this crate hold `YYYY-MM-DD`,
/// but anything else is passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: i64,
    pub date: String,
    pub mood: Option<String>,
    pub answer_1: String,
    pub answer_2: String,
    pub answer_3: String,
    pub advice: String,
}

/// The fields supplied by the caller when appending an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub mood: Option<String>,
    pub answer_1: String,
    pub answer_2: String,
    pub answer_3: String,
    pub advice: String,
}

/// The `(id, date, mood)` projection shown in entry listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntrySummary {
    pub id: i64,
    pub date: String,
    pub mood: Option<String>,
}

/// Inserts a new entry and returns its id.
///
/// The insert is a single statement, so it either fully succeeds or leaves
/// the table untouched.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn insert_entry(conn: &Connection, entry: &NewEntry) -> AppResult<i64> {
    debug!("Inserting entry for date {}", entry.date);

    conn.execute(
        r#"
        INSERT INTO entries (date, mood, answer_1, answer_2, answer_3, advice)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
        params![
            entry.date.format(DATE_FORMAT_ISO).to_string(),
            entry.mood,
            entry.answer_1,
            entry.answer_2,
            entry.answer_3,
            entry.advice,
        ],
    )
    .map_err(StorageError::Sqlite)?;

    let entry_id = conn.last_insert_rowid();
    debug!("Entry inserted with id {}", entry_id);
    Ok(entry_id)
}

/// Lists every entry's summary, most recent first.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_summaries(conn: &Connection) -> AppResult<Vec<EntrySummary>> {
    debug!("Listing entry summaries");

    let mut stmt = conn
        .prepare("SELECT id, date, mood FROM entries ORDER BY id DESC")
        .map_err(StorageError::Sqlite)?;

    let summaries = stmt
        .query_map([], |row| {
            Ok(EntrySummary {
                id: row.get(0)?,
                date: read_date(row, 1)?,
                mood: row.get(2)?,
            })
        })
        .map_err(StorageError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(StorageError::Sqlite)?;

    debug!("Found {} entries", summaries.len());
    Ok(summaries)
}

/// Retrieves an entry by id.
///
/// # Errors
///
/// Returns an error if the database operation fails.
/// Returns `Ok(None)` if no entry has the given id.
pub fn get_entry(conn: &Connection, entry_id: i64) -> AppResult<Option<Entry>> {
    debug!("Getting entry id {}", entry_id);

    let entry = conn
        .query_row(
            r#"
            SELECT id, date, mood, answer_1, answer_2, answer_3, advice
            FROM entries
            WHERE id = ?1
            "#,
            params![entry_id],
            |row| {
                Ok(Entry {
                    id: row.get(0)?,
                    date: read_date(row, 1)?,
                    mood: row.get(2)?,
                    answer_1: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                    answer_2: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
                    answer_3: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
                    advice: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
                })
            },
        )
        .optional()
        .map_err(StorageError::Sqlite)?;

    Ok(entry)
}

fn read_date(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
}
