//! Browse past journal entries.
//!
//! Historical entries are rendered exactly as stored; their advice is never
//! recomputed.

use crate::constants::{JOURNAL_QUESTIONS, MOOD_UNSPECIFIED_LABEL};
use crate::db::{Database, Entry, EntrySummary};
use crate::errors::AppResult;
use tracing::debug;

/// All summaries, newest first.
pub fn list_entries(db: &Database) -> AppResult<Vec<EntrySummary>> {
    db.list_summaries()
}

/// One line of the entry list: `[id] YYYY-MM-DD - Mood`.
pub fn format_summary(summary: &EntrySummary) -> String {
    format!(
        "[{}] {} - {}",
        summary.id,
        summary.date,
        summary.mood.as_deref().unwrap_or(MOOD_UNSPECIFIED_LABEL)
    )
}

/// Renders the detail view of a stored entry.
pub fn format_entry(entry: &Entry) -> String {
    format!(
        "Date: {}\nMood: {}\n\n{}\n{}\n\n{}\n{}\n\n{}\n{}\n\nAdvice:\n{}",
        entry.date,
        entry.mood.as_deref().unwrap_or(MOOD_UNSPECIFIED_LABEL),
        JOURNAL_QUESTIONS[0],
        entry.answer_1,
        JOURNAL_QUESTIONS[1],
        entry.answer_2,
        JOURNAL_QUESTIONS[2],
        entry.answer_3,
        entry.advice
    )
}

/// Detail view for `entry_id`, or `None` if there is no such entry.
///
/// Callers should treat `None` as a no-op rather than a failure.
pub fn show_entry(db: &Database, entry_id: i64) -> AppResult<Option<String>> {
    let rendered = db.get(entry_id)?.as_ref().map(format_entry);
    if rendered.is_none() {
        debug!("No entry with id {}", entry_id);
    }
    Ok(rendered)
}
