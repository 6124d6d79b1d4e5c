//! High-level journaling operations.
//!
//! This module provides the user-facing workflows that sit between the
//! command line and the store: saving a new entry, browsing history, and
//! periodic reminders.

pub mod history;
pub mod remind;
pub mod write;

// Re-export commonly used functions
pub use history::{format_entry, format_summary, list_entries, show_entry};
pub use remind::run_reminders;
pub use write::{collect_draft, save_entry, EntryDraft, SavedEntry};
