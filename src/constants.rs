//! Constants used throughout the application.
//!
//! This module contains the constants used in Daybook, organized into
//! logical groups so they are easy to find and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "daybook";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A reflective journal with daily mood tracking and advice";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable for the journal database path.
pub const ENV_VAR_DAYBOOK_DB: &str = "DAYBOOK_DB";
/// Environment variable for the reminder interval, in seconds.
pub const ENV_VAR_DAYBOOK_REMIND_INTERVAL: &str = "DAYBOOK_REMIND_INTERVAL";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default database location relative to the user's home directory.
pub const DEFAULT_DB_SUBPATH: &str = "Documents/daybook/journal.db";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// File System Parameters
/// Default POSIX permissions for the database directory (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;

// Date/Time Logic
/// Date format used for stored entry dates (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";

// Journal Content
/// Mood label stored when the user does not choose a mood.
pub const MOOD_UNSPECIFIED_LABEL: &str = "Not specified";
/// The three guided questions, in display order.
pub const JOURNAL_QUESTIONS: [&str; 3] = [
    "1. What are you feeling right now?",
    "2. What is something that went well today?",
    "3. Is there anything bothering you at the moment?",
];
/// Message shown when every answer is blank.
pub const EMPTY_ENTRY_MESSAGE: &str =
    "Please write something in at least one of the questions before saving.";
/// Confirmation printed after a successful save.
pub const SAVED_MESSAGE: &str = "Your journal entry has been saved.";
/// Printed by `list` when the journal is empty.
pub const NO_ENTRIES_MESSAGE: &str = "No journal entries yet.";

// Reminders
/// Default number of seconds between reminders.
pub const DEFAULT_REMIND_INTERVAL_SECS: u64 = 60;
/// The reminder text.
pub const REMINDER_MESSAGE: &str = "Take a moment to journal your thoughts today 💭";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "daybook";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
