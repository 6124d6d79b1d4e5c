/*!
# Daybook

Daybook is a small reflective journal. Each entry records the day's mood and
answers to three guided questions, together with a short piece of advice
derived from the mood and the words used in the answers. Entries are
append-only: once saved they are never edited, deleted, or re-evaluated.

## Core Features

- Write today's entry, from flags or interactive prompts
- List past entries, newest first
- Show a past entry exactly as it was saved
- Preview advice for any text without saving
- Periodic reminders to journal

## Architecture

- `advice`: Pure mood + keyword advice rules
- `db`: Append-only SQLite entry store
- `ops`: Save, history, and reminder workflows
- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure

## Usage Example

```rust,no_run
use daybook::db::Database;
use daybook::ops::{save_entry, EntryDraft};
use daybook::advice::Mood;
use daybook::Config;

fn main() -> daybook::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let db = Database::open(&config.db_path)?;
    db.initialize_schema()?;

    let draft = EntryDraft {
        mood: Some(Mood::Happy),
        answers: ["Rested".into(), "A long walk".into(), String::new()],
    };
    let saved = save_entry(&db, &draft, chrono::Local::now().date_naive())?;
    println!("{}", saved.advice);
    db.close()
}
```
*/

/// Mood labels and advice generation
pub mod advice;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Journal entry storage
pub mod db;
/// Error types and utilities for error handling
pub mod errors;
/// Journaling workflows
pub mod ops;

// Re-export important types for convenience
pub use advice::{compute_advice, Mood};
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
