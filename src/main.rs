/*!
# Daybook - A Reflective Journal

Daybook is a command-line journal for daily reflections. Each entry captures
a mood and three short answers, stores them in a local SQLite database, and
shows a piece of advice based on what was written.

This file contains the main application flow, coordinating the various components
to implement the journal functionality.

## Usage

```
daybook [OPTIONS] <COMMAND>

Commands:
  write   Write today's entry, prompting for anything not given as a flag
  list    List past entries, newest first
  show    Show one past entry in full
  advice  Preview the advice for some text without saving anything
  remind  Print a journaling reminder at a fixed interval

Options:
  -v, --verbose                  Print verbose output
      --log-format <LOG_FORMAT>  Log output format [default: text] [possible values: text, json]
  -h, --help                     Print help
  -V, --version                  Print version
```

## Configuration

- `DAYBOOK_DB`: The journal database file (defaults to "~/Documents/daybook/journal.db")
- `DAYBOOK_REMIND_INTERVAL`: Seconds between reminders (defaults to 60)
- `RUST_LOG`: Overrides the log filter
*/

use chrono::Local;
use daybook::advice::advice_for;
use daybook::cli::{CliArgs, Command, WriteArgs};
use daybook::config::Config;
use daybook::constants::{
    DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, NO_ENTRIES_MESSAGE, SAVED_MESSAGE,
    TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME, VERBOSE_LOG_LEVEL,
};
use daybook::db::Database;
use daybook::errors::AppResult;
use daybook::ops::{self, EntryDraft};
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

/// The main entry point for the daybook application.
///
/// This function coordinates the overall application flow:
/// 1. Parses command-line arguments
/// 2. Initializes logging
/// 3. Loads and validates configuration
/// 4. Dispatches the requested command
///
/// Errors are logged once here and the process exits with a failure status.
fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(&args.log_format, args.verbose);

    let correlation_id = uuid::Uuid::new_v4().to_string();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    info!("Starting daybook");
    debug!("CLI arguments: {:?}", args);

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Installs the global subscriber, writing to stderr so stdout carries only
/// command output.
fn init_tracing(log_format: &str, verbose: bool) {
    let default_level = if verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::rfc_3339())
        .with_writer(io::stderr);

    if log_format == LOG_FORMAT_JSON {
        builder.json().with_current_span(true).init();
    } else {
        builder.init();
    }
}

fn run(command: Command) -> AppResult<()> {
    info!("Loading configuration");
    let config = Config::load()?;
    config.validate()?;

    match command {
        Command::Write(args) => write_entry(&config, args),
        Command::List { json } => list_entries(&config, json),
        Command::Show { id, json } => show_entry(&config, id, json),
        Command::Advice { mood, text } => {
            println!("{}", advice_for(mood, &text.join(" ")));
            Ok(())
        }
        Command::Remind { interval, count } => {
            let interval = interval
                .map(Duration::from_secs)
                .unwrap_or(config.remind_interval);
            info!("Reminding every {:?}", interval);
            ops::run_reminders(&mut io::stdout().lock(), interval, count)?;
            Ok(())
        }
    }
}

fn open_database(config: &Config) -> AppResult<Database> {
    let db = Database::open(&config.db_path)?;
    db.initialize_schema()?;
    Ok(db)
}

fn write_entry(config: &Config, args: WriteArgs) -> AppResult<()> {
    let draft = if args.has_answers() {
        EntryDraft {
            mood: args.mood,
            answers: args.answers(),
        }
    } else {
        let stdin = io::stdin();
        ops::collect_draft(&mut stdin.lock(), &mut io::stdout().lock(), args.mood)?
    };

    let db = open_database(config)?;
    let saved = ops::save_entry(&db, &draft, Local::now().date_naive())?;
    db.close()?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "\nPersonalized Advice:\n{}\n", saved.advice)?;
    writeln!(stdout, "{}", SAVED_MESSAGE)?;
    Ok(())
}

fn list_entries(config: &Config, json: bool) -> AppResult<()> {
    let db = open_database(config)?;
    let summaries = ops::list_entries(&db)?;
    db.close()?;

    let mut stdout = io::stdout().lock();
    if json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&summaries)?)?;
    } else if summaries.is_empty() {
        writeln!(stdout, "{}", NO_ENTRIES_MESSAGE)?;
    } else {
        for summary in &summaries {
            writeln!(stdout, "{}", ops::format_summary(summary))?;
        }
    }
    Ok(())
}

fn show_entry(config: &Config, id: i64, json: bool) -> AppResult<()> {
    let db = open_database(config)?;
    let rendered = if json {
        db.get(id)?
            .map(|entry| serde_json::to_string_pretty(&entry))
            .transpose()?
    } else {
        ops::show_entry(&db, id)?
    };
    db.close()?;

    // A missing entry is not an error: print nothing and succeed
    match rendered {
        Some(text) => writeln!(io::stdout().lock(), "{}", text)?,
        None => info!("No entry with id {}", id),
    }
    Ok(())
}
