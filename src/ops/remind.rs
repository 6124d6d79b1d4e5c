//! Periodic journaling reminders.

use crate::constants::REMINDER_MESSAGE;
use crate::errors::AppResult;
use std::io::Write;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Prints a reminder every `interval`, starting one interval from now.
///
/// Runs until the process is terminated, or until `limit` reminders have
/// been shown when a limit is given. Returns the number of reminders shown.
///
/// # Errors
///
/// Returns an error if writing to `output` fails.
pub fn run_reminders<W: Write>(
    output: &mut W,
    interval: Duration,
    limit: Option<u64>,
) -> AppResult<u64> {
    let mut shown = 0;

    while limit.map_or(true, |limit| shown < limit) {
        thread::sleep(interval);
        writeln!(output, "{}", REMINDER_MESSAGE)?;
        output.flush()?;
        shown += 1;
        debug!("Reminder {} shown, next in {:?}", shown, interval);
    }

    Ok(shown)
}
