//! Configuration management for the daybook application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `DAYBOOK_DB`: Path to the journal database (defaults to ~/Documents/daybook/journal.db)
//! - `DAYBOOK_REMIND_INTERVAL`: Seconds between reminders (defaults to 60)
//! - `HOME`: Used for expanding the default database path

use crate::constants::{
    DEFAULT_DB_SUBPATH, DEFAULT_REMIND_INTERVAL_SECS, ENV_VAR_DAYBOOK_DB,
    ENV_VAR_DAYBOOK_REMIND_INTERVAL, ENV_VAR_HOME, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the daybook application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use daybook::Config;
/// use std::path::PathBuf;
/// use std::time::Duration;
///
/// let config = Config {
///     db_path: PathBuf::from("/path/to/journal.db"),
///     remind_interval: Duration::from_secs(300),
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Location of the SQLite journal file.
    ///
    /// Loaded from `DAYBOOK_DB`, falling back to
    /// `~/Documents/daybook/journal.db`.
    pub db_path: PathBuf,

    /// Delay between reminders in `daybook remind`.
    pub remind_interval: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("db_path", &REDACTED_PLACEHOLDER)
            .field("remind_interval", &self.remind_interval)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: PathBuf::from(""),
            remind_interval: Duration::from_secs(DEFAULT_REMIND_INTERVAL_SECS),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The database path is expanded with `shellexpand`, so `~` and
    /// `$VAR` references are resolved.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - `DAYBOOK_DB` is unset and `HOME` is unset or empty
    /// - The database path expansion fails or yields an empty path
    /// - The reminder interval is not a positive whole number of seconds
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use daybook::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Reminding every {:?}", config.remind_interval),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let db_path_str = match env::var(ENV_VAR_DAYBOOK_DB) {
            Ok(path) => path,
            Err(_) => {
                let home = env::var(ENV_VAR_HOME).unwrap_or_default();
                if home.trim().is_empty() {
                    return Err(AppError::Config(format!(
                        "{} is not set and {} is unavailable for the default path",
                        ENV_VAR_DAYBOOK_DB, ENV_VAR_HOME
                    )));
                }
                format!("{}/{}", home, DEFAULT_DB_SUBPATH)
            }
        };

        let expanded_path = shellexpand::full(&db_path_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let db_path = PathBuf::from(expanded_path.into_owned());

        if db_path.as_os_str().is_empty() {
            return Err(AppError::Config("Database path is empty".to_string()));
        }

        let remind_interval = match env::var(ENV_VAR_DAYBOOK_REMIND_INTERVAL) {
            Ok(raw) => Duration::from_secs(Self::parse_interval(&raw)?),
            Err(_) => Duration::from_secs(DEFAULT_REMIND_INTERVAL_SECS),
        };

        Ok(Config {
            db_path,
            remind_interval,
        })
    }

    fn parse_interval(raw: &str) -> AppResult<u64> {
        match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(AppError::Config(format!(
                "{} must be a positive number of seconds, got '{}'",
                ENV_VAR_DAYBOOK_REMIND_INTERVAL, raw
            ))),
        }
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Database path is empty"
    /// - "Database path must be absolute"
    /// - "Reminder interval must be greater than zero"
    pub fn validate(&self) -> AppResult<()> {
        if self.db_path.as_os_str().is_empty() {
            return Err(AppError::Config("Database path is empty".to_string()));
        }

        if !self.db_path.is_absolute() {
            return Err(AppError::Config(
                "Database path must be absolute".to_string(),
            ));
        }

        if self.remind_interval.is_zero() {
            return Err(AppError::Config(
                "Reminder interval must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
