//! Error handling utilities for the daybook application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents failures of the journal store.
///
/// This is the only failure kind the storage layer surfaces. Nothing is
/// retried: the error propagates to the caller and the in-progress operation
/// is abandoned. Because every insert is a single statement, a failed save
/// leaves previously persisted entries untouched.
///
/// # Examples
///
/// ```
/// use daybook::errors::StorageError;
///
/// let error = StorageError::Sqlite(rusqlite::Error::InvalidQuery);
/// assert!(format!("{}", error).contains("Database error"));
/// ```
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQLite database error.
    #[error("Database error: {0}\n\nIf you're seeing 'file is not a database' or 'disk I/O error', the journal file may be corrupted, read-only, or on a full disk.")]
    Sqlite(#[from] rusqlite::Error),

    /// The directory holding the database could not be prepared.
    #[error("Failed to prepare journal directory {path}: {source}. Please check file permissions and available disk space.")]
    Directory {
        /// The directory that could not be created or secured
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents all possible errors that can occur in the daybook application.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use daybook::errors::AppError;
///
/// let error = AppError::Config("Database path is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Database path is empty");
/// ```
///
/// Converting from an IO error:
/// ```
/// use daybook::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from the terminal or filesystem.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Precondition failures in the journaling workflow (e.g., an empty entry).
    #[error("Journal error: {0}")]
    Journal(String),

    /// Errors raised by the journal store.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Errors encoding entries as JSON for output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use daybook::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Journal("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
