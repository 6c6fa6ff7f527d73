//! Error handling utilities for the moodlog application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use thiserror::Error;

/// Represents error cases that can occur when interacting with the persistent
/// key-value store.
///
/// Storage failures are deliberately non-fatal: the entry store catches them
/// at its boundary, logs them, and degrades to an empty read or a dropped
/// write. Corrupt persisted data is subject to the store's configurable
/// corrupt-data policy.
///
/// # Examples
///
/// ```
/// use moodlog::errors::StorageError;
///
/// let error = StorageError::Corrupt {
///     key: "mood_entries".to_string(),
///     detail: "expected JSON array".to_string(),
/// };
///
/// assert!(format!("{}", error).contains("mood_entries"));
/// assert!(format!("{}", error).contains("corrupt"));
/// ```
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying SQLite read or write failed.
    #[error("Persistent storage operation failed: {0}. Data will not be persisted for this operation.")]
    Sqlite(#[from] rusqlite::Error),

    /// The value persisted under a key could not be decoded.
    #[error("Persisted data under key '{key}' is corrupt: {detail}")]
    Corrupt {
        /// The storage key holding the unreadable value.
        key: String,
        /// A description of the decode failure.
        detail: String,
    },
}

/// Represents error cases that can occur when parsing the CSV exchange format.
///
/// Only structural problems are errors: a missing header or a file with no
/// data rows. Individual malformed rows (invalid date, missing required
/// field) are silently skipped by the parser, not reported here.
///
/// # Examples
///
/// ```
/// use moodlog::errors::CsvError;
///
/// let error = CsvError::MissingColumns;
/// assert!(format!("{}", error).contains("Date"));
/// assert!(format!("{}", error).contains("Emoji"));
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// The input has fewer than two lines, so there are no data rows.
    #[error("CSV file has no data rows. Expected a header line followed by at least one entry row.")]
    NoData,

    /// The header line lacks a required column.
    #[error("CSV header is missing required columns. Both a 'Date' and an 'Emoji' column must be present (matched case-insensitively, in any order).")]
    MissingColumns,
}

/// Represents all possible errors that can occur in the moodlog application.
///
/// This enum is the central error type used across the application, with
/// variants for different error categories. It uses `thiserror` for deriving
/// the `Error` trait implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use moodlog::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use moodlog::errors::AppError;
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
    /// Errors related to application configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors from the persistent key-value store.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Structural errors in CSV input.
    #[error("CSV format error: {0}")]
    Csv(#[from] CsvError),

    /// General I/O errors (reading an import file, writing an export file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to user-supplied dates.
    #[error("Invalid date: {0}")]
    Date(String),
}

/// A specialized Result type for moodlog operations.
///
/// This type alias simplifies function signatures throughout the application
/// by defaulting the error type to [`AppError`].
pub type AppResult<T> = Result<T, AppError>;
