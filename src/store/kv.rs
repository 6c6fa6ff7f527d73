//! Persistent key-value storage.
//!
//! This module provides the fallible key-value capability that the rest of
//! the store is built on: a single SQLite table mapping string keys to
//! string values. Every persisted piece of state (the entry collection,
//! theme, reminder flag, custom emoji list, demo flag) lives under its own
//! independent key.

use crate::errors::StorageError;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::debug;

/// Handle to the on-disk key-value store.
///
/// The store is a plain SQLite database with one `kv` table. Access is
/// single-threaded and synchronous; there is no pooling because there are
/// no concurrent writers.
pub struct KvStore {
    conn: Connection,
}

impl KvStore {
    /// Opens or creates the key-value database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database file cannot be opened or the
    /// `kv` table cannot be created.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        debug!("Opening key-value store at {:?}", path);
        let conn = Connection::open(path)?;
        Self::init(&conn)?;
        Ok(KvStore { conn })
    }

    /// Opens an in-memory store, used by tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be initialized.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        Self::init(&conn)?;
        Ok(KvStore { conn })
    }

    /// Creates the `kv` table if it does not exist. Idempotent.
    fn init(conn: &Connection) -> Result<(), StorageError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails.
    pub fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying write fails.
    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        debug!("Writing {} bytes under key '{}'", value.len(), key);
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Removes `key` from the store. No-op if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying delete fails.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        debug!("Removing key '{}'", key);
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}
