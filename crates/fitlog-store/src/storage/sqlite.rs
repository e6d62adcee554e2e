//! SQLite-backed key-value storage

use crate::db;
use crate::errors::{from_rusqlite, Result};
use crate::storage::KvStorage;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Entries stored as rows of the `kv_entries` table
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open (or create) a database file with its `kv_entries` table
    ///
    /// # Errors
    ///
    /// Returns a `Persistence` error if the database cannot be opened or the
    /// table cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = db::open(path)?;
        db::configure(&conn)?;
        Self::from_connection(conn)
    }

    /// Open a private in-memory database
    ///
    /// # Errors
    ///
    /// Returns an error if SQLite cannot allocate the database or the schema
    /// cannot be applied.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    /// Wrap an existing connection, creating the table when missing
    ///
    /// # Errors
    ///
    /// Returns a `Persistence` error if the table cannot be created.
    pub fn from_connection(conn: Connection) -> Result<Self> {
        db::ensure_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl KvStorage for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| from_rusqlite(e).with_storage_key(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let now = chrono::Utc::now().timestamp_millis();
        self.conn
            .execute(
                "INSERT INTO kv_entries (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, now],
            )
            .map_err(|e| from_rusqlite(e).with_storage_key(key))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM kv_entries WHERE key = ?1", params![key])
            .map_err(|e| from_rusqlite(e).with_storage_key(key))?;
        Ok(removed > 0)
    }
}
