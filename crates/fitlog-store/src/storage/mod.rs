//! Durable key-value storage
//!
//! Each collection is held under one key as a JSON array string. Backends
//! only move strings; serialization happens in `repo`.

mod atomic;
mod fs_store;
mod memory;
mod sqlite;

pub use atomic::atomic_write;
pub use fs_store::FsStorage;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use crate::errors::Result;

/// A string-keyed, string-valued durable store
pub trait KvStorage {
    /// Read the value under `key`; `None` when the entry is absent
    ///
    /// # Errors
    ///
    /// Returns an `Io` or `Persistence` error when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an `Io` or `Persistence` error when the write fails.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the entry under `key`, returning whether it existed
    ///
    /// # Errors
    ///
    /// Returns an `Io` or `Persistence` error when the removal fails.
    fn remove(&mut self, key: &str) -> Result<bool>;
}

impl<S: KvStorage + ?Sized> KvStorage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        (**self).remove(key)
    }
}
