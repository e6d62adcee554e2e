//! Filesystem-backed key-value storage
//!
//! Entry `<key>` lives in `<root>/<key>.json`

use crate::errors::{io_error, Result};
use crate::storage::atomic::atomic_write;
use crate::storage::KvStorage;
use fitlog_core::errors::{FlError, FlErrorKind};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// One JSON file per storage key
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    /// Create storage rooted at the given directory
    ///
    /// The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error for keys that are not a plain file name.
    pub fn entry_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(FlError::new(FlErrorKind::InvalidInput)
                .with_op("fs_entry_path")
                .with_storage_key(key)
                .with_message("Storage keys may only contain [A-Za-z0-9_-]"));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl KvStorage for FsStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error("read_entry", e).with_storage_key(key)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        atomic_write(&path, value.as_bytes()).map_err(|e| e.with_storage_key(key))
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error("remove_entry", e).with_storage_key(key)),
        }
    }
}
