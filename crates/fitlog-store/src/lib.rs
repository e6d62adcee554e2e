//! Fitlog Store - Durable persistence for the fitness collections
//!
//! Provides:
//! - A `KvStorage` abstraction with in-memory, filesystem and SQLite backends
//! - Hydration and full-collection persistence bridging the in-memory `Store`
//! - `PersistedStore`, the single source of truth the presentation layer talks to

pub mod db;
pub mod errors;
pub mod keys;
pub mod persisted;
pub mod repo;
pub mod storage;

// Re-export key types
pub use errors::Result;
pub use persisted::PersistedStore;
pub use storage::{FsStorage, KvStorage, MemoryStorage, SqliteStorage};
