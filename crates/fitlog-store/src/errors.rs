//! Error handling for fitlog-store
//!
//! Wraps fitlog-core FlError with store-specific helpers

use fitlog_core::errors::{FlError, FlErrorKind};

/// Result type alias using FlError
pub type Result<T> = std::result::Result<T, FlError>;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> FlError {
    FlError::new(FlErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> FlError {
    FlError::new(FlErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create a serialization error for a storage entry
pub fn serialization_error(storage_key: &str, err: serde_json::Error) -> FlError {
    FlError::new(FlErrorKind::Serialization)
        .with_op("serialize_collection")
        .with_storage_key(storage_key)
        .with_message(err.to_string())
}

/// Wrap a backend failure that happened while persisting a collection
pub fn persistence_error(collection: &str, storage_key: &str, source: FlError) -> FlError {
    FlError::new(FlErrorKind::Persistence)
        .with_op("persist_collection")
        .with_collection(collection)
        .with_storage_key(storage_key)
        .with_message(format!("Failed to write {}", storage_key))
        .with_source(source)
}
