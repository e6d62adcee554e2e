//! Core types shared across Fitlog facilities
//!
//! This crate provides foundational types used by the record models,
//! the error facility and the logging facility:
//!
//! - **Record identifiers**: RecordId, the collision-resistant id carried by every record
//! - **Schema constants**: Canonical field keys and event names

pub mod record_id;
pub mod schema;

pub use record_id::RecordId;
