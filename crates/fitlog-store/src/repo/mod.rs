//! Repository layer bridging the in-memory `Store` to key-value storage
//!
//! Every collection is stored whole, as one JSON array under its key.

pub mod hydration;
pub mod persist;

pub use hydration::{hydrate, load_collection};
pub use persist::{persist_all, persist_collection};
