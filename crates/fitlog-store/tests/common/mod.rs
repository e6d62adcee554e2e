use fitlog_store::{KvStorage, MemoryStorage, PersistedStore};

/// A persisted store over fresh in-memory storage
#[allow(dead_code)]
pub fn memory_store() -> PersistedStore<MemoryStorage> {
    PersistedStore::open(MemoryStorage::new())
}

/// Parse a storage entry as a JSON array
#[allow(dead_code)]
pub fn stored_array<S: KvStorage>(storage: &S, key: &str) -> Vec<serde_json::Value> {
    let raw = storage.get(key).unwrap().expect("entry should exist");
    serde_json::from_str(&raw).unwrap()
}

/// Storage whose writes always fail, for error-path tests
#[allow(dead_code)]
pub struct FailingStorage;

impl KvStorage for FailingStorage {
    fn get(&self, _key: &str) -> fitlog_store::Result<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> fitlog_store::Result<()> {
        Err(fitlog_store::errors::io_error(
            "write_entry",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }

    fn remove(&mut self, _key: &str) -> fitlog_store::Result<bool> {
        Ok(false)
    }
}
