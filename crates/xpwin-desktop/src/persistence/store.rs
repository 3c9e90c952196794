//! Key-value store abstraction

use std::collections::HashMap;

/// Session-scoped string key-value store
///
/// Implementations absorb write failures (quota, security): the overlay
/// keeps running with in-memory state and cross-reload persistence simply
/// degrades. Reads that fail report `None`.
pub trait StateStore {
    /// Read a value by key
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value by key
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and for sessions without storage access
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}
