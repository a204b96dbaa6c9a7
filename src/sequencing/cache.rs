//! Session-scoped cache for sequencing results.
//!
//! A thread-safe string-keyed store. Entries live for the process
//! lifetime and are never invalidated within a session; repeated
//! sequencing requests for the same label must not re-invoke the remote
//! service.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;

/// Thread-safe in-memory cache keyed by string. Uses an `RwLock` so
/// concurrent readers never block each other.
#[derive(Debug, Clone, Default)]
pub struct SessionCache {
    entries: Arc<RwLock<HashMap<String, Value>>>,
}

impl SessionCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under `key`, replacing any previous entry.
    pub fn put(&self, key: &str, value: Value) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value);
        }
    }

    /// Retrieve a cached value, `None` on a miss.
    pub fn get(&self, key: &str) -> Option<Value> {
        if let Ok(entries) = self.entries.read() {
            entries.get(key).cloned()
        } else {
            None
        }
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
