//! Thread-safe in-memory cache with optional per-entry expiry

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use serde_json::Value;

use super::Cache;

/// A stored value together with its optional expiry instant
#[derive(Debug, Clone)]
struct CacheEntry {
    /// The cached payload
    value: Value,
    /// When the entry stops being valid; `None` means never
    expires_at: Option<Instant>,
}

/// In-memory cache backed by a mutex-guarded map
///
/// One lock guards every operation, so the check-and-delete sequence in
/// `get` cannot race with a concurrent `set` or `delete`. The lock is only
/// ever held for map access, never across I/O. Expiry is computed at write
/// time and checked on read; entries are not refreshed by reads.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the entry map, recovering from a poisoned lock
    ///
    /// A poisoned lock only means another thread panicked while holding it;
    /// the map itself is still a consistent snapshot of completed writes.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Cache for MemoryCache {
    fn get(&self, key: &str) -> Option<Value> {
        let mut entries = self.lock();
        let expired = match entries.get(key) {
            None => return None,
            Some(entry) => entry
                .expires_at
                .is_some_and(|expires_at| Instant::now() >= expires_at),
        };
        if expired {
            entries.remove(key);
            return None;
        }
        entries.get(key).map(|entry| entry.value.clone())
    }

    fn set(&self, key: &str, value: Value, ttl: Option<Duration>) {
        let expires_at = ttl.map(|ttl| Instant::now() + ttl);
        self.lock()
            .insert(key.to_string(), CacheEntry { value, expires_at });
    }

    fn delete(&self, key: &str) {
        self.lock().remove(key);
    }

    fn clear(&self) {
        self.lock().clear();
    }
}
