//! In-process stores: a memory-backed store and an unreachable medium.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::{CacheError, KvStore};

/// Key-value store kept in process memory.
///
/// Slots live as long as the store does. Used as the fake medium in tests
/// and for sessions that never need to survive a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one slot already populated.
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut slots) = store.slots.lock() {
            slots.insert(key.into(), value.into());
        }
        store
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.slots.lock().map(|s| s.len()).unwrap_or(0)
    }

    /// Check if no slot is populated.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn with_slots<R>(
        &self,
        key: &str,
        f: impl FnOnce(&mut HashMap<String, String>) -> R,
    ) -> Result<R, CacheError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|e| CacheError::store(key, e))?;
        Ok(f(&mut slots))
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.with_slots(key, |slots| slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.with_slots(key, |slots| {
            slots.insert(key.to_string(), value.to_string());
        })
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.with_slots(key, |slots| {
            slots.remove(key);
        })
    }
}

/// A medium that cannot be reached.
///
/// Every call fails with [`CacheError::Unavailable`]. Stands in for storage
/// during non-interactive execution (prerendering, disabled storage).
#[derive(Debug, Clone)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    /// Create an unavailable medium with the reason reported on each call.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for UnavailableStore {
    fn default() -> Self {
        Self::new("storage is not available in this context")
    }
}

impl KvStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Err(CacheError::Unavailable(self.reason.clone()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), CacheError> {
        Err(CacheError::Unavailable(self.reason.clone()))
    }

    fn delete(&self, _key: &str) -> Result<(), CacheError> {
        Err(CacheError::Unavailable(self.reason.clone()))
    }
}
