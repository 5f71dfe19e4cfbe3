//! The key-value storage capability.

use std::rc::Rc;
use std::sync::Arc;

use crate::CacheError;

/// A durable key-value store holding string slots.
///
/// Writes replace the whole value of a slot; there is no partial or merge
/// write. Implementations decide where the slots live (memory, disk, a host
/// runtime) so callers stay agnostic to the environment they run in.
///
/// # Example
///
/// ```rust
/// use turbo_cache::{KvStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// store.set("cart", "[]").unwrap();
/// assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));
///
/// store.delete("cart").unwrap();
/// assert_eq!(store.get("cart").unwrap(), None);
/// ```
pub trait KvStore {
    /// Read a slot. Returns `None` if the key doesn't exist.
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Overwrite a slot with `value`.
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Erase a slot. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }
}

impl<T: KvStore + ?Sized> KvStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        (**self).delete(key)
    }
}

impl<T: KvStore + ?Sized> KvStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        (**self).delete(key)
    }
}

impl<T: KvStore + ?Sized> KvStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        (**self).delete(key)
    }
}

impl<T: KvStore + ?Sized> KvStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        (**self).delete(key)
    }
}

/// Helper to build slot keys with namespacing.
///
/// # Example
///
/// ```rust
/// let key = turbo_cache::cache_key!("storefront", "cart");
/// assert_eq!(key, "storefront:cart");
/// ```
#[macro_export]
macro_rules! cache_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}
