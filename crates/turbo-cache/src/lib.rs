//! Durable key-value slots for TurboCommerce client state.
//!
//! Provides the [`KvStore`] capability that state containers (such as the
//! shopping cart) mirror themselves into, plus the stores that implement it:
//!
//! - [`MemoryStore`] keeps slots in process memory (tests, ephemeral sessions)
//! - [`FileStore`] keeps one file per slot in a directory
//! - [`UnavailableStore`] models a medium that cannot be reached
//!
//! # Example
//!
//! ```rust
//! use turbo_cache::{cache_key, KvStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let key = cache_key!("storefront", "cart");
//!
//! store.set(&key, r#"[{"productId":1}]"#)?;
//! assert!(store.exists(&key)?);
//!
//! store.delete(&key)?;
//! assert_eq!(store.get(&key)?, None);
//! # Ok::<(), turbo_cache::CacheError>(())
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::KvStore;
pub use memory::{MemoryStore, UnavailableStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CacheError, FileStore, KvStore, MemoryStore, UnavailableStore};
}
