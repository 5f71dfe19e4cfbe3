//! Directory-backed store: one file per slot.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::{CacheError, KvStore};

const SLOT_EXTENSION: &str = "slot";

/// Key-value store persisting each slot as a file in a directory.
///
/// Writes go to a uniquely named temporary sibling first and are renamed over
/// the slot, so a reader never observes a half-written value and concurrent
/// writers never share a temp file. The last rename wins.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let root = root.into();
        fs::create_dir_all(&root)
            .map_err(|e| CacheError::OpenError(format!("{}: {}", root.display(), e)))?;
        Ok(Self { root })
    }

    /// Directory holding the slot files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf, CacheError> {
        Ok(self
            .root
            .join(format!("{}.{}", encode_key(key)?, SLOT_EXTENSION)))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CacheError::store(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let path = self.slot_path(key)?;
        let mut tmp =
            NamedTempFile::new_in(&self.root).map_err(|e| CacheError::store(key, e))?;
        tmp.write_all(value.as_bytes())
            .map_err(|e| CacheError::store(key, e))?;
        tmp.persist(&path)
            .map_err(|e| CacheError::store(key, e.error))?;
        tracing::trace!(slot = key, bytes = value.len(), "slot written");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CacheError::store(key, e)),
        }
    }
}

/// Map a key to a file stem. Alphanumerics, `-` and `_` pass through, every
/// other byte is percent-encoded so distinct keys never share a file.
fn encode_key(key: &str) -> Result<String, CacheError> {
    if key.is_empty() {
        return Err(CacheError::InvalidKey(key.to_string()));
    }
    let mut stem = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' => stem.push(byte as char),
            other => stem.push_str(&format!("%{:02X}", other)),
        }
    }
    Ok(stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_slot_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("cart").unwrap(), None);
    }

    #[test]
    fn test_set_get_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.set("cart", r#"[{"a":1}]"#).unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some(r#"[{"a":1}]"#));

        store.set("cart", "[]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));

        store.delete("cart").unwrap();
        assert_eq!(store.get("cart").unwrap(), None);
        assert!(!store.slot_path("cart").unwrap().exists());
    }

    #[test]
    fn test_delete_missing_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.delete("cart").is_ok());
    }

    #[test]
    fn test_open_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(store.root(), nested.as_path());
    }

    #[test]
    fn test_slots_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        FileStore::open(dir.path())
            .unwrap()
            .set("shop:cart", "[1]")
            .unwrap();

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("shop:cart").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_concurrent_writers_all_land() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        let failures: usize = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|writer| {
                    let store = &store;
                    scope.spawn(move || {
                        (0..200)
                            .filter(|i| store.set("cart", &format!("[{writer},{i}]")).is_err())
                            .count()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).sum()
        });

        assert_eq!(failures, 0);
        let last = store.get("cart").unwrap().unwrap();
        assert!(last.starts_with('[') && last.ends_with(']'));

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("cart.slot")]);
    }

    #[test]
    fn test_key_encoding() {
        assert_eq!(encode_key("cart").unwrap(), "cart");
        assert_eq!(encode_key("shop:cart").unwrap(), "shop%3Acart");
        assert_eq!(encode_key("../etc").unwrap(), "%2E%2E%2Fetc");
        assert!(matches!(encode_key(""), Err(CacheError::InvalidKey(_))));
    }
}
