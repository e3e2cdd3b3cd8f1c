//! Key-value storage backends for the favorites blob.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::Error;

/// What: Minimal string key-value store holding serialized blobs.
///
/// Details:
/// - `get_item` returns `Ok(None)` when the key was never written.
/// - `set_item` replaces the whole value; there is no partial update.
pub trait KvStorage: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    /// - `Error::StorageFailed` when the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, Error>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    /// - `Error::StorageFailed` when the backend cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), Error>;
}

impl<T: KvStorage + ?Sized> KvStorage for std::sync::Arc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        (**self).set_item(key, value)
    }
}

/// File-backed storage: one `<key>.json` file per key inside `dir`.
#[derive(Clone, Debug)]
pub struct FileStorage {
    /// Directory holding the key files.
    dir: PathBuf,
}

impl FileStorage {
    /// Create a storage rooted at `dir`. The directory is created lazily on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Directory holding the key files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl KvStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "[Storage] Failed to read blob");
                Err(Error::StorageFailed(format!("{}: {e}", path.display())))
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        let path = self.path_for(key);
        fs::create_dir_all(&self.dir).map_err(|e| {
            Error::StorageFailed(format!("{}: {e}", self.dir.display()))
        })?;
        // Write to a sibling temp file first so a failed write never truncates the previous blob.
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        let result = fs::write(&tmp, value).and_then(|()| fs::rename(&tmp, &path));
        match result {
            Ok(()) => {
                tracing::debug!(
                    path = %path.display(),
                    bytes = value.len(),
                    "[Storage] Blob persisted"
                );
                Ok(())
            }
            Err(e) => {
                let _ = fs::remove_file(&tmp);
                tracing::warn!(path = %path.display(), error = %e, "[Storage] Failed to write blob");
                Err(Error::StorageFailed(format!("{}: {e}", path.display())))
            }
        }
    }
}

/// In-memory storage used by tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    /// Stored blobs keyed by storage key.
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a raw blob under `key`.
    #[must_use]
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::default();
        if let Ok(mut items) = store.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl KvStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        let items = self
            .items
            .lock()
            .map_err(|_| Error::StorageFailed("memory storage poisoned".into()))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| Error::StorageFailed("memory storage poisoned".into()))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: File storage reports a missing key as `None` and round-trips writes.
    ///
    /// Inputs:
    /// - Fresh temp directory (nested path that does not exist yet)
    ///
    /// Output:
    /// - First read is `None`; after a write the same text is read back and no temp file remains.
    fn file_storage_missing_then_written() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::new(dir.path().join("nested"));
        assert_eq!(storage.get_item("favorites").expect("read"), None);

        storage.set_item("favorites", "[]").expect("write");
        assert_eq!(
            storage.get_item("favorites").expect("read").as_deref(),
            Some("[]")
        );
        assert!(storage.path_for("favorites").is_file());
        assert!(!storage.dir().join(".favorites.json.tmp").exists());
    }

    #[test]
    /// What: A read error other than not-found is reported as `StorageFailed`.
    ///
    /// Inputs:
    /// - A directory sitting where the blob file should be
    ///
    /// Output:
    /// - `Err(Error::StorageFailed(_))` from `get_item`.
    fn file_storage_unreadable_blob_is_storage_failed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::new(dir.path());
        fs::create_dir_all(storage.path_for("favorites")).expect("mkdir");
        assert!(matches!(
            storage.get_item("favorites"),
            Err(Error::StorageFailed(_))
        ));
    }

    #[test]
    /// What: A failed write leaves the previously persisted blob untouched.
    fn file_storage_failed_write_keeps_prior_blob() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::new(dir.path());
        storage.set_item("favorites", r#"[{"id":1}]"#).expect("write");
        // Block the temp path with a directory so the next write fails.
        fs::create_dir_all(dir.path().join(".favorites.json.tmp")).expect("mkdir");
        assert!(storage.set_item("favorites", "[]").is_err());
        assert_eq!(
            storage.get_item("favorites").expect("read").as_deref(),
            Some(r#"[{"id":1}]"#)
        );
    }
}
