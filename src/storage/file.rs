//! FileStore - Directory-Backed Key-Value Store
//!
//! Desktop stand-in for browser local storage: one file per key inside a
//! single directory. Keys are escaped into safe file names.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{KeyValueStore, StorageError};
use crate::error::Result;
use crate::helpers::get_or_create_data_dir;

const VALUE_EXTENSION: &str = "kv";

/// One-file-per-key store rooted at a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store at `root`
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.exists() {
            fs::create_dir_all(&root)?;
        }
        debug!(path = ?root, "Opened file store");
        Ok(Self { root })
    }

    /// Open the store inside the platform data directory
    pub fn in_data_dir() -> Result<Self> {
        Self::open(get_or_create_data_dir()?.join("storage"))
    }

    /// Directory holding the values
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{VALUE_EXTENSION}", escape_key(key)))
    }
}

/// Escape every byte outside `[A-Za-z0-9_-]` as `%XX`
fn escape_key(key: &str) -> String {
    let mut escaped = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            escaped.push(byte as char);
        } else {
            escaped.push_str(&format!("%{byte:02X}"));
        }
    }
    escaped
}

fn backend_error(key: &str, e: std::io::Error) -> StorageError {
    StorageError::Backend {
        key: key.to_string(),
        message: e.to_string(),
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(backend_error(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value).map_err(|e| backend_error(key, e))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(backend_error(key, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_keeps_plain_keys_readable() {
        assert_eq!(escape_key("puberty-diary"), "puberty-diary");
        assert_eq!(escape_key("a.b/c"), "a%2Eb%2Fc");
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::open(dir.path()).expect("open");
        store.set("app-language", "ar").expect("set");

        let reopened = FileStore::open(dir.path()).expect("reopen");
        assert_eq!(
            reopened.get("app-language").expect("get").as_deref(),
            Some("ar")
        );
    }

    #[test]
    fn absent_and_removed_keys_read_as_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::open(dir.path().join("nested")).expect("open");

        assert_eq!(store.get("missing").expect("get"), None);
        store.set("k", "v").expect("set");
        store.remove("k").expect("remove");
        store.remove("k").expect("second remove is a no-op");
        assert_eq!(store.get("k").expect("get"), None);
    }
}
