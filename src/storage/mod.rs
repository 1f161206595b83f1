//! Storage Adapter
//!
//! Key-value persistence that may be entirely unavailable. Backends report
//! failures as [`StorageError`]; [`SafeStorage`] sits on top and collapses
//! every failure to "no value" / "not written" after logging a warning, so a
//! broken store degrades to starting fresh instead of crashing a view.
//!
//! ```text
//! Reducer ──► SafeStorage ──► dyn KeyValueStore
//!                 │               ├── MemoryStore
//!          warn! on error         ├── FileStore
//!                                 ├── UnavailableStore
//!                                 └── WebLocalStorage (feature "web")
//! ```

mod file;
mod memory;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

pub use file::*;
pub use memory::*;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::*;

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use snafu::Snafu;
use tracing::warn;

/// Failure kinds a backend can report
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum StorageError {
    /// No store exists in this context (disabled, private mode, headless)
    #[snafu(display("Storage unavailable: {reason}"))]
    Unavailable { reason: String },

    /// Write rejected because the store is full
    #[snafu(display("Quota exceeded writing '{key}': needs {needed} bytes, {available} left"))]
    QuotaExceeded {
        key: String,
        needed: usize,
        available: usize,
    },

    /// Any other backend failure
    #[snafu(display("Storage backend failed on '{key}': {message}"))]
    Backend { key: String, message: String },
}

/// Raw key-value store
///
/// Implementations take `&self` and handle their own interior mutability, so
/// one store can be shared by every feature through an `Arc`.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `Ok(None)` when absent
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`; deleting an absent key succeeds
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Backend for contexts with no store at all
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl UnavailableStore {
    fn error() -> StorageError {
        StorageError::Unavailable {
            reason: "no key-value store in this context".to_string(),
        }
    }
}

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(Self::error())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(Self::error())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(Self::error())
    }
}

/// Failure-contained handle over a [`KeyValueStore`]
///
/// Cheap to clone; all clones share the same backend.
#[derive(Clone)]
pub struct SafeStorage {
    backend: Arc<dyn KeyValueStore>,
}

impl SafeStorage {
    /// Wrap a backend
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Wrap an already shared backend
    pub fn from_arc(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// A handle where every operation fails (and is swallowed)
    pub fn unavailable() -> Self {
        Self::new(UnavailableStore)
    }

    /// In-memory handle, used for ephemeral sessions
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    // ==================== Fallible Layer ====================

    /// Read with the failure kind preserved
    pub fn try_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.backend.get(key)
    }

    /// Write with the failure kind preserved
    pub fn try_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.backend.set(key, value)
    }

    /// Remove with the failure kind preserved
    pub fn try_remove(&self, key: &str) -> Result<(), StorageError> {
        self.backend.remove(key)
    }

    // ==================== Silent Layer ====================

    /// Read a raw value; `None` when absent or when the store fails
    pub fn get_item(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "storage get failed");
                None
            }
        }
    }

    /// Write a raw value; failures are logged and dropped
    pub fn set_item(&self, key: &str, value: &str) {
        if let Err(e) = self.backend.set(key, value) {
            warn!(key, error = %e, "storage set failed");
        }
    }

    /// Remove a key; failures are logged and dropped
    pub fn remove_item(&self, key: &str) {
        if let Err(e) = self.backend.remove(key) {
            warn!(key, error = %e, "storage remove failed");
        }
    }

    /// Read and decode a JSON blob
    ///
    /// Returns `None` when the key is absent, the store fails, or the stored
    /// text does not decode as `T`. Decode failures are logged.
    pub fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get_item(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "ignoring unparsable stored value");
                None
            }
        }
    }

    /// Encode and write a JSON blob; failures are logged and dropped
    pub fn save_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.set_item(key, &raw),
            Err(e) => warn!(key, error = %e, "failed to encode value for storage"),
        }
    }
}

impl Default for SafeStorage {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl fmt::Debug for SafeStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SafeStorage").finish_non_exhaustive()
    }
}
