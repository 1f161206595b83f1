//! WebLocalStorage - Browser `window.localStorage` Backend

use super::{KeyValueStore, StorageError};

/// Store backed by the page's `localStorage`
///
/// The storage object is looked up on every call; a missing window (worker,
/// server rendering) or a disabled store surfaces as
/// [`StorageError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WebLocalStorage;

impl WebLocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable {
            reason: "no global window".to_string(),
        })?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable {
                reason: format!("{e:?}"),
            })?
            .ok_or_else(|| StorageError::Unavailable {
                reason: "localStorage disabled".to_string(),
            })
    }
}

impl KeyValueStore for WebLocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend {
                key: key.to_string(),
                message: format!("{e:?}"),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend {
                key: key.to_string(),
                message: format!("{e:?}"),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Backend {
                key: key.to_string(),
                message: format!("{e:?}"),
            })
    }
}
