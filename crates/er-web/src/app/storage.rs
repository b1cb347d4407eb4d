use serde::Deserialize;

use crate::app::api::TokenStore;

/// Storage backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// localStorage - persists across browser sessions
    Local,
    /// sessionStorage - cleared when tab/window closes
    Session,
    /// No-op mode - for when storage is disabled or unavailable
    None,
}

/// Browser storage access over localStorage, sessionStorage, or a no-op backend.
///
/// Without the `web` feature every backend behaves like `None`.
#[derive(Debug, Clone, Copy)]
pub struct BrowserStorage {
    storage_type: StorageType,
}

impl BrowserStorage {
    pub fn new(storage_type: StorageType) -> Self {
        Self { storage_type }
    }

    #[cfg(feature = "web")]
    fn backend(&self) -> Result<web_sys::Storage, String> {
        let window = web_sys::window().ok_or_else(|| "Window not available".to_string())?;
        let storage = match self.storage_type {
            StorageType::Local => window.local_storage(),
            StorageType::Session => window.session_storage(),
            StorageType::None => return Err("Storage disabled".to_string()),
        }
        .map_err(|e| format!("{:?}", e))?;
        storage.ok_or_else(|| "Storage not available".to_string())
    }

    /// Get a value from storage by key
    pub fn get(&self, key: &str) -> Option<String> {
        match self.storage_type {
            StorageType::None => None,
            #[cfg(feature = "web")]
            StorageType::Local | StorageType::Session => match self.backend().ok()?.get_item(key) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(key, error = ?e, "failed to read browser storage");
                    None
                }
            },
            #[cfg(not(feature = "web"))]
            StorageType::Local | StorageType::Session => {
                let _ = key;
                None
            }
        }
    }

    /// Set a value in storage
    pub fn set(&self, key: &str, value: &str) -> Result<(), String> {
        match self.storage_type {
            StorageType::None => Ok(()),
            #[cfg(feature = "web")]
            StorageType::Local | StorageType::Session => self.backend()?.set_item(key, value).map_err(|e| {
                let err_msg = format!("Failed to set item in storage '{}': {:?}", key, e);
                tracing::warn!("{}", err_msg);
                err_msg
            }),
            #[cfg(not(feature = "web"))]
            StorageType::Local | StorageType::Session => {
                let _ = (key, value);
                Ok(())
            }
        }
    }

    /// Remove a value from storage
    pub fn remove(&self, key: &str) -> Result<(), String> {
        match self.storage_type {
            StorageType::None => Ok(()),
            #[cfg(feature = "web")]
            StorageType::Local | StorageType::Session => self
                .backend()?
                .remove_item(key)
                .map_err(|e| format!("Failed to remove item from storage '{}': {:?}", key, e)),
            #[cfg(not(feature = "web"))]
            StorageType::Local | StorageType::Session => {
                let _ = key;
                Ok(())
            }
        }
    }

    /// Get and deserialize a JSON value from storage
    pub fn get_json<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        match serde_json::from_str(&value) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring unparseable JSON in browser storage");
                None
            }
        }
    }
}

impl TokenStore for BrowserStorage {
    fn token(&self, key: &str) -> Option<String> {
        self.get(key).filter(|t| !t.is_empty())
    }

    fn store_token(&self, key: &str, token: &str) {
        if let Err(e) = self.set(key, token) {
            tracing::warn!(error = %e, "could not persist access token");
        }
    }

    fn clear_token(&self, key: &str) {
        let _ = self.remove(key);
    }
}
