//! Persistent Key-Value Storage
//!
//! Durable string storage for the session credential.

/// Raw string storage, read once at startup and written on login/logout
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Values are stored as plain strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::warn!("localStorage rejected write of {:?}", key);
                }
            }
            None => tracing::warn!("localStorage unavailable, {:?} not persisted", key),
        }
    }

    fn remove(&self, key: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.remove_item(key).is_err() {
                    tracing::warn!("localStorage rejected removal of {:?}", key);
                }
            }
            None => tracing::warn!("localStorage unavailable, {:?} not removed", key),
        }
    }
}
