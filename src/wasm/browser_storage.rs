use web_sys::Storage;

use crate::stores::{KeyValueStore, StoreError};

/// `window.localStorage` as a [`KeyValueStore`].
pub struct BrowserStorage {
    storage: Storage,
}

impl BrowserStorage {
    pub fn local() -> Result<Self, StoreError> {
        let window = web_sys::window().ok_or(StoreError::WindowUnavailable)?;

        // Accessing the property itself throws when storage is blocked for the origin
        let storage = match window.local_storage() {
            Ok(Some(storage)) => storage,
            Ok(None) => return Err(StoreError::StorageUnavailable),
            Err(err) => return Err(StoreError::Js(err)),
        };

        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(StoreError::Js)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(StoreError::Js)
    }
}
