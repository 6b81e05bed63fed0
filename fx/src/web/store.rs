//! `PreferenceStore` over `window.localStorage`.

use web_sys::{Storage, Window};

use crate::error::StoreError;
use crate::store::PreferenceStore;

/// Local storage, if the browser grants it. Private browsing and disabled
/// storage leave this empty and every call reports [`StoreError::Unavailable`].
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    #[must_use]
    pub fn new(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage denied: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .get_item(key)
            .map_err(|err| StoreError::Read(format!("{err:?}")))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StoreError::Write(format!("{err:?}")))
    }
}
