//! Durable per-origin key-value storage for user preferences.

use crate::error::StoreError;

/// Backing store for preferences that survive reloads (`localStorage`).
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
