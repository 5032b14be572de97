use web_sys::{window, Storage};

use crate::error::{SetupError, StorageError};

/// Minimal string key-value port, so consent handling can run against
/// localStorage in the browser and an in-memory map in tests.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Clone)]
pub struct BrowserStorage {
    inner: Storage,
}

impl BrowserStorage {
    pub fn acquire() -> Result<Self, SetupError> {
        let window = window().ok_or(SetupError::MissingWindow)?;
        let inner = window
            .local_storage()
            .ok()
            .flatten()
            .ok_or(SetupError::StorageUnavailable)?;
        Ok(Self { inner })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}
