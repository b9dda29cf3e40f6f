//! InMemoryBlobStore - HashMap-backed blob store for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{BlobStore, StoreError};

/// In-memory blob store backed by a HashMap.
///
/// Clone-friendly via Arc: clones share the same storage.
#[derive(Clone, Default)]
pub struct InMemoryBlobStore {
    storage: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryBlobStore {
    /// Create a new empty blob store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a blob already in place.
    pub fn with_blob(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut storage = HashMap::new();
        storage.insert(key.into(), value.into());
        Self {
            storage: Arc::new(RwLock::new(storage)),
        }
    }
}

impl BlobStore for InMemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("get"))?;
        Ok(storage.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("set"))?;
        storage.insert(key.to_string(), value);
        Ok(())
    }
}
