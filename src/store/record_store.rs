//! RecordStore - the sorted contact collection persisted as one JSON blob.

use tracing::debug;

use super::{BlobStore, StoreError};
use crate::record::{initial_collection, sort_by_name, Record, SeedPolicy};

/// Key the collection is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "contacts";

/// Whole-collection access to the contacts blob.
///
/// There is no partial-update API. Concurrent read-modify-write cycles are
/// not serialized: the last `save` wins.
pub struct RecordStore<S> {
    blobs: S,
    key: String,
    seed: SeedPolicy,
}

impl<S: BlobStore> RecordStore<S> {
    pub fn new(blobs: S, key: impl Into<String>, seed: SeedPolicy) -> Self {
        Self {
            blobs,
            key: key.into(),
            seed,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get a reference to the underlying blob store.
    pub fn blobs(&self) -> &S {
        &self.blobs
    }

    /// Read the full collection.
    ///
    /// An absent blob resolves through the seed policy; the seed is not
    /// written back until the first successful mutation.
    pub fn load(&self) -> Result<Vec<Record>, StoreError> {
        let persisted = match self.blobs.get(&self.key)? {
            Some(blob) => Some(serde_json::from_str::<Vec<Record>>(&blob)?),
            None => None,
        };
        if persisted.is_none() {
            debug!(key = %self.key, policy = ?self.seed, "no persisted collection");
        }
        Ok(initial_collection(persisted, self.seed))
    }

    /// Sort and write the full collection, replacing prior content.
    pub fn save(&self, mut records: Vec<Record>) -> Result<Vec<Record>, StoreError> {
        sort_by_name(&mut records);
        let blob = serde_json::to_string(&records)?;
        self.blobs.set(&self.key, blob)?;
        debug!(key = %self.key, count = records.len(), "collection saved");
        Ok(records)
    }
}
