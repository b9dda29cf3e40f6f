//! Stores - Persisted blob storage and the sorted record collection on top.
//!
//! A [`BlobStore`] is the injected key/value capability: it gets and sets
//! one text blob per key and knows nothing about records. [`RecordStore`]
//! owns the contact collection inside a single blob and is the atomicity
//! boundary of the directory: callers read the full collection, compute a
//! new one, and replace it whole.
//!
//! ## Example
//!
//! ```ignore
//! use contact_directory::{InMemoryBlobStore, RecordStore, SeedPolicy};
//!
//! let store = RecordStore::new(InMemoryBlobStore::new(), "contacts", SeedPolicy::Default);
//! let mut contacts = store.load()?;
//! contacts.retain(|c| c.id != "3");
//! store.save(contacts)?;
//! ```

mod error;
mod file;
mod in_memory;
mod record_store;

pub use error::StoreError;
pub use file::FileBlobStore;
pub use in_memory::InMemoryBlobStore;
pub use record_store::{RecordStore, DEFAULT_STORAGE_KEY};

/// Abstract key/value storage holding whole blobs.
///
/// `set` replaces any prior content for the key; there is no partial write.
pub trait BlobStore: Send + Sync {
    /// Read the blob stored under `key`. Returns `None` if nothing was stored.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the blob stored under `key`.
    fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
}

impl<S: BlobStore + ?Sized> BlobStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
