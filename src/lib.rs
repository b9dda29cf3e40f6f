//! Client-side contact directory.
//!
//! Layers, leaves first:
//!
//! - [`store`]: the injected [`BlobStore`] capability and the sorted
//!   [`RecordStore`] on top of it.
//! - [`validate`]: pure draft validation.
//! - [`directory`]: the async list/retrieve/create/update/delete service.
//! - [`navigation`]: the idle/loading/submitting phase controller.
//! - `http` (feature `http`): an axum transport over the directory.

pub mod config;
pub mod directory;
pub mod navigation;
pub mod record;
pub mod store;
pub mod validate;

#[cfg(feature = "http")]
pub mod http;

pub use config::{ConfigError, DirectoryConfig, DEFAULT_LATENCY_MS};
pub use directory::{ClockIds, Directory, DirectoryError, ErrorBody, IdSource, Status};
pub use navigation::{Navigator, Phase, Route, Settled, Submission};
pub use record::{Record, RecordDraft, SeedPolicy};
pub use store::{
    BlobStore, FileBlobStore, InMemoryBlobStore, RecordStore, StoreError, DEFAULT_STORAGE_KEY,
};
pub use validate::validate;
