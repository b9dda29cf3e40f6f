//! Directory: the five contact operations over a record store.
//!
//! `Directory<S>` composes a [`RecordStore`](crate::RecordStore) with the
//! draft validator. Each operation is async, waits out a configurable
//! synthetic latency, and returns `Result<_, DirectoryError>`; failures map
//! to status codes via [`DirectoryError::status_code`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::time::Duration;
//! use contact_directory::{Directory, InMemoryBlobStore, RecordDraft};
//!
//! let directory = Directory::new(InMemoryBlobStore::new()).with_latency(Duration::ZERO);
//!
//! let ana = directory.create(RecordDraft::new("Ana", "000")).await?;
//! let same = directory.retrieve(&ana.id).await?;
//! directory.delete(&ana.id).await?;
//! ```

mod error;
mod ids;
mod service;

pub use error::{DirectoryError, ErrorBody, Status};
pub use ids::{ClockIds, IdSource};
pub use service::Directory;
