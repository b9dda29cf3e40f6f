use thiserror::Error;

/// Error type for blob store and record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persisted blob could not be encoded or decoded.
    #[error("store serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Filesystem failure in a file-backed store.
    #[error("store i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// An in-process lock was poisoned by a panicking writer.
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),
    /// The key cannot be mapped onto the backend.
    #[error("invalid store key: {0:?}")]
    InvalidKey(String),
}
