//! Error types for directory operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::StoreError;

/// Failure category of a directory operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// The referenced id does not exist.
    NotFound,
    /// The submitted draft failed validation.
    Invalid,
    /// The backing store failed.
    Storage,
}

impl Status {
    /// HTTP-style status code for this category.
    pub fn code(self) -> u16 {
        match self {
            Status::NotFound => 404,
            Status::Invalid => 400,
            Status::Storage => 500,
        }
    }
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("no contact with id {id}")]
    NotFound { id: String },
    #[error("{0}")]
    Invalid(String),
    #[error("storage failure: {0}")]
    Store(#[from] StoreError),
}

impl DirectoryError {
    pub fn not_found(id: impl Into<String>) -> Self {
        DirectoryError::NotFound { id: id.into() }
    }

    pub fn status(&self) -> Status {
        match self {
            DirectoryError::NotFound { .. } => Status::NotFound,
            DirectoryError::Invalid(_) => Status::Invalid,
            DirectoryError::Store(_) => Status::Storage,
        }
    }

    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        self.status().code()
    }

    /// The `{status, message}` shape reported across the operation boundary.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            status: self.status_code(),
            message: self.to_string(),
        }
    }
}

/// Serializable failure payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
}
