//! Records: the contact entries held by the directory.
//!
//! A [`Record`] is a stored contact with an immutable id. A [`RecordDraft`]
//! is the untrusted candidate data submitted by a form, without an id.
//!
//! ## Example
//!
//! ```ignore
//! use contact_directory::{Record, RecordDraft};
//!
//! let draft = RecordDraft::new("Ana", "000");
//! let record = Record::from_draft("42", draft);
//! assert_eq!(record.id, "42");
//! ```

mod collate;
mod seed;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use collate::{compare_names, sort_by_name};
pub use seed::{initial_collection, seed_collection, SeedPolicy};

/// Form field carrying the contact name.
pub const NAME_FIELD: &str = "name";
/// Form field carrying the contact phone.
pub const PHONE_FIELD: &str = "phone";

/// A stored contact entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub phone: String,
}

impl Record {
    /// Build a record from a draft and an already generated id.
    pub fn from_draft(id: impl Into<String>, draft: RecordDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            phone: draft.phone,
        }
    }

    /// Copy of this record with the draft's fields merged on top.
    ///
    /// The id is carried over untouched.
    pub fn merged(&self, draft: RecordDraft) -> Self {
        Self {
            id: self.id.clone(),
            name: draft.name,
            phone: draft.phone,
        }
    }
}

/// Unvalidated candidate data for create/update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
}

impl RecordDraft {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Read a draft from a flat key/value form submission.
    ///
    /// Missing fields read as empty strings so they are rejected by
    /// validation instead of failing to decode. Unknown keys are ignored.
    pub fn from_form(form: &HashMap<String, String>) -> Self {
        let field = |key: &str| form.get(key).cloned().unwrap_or_default();
        Self {
            name: field(NAME_FIELD),
            phone: field(PHONE_FIELD),
        }
    }
}
