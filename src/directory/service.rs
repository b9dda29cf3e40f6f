//! The directory service: list, retrieve, create, update and delete.

use std::time::Duration;

use tracing::{debug, info};

use super::error::DirectoryError;
use super::ids::{ClockIds, IdSource};
use crate::config::DirectoryConfig;
use crate::record::{sort_by_name, Record, RecordDraft};
use crate::store::{BlobStore, RecordStore};
use crate::validate::validate;

/// Contact directory over an injected blob store.
///
/// Every operation first waits out a synthetic latency, then touches the
/// store. Nothing is read, written, or returned before the latency elapses.
///
/// Operations do not lock against each other: two mutations racing on the
/// same collection both read, both write, and the later write wins.
pub struct Directory<S> {
    store: RecordStore<S>,
    latency: Duration,
    ids: Box<dyn IdSource>,
}

impl<S: BlobStore> Directory<S> {
    /// Create a directory with the default configuration.
    pub fn new(blobs: S) -> Self {
        Self::with_config(blobs, &DirectoryConfig::default())
    }

    pub fn with_config(blobs: S, config: &DirectoryConfig) -> Self {
        Self {
            store: RecordStore::new(blobs, config.storage_key.clone(), config.seed),
            latency: config.latency(),
            ids: Box::new(ClockIds::new()),
        }
    }

    /// Override the synthetic latency. `Duration::ZERO` skips the wait.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Override the id source used by `create`.
    pub fn with_ids(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Get a reference to the underlying record store.
    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// All records, ascending by name.
    pub async fn list(&self) -> Result<Vec<Record>, DirectoryError> {
        self.round_trip().await;
        let mut records = self.store.load()?;
        sort_by_name(&mut records);
        debug!(count = records.len(), "listed contacts");
        Ok(records)
    }

    pub async fn retrieve(&self, id: &str) -> Result<Record, DirectoryError> {
        self.round_trip().await;
        self.store
            .load()?
            .into_iter()
            .find(|record| record.id == id)
            .ok_or_else(|| {
                debug!(%id, "contact not found");
                DirectoryError::not_found(id)
            })
    }

    /// Validate the draft and append it under a fresh id.
    ///
    /// A rejected draft leaves the stored collection untouched.
    pub async fn create(&self, draft: RecordDraft) -> Result<Record, DirectoryError> {
        self.round_trip().await;
        if let Some(message) = validate(&draft) {
            debug!(%message, "create rejected");
            return Err(DirectoryError::Invalid(message.to_string()));
        }

        let mut records = self.store.load()?;
        let record = Record::from_draft(self.ids.next_id(), draft);
        records.push(record.clone());
        self.store.save(records)?;

        info!(id = %record.id, "contact created");
        Ok(record)
    }

    /// Replace the fields of an existing record, keeping its id.
    ///
    /// Existence is checked before validation, so an unknown id reports
    /// `NotFound` even for an invalid draft.
    pub async fn update(&self, id: &str, draft: RecordDraft) -> Result<Record, DirectoryError> {
        self.round_trip().await;
        let mut records = self.store.load()?;
        let position = records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| DirectoryError::not_found(id))?;

        if let Some(message) = validate(&draft) {
            debug!(%id, %message, "update rejected");
            return Err(DirectoryError::Invalid(message.to_string()));
        }

        let updated = records[position].merged(draft);
        records[position] = updated.clone();
        self.store.save(records)?;

        info!(%id, "contact updated");
        Ok(updated)
    }

    /// Remove a record. Deleting an unknown id succeeds without writing.
    pub async fn delete(&self, id: &str) -> Result<(), DirectoryError> {
        self.round_trip().await;
        let mut records = self.store.load()?;
        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() == before {
            debug!(%id, "delete of absent contact");
            return Ok(());
        }

        self.store.save(records)?;
        info!(%id, "contact deleted");
        Ok(())
    }
}
