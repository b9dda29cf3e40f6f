//! Id generation for new records.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of fresh record ids.
///
/// Ids are opaque strings; nothing may rely on their numeric ordering.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Time-derived ids: nanoseconds since the epoch, bumped past the last
/// issued value so two calls within one clock tick never collide.
#[derive(Debug, Default)]
pub struct ClockIds {
    last: AtomicU64,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for ClockIds {
    fn next_id(&self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        let prev = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now.max(prev + 1).to_string()
    }
}
