//! Ordering of concurrent state fetches.
//!
//! The poll timer and the refresh after a trade can both have a fetch in
//! flight. Each fetch is stamped with a number when it is *issued*; a
//! result is only applied if it is newer than the last one applied, so
//! a slow poll can never overwrite a fresher post-trade snapshot.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared, monotonic source of fetch sequence numbers. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct FetchSequencer {
    last_issued: Arc<AtomicU64>,
}

impl FetchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next sequence number; the first is `1`.
    pub fn issue(&self) -> u64 {
        self.last_issued.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn last_issued(&self) -> u64 {
        self.last_issued.load(Ordering::Relaxed)
    }
}

/// Holds the latest applied value together with its sequence number.
#[derive(Debug, Clone)]
pub struct SnapshotSlot<T> {
    applied_seq: u64,
    value: Option<T>,
}

impl<T> Default for SnapshotSlot<T> {
    fn default() -> Self {
        Self {
            applied_seq: 0,
            value: None,
        }
    }
}

impl<T> SnapshotSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held value if `seq` is newer than the applied one.
    ///
    /// Returns `true` when the value was replaced.
    pub fn offer(&mut self, seq: u64, value: T) -> bool {
        if seq <= self.applied_seq {
            return false;
        }
        self.applied_seq = seq;
        self.value = Some(value);
        true
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Sequence number of the held value, `0` when empty.
    pub fn applied_seq(&self) -> u64 {
        self.applied_seq
    }
}
