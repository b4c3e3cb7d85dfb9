//! Per-message-id occurrence counting.

use parking_lot::Mutex;
use std::collections::HashMap;

/// Occurrence counts for every message id that passed the deny-list.
///
/// Counts only grow and entries are never removed while the owning triage
/// is alive; a driver version can only emit a finite set of validation
/// rules, so the table stays small. Lookup and increment happen under one
/// exclusive lock, which also makes the counts exact when the driver calls
/// back from several threads at once.
#[derive(Debug, Default)]
pub struct MessageCounts {
    by_id: Mutex<HashMap<i32, u32>>,
}

impl MessageCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `message_id` and returns how many
    /// occurrences had been recorded before this one.
    pub fn bump(&self, message_id: i32) -> u32 {
        let mut by_id = self.by_id.lock();
        let slot = by_id.entry(message_id).or_insert(0);
        let prior = *slot;
        *slot = slot.saturating_add(1);
        prior
    }

    /// Occurrences recorded for `message_id` so far.
    pub fn count(&self, message_id: i32) -> u32 {
        self.by_id.lock().get(&message_id).copied().unwrap_or(0)
    }

    /// Number of distinct message ids seen so far.
    pub fn distinct_ids(&self) -> usize {
        self.by_id.lock().len()
    }
}
