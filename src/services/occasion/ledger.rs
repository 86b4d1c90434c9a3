//! Completion ledger for a single person's blessing-call log.
//!
//! Records are only ever appended or removed whole; nothing is merged or
//! rewritten in place. Toggling the same key twice restores the original log.

use chrono::{DateTime, Local};

use crate::models::occasion::OccasionKey;
use crate::models::person::CompletionRecord;

/// True when `log` holds a record for exactly this occurrence.
pub fn is_completed(log: &[CompletionRecord], key: &OccasionKey) -> bool {
    log.iter().any(|record| record.matches(key))
}

/// Owned view over one person's completion log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionLedger {
    records: Vec<CompletionRecord>,
}

impl CompletionLedger {
    pub fn new(records: Vec<CompletionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CompletionRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<CompletionRecord> {
        self.records
    }

    pub fn is_completed(&self, key: &OccasionKey) -> bool {
        is_completed(&self.records, key)
    }

    /// Append a record unless one already exists. Returns whether it appended.
    pub fn mark_done(&mut self, key: &OccasionKey, completed_at: DateTime<Local>) -> bool {
        if self.is_completed(key) {
            return false;
        }

        self.records.push(CompletionRecord::new(key, completed_at));
        true
    }

    /// Remove the first matching record. Returns whether one was removed.
    pub fn mark_undone(&mut self, key: &OccasionKey) -> bool {
        match self.records.iter().position(|record| record.matches(key)) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Flip the completion state of `key`. Returns the new state.
    pub fn toggle(&mut self, key: &OccasionKey, completed_at: DateTime<Local>) -> bool {
        if self.mark_undone(key) {
            false
        } else {
            self.records.push(CompletionRecord::new(key, completed_at));
            true
        }
    }
}
