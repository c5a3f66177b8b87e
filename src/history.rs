//! Append-only invocation history, supplied by the caller as a sink
//! capability rather than owned by the engines.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

use crate::types::LearningContext;

/// One completed top-level invocation.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub context: String,
    pub result: serde_json::Value,
}

impl HistoryEntry {
    pub fn new(context: LearningContext, result: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            context: context.as_str().to_string(),
            result,
        }
    }
}

/// Sink for completed results. Entries are never edited or removed.
pub trait HistorySink: Send + Sync {
    fn append(&self, entry: HistoryEntry);
}

/// Process-lifetime in-memory sink. The lock serializes concurrent appends;
/// nothing else is shared across invocations.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of all entries in append order.
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl HistorySink for MemoryHistory {
    fn append(&self, entry: HistoryEntry) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}

/// Sink that discards every entry, for callers that keep no history.
#[derive(Debug, Default)]
pub struct NullHistory;

impl HistorySink for NullHistory {
    fn append(&self, _entry: HistoryEntry) {}
}
