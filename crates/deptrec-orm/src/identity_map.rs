//! Primary-key registry of saved records.

use std::collections::HashMap;

use crate::record::Record;

/// Snapshots of records keyed by primary key.
///
/// An entry is written when a record is saved and removed when it is
/// deleted. Nothing else touches it: updates, direct SQL, other processes,
/// and other repositories all leave entries stale. Treat it as a local
/// memo of what this repository saved, never as the state of the table.
#[derive(Debug, Clone)]
pub struct IdentityMap<R> {
    entries: HashMap<i64, R>,
}

impl<R> Default for IdentityMap<R> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<R: Record> IdentityMap<R> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a snapshot of `record` under `id`, replacing any previous one.
    pub(crate) fn register(&mut self, id: i64, record: &R) {
        self.entries.insert(id, record.clone());
    }

    /// Drops the entry for `id`, returning it if present.
    pub(crate) fn evict(&mut self, id: i64) -> Option<R> {
        self.entries.remove(&id)
    }

    /// Returns the snapshot registered under `id`.
    pub fn get(&self, id: i64) -> Option<&R> {
        self.entries.get(&id)
    }

    /// Returns `true` if `id` has an entry.
    pub fn contains(&self, id: i64) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of cached records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
