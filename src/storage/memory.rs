//! In-process recent-search storage.
//!
//! Fallback backend used when durable storage is unavailable (unwritable data
//! directory, read-only filesystem). The recent-search feature keeps its exact
//! bounded/dedup contract for the lifetime of the process; only persistence
//! across restarts is lost.

use std::collections::HashMap;

use crate::domain::{Result, Station};
use crate::storage::backend::RecentStore;
use crate::storage::models::{promote_recent, RecentRecord};

/// In-memory recent-search backend with the same contract as the durable one.
pub struct MemoryRecentStore {
    /// Storage key this store reads and writes under.
    key: String,

    /// Bound on the recent-search list.
    max: usize,

    /// Recent-search lists keyed by storage key.
    entries: HashMap<String, Vec<RecentRecord>>,
}

impl MemoryRecentStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new(key: String, max: usize) -> Self {
        Self {
            key,
            max,
            entries: HashMap::new(),
        }
    }

    fn records(&self) -> Vec<RecentRecord> {
        self.entries.get(&self.key).cloned().unwrap_or_default()
    }
}

impl RecentStore for MemoryRecentStore {
    fn recent_searches(&self) -> Result<Vec<Station>> {
        Ok(self
            .records()
            .iter()
            .map(RecentRecord::to_station)
            .collect())
    }

    fn add_recent_search(&mut self, station: &Station) -> Result<Vec<Station>> {
        if !station.is_valid() {
            tracing::debug!("ignoring invalid station");
            return self.recent_searches();
        }

        let mut records = self.records();
        promote_recent(&mut records, RecentRecord::from_station(station), self.max);
        self.entries.insert(self.key.clone(), records);

        self.recent_searches()
    }
}
