//! Storage record models for the recent-search persistence layer.
//!
//! These types are the raw storage representation, kept separate from the
//! domain [`Station`] so the on-disk format can carry bookkeeping fields
//! (timestamps, format version) without leaking them into search logic.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::Station;

/// Storage key under which recent searches are persisted by default.
pub const DEFAULT_STORAGE_KEY: &str = "recent_station_searches";

/// Default bound on the recent-search list.
pub const MAX_RECENT_SEARCHES: usize = 5;

/// A persisted recent search.
///
/// Mirrors the domain station plus the unix timestamp of the selection that
/// put it at the head of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentRecord {
    /// Station display name.
    pub name: String,

    /// Station code, the deduplication key.
    pub code: String,

    /// Unix timestamp of the most recent selection.
    pub last_used: i64,
}

impl RecentRecord {
    /// Creates a record for a station selected now.
    #[must_use]
    pub fn from_station(station: &Station) -> Self {
        Self {
            name: station.name.clone(),
            code: station.code.clone(),
            last_used: chrono::Utc::now().timestamp(),
        }
    }

    /// Converts back to the domain station.
    #[must_use]
    pub fn to_station(&self) -> Station {
        Station {
            name: self.name.clone(),
            code: self.code.clone(),
        }
    }

    /// Returns `true` when the record still describes a usable station.
    ///
    /// Corrupt or hand-edited storage entries with blank fields are dropped
    /// on read rather than surfaced.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.code.trim().is_empty()
    }
}

/// Top-level storage container.
///
/// A small keyed map rather than a bare list: the storage key is part of the
/// persistence contract, and keeping the file keyed lets several embedding
/// surfaces share one file without clashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageData {
    /// Version of the storage format for future migrations.
    pub version: u32,

    /// Recent-search lists, most-recently-used first, keyed by storage key.
    #[serde(default)]
    pub entries: HashMap<String, Vec<RecentRecord>>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            entries: HashMap::new(),
        }
    }
}

/// Promotes a record to the head of a bounded most-recently-used list.
///
/// Any existing entry with the same code (case-insensitive) is removed first,
/// the record is prepended, and the list is truncated to `max`. Re-adding the
/// head entry is therefore idempotent: one occurrence, position 0.
pub fn promote_recent(records: &mut Vec<RecentRecord>, record: RecentRecord, max: usize) {
    records.retain(|existing| !existing.code.eq_ignore_ascii_case(&record.code));
    records.insert(0, record);
    records.truncate(max);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, code: &str) -> RecentRecord {
        RecentRecord {
            name: name.to_string(),
            code: code.to_string(),
            last_used: 0,
        }
    }

    #[test]
    fn promote_prepends_new_record() {
        let mut records = vec![record("London", "LON")];
        promote_recent(&mut records, record("Leeds", "LDS"), MAX_RECENT_SEARCHES);
        assert_eq!(records[0].code, "LDS");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn promote_moves_existing_entry_to_front() {
        let mut records = vec![record("London", "LON"), record("Leeds", "LDS")];
        promote_recent(&mut records, record("Leeds", "lds"), MAX_RECENT_SEARCHES);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code, "lds");
        assert_eq!(records[1].code, "LON");
    }

    #[test]
    fn promote_is_idempotent_at_the_head() {
        let mut records = vec![];
        promote_recent(&mut records, record("London", "LON"), MAX_RECENT_SEARCHES);
        promote_recent(&mut records, record("London", "LON"), MAX_RECENT_SEARCHES);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, "LON");
    }

    #[test]
    fn promote_enforces_the_bound() {
        let mut records = vec![];
        for i in 0..7 {
            promote_recent(
                &mut records,
                record(&format!("Station {i}"), &format!("ST{i}")),
                MAX_RECENT_SEARCHES,
            );
        }
        assert_eq!(records.len(), MAX_RECENT_SEARCHES);
        // The five most recently added survive, newest first
        let codes: Vec<&str> = records.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, ["ST6", "ST5", "ST4", "ST3", "ST2"]);
    }

    #[test]
    fn blank_records_are_invalid() {
        assert!(!record("", "LON").is_valid());
        assert!(!record("London", " ").is_valid());
        assert!(record("London", "LON").is_valid());
    }
}
