//! JSON file-based recent-search storage.
//!
//! Durable backend using a small human-readable JSON file. Writes are atomic
//! (write-to-temp + rename) so a crash never leaves the file half-written, and
//! loads are tolerant: a corrupt file reads as "no recent searches" rather
//! than an error, since losing a five-entry convenience list is cheaper than
//! failing the whole search surface.

use std::path::PathBuf;

use crate::domain::{Result, Station, StationSearchError};
use crate::storage::backend::RecentStore;
use crate::storage::models::{promote_recent, RecentRecord, StorageData};

/// JSON file storage backend for recent searches.
///
/// The entire dataset is kept in memory and flushed on modification. A dirty
/// flag avoids redundant writes, and [`Drop`] flushes anything still pending.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "recent_station_searches": [
///       { "name": "Leeds", "code": "LDS", "last_used": 1234567890 }
///     ]
///   }
/// }
/// ```
pub struct JsonRecentStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// Storage key this store reads and writes under.
    key: String,

    /// Bound on the recent-search list.
    max: usize,

    /// In-memory data cache, loaded on creation.
    data: StorageData,

    /// Tracks whether data has been modified since the last flush.
    dirty: bool,
}

impl JsonRecentStore {
    /// Creates or opens a JSON recent-search store.
    ///
    /// Loads existing data when the file exists, otherwise starts empty.
    /// Parent directories are created automatically. This constructor doubles
    /// as the capability probe: if it fails, the caller falls back to the
    /// in-memory backend.
    ///
    /// # Errors
    ///
    /// Returns an error if parent directory creation fails or the file exists
    /// but cannot be read. A readable file with invalid JSON is *not* an
    /// error; it loads as empty data with a warning.
    pub fn new(file_path: PathBuf, key: String, max: usize) -> Result<Self> {
        tracing::debug!(path = ?file_path, key = %key, "initializing JSON recent-search storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            StorageData::default()
        };

        tracing::debug!(
            keys = data.entries.len(),
            "recent-search storage initialized"
        );

        Ok(Self {
            file_path,
            key,
            max,
            data,
            dirty: false,
        })
    }

    /// Loads storage data, treating malformed content as empty.
    fn load_from_file(path: &PathBuf) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;

        match serde_json::from_str::<StorageData>(&contents) {
            Ok(data) => Ok(data),
            Err(e) => {
                tracing::warn!(
                    path = ?path,
                    error = %e,
                    "recent-search file is corrupt, starting empty"
                );
                Ok(StorageData::default())
            }
        }
    }

    /// Flushes storage data to disk using an atomic write.
    ///
    /// Writes to a temporary file first, then renames it over the target path,
    /// so the file is never observable in a corrupt state.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write, or the rename
    /// fails. The dirty flag stays set on failure so a later flush retries.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| StationSearchError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "recent searches saved");
        Ok(())
    }

    /// Returns the valid records under this store's key.
    fn records(&self) -> Vec<RecentRecord> {
        self.data
            .entries
            .get(&self.key)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| record.is_valid())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl RecentStore for JsonRecentStore {
    fn recent_searches(&self) -> Result<Vec<Station>> {
        let stations: Vec<Station> = self
            .records()
            .iter()
            .map(RecentRecord::to_station)
            .collect();

        tracing::debug!(count = stations.len(), "loaded recent searches");
        Ok(stations)
    }

    fn add_recent_search(&mut self, station: &Station) -> Result<Vec<Station>> {
        let _span = tracing::debug_span!("json_add_recent_search",
            station_code = %station.code
        )
        .entered();

        if !station.is_valid() {
            tracing::debug!("ignoring invalid station");
            return self.recent_searches();
        }

        let mut records = self.records();
        promote_recent(&mut records, RecentRecord::from_station(station), self.max);
        self.data.entries.insert(self.key.clone(), records);
        self.dirty = true;

        // Fire-and-forget: the in-memory list is authoritative for this call
        if let Err(e) = self.save_to_file() {
            tracing::warn!(error = %e, "failed to persist recent searches");
        }

        self.recent_searches()
    }
}

impl Drop for JsonRecentStore {
    /// Flushes pending data on drop in case the last write failed.
    fn drop(&mut self) {
        if self.dirty {
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save recent searches on drop");
            }
        }
    }
}
