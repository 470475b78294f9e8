//! Filesystem path resolution for persisted data.
//!
//! Resolves where the recent-search file lives by default, following the XDG
//! base-directory convention with a home-directory fallback. Embedders that
//! need a different location set `storage_path` in the configuration instead.

use std::path::PathBuf;

/// Returns the data directory for station-search storage.
///
/// Resolution order: `$XDG_DATA_HOME/stationsearch`, then
/// `$HOME/.local/share/stationsearch`, then `./stationsearch` as a last
/// resort when neither variable is set.
#[must_use]
pub fn data_dir() -> PathBuf {
    std::env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("share"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stationsearch")
}

/// Returns the default path of the recent-search JSON file.
#[must_use]
pub fn default_storage_file() -> PathBuf {
    data_dir().join("recent_searches.json")
}
