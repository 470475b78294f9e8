//! Stationsearch: the core of a station-search autocomplete surface.
//!
//! Stationsearch filters a station catalog by a typed prefix, ranks the
//! results, derives the single-character "ghost text" completion and the set
//! of plausible next characters, and merges a small persisted "recently used"
//! list into the candidate set. It is pure and deterministic with respect to
//! the UI: the embedding shell feeds it a catalog and a search string and
//! renders the derived views it hands back.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Embedding shell (UI, catalog fetch, input)         │  ← external
//! └─────────────────────────────────────────────────────┘
//!                        │ events / state snapshots
//! ┌─────────────────────────────────────────────────────┐
//! │  Session Layer (session/)                           │  ← state machine
//! │  - Event reducer                                    │
//! │  - Keyboard sub-protocol                            │
//! └─────────────────────────────────────────────────────┘
//!         │                              │
//! ┌───────────────────┐       ┌───────────────────┐
//! │ Search Layer      │       │ Storage Layer     │
//! │ (search/)         │       │ (storage/)        │
//! │ - Prefix filter   │       │ - RecentStore API │
//! │ - Next-char pred. │       │ - JSON backend    │
//! │ - Recents merge   │       │ - Memory fallback │
//! └───────────────────┘       └───────────────────┘
//!         │                              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data-dir paths (infrastructure/)                 │
//! │  - Station model, error types (domain/)             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`session`]: event-driven search session state machine
//! - [`search`]: pure filter, predictor, and merge functions
//! - [`storage`]: bounded recent-search persistence with fallback
//! - [`domain`]: the [`Station`] model and error types
//! - [`infrastructure`]: platform paths
//! - [`observability`]: optional tracing-subscriber setup
//!
//! # Example
//!
//! ```
//! use stationsearch::{Event, SearchSession, Station};
//! use stationsearch::storage::{MemoryRecentStore, DEFAULT_STORAGE_KEY, MAX_RECENT_SEARCHES};
//!
//! let store = MemoryRecentStore::new(DEFAULT_STORAGE_KEY.to_string(), MAX_RECENT_SEARCHES);
//! let mut session = SearchSession::new(Box::new(store));
//!
//! // The catalog source reports completion as events
//! session.handle_event(Event::CatalogLoaded(vec![
//!     Station::new("Leeds", "LDS").unwrap(),
//!     Station::new("Liverpool", "LIV").unwrap(),
//!     Station::new("London", "LON").unwrap(),
//! ]))?;
//! session.handle_event(Event::LoadingChanged(false))?;
//!
//! // The user types; every derived view is recomputed synchronously
//! session.handle_event(Event::SetSearchTerm("L".into()))?;
//! assert_eq!(session.state().next_char_suggestion, "e");
//! assert_eq!(session.state().available_next_chars, vec!['e', 'i', 'o']);
//! # Ok::<(), stationsearch::StationSearchError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Prefix-only matching
//!
//! A term occurring mid-string does not match. Precision over recall keeps
//! next-character prediction well-defined: every prefix match has a
//! determinate next-character position, so the ghost text is stable as the
//! user types regardless of catalog ordering.
//!
//! ## Derived views are always recomputed
//!
//! Filtered results, the ghost-text suggestion, and the next-character set
//! are pure functions of the searchable set and the term. They are rebuilt in
//! full inside every transition that changes an input (an O(n log n) pass per
//! keystroke, cheap at catalog sizes of a few thousand) and never patched
//! incrementally, so no stale view is observable after a transition.
//!
//! ## Storage degrades, never fails
//!
//! The recent-search list lives behind an injected [`storage::RecentStore`].
//! When the durable backend is unavailable the session runs on an in-process
//! list with the identical bounded/dedup contract; corrupt persisted data
//! reads as "no recent searches"; a failed write is logged and forgotten.

pub mod domain;
pub mod infrastructure;
pub mod search;
pub mod session;
pub mod storage;

pub mod observability;

pub use domain::{Result, Station, StationSearchError};
pub use session::{Event, Key, KeyOutcome, KeyboardNav, SearchSession, SessionState};

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::storage::{DEFAULT_STORAGE_KEY, MAX_RECENT_SEARCHES};

/// Crate configuration supplied by the embedding shell.
///
/// All fields have defaults matching the stock behavior; a TOML file can
/// override any subset of them:
///
/// ```toml
/// # stationsearch.toml
/// storage_key = "recent_station_searches"
/// max_recent_searches = 5
/// trace_level = "stationsearch=debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the recent-search JSON file.
    ///
    /// Defaults to `recent_searches.json` under the platform data directory
    /// (see [`infrastructure::paths`]).
    pub storage_path: Option<PathBuf>,

    /// Storage key the recent-search list is persisted under.
    pub storage_key: String,

    /// Bound on the recent-search list. Default: 5.
    pub max_recent_searches: usize,

    /// Tracing filter for [`observability::init_tracing`].
    ///
    /// Accepts `RUST_LOG` directive syntax. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            max_recent_searches: MAX_RECENT_SEARCHES,
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&contents)
            .map_err(|e| StationSearchError::Config(format!("failed to parse config: {e}")))
    }
}

/// Creates a search session from configuration.
///
/// Convenience wrapper tying the layers together: probes the recent-search
/// storage described by `config` (falling back to the in-memory backend when
/// the durable one is unavailable) and mounts a session on it.
#[must_use]
pub fn start_session(config: &Config) -> SearchSession {
    SearchSession::new(storage::open_recent_store(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_stock_key_and_bound() {
        let config = Config::default();
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.max_recent_searches, 5);
        assert!(config.storage_path.is_none());
    }

    #[test]
    fn config_file_overrides_a_subset_of_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stationsearch.toml");
        std::fs::write(&path, "max_recent_searches = 3\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.max_recent_searches, 3);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn malformed_config_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stationsearch.toml");
        std::fs::write(&path, "max_recent_searches = \"not a number\"").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, StationSearchError::Config(_)));
    }

    #[test]
    fn start_session_mounts_on_the_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            storage_path: Some(dir.path().join("recent.json")),
            ..Config::default()
        };

        let session = start_session(&config);
        assert!(session.state().recent_stations.is_empty());
        assert!(session.state().is_loading);
    }
}
