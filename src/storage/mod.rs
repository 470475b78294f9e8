//! Persistence layer for the bounded recent-search list.
//!
//! The session never touches storage directly; it holds a [`RecentStore`]
//! injected at construction. [`open_recent_store`] performs the capability
//! probe: it tries the durable JSON backend and falls back to the in-process
//! one, so the feature degrades gracefully instead of failing.
//!
//! # Modules
//!
//! - `backend`: the [`RecentStore`] trait
//! - `json`: durable JSON file implementation with atomic writes
//! - `memory`: in-process fallback implementation
//! - `models`: storage records separate from domain models

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::RecentStore;
pub use json::JsonRecentStore;
pub use memory::MemoryRecentStore;
pub use models::{RecentRecord, StorageData, DEFAULT_STORAGE_KEY, MAX_RECENT_SEARCHES};

use crate::infrastructure::paths;
use crate::Config;

/// Opens the recent-search store described by the configuration.
///
/// Probes the durable backend first; when it cannot initialize (unwritable
/// directory, unreadable file) the in-memory fallback is returned instead and
/// a warning is logged. Callers always get a working store.
#[must_use]
pub fn open_recent_store(config: &Config) -> Box<dyn RecentStore> {
    let path = config
        .storage_path
        .clone()
        .unwrap_or_else(paths::default_storage_file);

    match JsonRecentStore::new(
        path,
        config.storage_key.clone(),
        config.max_recent_searches,
    ) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(
                error = %e,
                "durable recent-search storage unavailable, using in-memory fallback"
            );
            Box::new(MemoryRecentStore::new(
                config.storage_key.clone(),
                config.max_recent_searches,
            ))
        }
    }
}
