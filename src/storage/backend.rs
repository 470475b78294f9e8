//! Recent-search storage abstraction.
//!
//! This module defines the [`RecentStore`] trait that abstracts over the
//! persistence backends for the bounded recent-search list. The session takes
//! a store instance at construction, so swapping the durable backend for the
//! in-process fallback (or a test double) never touches search logic.

use crate::domain::{Result, Station};

/// Abstraction over recent-search persistence backends.
///
/// Implementations maintain a most-recently-used list of stations with a fixed
/// bound and code-based deduplication. The contract, shared by every backend:
///
/// - A re-added station moves to position 0 without duplication.
/// - When the bound is exceeded, the oldest (tail) entries are dropped.
/// - An invalid station (blank name or code) makes
///   [`add_recent_search`](RecentStore::add_recent_search) a no-op that
///   returns the current list.
/// - Malformed persisted data reads as an empty list, never an error.
/// - Writes are fire-and-forget: a failed flush is logged, the in-memory list
///   still updates and is returned.
///
/// # Implementations
///
/// - [`JsonRecentStore`](crate::storage::JsonRecentStore): JSON file with
///   atomic writes (default)
/// - [`MemoryRecentStore`](crate::storage::MemoryRecentStore): in-process
///   fallback when durable storage is unavailable
pub trait RecentStore: Send {
    /// Returns the stored recent searches, most recently used first.
    ///
    /// # Errors
    ///
    /// Returns an error only when the backend cannot be read at all; a
    /// readable but corrupt entry yields `Ok(vec![])`.
    fn recent_searches(&self) -> Result<Vec<Station>>;

    /// Records a station selection and returns the updated list.
    ///
    /// Removes any existing entry with the same code, prepends the station,
    /// and truncates to the configured bound. Invalid stations leave the list
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns an error only when the in-memory update itself cannot be
    /// applied; persistence failures are logged and swallowed.
    fn add_recent_search(&mut self, station: &Station) -> Result<Vec<Station>>;
}
