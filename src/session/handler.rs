//! Event handling and state transition logic for the search session.
//!
//! [`SearchSession`] pairs the state container with the injected recent-search
//! store and processes events one at a time, in arrival order. Each transition
//! mutates the state and recomputes the derived views before returning, so a
//! caller observing the state after `handle_event` never sees a stale view.
//!
//! The only side effect in the whole machine is the store write performed by
//! [`Event::SubmitStation`]; everything else is a pure reducer over the state.

use crate::domain::{Result, Station};
use crate::search::display_stations;
use crate::session::events::Event;
use crate::session::state::SessionState;
use crate::storage::RecentStore;

/// Drops catalog or snapshot entries with missing fields.
///
/// Malformed stations are discarded silently wherever external data enters the
/// session; they never surface as errors.
fn valid_stations(stations: Vec<Station>) -> Vec<Station> {
    let total = stations.len();
    let valid: Vec<Station> = stations.into_iter().filter(Station::is_valid).collect();
    if valid.len() < total {
        tracing::debug!(dropped = total - valid.len(), "discarded malformed stations");
    }
    valid
}

/// An interactive station-search session.
///
/// Owns the [`SessionState`] and the recent-search store injected at
/// construction. The session lives as long as the UI surface is mounted; on
/// teardown only the recent-search list persists (through the store).
///
/// # Examples
///
/// ```
/// use stationsearch::domain::Station;
/// use stationsearch::session::{Event, SearchSession};
/// use stationsearch::storage::{MemoryRecentStore, DEFAULT_STORAGE_KEY, MAX_RECENT_SEARCHES};
///
/// let store = MemoryRecentStore::new(DEFAULT_STORAGE_KEY.to_string(), MAX_RECENT_SEARCHES);
/// let mut session = SearchSession::new(Box::new(store));
///
/// let catalog = vec![
///     Station::new("Leeds", "LDS").unwrap(),
///     Station::new("London", "LON").unwrap(),
/// ];
/// session.handle_event(Event::CatalogLoaded(catalog)).unwrap();
/// session.handle_event(Event::LoadingChanged(false)).unwrap();
/// session.handle_event(Event::SetSearchTerm("Le".into())).unwrap();
///
/// assert_eq!(session.state().next_char_suggestion, "e");
/// ```
pub struct SearchSession {
    state: SessionState,
    store: Box<dyn RecentStore>,
}

impl SearchSession {
    /// Creates a session with the given store.
    ///
    /// Recents are loaded once here; afterwards the store is only written to
    /// (on submit) or superseded by [`Event::RecentListChanged`] snapshots.
    /// A store that fails to read starts the session with no recents rather
    /// than failing the mount.
    #[must_use]
    pub fn new(store: Box<dyn RecentStore>) -> Self {
        let recents = match store.recent_searches() {
            Ok(recents) => valid_stations(recents),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load recent searches, starting empty");
                Vec::new()
            }
        };

        Self {
            state: SessionState::new(recents),
            store,
        }
    }

    /// Read-only view of the current session state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Processes one event and returns whether the presentation changed.
    ///
    /// Transitions are applied synchronously; when this returns, every derived
    /// field already reflects the new inputs. The returned flag is a render
    /// hint: `false` means the event provably changed nothing visible.
    ///
    /// # Errors
    ///
    /// Currently infallible in practice: storage failures during
    /// [`Event::SubmitStation`] are logged and absorbed (the write is
    /// fire-and-forget). The `Result` keeps the signature stable for backends
    /// with stricter semantics.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        let _span = tracing::debug_span!("handle_event", event_type = event.name()).entered();

        match event {
            Event::SetSearchTerm(term) => {
                tracing::trace!(term = %term, "search term updated");
                self.state.search_term = term;
                self.state.recompute_derived();
                Ok(true)
            }

            Event::SelectStation(station) => {
                tracing::debug!(code = %station.code, "station selected");
                self.state.selected_station = Some(station);
                // Selection and active typing are mutually exclusive surfaces
                self.state.search_term.clear();
                self.state.next_char_suggestion.clear();
                self.state.available_next_chars.clear();
                Ok(true)
            }

            Event::SubmitStation(station) => {
                tracing::debug!(code = %station.code, "station submitted");

                match self.store.add_recent_search(&station) {
                    Ok(updated) => self.state.recent_stations = valid_stations(updated),
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to record recent search");
                    }
                }

                // The term is conceptually spent once a station is submitted:
                // the list reverts to the recents-first layout.
                self.state.filtered_stations = display_stations(
                    &self.state.searchable_stations,
                    &self.state.recent_stations,
                    &self.state.stations,
                    "",
                    self.state.is_error,
                );
                self.state.next_char_suggestion.clear();
                self.state.available_next_chars.clear();
                Ok(true)
            }

            Event::ClearSelectedStation => {
                let had_selection = self.state.selected_station.take().is_some();
                Ok(had_selection)
            }

            Event::CatalogLoaded(stations) => {
                let stations = valid_stations(stations);
                if self.state.stations == stations {
                    tracing::debug!("catalog unchanged, skipping recompute");
                    return Ok(false);
                }

                let old_filtered = self.state.filtered_stations.clone();
                self.state.stations = stations;
                self.state.recompute_derived();
                Ok(self.state.filtered_stations != old_filtered)
            }

            Event::RecentListChanged(recents) => {
                // External snapshots are authoritative, never merged with
                // local state; the persistence layer is the source of truth.
                tracing::debug!(count = recents.len(), "recent list replaced externally");
                self.state.recent_stations = valid_stations(recents);
                self.state.recompute_derived();
                Ok(true)
            }

            Event::LoadingChanged(is_loading) => {
                self.state.is_loading = is_loading;
                self.state.recompute_derived();
                Ok(true)
            }

            Event::ErrorChanged { error, is_error } => {
                tracing::debug!(is_error = is_error, error = ?error, "error state changed");
                self.state.error = error;
                self.state.is_error = is_error;
                self.state.recompute_derived();
                Ok(true)
            }

            Event::RefetchComplete { stations, error } => {
                let is_error = error.is_some();
                tracing::debug!(
                    count = stations.len(),
                    is_error = is_error,
                    "catalog refetch complete"
                );

                // Last write wins on success; a failed refetch keeps the
                // previous catalog so the surface does not go blank.
                if !is_error {
                    self.state.stations = valid_stations(stations);
                }
                self.state.is_loading = false;
                self.state.error = error;
                self.state.is_error = is_error;
                self.state.recompute_derived();
                Ok(true)
            }
        }
    }
}
