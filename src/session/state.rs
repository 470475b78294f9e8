//! Search session state container.
//!
//! [`SessionState`] is the single source of truth for one search surface: the
//! typed term, the selection, the catalog and recents snapshots, the
//! loading/error flags, and the derived views computed from them. Derived
//! fields are never patched incrementally; [`SessionState::recompute_derived`]
//! rebuilds them in full, synchronously, inside whichever transition changed an
//! input, so no stale view is ever observable after a transition completes.

use crate::domain::Station;
use crate::search::{
    available_next_chars, display_stations, next_char_suggestion, searchable_stations,
    should_show_content, should_show_no_results, show_recent_layout, stations_to_render,
};

/// Snapshot of one search session.
///
/// Created on session mount with an empty term and no selection, mutated
/// exclusively by the event handler, and discarded on teardown. Nothing here
/// outlives the session except the recent-search list, which lives in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Current search input. Case-insensitive for matching; a
    /// whitespace-only value behaves as empty.
    pub search_term: String,

    /// The currently chosen station, surfaced separately by the UI and
    /// excluded from the rendered candidate list.
    pub selected_station: Option<Station>,

    /// Station catalog snapshot from the external fetch collaborator. Empty
    /// while loading or after a failed fetch.
    pub stations: Vec<Station>,

    /// Recent searches, most recently used first, bounded by the store.
    pub recent_stations: Vec<Station>,

    /// Effective station pool for filtering: the catalog, or the recents
    /// while the catalog is loading or errored.
    pub searchable_stations: Vec<Station>,

    /// Ordered result list derived from the searchable set and the term.
    pub filtered_stations: Vec<Station>,

    /// Ghost-text completion: the predicted next character, or empty.
    pub next_char_suggestion: String,

    /// Every plausible next character, sorted, primary suggestion first.
    pub available_next_chars: Vec<char>,

    /// Whether the catalog fetch is in flight.
    pub is_loading: bool,

    /// Whether the last catalog fetch failed.
    pub is_error: bool,

    /// Failure description accompanying `is_error`.
    pub error: Option<String>,
}

impl SessionState {
    /// Creates the initial state: empty term, no selection, empty catalog,
    /// the given recents, and loading in progress.
    #[must_use]
    pub fn new(recent_stations: Vec<Station>) -> Self {
        let mut state = Self {
            search_term: String::new(),
            selected_station: None,
            stations: Vec::new(),
            recent_stations,
            searchable_stations: Vec::new(),
            filtered_stations: Vec::new(),
            next_char_suggestion: String::new(),
            available_next_chars: Vec::new(),
            is_loading: true,
            is_error: false,
            error: None,
        };
        state.recompute_derived();
        state
    }

    /// Rebuilds every derived field from the current inputs.
    ///
    /// Pure recomputation: searchable set, filtered list, ghost-text
    /// suggestion, and the next-character set, in that dependency order.
    pub fn recompute_derived(&mut self) {
        let _span = tracing::debug_span!(
            "recompute_derived",
            term_len = self.search_term.len(),
            catalog = self.stations.len(),
            recents = self.recent_stations.len(),
            is_loading = self.is_loading,
            is_error = self.is_error,
        )
        .entered();

        self.searchable_stations = searchable_stations(
            &self.stations,
            &self.recent_stations,
            self.is_loading,
            self.is_error,
        );

        self.filtered_stations = display_stations(
            &self.searchable_stations,
            &self.recent_stations,
            &self.stations,
            &self.search_term,
            self.is_error,
        );

        self.next_char_suggestion =
            next_char_suggestion(&self.filtered_stations, &self.search_term);
        self.available_next_chars =
            available_next_chars(&self.filtered_stations, &self.search_term);

        tracing::debug!(
            filtered = self.filtered_stations.len(),
            suggestion = %self.next_char_suggestion,
            "derived views recomputed"
        );
    }

    /// Returns the candidate list to present, with the selected station
    /// excluded.
    #[must_use]
    pub fn stations_to_render(&self) -> Vec<Station> {
        stations_to_render(&self.filtered_stations, self.selected_station.as_ref())
    }

    /// Returns `true` when any recent searches exist.
    #[must_use]
    pub fn has_recent_searches(&self) -> bool {
        !self.recent_stations.is_empty()
    }

    /// Whether the two-section recents layout applies for an open surface.
    #[must_use]
    pub fn show_recent_layout(&self, is_open: bool) -> bool {
        show_recent_layout(&self.search_term, is_open, &self.recent_stations)
    }

    /// Whether a "no results" message applies.
    #[must_use]
    pub fn should_show_no_results(&self) -> bool {
        should_show_no_results(&self.stations_to_render(), &self.search_term)
    }

    /// Whether the suggestion surface has anything worth rendering.
    #[must_use]
    pub fn should_show_content(&self) -> bool {
        should_show_content(&self.stations_to_render(), &self.search_term, &self.stations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(name: &str, code: &str) -> Station {
        Station::new(name, code).unwrap()
    }

    #[test]
    fn initial_state_is_loading_with_empty_term() {
        let state = SessionState::new(vec![]);
        assert!(state.is_loading);
        assert!(!state.is_error);
        assert!(state.search_term.is_empty());
        assert!(state.selected_station.is_none());
        assert!(state.filtered_stations.is_empty());
        assert!(state.next_char_suggestion.is_empty());
    }

    #[test]
    fn initial_recents_are_searchable_while_loading() {
        let recents = vec![station("Leeds", "LDS")];
        let state = SessionState::new(recents.clone());
        assert_eq!(state.searchable_stations, recents);
        assert_eq!(state.filtered_stations, recents);
    }

    #[test]
    fn recompute_reflects_term_change() {
        let mut state = SessionState::new(vec![]);
        state.stations = vec![station("Leeds", "LDS"), station("London", "LON")];
        state.is_loading = false;
        state.search_term = "Le".to_string();
        state.recompute_derived();

        assert_eq!(state.filtered_stations.len(), 1);
        assert_eq!(state.filtered_stations[0].name, "Leeds");
        assert_eq!(state.next_char_suggestion, "e");
    }

    #[test]
    fn render_list_hides_selection() {
        let mut state = SessionState::new(vec![]);
        state.stations = vec![station("Leeds", "LDS"), station("London", "LON")];
        state.is_loading = false;
        state.recompute_derived();
        state.selected_station = Some(station("Leeds", "LDS"));

        let rendered = state.stations_to_render();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].code, "LON");
    }
}
