//! Events driving the search session state machine.
//!
//! Every way the session can change (user input, selection, and the external
//! collaborators reporting catalog or storage activity) is a variant of one
//! tagged union, matched exhaustively by the handler. There are no other
//! mutation paths.

use crate::domain::Station;

/// A discrete occurrence the session reacts to.
///
/// The first four variants originate from the user; the rest are completion
/// signals from the external catalog-fetch and persistence collaborators. The
/// core never awaits those collaborators; it only consumes their events, in
/// arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user edited the search input; stores the term and recomputes every
    /// derived view.
    SetSearchTerm(String),

    /// The user picked a station from the list. Sets the selection and clears
    /// the term, suggestion, and next-character set, since selection and
    /// active typing are mutually exclusive in the UI surface.
    SelectStation(Station),

    /// The user committed a selection (e.g. submitted the form). Records the
    /// station in the recent-search store and recomputes against the updated
    /// recents. Does not clear the selection; that is a separate transition
    /// issued by the caller.
    SubmitStation(Station),

    /// Clears the current selection.
    ClearSelectedStation,

    /// The catalog source delivered a station list. Last write wins; a stale
    /// snapshot is simply overwritten by the next one.
    CatalogLoaded(Vec<Station>),

    /// The persistence collaborator signalled an external change to the
    /// recent-search list (e.g. another browsing context). The incoming
    /// snapshot is authoritative and replaces local state, never merged.
    RecentListChanged(Vec<Station>),

    /// The catalog source started or finished loading.
    LoadingChanged(bool),

    /// The catalog source reported or cleared a failure.
    ErrorChanged {
        /// Human-readable failure description, if any.
        error: Option<String>,
        /// Whether the session is currently in an error state.
        is_error: bool,
    },

    /// A catalog refetch finished. On success the catalog is replaced and the
    /// error cleared; on failure the previous catalog is kept and the error
    /// recorded. Loading always ends.
    RefetchComplete {
        /// Stations from the refetch.
        stations: Vec<Station>,
        /// Failure description when the refetch failed.
        error: Option<String>,
    },
}

impl Event {
    /// Short variant name for log fields, avoiding payload-sized debug output.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Event::SetSearchTerm(_) => "set_search_term",
            Event::SelectStation(_) => "select_station",
            Event::SubmitStation(_) => "submit_station",
            Event::ClearSelectedStation => "clear_selected_station",
            Event::CatalogLoaded(_) => "catalog_loaded",
            Event::RecentListChanged(_) => "recent_list_changed",
            Event::LoadingChanged(_) => "loading_changed",
            Event::ErrorChanged { .. } => "error_changed",
            Event::RefetchComplete { .. } => "refetch_complete",
        }
    }
}
