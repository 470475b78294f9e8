//! Merging the recent-search list into the displayed candidate set.
//!
//! Two concerns live here. First, choosing the *searchable set*: the effective
//! station pool is the full catalog, except while the catalog is loading or
//! failed to load, when the recent-search list stands in so the UI stays
//! usable offline. Second, building the *display list*: with no active term,
//! recents lead (most recent first) followed by the remaining stations, giving
//! the UI its "Recent Searches" / "All Stations" split. Once the user types,
//! recents stop being special; they are already folded into the searchable set
//! and compete like any other entry.

use crate::domain::Station;
use crate::search::filter::filter_stations;

/// Selects the effective station pool for filtering.
///
/// Returns the recent-search list while the catalog is loading or errored (and
/// recents exist), otherwise the catalog. Falls back transparently to the full
/// catalog once it arrives.
#[must_use]
pub fn searchable_stations(
    catalog: &[Station],
    recents: &[Station],
    is_loading: bool,
    is_error: bool,
) -> Vec<Station> {
    if (is_loading || is_error) && !recents.is_empty() {
        recents.to_vec()
    } else {
        catalog.to_vec()
    }
}

/// Builds the ordered station list the UI presents.
///
/// - Non-empty term: the prefix-filtered searchable set; recents get no
///   special priority while the user is typing.
/// - Empty term with an active error and an empty catalog: the recents
///   verbatim, as a last-resort offline list.
/// - Empty term otherwise: recents first in recency order (limited to members
///   of the current catalog when one is present), then the remaining
///   searchable stations that are not already listed, deduplicated by code.
///
/// # Examples
///
/// ```
/// use stationsearch::domain::Station;
/// use stationsearch::search::display_stations;
///
/// let catalog = vec![
///     Station::new("London", "LON").unwrap(),
///     Station::new("Birmingham", "BHM").unwrap(),
///     Station::new("Manchester", "MAN").unwrap(),
/// ];
/// let recents = vec![
///     Station::new("Manchester", "MAN").unwrap(),
///     Station::new("London", "LON").unwrap(),
/// ];
///
/// let merged = display_stations(&catalog, &recents, &catalog, "", false);
/// let names: Vec<&str> = merged.iter().map(|s| s.name.as_str()).collect();
/// assert_eq!(names, ["Manchester", "London", "Birmingham"]);
/// ```
#[must_use]
pub fn display_stations(
    searchable: &[Station],
    recents: &[Station],
    catalog: &[Station],
    term: &str,
    is_error: bool,
) -> Vec<Station> {
    if !term.is_empty() {
        return filter_stations(searchable, term);
    }

    if is_error && catalog.is_empty() {
        return recents.to_vec();
    }

    // Stored recents may reference stations that left the catalog; they stay
    // in storage but are not shown against a populated catalog.
    let shown_recents: Vec<Station> = if catalog.is_empty() {
        recents.to_vec()
    } else {
        recents
            .iter()
            .filter(|recent| catalog.iter().any(|s| s.same_code(recent)))
            .cloned()
            .collect()
    };

    let mut merged = shown_recents;
    merged.extend(
        searchable
            .iter()
            .filter(|station| !recents.iter().any(|recent| recent.same_code(station)))
            .cloned(),
    );
    merged
}

/// Removes the currently chosen station from a display list.
///
/// A selected station is surfaced separately by the UI, so it is excluded from
/// the candidate list rather than shown twice.
#[must_use]
pub fn stations_to_render(display: &[Station], selected: Option<&Station>) -> Vec<Station> {
    match selected {
        Some(chosen) => display
            .iter()
            .filter(|station| !station.same_code(chosen))
            .cloned()
            .collect(),
        None => display.to_vec(),
    }
}

/// Whether the UI should render the two-section recents layout.
///
/// True only with an empty term, an open suggestion surface, and at least one
/// recent search to head the list.
#[must_use]
pub fn show_recent_layout(term: &str, is_open: bool, recents: &[Station]) -> bool {
    term.is_empty() && is_open && !recents.is_empty()
}

/// Whether a "no results" message applies: an active term matched nothing.
#[must_use]
pub fn should_show_no_results(rendered: &[Station], term: &str) -> bool {
    rendered.is_empty() && !term.is_empty()
}

/// Whether the suggestion surface has anything worth rendering.
///
/// Empty results with an empty term against a populated catalog mean the list
/// was emptied by selection, not by a failed search, and the surface hides.
#[must_use]
pub fn should_show_content(rendered: &[Station], term: &str, catalog: &[Station]) -> bool {
    if rendered.is_empty() {
        if term.is_empty() && !catalog.is_empty() {
            return false;
        }
        return !term.is_empty();
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(name: &str, code: &str) -> Station {
        Station::new(name, code).unwrap()
    }

    fn catalog() -> Vec<Station> {
        vec![
            station("London", "LON"),
            station("Birmingham", "BHM"),
            station("Manchester", "MAN"),
        ]
    }

    #[test]
    fn searchable_prefers_recents_while_loading() {
        let recents = vec![station("Leeds", "LDS")];
        assert_eq!(
            searchable_stations(&catalog(), &recents, true, false),
            recents
        );
        assert_eq!(
            searchable_stations(&catalog(), &recents, false, true),
            recents
        );
    }

    #[test]
    fn searchable_uses_catalog_once_settled() {
        let recents = vec![station("Leeds", "LDS")];
        assert_eq!(
            searchable_stations(&catalog(), &recents, false, false),
            catalog()
        );
    }

    #[test]
    fn searchable_uses_catalog_when_no_recents_exist() {
        assert_eq!(searchable_stations(&catalog(), &[], true, false), catalog());
    }

    #[test]
    fn empty_term_puts_recents_first_without_duplicates() {
        let recents = vec![station("Manchester", "MAN"), station("London", "LON")];
        let merged = display_stations(&catalog(), &recents, &catalog(), "", false);
        let names: Vec<&str> = merged.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Manchester", "London", "Birmingham"]);
    }

    #[test]
    fn active_term_ignores_recency_priority() {
        let recents = vec![station("Manchester", "MAN")];
        let merged = display_stations(&catalog(), &recents, &catalog(), "b", false);
        let names: Vec<&str> = merged.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Birmingham"]);
    }

    #[test]
    fn error_with_empty_catalog_returns_recents_verbatim() {
        let recents = vec![station("Leeds", "LDS")];
        let merged = display_stations(&recents, &recents, &[], "", true);
        assert_eq!(merged, recents);
    }

    #[test]
    fn error_fallback_still_searches_recents() {
        // Catalog fetch failed, recents = [Leeds]; typing "L" still finds Leeds
        let recents = vec![station("Leeds", "LDS")];
        let searchable = searchable_stations(&[], &recents, false, true);
        let merged = display_stations(&searchable, &recents, &[], "L", true);
        assert_eq!(merged, recents);
    }

    #[test]
    fn recents_absent_from_catalog_are_hidden() {
        // "Leeds" is stored but no longer in the catalog, so it is not shown
        let recents = vec![station("Leeds", "LDS"), station("London", "LON")];
        let merged = display_stations(&catalog(), &recents, &catalog(), "", false);
        let names: Vec<&str> = merged.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["London", "Birmingham", "Manchester"]);
    }

    #[test]
    fn render_list_excludes_selected_station() {
        let selected = station("London", "LON");
        let rendered = stations_to_render(&catalog(), Some(&selected));
        assert!(!rendered.iter().any(|s| s.code == "LON"));
        assert_eq!(rendered.len(), 2);
    }

    #[test]
    fn render_list_unchanged_without_selection() {
        assert_eq!(stations_to_render(&catalog(), None), catalog());
    }

    #[test]
    fn recent_layout_requires_empty_term_and_recents() {
        let recents = vec![station("Leeds", "LDS")];
        assert!(show_recent_layout("", true, &recents));
        assert!(!show_recent_layout("L", true, &recents));
        assert!(!show_recent_layout("", false, &recents));
        assert!(!show_recent_layout("", true, &[]));
    }

    #[test]
    fn no_results_only_with_active_term() {
        assert!(should_show_no_results(&[], "xy"));
        assert!(!should_show_no_results(&[], ""));
        assert!(!should_show_no_results(&catalog(), "xy"));
    }

    #[test]
    fn content_hides_when_selection_emptied_the_list() {
        assert!(!should_show_content(&[], "", &catalog()));
        assert!(should_show_content(&[], "zz", &catalog()));
        assert!(should_show_content(&catalog(), "", &catalog()));
        assert!(!should_show_content(&[], "", &[]));
    }
}
