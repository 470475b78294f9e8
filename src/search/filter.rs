//! Prefix filtering of the station catalog.
//!
//! This module implements the first stage of the autocomplete pipeline: reducing
//! a station list to the entries matching a typed prefix, ranked alphabetically.
//!
//! # Matching Rules
//!
//! Matching is deliberately prefix-only: a term occurring mid-string does not
//! match ("ork" does not find "New York"). Precision over recall keeps the
//! next-character predictor well-defined, since every prefix match has a
//! determinate "next character" position. Fuzzy matching is out of scope for
//! this crate.

use crate::domain::Station;

/// Case-insensitive starts-with test, shared by the filter and the predictor.
///
/// `lower_prefix` must already be lowercased by the caller; the haystack is
/// folded here.
pub(crate) fn starts_with_ignore_case(text: &str, lower_prefix: &str) -> bool {
    text.to_lowercase().starts_with(lower_prefix)
}

/// Filters and sorts stations against a search term.
///
/// Returns the input unchanged (same order) when the trimmed term is empty.
/// Otherwise a station qualifies when its `name` or its `code` starts with the
/// term case-insensitively. The result is sorted ascending by case-folded name;
/// the sort is stable, so stations with identical names keep their original
/// relative order.
///
/// Pure and deterministic: equal inputs always produce equal outputs.
///
/// # Examples
///
/// ```
/// use stationsearch::domain::Station;
/// use stationsearch::search::filter_stations;
///
/// let stations = vec![
///     Station::new("London", "LON").unwrap(),
///     Station::new("Liverpool", "LIV").unwrap(),
///     Station::new("Leeds", "LDS").unwrap(),
/// ];
///
/// let filtered = filter_stations(&stations, "L");
/// let names: Vec<&str> = filtered.iter().map(|s| s.name.as_str()).collect();
/// assert_eq!(names, ["Leeds", "Liverpool", "London"]);
/// ```
#[must_use]
pub fn filter_stations(stations: &[Station], term: &str) -> Vec<Station> {
    if term.trim().is_empty() {
        return stations.to_vec();
    }

    let lower_term = term.to_lowercase();

    let mut matches: Vec<Station> = stations
        .iter()
        .filter(|station| {
            starts_with_ignore_case(&station.name, &lower_term)
                || starts_with_ignore_case(&station.code, &lower_term)
        })
        .cloned()
        .collect();

    matches.sort_by_cached_key(|station| station.name.to_lowercase());

    tracing::trace!(
        total = stations.len(),
        matched = matches.len(),
        "prefix filter applied"
    );

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(name: &str, code: &str) -> Station {
        Station::new(name, code).unwrap()
    }

    fn mock_stations() -> Vec<Station> {
        vec![
            station("London", "LON"),
            station("Birmingham", "BHM"),
            station("Manchester", "MAN"),
            station("Liverpool", "LIV"),
            station("Leeds", "LDS"),
        ]
    }

    #[test]
    fn empty_term_returns_input_unchanged() {
        let stations = mock_stations();
        assert_eq!(filter_stations(&stations, ""), stations);
        assert_eq!(filter_stations(&stations, "   "), stations);
    }

    #[test]
    fn matches_are_sorted_alphabetically() {
        let result = filter_stations(&mock_stations(), "L");
        let names: Vec<&str> = result.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Leeds", "Liverpool", "London"]);
    }

    #[test]
    fn mid_string_occurrences_do_not_match() {
        // "ork" occurs inside "York" shifted catalogs; prefix-only means no hit
        let stations = vec![station("New York", "NYP")];
        assert!(filter_stations(&stations, "ork").is_empty());
        // "on" occurs inside "London" but is not a prefix
        assert!(filter_stations(&mock_stations(), "on").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let result = filter_stations(&mock_stations(), "lON");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "London");
    }

    #[test]
    fn matches_by_code_prefix() {
        let result = filter_stations(&mock_stations(), "MAN");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Manchester");

        let result = filter_stations(&mock_stations(), "bh");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Birmingham");
    }

    #[test]
    fn name_ties_keep_original_order() {
        let stations = vec![station("Leeds", "AAA"), station("Leeds", "BBB")];
        let result = filter_stations(&stations, "le");
        assert_eq!(result[0].code, "AAA");
        assert_eq!(result[1].code, "BBB");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn station_strategy()(
            name in "[A-Z][a-z]{1,9}",
            code in "[A-Z]{3}",
        ) -> Station {
            Station { name, code }
        }
    }

    fn stations_strategy() -> impl Strategy<Value = Vec<Station>> {
        prop::collection::vec(station_strategy(), 0..30)
    }

    proptest! {
        #[test]
        fn every_match_is_a_prefix_match(stations in stations_strategy(), term in "[A-Za-z]{1,4}") {
            let filtered = filter_stations(&stations, &term);
            let lower = term.to_lowercase();

            for station in &filtered {
                prop_assert!(
                    station.name.to_lowercase().starts_with(&lower)
                        || station.code.to_lowercase().starts_with(&lower),
                    "{:?} does not start with {:?}",
                    station,
                    term
                );
            }
        }

        #[test]
        fn no_excluded_station_is_a_prefix_match(stations in stations_strategy(), term in "[A-Za-z]{1,4}") {
            let filtered = filter_stations(&stations, &term);
            let lower = term.to_lowercase();

            for station in stations.iter().filter(|s| !filtered.contains(s)) {
                prop_assert!(
                    !station.name.to_lowercase().starts_with(&lower)
                        && !station.code.to_lowercase().starts_with(&lower),
                    "{:?} matches {:?} but was excluded",
                    station,
                    term
                );
            }
        }

        #[test]
        fn empty_term_is_identity(stations in stations_strategy()) {
            prop_assert_eq!(filter_stations(&stations, ""), stations);
        }

        #[test]
        fn result_is_sorted_by_folded_name(stations in stations_strategy(), term in "[A-Za-z]{1,2}") {
            let filtered = filter_stations(&stations, &term);

            for window in filtered.windows(2) {
                prop_assert!(window[0].name.to_lowercase() <= window[1].name.to_lowercase());
            }
        }
    }
}
