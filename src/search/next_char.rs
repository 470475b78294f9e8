//! Next-character prediction over a filtered result set.
//!
//! Two derived views feed the autocomplete UI: a single "ghost text" character
//! continuing the alphabetically-first match, and the full set of plausible next
//! characters across all matches. Both are pure functions of the filtered list
//! and the current term, recomputed on every input change.
//!
//! Using the alphabetically-first match as the canonical suggestion gives a
//! deterministic completion as the user types, independent of catalog ordering.

use std::collections::BTreeSet;

use crate::domain::Station;
use crate::search::filter::starts_with_ignore_case;

/// Returns the predicted next character after `term`, as a 0- or 1-character string.
///
/// Inspects the first element of `filtered` (the alphabetically-first prefix
/// match). When the term is a strict case-insensitive prefix of that station's
/// name, the character of the *name* at the term's length is returned with its
/// original casing. An empty string means nothing to suggest: no matches, an
/// empty or whitespace-only term, or a term that already spells the full name.
///
/// # Examples
///
/// ```
/// use stationsearch::domain::Station;
/// use stationsearch::search::{filter_stations, next_char_suggestion};
///
/// let stations = vec![
///     Station::new("London", "LON").unwrap(),
///     Station::new("Leeds", "LDS").unwrap(),
/// ];
/// let filtered = filter_stations(&stations, "L");
///
/// // "Leeds" sorts first, so the ghost text continues it
/// assert_eq!(next_char_suggestion(&filtered, "L"), "e");
/// ```
#[must_use]
pub fn next_char_suggestion(filtered: &[Station], term: &str) -> String {
    if filtered.is_empty() || term.trim().is_empty() {
        return String::new();
    }

    let first = &filtered[0];
    let lower_term = term.to_lowercase();
    if !starts_with_ignore_case(&first.name, &lower_term) {
        return String::new();
    }

    // Case folding can change a name's char count ('İ' folds to two chars),
    // so advance through the original name by folded length instead of
    // indexing it at the term's length.
    let term_len = lower_term.chars().count();
    let mut consumed = 0;
    let mut name_chars = first.name.chars();
    while consumed < term_len {
        match name_chars.next() {
            Some(c) => consumed += c.to_lowercase().count(),
            None => return String::new(),
        }
    }

    name_chars.next().map(String::from).unwrap_or_default()
}

/// A space continuation is only useful when something visible follows it.
///
/// A single trailing space would complete to nothing the user can see, so the
/// space character only counts when at least one matching name has more than
/// one character after the term.
fn space_is_useful(filtered: &[Station], lower_term: &str) -> bool {
    filtered.iter().any(|station| {
        let name = station.name.to_lowercase();
        name.strip_prefix(lower_term)
            .is_some_and(|rest| rest.starts_with(' ') && rest.chars().count() > 1)
    })
}

/// Returns every plausible next character across the filtered stations.
///
/// Each station contributes the continuation of whichever field matched the
/// term, with the name taking precedence: the code's continuation only counts
/// for stations the term matched by code alone. Characters are lowercased and
/// deduplicated. The output is sorted ascending with the canonical
/// [`next_char_suggestion`] (when present) pinned to the front.
///
/// Returns an empty sequence when there is nothing to suggest: no matches, an
/// empty term, or a single remaining match whose name or code already equals
/// the term exactly.
#[must_use]
pub fn available_next_chars(filtered: &[Station], term: &str) -> Vec<char> {
    if filtered.is_empty() || term.trim().is_empty() {
        return Vec::new();
    }

    let lower_term = term.to_lowercase().trim().to_string();
    let term_len = lower_term.chars().count();

    let has_exact_match = filtered.iter().any(|station| {
        station.name.to_lowercase().trim() == lower_term
            || station.code.to_lowercase().trim() == lower_term
    });
    if has_exact_match && filtered.len() == 1 {
        return Vec::new();
    }

    let mut next_chars = BTreeSet::new();

    for station in filtered {
        let name = station.name.to_lowercase();
        if name.starts_with(&lower_term) {
            if let Some(c) = name.chars().nth(term_len) {
                next_chars.insert(c);
            }
            continue;
        }

        let code = station.code.to_lowercase();
        if code.starts_with(&lower_term) {
            if let Some(c) = code.chars().nth(term_len) {
                next_chars.insert(c);
            }
        }
    }

    if next_chars.contains(&' ') && !space_is_useful(filtered, &lower_term) {
        next_chars.remove(&' ');
    }

    // BTreeSet iteration is already ascending
    let mut chars: Vec<char> = next_chars.into_iter().collect();

    let suggestion = next_char_suggestion(filtered, term);
    if let Some(primary) = suggestion.chars().next() {
        let folded = primary.to_lowercase().next().unwrap_or(primary);
        if let Some(position) = chars.iter().position(|&c| c == folded) {
            let pinned = chars.remove(position);
            chars.insert(0, pinned);
        }
    }

    chars
}
