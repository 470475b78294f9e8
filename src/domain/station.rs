//! Station domain model.
//!
//! This module defines the core [`Station`] type: a named, coded transit stop,
//! the atomic search entity of the crate. Stations arrive from an external
//! catalog source and from persisted recent searches, so the type supports both
//! a validating constructor and a lenient deserialized form that can be checked
//! with [`Station::is_valid`] and discarded when malformed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when constructing a station with a missing field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid station: {reason}")]
pub struct InvalidStation {
    reason: &'static str,
}

/// A named, coded transit stop.
///
/// Identity is carried by `code`, a short identifier treated case-insensitively
/// for matching and deduplication. Two stations with the same code are the same
/// station regardless of how their display names are spelled.
///
/// # Examples
///
/// ```
/// use stationsearch::domain::Station;
///
/// let station = Station::new("London", "LON").unwrap();
/// assert_eq!(station.name, "London");
/// assert_eq!(station.code, "LON");
///
/// // Empty fields are rejected
/// assert!(Station::new("", "LON").is_err());
/// assert!(Station::new("London", "  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Display name shown to the user, non-empty.
    pub name: String,

    /// Short identifier, non-empty, matched case-insensitively.
    pub code: String,
}

impl Station {
    /// Creates a station, validating that both fields are non-empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStation`] when `name` or `code` is empty or whitespace-only.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Result<Self, InvalidStation> {
        let name = name.into();
        let code = code.into();

        if name.trim().is_empty() {
            return Err(InvalidStation {
                reason: "name must be non-empty",
            });
        }
        if code.trim().is_empty() {
            return Err(InvalidStation {
                reason: "code must be non-empty",
            });
        }

        Ok(Self { name, code })
    }

    /// Returns `true` when both fields are usable.
    ///
    /// Deserialized catalog entries and persisted records bypass [`Station::new`],
    /// so callers filter with this before admitting a station into the session.
    /// Invalid stations are discarded silently, never surfaced as errors.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.code.trim().is_empty()
    }

    /// Compares station identity by code, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use stationsearch::domain::Station;
    ///
    /// let a = Station::new("London", "LON").unwrap();
    /// let b = Station::new("London Euston", "lon").unwrap();
    /// assert!(a.same_code(&b));
    /// ```
    #[must_use]
    pub fn same_code(&self, other: &Station) -> bool {
        self.code.eq_ignore_ascii_case(&other.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty_fields() {
        assert!(Station::new("", "LON").is_err());
        assert!(Station::new("London", "").is_err());
        assert!(Station::new("   ", "LON").is_err());
        assert!(Station::new("London", "\t").is_err());
    }

    #[test]
    fn new_accepts_valid_station() {
        let station = Station::new("Leeds", "LDS").unwrap();
        assert!(station.is_valid());
    }

    #[test]
    fn is_valid_catches_deserialized_blanks() {
        let station: Station = serde_json::from_str(r#"{"name":"","code":"LON"}"#).unwrap();
        assert!(!station.is_valid());
    }

    #[test]
    fn same_code_ignores_case() {
        let a = Station::new("Manchester", "MAN").unwrap();
        let b = Station::new("Manchester Piccadilly", "man").unwrap();
        let c = Station::new("Manchester", "MCV").unwrap();
        assert!(a.same_code(&b));
        assert!(!a.same_code(&c));
    }
}
