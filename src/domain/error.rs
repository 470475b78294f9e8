//! Error types for the station-search core.
//!
//! This module defines the centralized error type [`StationSearchError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All errors
//! are implemented using the `thiserror` crate for automatic `Error` trait
//! implementation.

use thiserror::Error;

/// The main error type for station-search operations.
///
/// This enum consolidates all error conditions that can occur in the core, from
/// storage operations to catalog fetch failures reported by the embedding shell.
/// Most variants wrap a plain description; I/O errors convert automatically via
/// `#[from]`.
///
/// Note that a catalog fetch failure is normally represented as *state* on the
/// session (`is_error` plus an error message) rather than propagated as a
/// `Result`; the [`CatalogFetch`](StationSearchError::CatalogFetch) variant
/// exists for callers that need to carry the failure across their own
/// boundaries before handing it to the session.
#[derive(Debug, Error)]
pub enum StationSearchError {
    /// Fetching the station catalog failed.
    ///
    /// Non-fatal and recoverable: the session keeps operating against the
    /// recent-search list and the caller may retry the fetch.
    #[error("Catalog fetch error: {0}")]
    CatalogFetch(String),

    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to the recent-search backend fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when a configuration file cannot be read or parsed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for station-search operations.
///
/// This is a type alias for `std::result::Result<T, StationSearchError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, StationSearchError>;
