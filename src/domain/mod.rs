//! Core domain types: the station model and crate-wide error types.

pub mod error;
pub mod station;

pub use error::{Result, StationSearchError};
pub use station::{InvalidStation, Station};
