//! Pure search algorithms: prefix filtering, next-character prediction, and
//! recent-search merging.
//!
//! Everything in this module is a deterministic function of its inputs:
//! no hidden state, no I/O. The session layer recomputes these views in full
//! on every transition rather than patching them incrementally.
//!
//! # Modules
//!
//! - [`filter`]: prefix filter with alphabetical ranking
//! - [`next_char`]: ghost-text suggestion and the available-next-characters set
//! - [`merge`]: searchable-set selection and recents-first display merging

pub mod filter;
pub mod merge;
pub mod next_char;

pub use filter::filter_stations;
pub use merge::{
    display_stations, searchable_stations, should_show_content, should_show_no_results,
    show_recent_layout, stations_to_render,
};
pub use next_char::{available_next_chars, next_char_suggestion};
