//! Search session layer coordinating state, events, and keyboard input.
//!
//! The session is the orchestration layer over the pure `search` functions:
//! it owns one [`SessionState`], consumes [`Event`]s from the UI shell and the
//! external catalog/persistence collaborators, and rebuilds every derived view
//! synchronously inside each transition.
//!
//! ```text
//! UI input / collaborator completions → Event → SearchSession::handle_event
//!                                                   │
//!                              SessionState (+ recomputed derived views)
//! ```
//!
//! # Modules
//!
//! - [`events`]: the tagged union of session transitions
//! - [`state`]: state container and derived-view recomputation
//! - [`handler`]: the event reducer and its one side effect (the recent store)
//! - [`keyboard`]: highlight cursor and ghost-text accept protocol

pub mod events;
pub mod handler;
pub mod keyboard;
pub mod state;

pub use events::Event;
pub use handler::SearchSession;
pub use keyboard::{Key, KeyOutcome, KeyboardNav};
pub use state::SessionState;
