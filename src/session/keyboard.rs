//! Keyboard navigation sub-protocol for the suggestion list.
//!
//! The input-handling collaborator feeds raw keys through [`KeyboardNav`] and
//! acts on the returned [`KeyOutcome`]. The cursor logic lives here because its
//! semantics are coupled to the predictor: Enter and Tab double as
//! accept-the-ghost-text shortcuts when nothing is highlighted.

use crate::domain::Station;
use crate::session::state::SessionState;

/// Keys the suggestion surface understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Move the highlight down one row.
    Down,
    /// Move the highlight up one row.
    Up,
    /// Select the highlight, or accept the suggestion when nothing is
    /// highlighted.
    Enter,
    /// Accept the suggestion without selecting.
    Tab,
    /// Reset the highlight and close the surface.
    Escape,
}

/// What the caller should do after a key was processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Dispatch a `SelectStation` for this station.
    Select(Station),
    /// Dispatch a `SetSearchTerm` with this new term (ghost text accepted).
    SetTerm(String),
    /// Close the suggestion surface.
    Close,
    /// Nothing to do; let the key fall through (e.g. Tab keeps normal focus
    /// traversal when there is no suggestion to accept).
    Ignored,
}

/// Highlight cursor over the rendered result list.
///
/// The cursor is clamped to `[0, len - 1]` rather than wrapping, and resets to
/// "nothing highlighted" whenever the result list changes length, so a stale
/// index can never select the wrong station after the list shifted under it.
#[derive(Debug, Clone, Default)]
pub struct KeyboardNav {
    highlighted: Option<usize>,
    last_result_len: usize,
}

impl KeyboardNav {
    /// Creates a cursor with nothing highlighted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently highlighted index within the rendered results, if any.
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Clears the highlight.
    pub fn reset(&mut self) {
        self.highlighted = None;
    }

    fn sync_result_len(&mut self, len: usize) {
        if len != self.last_result_len {
            self.highlighted = None;
            self.last_result_len = len;
        }
    }

    /// Processes one key against the current session state.
    ///
    /// The rendered result list (selection excluded) is recomputed from the
    /// state snapshot, so the cursor always moves over exactly what the user
    /// sees. Keys arriving while the list is empty are ignored.
    pub fn handle_key(&mut self, state: &SessionState, key: Key) -> KeyOutcome {
        let results = state.stations_to_render();
        self.sync_result_len(results.len());

        if results.is_empty() {
            return KeyOutcome::Ignored;
        }

        match key {
            Key::Down => {
                self.highlighted = Some(match self.highlighted {
                    Some(index) if index < results.len() - 1 => index + 1,
                    Some(index) => index,
                    None => 0,
                });
                KeyOutcome::Ignored
            }

            Key::Up => {
                self.highlighted = Some(match self.highlighted {
                    Some(index) if index > 0 => index - 1,
                    _ => 0,
                });
                KeyOutcome::Ignored
            }

            Key::Enter => {
                if let Some(station) = self.highlighted.and_then(|index| results.get(index)) {
                    return KeyOutcome::Select(station.clone());
                }
                self.accept_suggestion(state)
            }

            Key::Tab => self.accept_suggestion(state),

            Key::Escape => {
                self.highlighted = None;
                KeyOutcome::Close
            }
        }
    }

    /// Appends the ghost-text character to the term, when one exists.
    fn accept_suggestion(&self, state: &SessionState) -> KeyOutcome {
        if !state.next_char_suggestion.is_empty() && !state.search_term.is_empty() {
            KeyOutcome::SetTerm(format!(
                "{}{}",
                state.search_term, state.next_char_suggestion
            ))
        } else {
            KeyOutcome::Ignored
        }
    }
}
