//! Event entry points: keystrokes, focus, and blur.
//!
//! The text-input primitive forwards its raw events here. Visibility is a
//! two-state machine driven purely by focus and blur; selection never
//! closes the dropdown by itself.

use log::debug;

use crate::state::{Autocomplete, Handlers};

impl Autocomplete {
    /// Handle a raw input-change event (user keystroke, or the clear
    /// affordance emitting an empty string).
    ///
    /// Fires `on_search` with the new text on every call, with no
    /// debounce; rate-limiting is the host's responsibility. Then adopts
    /// the text, firing `on_change` once if it changed.
    pub fn handle_input_change(&self, text: impl Into<String>) {
        let text = text.into();
        Handlers::notify(&self.handlers().on_search, &text);
        self.set_text(text);
    }

    /// Handle the input gaining focus.
    ///
    /// Opens the dropdown and fires `on_search` with the current text, so
    /// a refocus re-triggers a search for possibly stale results.
    pub fn handle_focus(&self) {
        debug!("Autocomplete::focus id={}", self.id());
        self.set_visible(true);
        let current = self.value();
        Handlers::notify(&self.handlers().on_search, &current);
    }

    /// Handle the input losing focus. Closes the dropdown unconditionally.
    pub fn handle_blur(&self) {
        debug!("Autocomplete::blur id={}", self.id());
        self.set_visible(false);
    }
}
