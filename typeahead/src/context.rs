//! Shared context channel between the widget and its descendant items.
//!
//! Item elements rendered inside the dropdown are not direct children of
//! the controller and receive no callbacks as properties. They read and
//! write the widget exclusively through this per-instance handle, which is
//! torn down with the widget. Never process-wide state.

use std::sync::{Arc, RwLock};

use crate::memo::Memo;
use crate::state::Autocomplete;
use crate::types::{Rect, Size};

/// The payload republished to context consumers.
///
/// Rebuilt only when one of its three tracked fields changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextSnapshot {
    /// Current text value.
    pub value: String,
    /// Current dropdown visibility.
    pub visible: bool,
    /// The widget's size token.
    pub size: Size,
}

/// Read/write channel scoped to one widget instance's subtree.
#[derive(Debug, Clone)]
pub struct AutocompleteContext {
    widget: Autocomplete,
    snapshot: Arc<RwLock<Memo<(String, bool, Size), ContextSnapshot>>>,
}

impl AutocompleteContext {
    pub(crate) fn new(widget: Autocomplete) -> Self {
        Self {
            widget,
            snapshot: Arc::new(RwLock::new(Memo::new())),
        }
    }

    /// Current text value.
    pub fn value(&self) -> String {
        self.widget.value()
    }

    /// Current dropdown visibility.
    pub fn visible(&self) -> bool {
        self.widget.is_visible()
    }

    /// The widget's size token.
    pub fn size(&self) -> Size {
        self.widget.size()
    }

    /// The anchor rect for positioning, if the host has measured one.
    pub fn anchor(&self) -> Option<Rect> {
        self.widget.anchor_rect()
    }

    /// Select a value: the item's way of reporting its own selection.
    ///
    /// Routes through the widget's selection path (`on_select`, then the
    /// text change). Does not close the dropdown.
    pub fn select(&self, value: impl Into<String>) {
        self.widget.select(value);
    }

    /// Set the dropdown visibility, e.g. for close-on-select items.
    pub fn set_visible(&self, visible: bool) {
        self.widget.set_visible(visible);
    }

    /// The current payload, recomputed only when value, visibility, or
    /// size changed since the last call.
    pub fn snapshot(&self) -> ContextSnapshot {
        let value = self.widget.value();
        let visible = self.widget.is_visible();
        let size = self.widget.size();
        let key = (value.clone(), visible, size);

        match self.snapshot.write() {
            Ok(mut memo) => memo
                .get_or_insert_with(key, || ContextSnapshot {
                    value,
                    visible,
                    size,
                })
                .clone(),
            Err(_) => ContextSnapshot {
                value,
                visible,
                size,
            },
        }
    }
}
