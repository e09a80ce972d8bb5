//! View assembly: boundary payloads for the presentational collaborators.
//!
//! `view()` produces everything the excluded leaves need: props for the
//! text-input primitive, a request for the dropdown/overlay primitive, and
//! the pass-through remainder children. Slots are re-resolved on every
//! evaluation; dropdown content is rebuilt only when the searching flag or
//! the option-sequence revision changes.

use log::debug;
use unicode_width::UnicodeWidthStr;

use crate::display::{select_display_mode, show_clear_icon, trailing_icon, DisplayMode, TrailingIcon};
use crate::node::Node;
use crate::options::{normalize_options, OptionsEntry};
use crate::slots::{resolve_slots, SlotExtraction};
use crate::state::Autocomplete;
use crate::types::{Rect, Size, Status};

/// Props for the text-input primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputProps {
    /// Current text value.
    pub value: String,
    /// Size token.
    pub size: Size,
    /// Validation-state token.
    pub status: Option<Status>,
    /// Layout width string, if the host supplied one.
    pub width: Option<String>,
    /// Effective clear affordance: requested and no searching flag set.
    pub clearable: bool,
    /// Trailing icon slot.
    pub icon: TrailingIcon,
    /// Pass-through low-level input attributes.
    pub attrs: Vec<(String, String)>,
}

/// Request for the dropdown/overlay primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownRequest {
    /// Whether the dropdown should be shown.
    pub visible: bool,
    /// Resolved display content. Empty means render nothing.
    pub content: Vec<Node>,
    /// Anchor rect for positioning, if the host has measured one.
    pub anchor: Option<Rect>,
    /// Suggested content width, from the widest option label.
    pub width: u16,
}

/// One evaluation of the widget: everything the host renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteView {
    /// Props for the text-input primitive.
    pub input: InputProps,
    /// Request for the dropdown primitive.
    pub dropdown: DropdownRequest,
    /// Unrecognized children, passed through unmodified.
    pub remainder: Vec<Node>,
}

/// Default placeholder shown while a search is in flight.
const DEFAULT_SEARCHING_LABEL: &str = "Searching...";
/// Default placeholder shown when no options match.
const DEFAULT_EMPTY_LABEL: &str = "No Options";

fn build_dropdown_content(
    widget_id: &str,
    searching: Option<bool>,
    text: &str,
    options: &[OptionsEntry],
    slots: &SlotExtraction,
) -> Vec<Node> {
    match select_display_mode(searching, options.len(), text) {
        DisplayMode::Searching => {
            let view = slots
                .searching
                .clone()
                .unwrap_or_else(|| Node::searching(vec![Node::text(DEFAULT_SEARCHING_LABEL)]));
            vec![view]
        }
        DisplayMode::Empty => {
            let view = slots
                .empty
                .clone()
                .unwrap_or_else(|| Node::empty(vec![Node::text(DEFAULT_EMPTY_LABEL)]));
            vec![view]
        }
        DisplayMode::Options => normalize_options(widget_id, options),
        DisplayMode::None => Vec::new(),
    }
}

fn max_label_width(options: &[OptionsEntry]) -> usize {
    options
        .iter()
        .map(|entry| entry.label_text().as_str().width())
        .max()
        .unwrap_or(0)
}

impl Autocomplete {
    /// Evaluate the widget into its boundary payloads.
    pub fn view(&self) -> AutocompleteView {
        let id = self.id_string();
        let visible = self.is_visible();

        let mut guard = self.lock_inner();
        let inner = &mut *guard;

        let slots = resolve_slots(&inner.children);
        let key = (inner.searching, inner.options_rev);
        let text = &inner.text;
        let options = &inner.options;

        debug!(
            "Autocomplete::view id={} visible={} text={:?} options_count={}",
            id,
            visible,
            text,
            options.len()
        );

        let content = inner
            .content_cache
            .get_or_insert_with(key, || {
                build_dropdown_content(&id, key.0, text, options, &slots)
            })
            .clone();

        let dropdown_width = (max_label_width(options) + 2) as u16;

        let input = InputProps {
            value: inner.text.clone(),
            size: inner.size,
            status: inner.status,
            width: inner.width.clone(),
            clearable: show_clear_icon(inner.clearable, inner.searching),
            icon: trailing_icon(inner.searching),
            attrs: inner.attrs.clone(),
        };

        let dropdown = DropdownRequest {
            visible,
            content,
            anchor: inner.anchor,
            width: dropdown_width,
        };

        AutocompleteView {
            input,
            dropdown,
            remainder: slots.remainder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_searching_placeholder() {
        let slots = SlotExtraction::default();
        let content = build_dropdown_content("ac", Some(true), "", &[], &slots);
        assert_eq!(
            content,
            vec![Node::searching(vec![Node::text("Searching...")])]
        );
    }

    #[test]
    fn test_custom_searching_slot_wins() {
        let slots = SlotExtraction {
            searching: Some(Node::searching(vec![Node::text("hold on")])),
            ..Default::default()
        };
        let content = build_dropdown_content("ac", Some(true), "", &[], &slots);
        assert_eq!(content, vec![Node::searching(vec![Node::text("hold on")])]);
    }

    #[test]
    fn test_default_empty_placeholder_needs_text() {
        let slots = SlotExtraction::default();
        assert!(build_dropdown_content("ac", None, "", &[], &slots).is_empty());
        assert_eq!(
            build_dropdown_content("ac", None, "abc", &[], &slots),
            vec![Node::empty(vec![Node::text("No Options")])]
        );
    }

    #[test]
    fn test_options_mode_normalizes() {
        let slots = SlotExtraction::default();
        let options: Vec<OptionsEntry> = vec![("Foo", "foo").into()];
        let content = build_dropdown_content("ac", None, "f", &options, &slots);
        assert_eq!(content.len(), 1);
        assert_eq!(content[0].value(), Some("foo"));
        assert_eq!(content[0].key(), Some("ac-item-0"));
    }

    #[test]
    fn test_dropdown_width_tracks_widest_label() {
        let options: Vec<OptionsEntry> =
            vec![("ab", "1").into(), ("abcdef", "2").into()];
        assert_eq!(max_label_width(&options), 6);
        assert_eq!(max_label_width(&[]), 0);
    }
}
