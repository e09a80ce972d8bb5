use std::sync::{Arc, Mutex};

use typeahead::Autocomplete;

/// Records every invocation of a notification callback.
#[derive(Debug, Clone, Default)]
struct Recorder {
    calls: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    fn new() -> Self {
        Self::default()
    }

    fn hook(&self) -> impl Fn(&str) + Send + Sync + 'static {
        let calls = Arc::clone(&self.calls);
        move |value: &str| {
            calls.lock().unwrap().push(value.to_string());
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_initial_value_sets_text() {
    let ac = Autocomplete::builder().initial_value("foo").build();
    assert_eq!(ac.value(), "foo");
}

#[test]
fn test_default_text_is_empty() {
    let ac = Autocomplete::builder().build();
    assert_eq!(ac.value(), "");
    assert!(ac.is_empty());
}

#[test]
fn test_controlled_value_wins_over_initial_value() {
    let ac = Autocomplete::builder()
        .initial_value("typed")
        .value("forced")
        .build();
    assert_eq!(ac.value(), "forced");
}

#[test]
fn test_no_notifications_fire_at_construction() {
    let changes = Recorder::new();
    let searches = Recorder::new();
    let selects = Recorder::new();

    let _ac = Autocomplete::builder()
        .initial_value("foo")
        .on_change(changes.hook())
        .on_search(searches.hook())
        .on_select(selects.hook())
        .build();

    assert!(changes.calls().is_empty());
    assert!(searches.calls().is_empty());
    assert!(selects.calls().is_empty());
}

// ============================================================================
// Controlled value synchronization
// ============================================================================

#[test]
fn test_controlled_sequence_tracks_last_value() {
    let changes = Recorder::new();
    let ac = Autocomplete::builder().on_change(changes.hook()).build();

    ac.sync_value("a");
    ac.sync_value("b");
    ac.sync_value("c");

    assert_eq!(ac.value(), "c");
    assert_eq!(changes.calls(), vec!["a", "b", "c"]);
}

#[test]
fn test_resupplying_same_value_is_silent() {
    let changes = Recorder::new();
    let ac = Autocomplete::builder().on_change(changes.hook()).build();

    ac.sync_value("same");
    ac.sync_value("same");

    assert_eq!(changes.calls(), vec!["same"]);
}

#[test]
fn test_sync_overrides_typed_text() {
    let ac = Autocomplete::builder().build();
    ac.handle_input_change("typed");
    ac.sync_value("forced");
    assert_eq!(ac.value(), "forced");
}

#[test]
fn test_internal_edits_do_not_write_back() {
    // One-directional sync: the widget mirrors the host value but never
    // originates it. After a keystroke the host-side value is whatever the
    // host last supplied; only on_change tells it anything happened.
    let changes = Recorder::new();
    let ac = Autocomplete::builder()
        .value("host")
        .on_change(changes.hook())
        .build();

    ac.handle_input_change("edited");
    assert_eq!(ac.value(), "edited");
    assert_eq!(changes.calls(), vec!["edited"]);
}

// ============================================================================
// Keystrokes
// ============================================================================

#[test]
fn test_on_search_fires_once_per_keystroke_in_order() {
    let searches = Recorder::new();
    let ac = Autocomplete::builder().on_search(searches.hook()).build();

    ac.handle_input_change("a");
    ac.handle_input_change("ab");
    ac.handle_input_change("abc");

    assert_eq!(searches.calls(), vec!["a", "ab", "abc"]);
    assert_eq!(ac.value(), "abc");
}

#[test]
fn test_keystroke_fires_on_change_once_when_distinct() {
    let changes = Recorder::new();
    let ac = Autocomplete::builder().on_change(changes.hook()).build();

    ac.handle_input_change("a");
    ac.handle_input_change("a");

    assert_eq!(changes.calls(), vec!["a"]);
}

#[test]
fn test_clear_affordance_reports_empty_string() {
    let searches = Recorder::new();
    let ac = Autocomplete::builder()
        .initial_value("abc")
        .clearable(true)
        .on_search(searches.hook())
        .build();

    ac.handle_input_change("");
    assert_eq!(ac.value(), "");
    assert_eq!(searches.calls(), vec![""]);
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_select_sets_text_and_fires_on_select_once() {
    let selects = Recorder::new();
    let searches = Recorder::new();
    let changes = Recorder::new();
    let ac = Autocomplete::builder()
        .on_select(selects.hook())
        .on_search(searches.hook())
        .on_change(changes.hook())
        .build();

    ac.select("foo-bar");

    assert_eq!(ac.value(), "foo-bar");
    assert_eq!(selects.calls(), vec!["foo-bar"]);
    assert_eq!(changes.calls(), vec!["foo-bar"]);
    // Selection never triggers a search.
    assert!(searches.calls().is_empty());
}

#[test]
fn test_select_does_not_close_dropdown() {
    let ac = Autocomplete::builder().build();
    ac.handle_focus();
    assert!(ac.is_visible());

    ac.select("x");
    assert!(ac.is_visible());
}

// ============================================================================
// Focus and blur
// ============================================================================

#[test]
fn test_focus_opens_and_searches_current_text() {
    let searches = Recorder::new();
    let ac = Autocomplete::builder()
        .initial_value("foo")
        .on_search(searches.hook())
        .build();

    assert!(!ac.is_visible());
    ac.handle_focus();
    assert!(ac.is_visible());
    assert_eq!(searches.calls(), vec!["foo"]);
}

#[test]
fn test_blur_closes_unconditionally() {
    let ac = Autocomplete::builder().build();

    ac.handle_blur();
    assert!(!ac.is_visible());

    ac.handle_focus();
    ac.handle_blur();
    assert!(!ac.is_visible());
}

#[test]
fn test_refocus_searches_again() {
    let searches = Recorder::new();
    let ac = Autocomplete::builder()
        .initial_value("q")
        .on_search(searches.hook())
        .build();

    ac.handle_focus();
    ac.handle_blur();
    ac.handle_focus();

    assert_eq!(searches.calls(), vec!["q", "q"]);
}

// ============================================================================
// Missing callbacks
// ============================================================================

#[test]
fn test_absent_callbacks_are_noops() {
    let ac = Autocomplete::builder().build();
    ac.handle_input_change("a");
    ac.handle_focus();
    ac.select("b");
    ac.handle_blur();
    ac.sync_value("c");
    assert_eq!(ac.value(), "c");
}

// ============================================================================
// Full scenario
// ============================================================================

#[test]
fn test_scenario_initial_focus_select() {
    let changes = Recorder::new();
    let searches = Recorder::new();
    let selects = Recorder::new();

    let ac = Autocomplete::builder()
        .initial_value("foo")
        .option(("Foo Bar", "foo-bar"))
        .on_change(changes.hook())
        .on_search(searches.hook())
        .on_select(selects.hook())
        .build();

    assert_eq!(ac.value(), "foo");

    let view = ac.view();
    assert_eq!(view.dropdown.content.len(), 1);
    assert_eq!(view.dropdown.content[0].value(), Some("foo-bar"));

    ac.handle_focus();
    assert!(ac.is_visible());
    assert_eq!(searches.calls(), vec!["foo"]);

    // The item reports its selection through the shared context.
    let ctx = ac.context();
    ctx.select("foo-bar");

    assert_eq!(ac.value(), "foo-bar");
    assert_eq!(selects.calls(), vec!["foo-bar"]);
    assert_eq!(changes.calls(), vec!["foo-bar"]);
}
