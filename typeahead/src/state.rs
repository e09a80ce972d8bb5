//! Autocomplete widget core: value synchronization and owned state.
//!
//! The widget owns exactly two pieces of mutable state: the current text
//! and the dropdown visibility. Text reconciliation follows a strict
//! precedence: a controlled value forced by the host overrides a user
//! keystroke, which overrides the construction-time initial value.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::debug;

use crate::context::AutocompleteContext;
use crate::memo::Memo;
use crate::node::Node;
use crate::options::OptionsEntry;
use crate::types::{Rect, Size, Status};

/// Notification callback carrying the relevant text value.
pub(crate) type Callback = Arc<dyn Fn(&str) + Send + Sync>;

/// Unique identifier for an Autocomplete widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AutocompleteId(usize);

impl AutocompleteId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for AutocompleteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__autocomplete_{}", self.0)
    }
}

/// Optional notification callbacks; each is a no-op when unset.
#[derive(Default)]
pub(crate) struct Handlers {
    pub(crate) on_change: Option<Callback>,
    pub(crate) on_search: Option<Callback>,
    pub(crate) on_select: Option<Callback>,
}

impl Handlers {
    pub(crate) fn notify(callback: &Option<Callback>, value: &str) {
        if let Some(callback) = callback {
            callback(value);
        }
    }
}

/// Internal state for an Autocomplete widget.
#[derive(Debug, Default)]
pub(crate) struct AutocompleteInner {
    /// Current text value.
    pub(crate) text: String,
    /// Options as supplied by the host.
    pub(crate) options: Vec<OptionsEntry>,
    /// Bumped whenever the host replaces the option sequence; stands in
    /// for reference identity as the dropdown-content dependency key.
    pub(crate) options_rev: u64,
    /// Tri-state searching flag (absent / false / true).
    pub(crate) searching: Option<bool>,
    /// Whether the host asked for a clear affordance.
    pub(crate) clearable: bool,
    /// Size token.
    pub(crate) size: Size,
    /// Validation-state token.
    pub(crate) status: Option<Status>,
    /// Layout width string forwarded to the input primitive.
    pub(crate) width: Option<String>,
    /// Pass-through low-level input attributes.
    pub(crate) attrs: Vec<(String, String)>,
    /// Child content (slots, pass-through nodes).
    pub(crate) children: Vec<Node>,
    /// Cached anchor rect for overlay positioning.
    pub(crate) anchor: Option<Rect>,
    /// Dropdown content, keyed on (searching, options_rev).
    pub(crate) content_cache: Memo<(Option<bool>, u64), Vec<Node>>,
}

/// An autocomplete/combobox input: a text field coupled to a positioned
/// suggestion dropdown.
///
/// Cheap to clone; clones share state. All state transitions are
/// synchronous. Search execution lives in the host, visible here only as
/// the `searching` flag and the `on_search` notification.
///
/// # Example
///
/// ```ignore
/// let ac = Autocomplete::builder()
///     .initial_value("foo")
///     .option(("Foo Bar", "foo-bar"))
///     .on_search(|text| println!("search: {text}"))
///     .build();
///
/// ac.handle_focus();
/// let view = ac.view();
/// ```
pub struct Autocomplete {
    /// Unique identifier for this instance.
    id: AutocompleteId,
    /// Internal state.
    inner: Arc<RwLock<AutocompleteInner>>,
    /// Whether the dropdown is open.
    visible: Arc<AtomicBool>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
    /// Notification callbacks, fixed at construction.
    handlers: Arc<Handlers>,
}

impl std::fmt::Debug for Autocomplete {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Autocomplete")
            .field("id", &self.id)
            .field("inner", &self.inner)
            .field("visible", &self.is_visible())
            .finish()
    }
}

impl Autocomplete {
    /// Start building an autocomplete.
    pub fn builder() -> AutocompleteBuilder {
        AutocompleteBuilder::new()
    }

    pub(crate) fn from_parts(inner: AutocompleteInner, handlers: Handlers) -> Self {
        let id = AutocompleteId::new();
        debug!(
            "Autocomplete::new id={} text={:?} options_count={}",
            id,
            inner.text,
            inner.options.len()
        );
        Self {
            id,
            inner: Arc::new(RwLock::new(inner)),
            visible: Arc::new(AtomicBool::new(false)),
            dirty: Arc::new(AtomicBool::new(false)),
            handlers: Arc::new(handlers),
        }
    }

    /// Get the unique ID for this autocomplete.
    pub fn id(&self) -> AutocompleteId {
        self.id
    }

    /// Get the ID as a string (used as the positional-key prefix).
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Text value
    // -------------------------------------------------------------------------

    /// Get the current text value.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.text.clone())
            .unwrap_or_default()
    }

    /// Check if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.text.is_empty())
            .unwrap_or(true)
    }

    /// Forcibly overwrite the text from a host-controlled value.
    ///
    /// One-directional: external to internal only. Fires `on_change` once
    /// if the text actually changed; re-supplying the same value is silent.
    pub fn sync_value(&self, value: impl Into<String>) {
        self.set_text(value.into());
    }

    /// Replace the text, firing `on_change` exactly once if it changed.
    ///
    /// The notification fires after the lock is released, so callbacks can
    /// read the widget without deadlocking.
    pub(crate) fn set_text(&self, next: String) {
        let changed = match self.inner.write() {
            Ok(mut guard) => {
                if guard.text == next {
                    false
                } else {
                    guard.text = next.clone();
                    true
                }
            }
            Err(_) => false,
        };
        if changed {
            self.dirty.store(true, Ordering::SeqCst);
            Handlers::notify(&self.handlers.on_change, &next);
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Select a suggestion value.
    ///
    /// Fires `on_select`, then adopts the value as the text (firing
    /// `on_change` once if distinct). Never fires `on_search`, and never
    /// closes the dropdown: visibility is driven by focus/blur alone.
    pub fn select(&self, value: impl Into<String>) {
        let value = value.into();
        debug!("Autocomplete::select id={} value={:?}", self.id, value);
        Handlers::notify(&self.handlers.on_select, &value);
        self.set_text(value);
    }

    // -------------------------------------------------------------------------
    // Host-driven configuration updates
    // -------------------------------------------------------------------------

    /// Replace the option sequence.
    ///
    /// Bumps the option revision, which is what invalidates the cached
    /// dropdown content. Keystrokes alone never do.
    pub fn set_options(&self, entries: Vec<OptionsEntry>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.options = entries;
            guard.options_rev += 1;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Update the tri-state searching flag.
    pub fn set_searching(&self, searching: Option<bool>) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.searching != searching {
                guard.searching = searching;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Get the tri-state searching flag.
    pub fn searching(&self) -> Option<bool> {
        self.inner
            .read()
            .map(|guard| guard.searching)
            .unwrap_or(None)
    }

    /// Replace the child content (slots and pass-through nodes).
    pub fn set_children(&self, children: Vec<Node>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.children = children;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Update the size token.
    pub fn set_size(&self, size: Size) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.size != size {
                guard.size = size;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Get the size token.
    pub fn size(&self) -> Size {
        self.inner
            .read()
            .map(|guard| guard.size)
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Visibility
    // -------------------------------------------------------------------------

    /// Check if the dropdown is open.
    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    /// Set the dropdown visibility directly.
    ///
    /// Exposed to descendant items through the shared context; the widget
    /// itself only flips this from `handle_focus`/`handle_blur`.
    pub fn set_visible(&self, visible: bool) {
        if self.visible.swap(visible, Ordering::SeqCst) != visible {
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Anchor
    // -------------------------------------------------------------------------

    /// Get the anchor rect for overlay positioning.
    pub fn anchor_rect(&self) -> Option<Rect> {
        self.inner
            .read()
            .map(|guard| guard.anchor)
            .unwrap_or(None)
    }

    /// Store the anchor rect measured by the host's layout pass.
    pub fn set_anchor_rect(&self, rect: Rect) {
        if let Ok(mut guard) = self.inner.write() {
            guard.anchor = Some(rect);
        }
    }

    // -------------------------------------------------------------------------
    // Shared context
    // -------------------------------------------------------------------------

    /// Get the shared context handle for descendant item elements.
    pub fn context(&self) -> AutocompleteContext {
        AutocompleteContext::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the widget state has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    pub(crate) fn handlers(&self) -> &Handlers {
        &self.handlers
    }

    pub(crate) fn lock_inner(&self) -> std::sync::RwLockWriteGuard<'_, AutocompleteInner> {
        match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Clone for Autocomplete {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            visible: Arc::clone(&self.visible),
            dirty: Arc::clone(&self.dirty),
            handlers: Arc::clone(&self.handlers),
        }
    }
}

impl Default for Autocomplete {
    fn default() -> Self {
        Self::builder().build()
    }
}

// -----------------------------------------------------------------------------
// Builder
// -----------------------------------------------------------------------------

/// Builder for [`Autocomplete`].
///
/// All fields are optional. `initial_value` is consumed once at
/// construction; a controlled `value`, when supplied, takes precedence
/// over it. No notification fires at construction.
#[derive(Default)]
pub struct AutocompleteBuilder {
    options: Vec<OptionsEntry>,
    initial_value: Option<String>,
    value: Option<String>,
    size: Size,
    status: Option<Status>,
    width: Option<String>,
    clearable: bool,
    searching: Option<bool>,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
    handlers: Handlers,
}

impl AutocompleteBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one option.
    pub fn option(mut self, entry: impl Into<OptionsEntry>) -> Self {
        self.options.push(entry.into());
        self
    }

    /// Add options from an iterator.
    pub fn options<I, E>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<OptionsEntry>,
    {
        self.options.extend(entries.into_iter().map(Into::into));
        self
    }

    /// Set the initial text value (consumed only at construction).
    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    /// Set a controlled text value (wins over `initial_value`).
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the size token.
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the validation-state token.
    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the layout width string forwarded to the input primitive.
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Enable the clear affordance.
    ///
    /// Only effective while no `searching` flag is supplied.
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    /// Set the searching flag. Not calling this leaves the flag absent,
    /// which is a different state from `searching(false)`.
    pub fn searching(mut self, searching: bool) -> Self {
        self.searching = Some(searching);
        self
    }

    /// Add a pass-through low-level input attribute.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    /// Add one child node (slot or pass-through content).
    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// Add children from an iterator.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Notification fired whenever the text changes, for any reason.
    pub fn on_change(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.handlers.on_change = Some(Arc::new(f));
        self
    }

    /// Notification fired on every keystroke and on dropdown opening.
    pub fn on_search(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.handlers.on_search = Some(Arc::new(f));
        self
    }

    /// Notification fired when a suggestion is chosen.
    pub fn on_select(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.handlers.on_select = Some(Arc::new(f));
        self
    }

    /// Build the autocomplete.
    pub fn build(self) -> Autocomplete {
        // Controlled value > initial value > empty.
        let text = self
            .value
            .or(self.initial_value)
            .unwrap_or_default();

        let inner = AutocompleteInner {
            text,
            options: self.options,
            options_rev: 0,
            searching: self.searching,
            clearable: self.clearable,
            size: self.size,
            status: self.status,
            width: self.width,
            attrs: self.attrs,
            children: self.children,
            anchor: None,
            content_cache: Memo::new(),
        };

        Autocomplete::from_parts(inner, self.handlers)
    }
}
