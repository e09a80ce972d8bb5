//! Child-content tree at the widget boundary.
//!
//! Hosts supply children as `Node` values: selectable items, plain text,
//! and the two recognized slot kinds (a custom searching view and a custom
//! empty view). Every variant carries an explicit [`NodeKind`] discriminant
//! so the slot resolver can match on kind rather than content shape.

/// A piece of renderable child content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Plain text content.
    Text(String),
    /// A selectable suggestion item.
    ///
    /// `value` is what gets reported through the shared context on
    /// selection; `body` is the rendered label content. `key` is the
    /// synthetic positional identity assigned by the option normalizer.
    Item {
        key: Option<String>,
        value: String,
        body: Vec<Node>,
    },
    /// Custom view shown while a search is in flight.
    Searching(Vec<Node>),
    /// Custom view shown when no options match a non-empty query.
    Empty(Vec<Node>),
}

/// Discriminant tag for [`Node`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Text,
    Item,
    Searching,
    Empty,
}

impl Node {
    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Create an item node with a text label as its body.
    pub fn item(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Item {
            key: None,
            value: value.into(),
            body: vec![Node::Text(label.into())],
        }
    }

    /// Create a custom searching-view slot.
    pub fn searching(body: Vec<Node>) -> Self {
        Self::Searching(body)
    }

    /// Create a custom empty-view slot.
    pub fn empty(body: Vec<Node>) -> Self {
        Self::Empty(body)
    }

    /// The kind discriminant of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Text(_) => NodeKind::Text,
            Self::Item { .. } => NodeKind::Item,
            Self::Searching(_) => NodeKind::Searching,
            Self::Empty(_) => NodeKind::Empty,
        }
    }

    /// The synthetic key, if one has been assigned.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Item { key, .. } => key.as_deref(),
            _ => None,
        }
    }

    /// The selectable value, for item nodes.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Item { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Assign a positional key. Non-item nodes pass through unchanged.
    pub(crate) fn with_key(self, key: impl Into<String>) -> Self {
        match self {
            Self::Item { value, body, .. } => Self::Item {
                key: Some(key.into()),
                value,
                body,
            },
            other => other,
        }
    }

    /// Flatten the node to its plain text, for width measurement.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Text(content) => content.clone(),
            Self::Item { body, .. } | Self::Searching(body) | Self::Empty(body) => {
                body.iter().map(Node::plain_text).collect()
            }
        }
    }
}
