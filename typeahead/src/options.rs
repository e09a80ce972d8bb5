//! Option list normalization.
//!
//! Hosts can mix plain label/value pairs with pre-built item nodes in one
//! options list. The normalizer turns both into a uniform ordered item
//! sequence with stable positional keys.

use crate::node::Node;

/// A candidate suggestion as a plain label/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteOption {
    /// Display text shown in the dropdown.
    pub label: String,
    /// Value reported on selection.
    pub value: String,
}

impl AutocompleteOption {
    /// Create a new option.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl<S1, S2> From<(S1, S2)> for AutocompleteOption
where
    S1: Into<String>,
    S2: Into<String>,
{
    fn from((label, value): (S1, S2)) -> Self {
        Self::new(label, value)
    }
}

/// One element of the options input: a plain pair or a pre-built item node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsEntry {
    /// A label/value pair the normalizer wraps into an item.
    Pair(AutocompleteOption),
    /// A pre-built node passed through with only a positional key assigned.
    Item(Node),
}

impl OptionsEntry {
    /// The display label, for width measurement.
    pub fn label_text(&self) -> String {
        match self {
            Self::Pair(option) => option.label.clone(),
            Self::Item(node) => node.plain_text(),
        }
    }
}

impl From<AutocompleteOption> for OptionsEntry {
    fn from(option: AutocompleteOption) -> Self {
        Self::Pair(option)
    }
}

impl<S1, S2> From<(S1, S2)> for OptionsEntry
where
    S1: Into<String>,
    S2: Into<String>,
{
    fn from(pair: (S1, S2)) -> Self {
        Self::Pair(pair.into())
    }
}

impl From<Node> for OptionsEntry {
    fn from(node: Node) -> Self {
        Self::Item(node)
    }
}

/// Normalize an options list into renderable item nodes.
///
/// One node per entry, input order preserved. Identity is positional: every
/// node gets the synthetic key `"{widget_id}-item-{index}"`, never a key
/// derived from its content. Pre-built nodes keep their value and body
/// untouched. An empty input yields an empty output; entries are not
/// validated.
pub fn normalize_options(widget_id: &str, entries: &[OptionsEntry]) -> Vec<Node> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let key = format!("{widget_id}-item-{index}");
            match entry {
                OptionsEntry::Pair(option) => Node::Item {
                    key: Some(key),
                    value: option.value.clone(),
                    body: vec![Node::Text(option.label.clone())],
                },
                OptionsEntry::Item(node) => node.clone().with_key(key),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(normalize_options("ac", &[]).is_empty());
    }

    #[test]
    fn test_pairs_are_wrapped_in_order() {
        let entries: Vec<OptionsEntry> =
            vec![("Foo", "foo").into(), ("Bar", "bar").into()];
        let nodes = normalize_options("ac", &entries);

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].value(), Some("foo"));
        assert_eq!(nodes[1].value(), Some("bar"));
        assert_eq!(nodes[0].key(), Some("ac-item-0"));
        assert_eq!(nodes[1].key(), Some("ac-item-1"));
        assert_eq!(nodes[0].plain_text(), "Foo");
    }

    #[test]
    fn test_prebuilt_item_passes_through_with_positional_key() {
        let custom = Node::Item {
            key: Some("host-key".into()),
            value: "x".into(),
            body: vec![Node::text("Custom X"), Node::text("!")],
        };
        let entries = vec![OptionsEntry::Item(custom)];
        let nodes = normalize_options("ac", &entries);

        // Key is reassigned positionally; value and body are untouched.
        assert_eq!(nodes[0].key(), Some("ac-item-0"));
        assert_eq!(nodes[0].value(), Some("x"));
        assert_eq!(nodes[0].plain_text(), "Custom X!");
    }

    #[test]
    fn test_non_item_node_passes_through_unmodified() {
        // Garbage in, garbage out: a text node in the options list is not
        // rejected and not rewritten.
        let entries = vec![OptionsEntry::Item(Node::text("loose"))];
        let nodes = normalize_options("ac", &entries);

        assert_eq!(nodes[0], Node::text("loose"));
        assert_eq!(nodes[0].key(), None);
    }
}
