//! Named-slot extraction from the widget's child content.
//!
//! The widget recognizes two slot kinds in its children: a custom searching
//! view and a custom empty view. Matching is by [`NodeKind`] equality only.
//! Duplicate policy: first match wins; later duplicates of a recognized
//! slot kind are dropped entirely.

use log::debug;

use crate::node::{Node, NodeKind};

/// Result of partitioning child content into named slots.
///
/// Recomputed from the current children on every view evaluation;
/// never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotExtraction {
    /// Custom searching view, if supplied.
    pub searching: Option<Node>,
    /// Custom empty view, if supplied.
    pub empty: Option<Node>,
    /// Everything else, unmodified and in order.
    pub remainder: Vec<Node>,
}

/// Partition children into the recognized slots and the remainder.
pub fn resolve_slots(children: &[Node]) -> SlotExtraction {
    let mut extraction = SlotExtraction::default();

    for child in children {
        match child.kind() {
            NodeKind::Searching => {
                if extraction.searching.is_none() {
                    extraction.searching = Some(child.clone());
                } else {
                    debug!("duplicate searching slot ignored (first match wins)");
                }
            }
            NodeKind::Empty => {
                if extraction.empty.is_none() {
                    extraction.empty = Some(child.clone());
                } else {
                    debug!("duplicate empty slot ignored (first match wins)");
                }
            }
            _ => extraction.remainder.push(child.clone()),
        }
    }

    extraction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_both_slots_and_remainder() {
        let children = vec![
            Node::text("intro"),
            Node::searching(vec![Node::text("spinning")]),
            Node::item("v", "label"),
            Node::empty(vec![Node::text("nothing here")]),
        ];
        let slots = resolve_slots(&children);

        assert_eq!(
            slots.searching,
            Some(Node::searching(vec![Node::text("spinning")]))
        );
        assert_eq!(
            slots.empty,
            Some(Node::empty(vec![Node::text("nothing here")]))
        );
        assert_eq!(
            slots.remainder,
            vec![Node::text("intro"), Node::item("v", "label")]
        );
    }

    #[test]
    fn test_absent_slots() {
        let slots = resolve_slots(&[Node::text("only text")]);
        assert_eq!(slots.searching, None);
        assert_eq!(slots.empty, None);
        assert_eq!(slots.remainder, vec![Node::text("only text")]);
    }

    #[test]
    fn test_duplicate_slot_first_match_wins() {
        let children = vec![
            Node::empty(vec![Node::text("first")]),
            Node::empty(vec![Node::text("second")]),
        ];
        let slots = resolve_slots(&children);

        assert_eq!(slots.empty, Some(Node::empty(vec![Node::text("first")])));
        // The duplicate is dropped, not demoted to remainder.
        assert!(slots.remainder.is_empty());
    }

    #[test]
    fn test_matching_is_by_kind_not_content() {
        // An empty-bodied searching slot still claims the slot.
        let children = vec![
            Node::searching(vec![]),
            Node::searching(vec![Node::text("rich")]),
        ];
        let slots = resolve_slots(&children);
        assert_eq!(slots.searching, Some(Node::searching(vec![])));
    }
}
