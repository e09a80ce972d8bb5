//! Fuzzy filtering helper for client-side hosts.
//!
//! The widget core never filters: search execution is the host's concern.
//! Hosts that filter locally (the no-`searching`-flag flow) can use these
//! helpers to compute the options they feed back into the widget.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::options::AutocompleteOption;

/// Result of a fuzzy filter operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterMatch {
    /// Index of the matched label in the input list.
    pub index: usize,
    /// Match score (higher is better).
    pub score: u32,
}

/// Fuzzy-match `query` against `labels`, best matches first.
///
/// An empty query matches everything with score 0, in input order.
pub fn fuzzy_filter<S: AsRef<str>>(query: &str, labels: &[S]) -> Vec<FilterMatch> {
    if query.is_empty() {
        return (0..labels.len())
            .map(|index| FilterMatch { index, score: 0 })
            .collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut buf = Vec::new();
    let mut matches: Vec<FilterMatch> = labels
        .iter()
        .enumerate()
        .filter_map(|(index, label)| {
            let haystack = Utf32Str::new(label.as_ref(), &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| FilterMatch { index, score })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

/// Filter an option list by fuzzy-matching labels against `query`.
///
/// Convenience over [`fuzzy_filter`] for feeding straight back into
/// `Autocomplete::set_options`.
pub fn filter_options(query: &str, options: &[AutocompleteOption]) -> Vec<AutocompleteOption> {
    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
    fuzzy_filter(query, &labels)
        .into_iter()
        .filter_map(|m| options.get(m.index).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<&'static str> {
        vec!["United States", "United Kingdom", "Germany"]
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let matches = fuzzy_filter("", &labels());
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0], FilterMatch { index: 0, score: 0 });
        assert_eq!(matches[2], FilterMatch { index: 2, score: 0 });
    }

    #[test]
    fn test_non_matching_labels_are_dropped() {
        let matches = fuzzy_filter("germ", &labels());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].index, 2);
    }

    #[test]
    fn test_matches_sorted_by_score_descending() {
        let matches = fuzzy_filter("united", &labels());
        assert_eq!(matches.len(), 2);
        assert!(matches[0].score >= matches[1].score);
    }

    #[test]
    fn test_filter_options_preserves_pairs() {
        let options = vec![
            AutocompleteOption::new("United States", "us"),
            AutocompleteOption::new("Germany", "de"),
        ];
        let filtered = filter_options("germ", &options);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].value, "de");
    }
}
