//! Search filtering over the option list.
//!
//! Filtering never touches selection state. It derives the set of visible
//! values from the registry and toggles rendered rows; rows are never removed,
//! so a cleared search restores every row without re-rendering.

use std::collections::HashSet;
use std::fmt;

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use pickdom::Fragment;

use crate::registry::OptionRegistry;

/// The current search string: trimmed and lower-cased on entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchText(String);

impl SearchText {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty search means "show everything".
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive substring match against a label.
    pub fn matches(&self, label: &str) -> bool {
        self.is_empty() || label.trim().to_lowercase().contains(&self.0)
    }
}

impl fmt::Display for SearchText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Values of the options whose label contains the search text.
pub fn visible_values(registry: &OptionRegistry, search: &SearchText) -> HashSet<String> {
    registry
        .list()
        .iter()
        .filter(|option| search.matches(&option.label))
        .map(|option| option.value.clone())
        .collect()
}

/// Values of the options whose label fuzzy-matches the search text.
///
/// Opt-in alternative to [`visible_values`], only reached through
/// [`FuzzyBehavior`](crate::behavior::FuzzyBehavior). Uses nucleo-matcher
/// with smart normalization; an empty search shows all.
pub fn fuzzy_visible_values(registry: &OptionRegistry, search: &SearchText) -> HashSet<String> {
    if search.is_empty() {
        return registry.list().iter().map(|o| o.value.clone()).collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        search.as_str(),
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut buf = Vec::new();
    registry
        .list()
        .iter()
        .filter(|option| {
            let haystack = Utf32Str::new(option.label.trim(), &mut buf);
            pattern.score(haystack, &mut matcher).is_some()
        })
        .map(|option| option.value.clone())
        .collect()
}

/// Show every row, then hide those whose value is not visible.
///
/// Returns the number of hidden rows.
pub fn apply_visibility(fragment: &mut Fragment, visible: &HashSet<String>) -> usize {
    let mut hidden = 0;
    for item in fragment.items_mut() {
        item.show();
        if !visible.contains(&item.value) {
            item.hide();
            hidden += 1;
        }
    }
    log::trace!("[filter] {} rows hidden", hidden);
    hidden
}

#[cfg(test)]
mod tests {
    use pickdom::Item;

    use super::*;
    use crate::option::SelectOption;

    fn registry() -> OptionRegistry {
        OptionRegistry::new(vec![
            SelectOption::new("a", "Alice"),
            SelectOption::new("b", "Bob"),
            SelectOption::new("r", " Roberta "),
        ])
    }

    fn values(set: HashSet<String>) -> Vec<String> {
        let mut values: Vec<_> = set.into_iter().collect();
        values.sort();
        values
    }

    #[test]
    fn test_search_text_is_trimmed_and_lowercased() {
        assert_eq!(SearchText::new("  BoB ").as_str(), "bob");
        assert!(SearchText::new("   ").is_empty());
    }

    #[test]
    fn test_empty_search_shows_everything() {
        let visible = visible_values(&registry(), &SearchText::default());
        assert_eq!(values(visible), vec!["a", "b", "r"]);
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let visible = visible_values(&registry(), &SearchText::new("OB"));
        assert_eq!(values(visible), vec!["b", "r"]);
    }

    #[test]
    fn test_substring_match_is_not_fuzzy() {
        let visible = visible_values(&registry(), &SearchText::new("ae"));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_fuzzy_match_allows_gaps() {
        let visible = fuzzy_visible_values(&registry(), &SearchText::new("ae"));
        assert_eq!(values(visible), vec!["a"]);
    }

    #[test]
    fn test_apply_visibility_resets_previous_hiding() {
        let mut fragment = Fragment::new();
        fragment.push_item(Item::new("a", "<li>A</li>"));
        fragment.push_item(Item::new("b", "<li>B</li>"));

        let only_a: HashSet<String> = ["a".to_string()].into();
        assert_eq!(apply_visibility(&mut fragment, &only_a), 1);

        let only_b: HashSet<String> = ["b".to_string()].into();
        assert_eq!(apply_visibility(&mut fragment, &only_b), 1);

        let visible: Vec<_> = fragment
            .items()
            .filter(|item| item.is_visible())
            .map(|item| item.value.as_str())
            .collect();
        assert_eq!(visible, vec!["b"]);
    }
}
