//! The authoritative list of options for one widget instance.
//!
//! The registry is the single source of truth for selection: there is no
//! separate "selected set". Everything that needs the selection iterates the
//! registry, so the rendered views can never disagree with it.

use pickdom::element::walk_descendants;
use pickdom::Element;

use crate::option::SelectOption;

/// Attribute carrying per-option injectable markup on `<option>` elements.
pub const INJECT_ATTR: &str = "data-inject";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionRegistry {
    options: Vec<SelectOption>,
}

impl OptionRegistry {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self { options }
    }

    /// Read the `<option>` descendants of a backing control, in order.
    ///
    /// An option without a `value` attribute uses its text, as browsers do.
    /// Presence of the `selected` attribute marks it selected.
    pub fn from_control(control: &Element) -> Self {
        let mut options = Vec::new();
        walk_descendants(control, &mut |element| {
            if element.tag == "option" {
                options.push(option_from_element(element));
            }
        });
        Self { options }
    }

    /// Every option, in backing-control order.
    pub fn list(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Set the flag on every option whose value matches.
    ///
    /// Returns how many options matched; zero is not an error.
    pub fn set_selected(&mut self, value: &str, selected: bool) -> usize {
        let mut matched = 0;
        for option in self.options.iter_mut().filter(|o| o.value == value) {
            option.selected = selected;
            matched += 1;
        }
        matched
    }

    pub fn set_all_selected(&mut self, selected: bool) {
        for option in &mut self.options {
            option.selected = selected;
        }
    }

    pub fn selected(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter().filter(|o| o.selected)
    }

    /// Values of the selected options, in order.
    pub fn selected_values(&self) -> Vec<&str> {
        self.selected().map(|o| o.value.as_str()).collect()
    }

    /// Whether any option with this value is selected.
    pub fn is_selected(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value && o.selected)
    }
}

impl FromIterator<SelectOption> for OptionRegistry {
    fn from_iter<I: IntoIterator<Item = SelectOption>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn option_from_element(element: &Element) -> SelectOption {
    let label = element.text_content();
    let value = element
        .get_attr("value")
        .map(str::to_string)
        .unwrap_or_else(|| label.trim().to_string());
    let inject = element
        .get_attr(INJECT_ATTR)
        .filter(|markup| !markup.is_empty())
        .map(str::to_string);

    SelectOption {
        value,
        label,
        selected: element.get_attr("selected").is_some(),
        inject,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> OptionRegistry {
        OptionRegistry::new(vec![
            SelectOption::new("a", "Alice"),
            SelectOption::new("b", "Bob"),
            SelectOption::new("a", "Alice (again)"),
        ])
    }

    #[test]
    fn test_set_selected_hits_every_duplicate() {
        let mut registry = registry();
        assert_eq!(registry.set_selected("a", true), 2);
        assert_eq!(registry.selected_values(), vec!["a", "a"]);
    }

    #[test]
    fn test_set_selected_unknown_value_is_noop() {
        let mut registry = registry();
        let before = registry.clone();
        assert_eq!(registry.set_selected("zed", true), 0);
        assert_eq!(registry, before);
    }

    #[test]
    fn test_set_all_selected() {
        let mut registry = registry();
        registry.set_all_selected(true);
        assert!(registry.list().iter().all(|o| o.selected));
        registry.set_all_selected(false);
        assert_eq!(registry.selected().count(), 0);
    }

    #[test]
    fn test_from_control_reads_options_in_order() {
        let control = Element::new("select")
            .id("teachers")
            .child(Element::new("option").attr("value", "a").text("Alice"))
            .child(
                Element::new("optgroup").child(
                    Element::new("option")
                        .attr("value", "b")
                        .attr("selected", "")
                        .attr(INJECT_ATTR, "<em>new</em>")
                        .text("Bob"),
                ),
            )
            .child(Element::new("option").text("  Carol "));

        let registry = OptionRegistry::from_control(&control);
        assert_eq!(
            registry.list(),
            &[
                SelectOption::new("a", "Alice"),
                SelectOption::new("b", "Bob")
                    .selected(true)
                    .inject("<em>new</em>"),
                SelectOption::new("Carol", "  Carol "),
            ]
        );
    }
}
