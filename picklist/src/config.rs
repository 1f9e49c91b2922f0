//! Widget configuration.
//!
//! A [`Config`] is built once per instance by layering partial
//! [`ConfigLayer`]s over the built-in defaults and is never mutated after
//! construction. Mounting uses three layers, later ones winning:
//!
//! 1. programmatic defaults supplied by the integrator
//! 2. `data-*` attributes on the backing control
//! 3. explicit per-call overrides

use pickdom::{Element, Selector};
use serde::Deserialize;

use crate::error::InitError;
use crate::template::Templates;

pub const DEFAULT_CONTAINER_SELECTOR: &str = ".left-col";
pub const DEFAULT_OUTPUT_SELECTOR: &str = "#selected-list";
pub const DEFAULT_SELECT_ACTION_SELECTOR: &str = ".btn-select";
pub const DEFAULT_REMOVE_ACTION_SELECTOR: &str = ".btn-close";
pub const DEFAULT_SEARCH_SELECTOR: &str = ".search-block";
pub const DEFAULT_SELECT_ALL_SELECTOR: &str = ".searchable-select-all";

/// Control attribute redirecting the output panel.
pub const ATTR_OUTPUT: &str = "data-output-class";
/// Control attribute overriding the search placeholder.
pub const ATTR_PLACEHOLDER: &str = "data-search-placeholder";
/// Control attribute overriding the select-all text.
pub const ATTR_SELECT_ALL: &str = "data-select-all";
/// Control attribute overriding the deselect-all text.
pub const ATTR_DESELECT_ALL: &str = "data-remove-all";

/// Fully resolved configuration of one widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Selectors
    pub container_selector: String,
    pub output_selector: String,
    pub select_action_selector: String,
    pub remove_action_selector: String,
    pub search_selector: String,
    pub select_all_selector: String,

    // Text
    pub select_all_text: String,
    pub deselect_all_text: String,
    pub placeholder_text: String,
    pub button_text: String,
    pub selected_button_text: String,

    // Markup
    pub templates: Templates,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_string(),
            output_selector: DEFAULT_OUTPUT_SELECTOR.to_string(),
            select_action_selector: DEFAULT_SELECT_ACTION_SELECTOR.to_string(),
            remove_action_selector: DEFAULT_REMOVE_ACTION_SELECTOR.to_string(),
            search_selector: DEFAULT_SEARCH_SELECTOR.to_string(),
            select_all_selector: DEFAULT_SELECT_ALL_SELECTOR.to_string(),
            select_all_text: "Select all".to_string(),
            deselect_all_text: "Deselect all".to_string(),
            placeholder_text: "Search options".to_string(),
            button_text: "Select".to_string(),
            selected_button_text: "Selected".to_string(),
            templates: Templates::default(),
        }
    }
}

impl Config {
    /// Merge `layers` over the defaults, later layers winning field by field.
    pub fn layered<'a>(layers: impl IntoIterator<Item = &'a ConfigLayer>) -> Self {
        let mut config = Self::default();
        for layer in layers {
            config.apply(layer);
        }
        config
    }

    fn apply(&mut self, layer: &ConfigLayer) {
        fn set(target: &mut String, value: &Option<String>) {
            if let Some(value) = value {
                target.clone_from(value);
            }
        }

        set(&mut self.container_selector, &layer.container_selector);
        set(&mut self.output_selector, &layer.output_selector);
        set(&mut self.select_action_selector, &layer.select_action_selector);
        set(&mut self.remove_action_selector, &layer.remove_action_selector);
        set(&mut self.search_selector, &layer.search_selector);
        set(&mut self.select_all_selector, &layer.select_all_selector);
        set(&mut self.select_all_text, &layer.select_all_text);
        set(&mut self.deselect_all_text, &layer.deselect_all_text);
        set(&mut self.placeholder_text, &layer.placeholder_text);
        set(&mut self.button_text, &layer.button_text);
        set(&mut self.selected_button_text, &layer.selected_button_text);
        set(&mut self.templates.container, &layer.templates.container);
        set(&mut self.templates.select_all, &layer.templates.select_all);
        set(&mut self.templates.option_row, &layer.templates.option_row);
        set(&mut self.templates.selected_row, &layer.templates.selected_row);
    }

    /// Parse every selector, failing on the first invalid one.
    pub fn selectors(&self) -> Result<Selectors, InitError> {
        fn parse(field: &'static str, selector: &str) -> Result<Selector, InitError> {
            Selector::parse(selector).map_err(|source| InitError::InvalidSelector {
                field,
                selector: selector.to_string(),
                source,
            })
        }

        // Rendered rows carry the action class, so an action selector must
        // name at least one class or no row could ever match it.
        fn parse_action(field: &'static str, selector: &str) -> Result<Selector, InitError> {
            let parsed = parse(field, selector)?;
            if parsed.class_names().is_empty() {
                return Err(InitError::ActionWithoutClass {
                    field,
                    selector: selector.to_string(),
                });
            }
            Ok(parsed)
        }

        Ok(Selectors {
            container: parse("container", &self.container_selector)?,
            output: parse("output", &self.output_selector)?,
            select_action: parse_action("select action", &self.select_action_selector)?,
            remove_action: parse_action("remove action", &self.remove_action_selector)?,
            search: parse("search", &self.search_selector)?,
            select_all: parse("select-all", &self.select_all_selector)?,
        })
    }
}

/// Parsed form of the configured selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
    pub container: Selector,
    pub output: Selector,
    pub select_action: Selector,
    pub remove_action: Selector,
    pub search: Selector,
    pub select_all: Selector,
}

/// A partial configuration. `None` fields leave the layer below untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigLayer {
    pub container_selector: Option<String>,
    pub output_selector: Option<String>,
    pub select_action_selector: Option<String>,
    pub remove_action_selector: Option<String>,
    pub search_selector: Option<String>,
    pub select_all_selector: Option<String>,
    pub select_all_text: Option<String>,
    pub deselect_all_text: Option<String>,
    pub placeholder_text: Option<String>,
    pub button_text: Option<String>,
    pub selected_button_text: Option<String>,
    pub templates: TemplateLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TemplateLayer {
    pub container: Option<String>,
    pub select_all: Option<String>,
    pub option_row: Option<String>,
    pub selected_row: Option<String>,
}

impl ConfigLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides read from the backing control's `data-*` attributes.
    ///
    /// Empty attribute values are ignored.
    pub fn from_attributes(control: &Element) -> Self {
        let read = |name: &str| {
            control
                .get_attr(name)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        Self {
            output_selector: read(ATTR_OUTPUT),
            placeholder_text: read(ATTR_PLACEHOLDER),
            select_all_text: read(ATTR_SELECT_ALL),
            deselect_all_text: read(ATTR_DESELECT_ALL),
            ..Default::default()
        }
    }

    pub fn container_selector(mut self, selector: impl Into<String>) -> Self {
        self.container_selector = Some(selector.into());
        self
    }

    pub fn output_selector(mut self, selector: impl Into<String>) -> Self {
        self.output_selector = Some(selector.into());
        self
    }

    pub fn placeholder_text(mut self, text: impl Into<String>) -> Self {
        self.placeholder_text = Some(text.into());
        self
    }

    pub fn select_all_text(mut self, text: impl Into<String>) -> Self {
        self.select_all_text = Some(text.into());
        self
    }

    pub fn deselect_all_text(mut self, text: impl Into<String>) -> Self {
        self.deselect_all_text = Some(text.into());
        self
    }

    pub fn button_texts(mut self, select: impl Into<String>, selected: impl Into<String>) -> Self {
        self.button_text = Some(select.into());
        self.selected_button_text = Some(selected.into());
        self
    }

    pub fn option_row_template(mut self, template: impl Into<String>) -> Self {
        self.templates.option_row = Some(template.into());
        self
    }

    pub fn selected_row_template(mut self, template: impl Into<String>) -> Self {
        self.templates.selected_row = Some(template.into());
        self
    }

    pub fn container_template(mut self, template: impl Into<String>) -> Self {
        self.templates.container = Some(template.into());
        self
    }

    pub fn select_all_template(mut self, template: impl Into<String>) -> Self {
        self.templates.select_all = Some(template.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_layers_win() {
        let defaults = ConfigLayer::new()
            .placeholder_text("from defaults")
            .select_all_text("All of them");
        let attrs = ConfigLayer::new().placeholder_text("from attributes");
        let explicit = ConfigLayer::new().select_all_text("Everything");

        let config = Config::layered([&defaults, &attrs, &explicit]);
        assert_eq!(config.placeholder_text, "from attributes");
        assert_eq!(config.select_all_text, "Everything");
        assert_eq!(config.deselect_all_text, "Deselect all");
    }

    #[test]
    fn test_explicit_override_beats_attribute() {
        let control = Element::new("select")
            .attr(ATTR_OUTPUT, "#from-attr")
            .attr(ATTR_PLACEHOLDER, "");
        let attrs = ConfigLayer::from_attributes(&control);
        assert_eq!(attrs.placeholder_text, None);

        let explicit = ConfigLayer::new().output_selector("#explicit");
        let config = Config::layered([&ConfigLayer::new(), &attrs, &explicit]);
        assert_eq!(config.output_selector, "#explicit");

        let config = Config::layered([&ConfigLayer::new(), &attrs]);
        assert_eq!(config.output_selector, "#from-attr");
    }

    #[test]
    fn test_layer_deserializes_camel_case() {
        let layer: ConfigLayer = serde_json::from_str(
            r##"{
                "outputSelector": "#picked",
                "buttonText": "Assign",
                "templates": { "selectedRow": "<li>{{optionTitle}}</li>" }
            }"##,
        )
        .unwrap();

        assert_eq!(layer.output_selector.as_deref(), Some("#picked"));
        assert_eq!(layer.button_text.as_deref(), Some("Assign"));
        assert_eq!(
            layer.templates.selected_row.as_deref(),
            Some("<li>{{optionTitle}}</li>")
        );
    }

    #[test]
    fn test_layer_rejects_unknown_keys() {
        let result: Result<ConfigLayer, _> = serde_json::from_str(r##"{ "outputClass": "#x" }"##);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_selector_is_reported() {
        let config = Config::layered([&ConfigLayer::new().container_selector(".a .b")]);
        match config.selectors() {
            Err(InitError::InvalidSelector { field, selector, .. }) => {
                assert_eq!(field, "container");
                assert_eq!(selector, ".a .b");
            }
            other => panic!("expected invalid selector, got {other:?}"),
        }
    }

    #[test]
    fn test_action_selector_needs_a_class() {
        let config = Config::layered([&ConfigLayer {
            select_action_selector: Some("[data-pick]".into()),
            ..ConfigLayer::default()
        }]);
        assert_eq!(
            config.selectors(),
            Err(InitError::ActionWithoutClass {
                field: "select action",
                selector: "[data-pick]".to_string(),
            })
        );

        let config = Config::layered([&ConfigLayer {
            remove_action_selector: Some("a.drop[data-value]".into()),
            ..ConfigLayer::default()
        }]);
        let selectors = config.selectors().unwrap();
        assert_eq!(selectors.remove_action.class_attr(), "drop");
    }
}
