//! Page descriptions.
//!
//! A page is a JSON file describing one backing control, the containers
//! around it, the configuration layers and a script of interactions:
//!
//! ```json
//! {
//!   "control": "people",
//!   "label": "People",
//!   "options": [
//!     { "value": "a", "label": "Alice" },
//!     { "value": "b", "label": "Bob", "selected": true }
//!   ],
//!   "attributes": { "data-search-placeholder": "Find someone" },
//!   "emptyOutput": "<li>Nobody yet</li>",
//!   "overrides": { "buttonText": "Add" },
//!   "script": [{ "type": "selectRow", "value": "a" }]
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use pickdom::{Document, Element};
use picklist::registry::INJECT_ATTR;
use picklist::{ConfigLayer, Interaction, SelectOption};
use serde::Deserialize;

use crate::error::CliError;

fn default_list_class() -> String {
    "left-col".to_string()
}

fn default_output_id() -> String {
    "selected-list".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Page {
    /// HTML id of the backing control
    pub control: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    /// Extra attributes on the backing control, typically `data-*` overrides
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default = "default_list_class")]
    pub list_class: String,
    #[serde(default = "default_output_id")]
    pub output_id: String,
    #[serde(default)]
    pub empty_output: String,
    #[serde(default)]
    pub defaults: ConfigLayer,
    #[serde(default)]
    pub overrides: ConfigLayer,
    #[serde(default)]
    pub script: Vec<Interaction>,
}

impl Page {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let json = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the host document: label, control, list and output containers
    /// side by side in one wrapper.
    pub fn document(&self) -> Document {
        let mut control = Element::new("select")
            .id(self.control.as_str())
            .attr("multiple", "")
            .children(self.options.iter().map(option_element));
        for (name, value) in &self.attributes {
            control.set_attr(name.as_str(), value.as_str());
        }

        let mut wrapper = Element::div().class("searchable-select");
        if let Some(label) = &self.label {
            wrapper = wrapper.child(
                Element::new("label")
                    .attr("for", self.control.as_str())
                    .text(label.as_str()),
            );
        }
        let wrapper = wrapper
            .child(control)
            .child(Element::div().class(self.list_class.as_str()))
            .child(
                Element::new("ul")
                    .id(self.output_id.as_str())
                    .html(self.empty_output.as_str()),
            );

        Document::new(wrapper)
    }
}

fn option_element(option: &SelectOption) -> Element {
    let mut element = Element::new("option")
        .attr("value", option.value.as_str())
        .text(option.label.as_str());
    if option.selected {
        element = element.attr("selected", "");
    }
    if let Some(markup) = &option.inject {
        element = element.attr(INJECT_ATTR, markup.as_str());
    }
    element
}
