//! A selectable option.

use serde::{Deserialize, Serialize};

/// One selectable item from the backing control.
///
/// `value` identifies the option. Uniqueness is assumed, not enforced: with
/// duplicate values, selecting by value affects every match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub selected: bool,
    /// Extra markup from the integrator, passed through verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inject: Option<String>,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected: false,
            inject: None,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn inject(mut self, markup: impl Into<String>) -> Self {
        self.inject = Some(markup.into());
        self
    }

    /// Injected markup, or the empty string.
    pub fn injectable_content(&self) -> &str {
        self.inject.as_deref().unwrap_or_default()
    }
}
