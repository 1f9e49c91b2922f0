//! Translating host events into widget interactions.
//!
//! The host delivers raw events with a snapshot of their target element;
//! [`resolve`] matches the target against the configured selectors, the way
//! a delegated listener on the control's parent would. Events whose target
//! matches nothing are not interactions and are left to the host.

use pickdom::Element;
use serde::{Deserialize, Serialize};

use crate::config::Selectors;

/// Attribute carrying an option value on rendered action targets.
pub const VALUE_ATTR: &str = "data-value";
const VALUE_KEY: &str = "value";

/// A user interaction the widget reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Interaction {
    /// The select action of an option row was activated
    #[serde(rename_all = "camelCase")]
    SelectRow { value: String },
    /// The remove action of a selected row was activated
    #[serde(rename_all = "camelCase")]
    RemoveRow { value: String },
    /// The search input reported its current text
    #[serde(rename_all = "camelCase")]
    SearchChanged { text: String },
    /// The select-all checkbox changed
    #[serde(rename_all = "camelCase")]
    SelectAllToggled { checked: bool },
}

/// A host event, before interpretation.
#[derive(Debug, Clone)]
pub enum RawEvent {
    Click { target: Element },
    KeyUp { target: Element, value: String },
    Change { target: Element, checked: bool },
}

impl RawEvent {
    pub fn target(&self) -> &Element {
        match self {
            Self::Click { target } | Self::KeyUp { target, .. } | Self::Change { target, .. } => {
                target
            }
        }
    }
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Not an interaction with this widget
    Ignored,
    /// Handled; the views are up to date
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Interpret `event` against the configured selectors.
///
/// Action targets without a `data-value` attribute resolve to nothing.
pub fn resolve(event: &RawEvent, selectors: &Selectors) -> Option<Interaction> {
    match event {
        RawEvent::Click { target } => {
            let value = || target.get_data(VALUE_KEY).map(str::to_string);
            if selectors.select_action.matches(target) {
                value().map(|value| Interaction::SelectRow { value })
            } else if selectors.remove_action.matches(target) {
                value().map(|value| Interaction::RemoveRow { value })
            } else {
                None
            }
        }
        RawEvent::KeyUp { target, value } => selectors
            .search
            .matches(target)
            .then(|| Interaction::SearchChanged { text: value.clone() }),
        RawEvent::Change { target, checked } => selectors
            .select_all
            .matches(target)
            .then_some(Interaction::SelectAllToggled { checked: *checked }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn selectors() -> Selectors {
        Config::default().selectors().unwrap()
    }

    #[test]
    fn test_click_on_select_action() {
        let target = Element::new("span").class("btn-select").attr(VALUE_ATTR, "a");
        assert_eq!(
            resolve(&RawEvent::Click { target }, &selectors()),
            Some(Interaction::SelectRow { value: "a".into() })
        );
    }

    #[test]
    fn test_click_on_remove_action() {
        let target = Element::new("a").class("btn-close").attr(VALUE_ATTR, "b");
        assert_eq!(
            resolve(&RawEvent::Click { target }, &selectors()),
            Some(Interaction::RemoveRow { value: "b".into() })
        );
    }

    #[test]
    fn test_click_without_value_is_ignored() {
        let target = Element::new("span").class("btn-select");
        assert_eq!(resolve(&RawEvent::Click { target }, &selectors()), None);

        let target = Element::new("span").class("unrelated").attr(VALUE_ATTR, "a");
        assert_eq!(resolve(&RawEvent::Click { target }, &selectors()), None);
    }

    #[test]
    fn test_keyup_and_change() {
        let search = Element::new("input").class("search-block");
        let event = RawEvent::KeyUp {
            target: search,
            value: "Bo".into(),
        };
        assert_eq!(
            resolve(&event, &selectors()),
            Some(Interaction::SearchChanged { text: "Bo".into() })
        );

        let checkbox = Element::new("input").class("searchable-select-all");
        let event = RawEvent::Change {
            target: checkbox,
            checked: true,
        };
        assert_eq!(
            resolve(&event, &selectors()),
            Some(Interaction::SelectAllToggled { checked: true })
        );
    }

    #[test]
    fn test_interaction_json_shape() {
        let parsed: Interaction =
            serde_json::from_str(r#"{ "type": "selectAllToggled", "checked": false }"#).unwrap();
        assert_eq!(parsed, Interaction::SelectAllToggled { checked: false });

        let json = serde_json::to_string(&Interaction::RemoveRow { value: "a".into() }).unwrap();
        assert_eq!(json, r#"{"type":"removeRow","value":"a"}"#);
    }
}
