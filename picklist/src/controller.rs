//! Selection transitions.
//!
//! Every transition is a single synchronous pass over the registry. The
//! caller follows each one with a full refresh; there is no partial update.

use crate::config::Config;
use crate::registry::OptionRegistry;
use crate::select_all::SelectAllControl;

/// A state-changing user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Select(String),
    Deselect(String),
    SelectAll,
    DeselectAll,
}

/// What a transition touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transition {
    /// Options whose flag was written (zero for an unknown value)
    pub matched: usize,
    /// Whether the select-all control changed and needs re-rendering
    pub select_all_changed: bool,
}

/// Apply `action` to the registry and, for bulk actions, the select-all control.
pub fn apply(
    registry: &mut OptionRegistry,
    select_all: &mut SelectAllControl,
    action: &Action,
    config: &Config,
) -> Transition {
    match action {
        Action::Select(value) => single(registry, value, true),
        Action::Deselect(value) => single(registry, value, false),
        Action::SelectAll => bulk(registry, select_all, true, config),
        Action::DeselectAll => bulk(registry, select_all, false, config),
    }
}

fn single(registry: &mut OptionRegistry, value: &str, selected: bool) -> Transition {
    let matched = registry.set_selected(value, selected);
    if matched == 0 {
        log::debug!("[controller] no option with value {:?}", value);
    }
    Transition {
        matched,
        select_all_changed: false,
    }
}

fn bulk(
    registry: &mut OptionRegistry,
    select_all: &mut SelectAllControl,
    selected: bool,
    config: &Config,
) -> Transition {
    registry.set_all_selected(selected);
    select_all.set(selected, &config.select_all_text, &config.deselect_all_text);
    Transition {
        matched: registry.len(),
        select_all_changed: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::SelectOption;

    fn setup() -> (OptionRegistry, SelectAllControl, Config) {
        let config = Config::default();
        let registry = OptionRegistry::new(vec![
            SelectOption::new("a", "Alice"),
            SelectOption::new("b", "Bob").selected(true),
        ]);
        let control = SelectAllControl::new(config.select_all_text.clone());
        (registry, control, config)
    }

    #[test]
    fn test_select_and_deselect_single() {
        let (mut registry, mut control, config) = setup();

        let t = apply(&mut registry, &mut control, &Action::Select("a".into()), &config);
        assert_eq!(t.matched, 1);
        assert!(!t.select_all_changed);
        assert!(registry.is_selected("a"));

        apply(&mut registry, &mut control, &Action::Deselect("b".into()), &config);
        assert_eq!(registry.selected_values(), vec!["a"]);
        assert!(!control.is_checked());
    }

    #[test]
    fn test_unknown_value_is_noop() {
        let (mut registry, mut control, config) = setup();
        let before = registry.clone();
        let t = apply(&mut registry, &mut control, &Action::Select("zed".into()), &config);
        assert_eq!(t, Transition::default());
        assert_eq!(registry, before);
    }

    #[test]
    fn test_bulk_actions_flip_control_label() {
        let (mut registry, mut control, config) = setup();

        apply(&mut registry, &mut control, &Action::SelectAll, &config);
        assert!(registry.list().iter().all(|o| o.selected));
        assert!(control.is_checked());
        assert_eq!(control.label(), config.deselect_all_text);

        apply(&mut registry, &mut control, &Action::DeselectAll, &config);
        assert!(registry.list().iter().all(|o| !o.selected));
        assert!(!control.is_checked());
        assert_eq!(control.label(), config.select_all_text);
    }
}
