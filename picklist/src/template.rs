//! Markup templates with `{{name}}` placeholders.
//!
//! Substitution is textual and unescaped. Labels, values and injected markup
//! are trusted as-is; integrators must not feed untrusted content through
//! them.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::option::SelectOption;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Za-z][A-Za-z0-9_]*)\}\}").expect("placeholder pattern is valid")
});

// =============================================================================
// Default templates
// =============================================================================

pub const DEFAULT_CONTAINER: &str = concat!(
    "<div class=\"search-w-results\">",
    "<div class=\"block-fixed\"><div class=\"form\">",
    "<input type=\"text\" class=\"search-block\" placeholder=\"{{placeholderText}}\" value=\"{{currentSearchText}}\">",
    "</div></div>",
    "<div class=\"block-scrollable\"><ul class=\"list-results\">{{initialOptions}}</ul></div>",
    "</div>",
);

pub const DEFAULT_SELECT_ALL: &str = concat!(
    "<div class=\"form\"><p><label class=\"label-default label-center\">",
    "<input type=\"checkbox\" class=\"searchable-select-all\"{{selectAllChecked}}> {{selectAllText}}",
    "</label></p></div>",
);

pub const DEFAULT_OPTION_ROW: &str = concat!(
    "<li class=\"selectable-row\">{{optionTitle}} ",
    "<span class=\"injectable\">{{injectableContent}}</span>",
    "<span class=\"{{selectedBtnClass}}\" data-value=\"{{optionValue}}\">{{btnText}}</span>",
    "</li>",
);

pub const DEFAULT_SELECTED_ROW: &str = concat!(
    "<li><span class=\"btn-tag\"><span>{{optionValue}}: {{optionTitle}}</span> ",
    "<a href=\"#\" class=\"{{btnRemoveClass}}\" data-value=\"{{optionValue}}\">X</a>",
    "</span></li>",
);

/// The four overridable templates of a widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    /// Shell around the option rows, search input included
    pub container: String,
    /// Select-all checkbox block, inserted before the list container
    pub select_all: String,
    /// One row of the option list
    pub option_row: String,
    /// One row of the selected-output panel
    pub selected_row: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER.to_string(),
            select_all: DEFAULT_SELECT_ALL.to_string(),
            option_row: DEFAULT_OPTION_ROW.to_string(),
            selected_row: DEFAULT_SELECTED_ROW.to_string(),
        }
    }
}

// =============================================================================
// Placeholders
// =============================================================================

/// Named placeholders understood by the default renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    InitialOptions,
    CurrentSearchText,
    PlaceholderText,
    SelectAllText,
    SelectAllChecked,
    OptionValue,
    OptionTitle,
    BtnText,
    SelectedBtnClass,
    InjectableContent,
    BtnRemoveClass,
}

impl Placeholder {
    pub const ALL: [Placeholder; 11] = [
        Self::InitialOptions,
        Self::CurrentSearchText,
        Self::PlaceholderText,
        Self::SelectAllText,
        Self::SelectAllChecked,
        Self::OptionValue,
        Self::OptionTitle,
        Self::BtnText,
        Self::SelectedBtnClass,
        Self::InjectableContent,
        Self::BtnRemoveClass,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::InitialOptions => "initialOptions",
            Self::CurrentSearchText => "currentSearchText",
            Self::PlaceholderText => "placeholderText",
            Self::SelectAllText => "selectAllText",
            Self::SelectAllChecked => "selectAllChecked",
            Self::OptionValue => "optionValue",
            Self::OptionTitle => "optionTitle",
            Self::BtnText => "btnText",
            Self::SelectedBtnClass => "selectedBtnClass",
            Self::InjectableContent => "injectableContent",
            Self::BtnRemoveClass => "btnRemoveClass",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// The `{{name}}` token as it appears in a template.
    pub fn token(self) -> String {
        format!("{{{{{}}}}}", self.name())
    }
}

/// Replace every occurrence of each supplied placeholder in one pass.
///
/// Substituted values are not scanned again, so a label containing `{{...}}`
/// stays literal. Placeholders without a supplied value are left untouched.
pub fn substitute(template: &str, values: &[(Placeholder, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            Placeholder::from_name(&caps[1])
                .and_then(|placeholder| values.iter().find(|(p, _)| *p == placeholder))
                .map(|(_, value)| (*value).to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

// =============================================================================
// Renderers
// =============================================================================

/// Wording and action class for one option row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowContext<'a> {
    pub button_text: &'a str,
    /// Class of the select action; empty for rows that are already selected
    pub button_class: &'a str,
}

impl<'a> RowContext<'a> {
    /// Pick the wording for `option`: selected rows get the "already
    /// selected" text and no select action.
    pub fn for_option(
        option: &SelectOption,
        button_text: &'a str,
        selected_button_text: &'a str,
        select_class: &'a str,
    ) -> Self {
        if option.selected {
            Self {
                button_text: selected_button_text,
                button_class: "",
            }
        } else {
            Self {
                button_text,
                button_class: select_class,
            }
        }
    }
}

pub fn render_option_row(template: &str, option: &SelectOption, cx: &RowContext<'_>) -> String {
    substitute(
        template,
        &[
            (Placeholder::OptionValue, option.value.as_str()),
            (Placeholder::OptionTitle, option.label.as_str()),
            (Placeholder::BtnText, cx.button_text),
            (Placeholder::SelectedBtnClass, cx.button_class),
            (Placeholder::InjectableContent, option.injectable_content()),
        ],
    )
}

pub fn render_selected_row(template: &str, option: &SelectOption, remove_class: &str) -> String {
    substitute(
        template,
        &[
            (Placeholder::OptionValue, option.value.as_str()),
            (Placeholder::OptionTitle, option.label.as_str()),
            (Placeholder::BtnRemoveClass, remove_class),
        ],
    )
}

pub fn render_container(
    template: &str,
    options_markup: &str,
    search_text: &str,
    placeholder: &str,
) -> String {
    substitute(
        template,
        &[
            (Placeholder::InitialOptions, options_markup),
            (Placeholder::CurrentSearchText, search_text),
            (Placeholder::PlaceholderText, placeholder),
        ],
    )
}

pub fn render_select_all(template: &str, label: &str, checked: bool) -> String {
    substitute(
        template,
        &[
            (Placeholder::SelectAllText, label),
            (Placeholder::SelectAllChecked, if checked { " checked" } else { "" }),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_replaces_every_occurrence() {
        let out = substitute(
            "{{optionValue}}-{{optionValue}}-{{optionValue}}",
            &[(Placeholder::OptionValue, "a")],
        );
        assert_eq!(out, "a-a-a");
    }

    #[test]
    fn test_substitute_leaves_unknown_placeholders() {
        let out = substitute(
            "{{optionTitle}} {{mystery}} {{btnText}}",
            &[(Placeholder::OptionTitle, "Alice")],
        );
        assert_eq!(out, "Alice {{mystery}} {{btnText}}");
    }

    #[test]
    fn test_substitute_does_not_rescan_values() {
        let out = substitute(
            "{{optionTitle}}|{{optionValue}}",
            &[
                (Placeholder::OptionTitle, "{{optionValue}}"),
                (Placeholder::OptionValue, "a"),
            ],
        );
        assert_eq!(out, "{{optionValue}}|a");
    }

    #[test]
    fn test_template_without_placeholder_drops_value() {
        let out = substitute("<li>static</li>", &[(Placeholder::OptionTitle, "Alice")]);
        assert_eq!(out, "<li>static</li>");
    }

    #[test]
    fn test_token_and_name_round_trip() {
        for placeholder in Placeholder::ALL {
            assert_eq!(Placeholder::from_name(placeholder.name()), Some(placeholder));
            assert_eq!(placeholder.token(), format!("{{{{{}}}}}", placeholder.name()));
        }
        assert_eq!(Placeholder::BtnText.token(), "{{btnText}}");
    }

    #[test]
    fn test_default_option_row_unselected() {
        let option = SelectOption::new("a", "Alice").inject("<b>new</b>");
        let cx = RowContext::for_option(&option, "Select", "Selected", "btn-select");
        assert_eq!(
            render_option_row(DEFAULT_OPTION_ROW, &option, &cx),
            "<li class=\"selectable-row\">Alice <span class=\"injectable\"><b>new</b></span>\
             <span class=\"btn-select\" data-value=\"a\">Select</span></li>"
        );
    }

    #[test]
    fn test_default_option_row_selected_loses_action() {
        let option = SelectOption::new("a", "Alice").selected(true);
        let cx = RowContext::for_option(&option, "Select", "Selected", "btn-select");
        assert_eq!(cx.button_class, "");
        let row = render_option_row(DEFAULT_OPTION_ROW, &option, &cx);
        assert!(row.contains("<span class=\"\" data-value=\"a\">Selected</span>"));
    }

    #[test]
    fn test_default_selected_row_has_value_twice() {
        let option = SelectOption::new("a", "Alice").selected(true);
        assert_eq!(
            render_selected_row(DEFAULT_SELECTED_ROW, &option, "btn-close"),
            "<li><span class=\"btn-tag\"><span>a: Alice</span> \
             <a href=\"#\" class=\"btn-close\" data-value=\"a\">X</a></span></li>"
        );
    }

    #[test]
    fn test_select_all_checked_attribute() {
        assert!(render_select_all(DEFAULT_SELECT_ALL, "Deselect all", true)
            .contains("searchable-select-all\" checked> Deselect all"));
        assert!(render_select_all(DEFAULT_SELECT_ALL, "Select all", false)
            .contains("searchable-select-all\"> Select all"));
    }
}
