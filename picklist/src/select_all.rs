//! Select-all control state.

/// The select-all checkbox: its checked state and the text beside it.
///
/// Both pieces change together through [`SelectAllControl::set`]; the label
/// always names the action the next toggle will perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectAllControl {
    checked: bool,
    label: String,
}

impl SelectAllControl {
    /// An unchecked control showing the select-all text.
    pub fn new(select_all_text: impl Into<String>) -> Self {
        Self {
            checked: false,
            label: select_all_text.into(),
        }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Checked shows the deselect-all text, unchecked the select-all text.
    pub fn set(&mut self, checked: bool, select_all_text: &str, deselect_all_text: &str) {
        self.checked = checked;
        self.label = if checked {
            deselect_all_text.to_string()
        } else {
            select_all_text.to_string()
        };
    }
}
