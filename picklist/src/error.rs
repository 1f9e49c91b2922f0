//! Initialization errors.
//!
//! Mounting is the only fallible operation. Runtime calls that reference an
//! unknown value, and templates missing a placeholder, are silent no-ops.

use std::fmt;

use pickdom::SelectorError;
use thiserror::Error;

/// Which required container could not be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerRole {
    OptionList,
    Output,
}

impl fmt::Display for ContainerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OptionList => write!(f, "option list"),
            Self::Output => write!(f, "output"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitError {
    #[error("backing control '#{0}' not found")]
    ControlNotFound(String),

    #[error("backing control '#{0}' has no enclosing element")]
    Detached(String),

    #[error("{role} container '{selector}' not found next to control '#{control}'")]
    MissingContainer {
        role: ContainerRole,
        selector: String,
        control: String,
    },

    #[error("{field} selector '{selector}' names no class for rendered rows to carry")]
    ActionWithoutClass {
        field: &'static str,
        selector: String,
    },

    #[error("invalid {field} selector '{selector}': {source}")]
    InvalidSelector {
        field: &'static str,
        selector: String,
        #[source]
        source: SelectorError,
    },
}
