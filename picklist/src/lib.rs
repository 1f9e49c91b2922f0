pub mod behavior;
pub mod binding;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod mount;
pub mod option;
pub mod registry;
pub mod render;
pub mod select_all;
pub mod template;
pub mod widget;

pub use behavior::{Behavior, DefaultBehavior, FuzzyBehavior};
pub use binding::{EventResult, Interaction, RawEvent};
pub use config::{Config, ConfigLayer, Selectors, TemplateLayer};
pub use controller::Action;
pub use error::{ContainerRole, InitError};
pub use filter::SearchText;
pub use option::SelectOption;
pub use registry::OptionRegistry;
pub use select_all::SelectAllControl;
pub use template::{Placeholder, Templates};
pub use widget::{Builder, SearchableSelect};

pub mod prelude {
    pub use crate::behavior::{Behavior, DefaultBehavior, FuzzyBehavior};
    pub use crate::binding::{EventResult, Interaction, RawEvent};
    pub use crate::config::{Config, ConfigLayer};
    pub use crate::error::InitError;
    pub use crate::option::SelectOption;
    pub use crate::widget::SearchableSelect;

    pub use pickdom::{Document, Element};
}
