use super::{Element, Fragment};

/// What an element holds between its start and end tags.
#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    /// Plain text, escaped on serialization.
    Text(String),
    /// Raw markup, written through verbatim.
    Markup(String),
    Children(Vec<Element>),
    /// Raw markup with addressable items (see [`Fragment`]).
    Fragment(Fragment),
}

impl Content {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(s) | Self::Markup(s) => s.is_empty(),
            Self::Children(c) => c.is_empty(),
            Self::Fragment(f) => f.is_empty(),
        }
    }
}
