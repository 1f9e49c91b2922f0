//! Rendered markup with addressable items.
//!
//! A fragment is what a template produces once it has been installed: opaque
//! markup interleaved with items that can still be located by value and
//! toggled visible or hidden without re-rendering.

/// One piece of a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    Markup(String),
    Item(Item),
}

/// A rendered row that keeps its associated value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Value the row was rendered for
    pub value: String,
    /// Markup produced for the row
    pub markup: String,
    /// Whether the row is currently hidden
    pub hidden: bool,
}

impl Item {
    pub fn new(value: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            markup: markup.into(),
            hidden: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }

    pub fn show(&mut self) {
        self.hidden = false;
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pieces: Vec<Piece>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fragment holding only opaque markup.
    pub fn from_markup(markup: impl Into<String>) -> Self {
        let mut fragment = Self::new();
        fragment.push_markup(markup);
        fragment
    }

    /// Append opaque markup. Empty strings are skipped.
    pub fn push_markup(&mut self, markup: impl Into<String>) {
        let markup = markup.into();
        if !markup.is_empty() {
            self.pieces.push(Piece::Markup(markup));
        }
    }

    pub fn push_item(&mut self, item: Item) {
        self.pieces.push(Piece::Item(item));
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.pieces.iter().filter_map(|piece| match piece {
            Piece::Item(item) => Some(item),
            Piece::Markup(_) => None,
        })
    }

    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut Item> {
        self.pieces.iter_mut().filter_map(|piece| match piece {
            Piece::Item(item) => Some(item),
            Piece::Markup(_) => None,
        })
    }

    /// Items whose value equals `value`, in order.
    pub fn items_for<'a>(&'a self, value: &'a str) -> impl Iterator<Item = &'a Item> + 'a {
        self.items().filter(move |item| item.value == value)
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn to_markup(&self) -> String {
        crate::render::fragment_markup(self)
    }
}
