pub mod document;
pub mod element;
pub mod render;
pub mod selector;

pub use document::Document;
pub use element::{find_element, Content, Element, Fragment, Item, NodeKey, Piece};
pub use selector::{Selector, SelectorError};
