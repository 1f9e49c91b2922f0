//! An owned element tree with key-addressed edits.

use crate::element::{
    find_by_id, find_element, find_element_mut, find_parent, find_parent_mut, walk_descendants,
    Content, Element, NodeKey,
};
use crate::render;
use crate::selector::Selector;

#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, key: NodeKey) -> Option<&Element> {
        find_element(&self.root, key)
    }

    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut Element> {
        find_element_mut(&mut self.root, key)
    }

    /// Find an element by its HTML `id` attribute.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        find_by_id(&self.root, id)
    }

    pub fn parent_of(&self, key: NodeKey) -> Option<NodeKey> {
        find_parent(&self.root, key)
    }

    /// Keys of every descendant of `scope` matching `selector`, in document order.
    pub fn query(&self, scope: NodeKey, selector: &Selector) -> Vec<NodeKey> {
        let mut found = Vec::new();
        if let Some(scope) = self.get(scope) {
            walk_descendants(scope, &mut |element| {
                if selector.matches(element) {
                    found.push(element.key);
                }
            });
        }
        found
    }

    pub fn query_first(&self, scope: NodeKey, selector: &Selector) -> Option<NodeKey> {
        self.query(scope, selector).into_iter().next()
    }

    /// Insert `element` as the sibling immediately before `anchor`.
    ///
    /// Returns the inserted key, or `None` when `anchor` has no parent.
    pub fn insert_before(&mut self, anchor: NodeKey, element: Element) -> Option<NodeKey> {
        let parent = find_parent_mut(&mut self.root, anchor)?;
        let Content::Children(children) = &mut parent.content else {
            return None;
        };
        let index = children.iter().position(|child| child.key == anchor)?;
        let key = element.key;
        children.insert(index, element);
        log::trace!("[document] inserted {} before {}", key, anchor);
        Some(key)
    }

    /// Detach `key` from the tree and return it.
    pub fn remove(&mut self, key: NodeKey) -> Option<Element> {
        let parent = find_parent_mut(&mut self.root, key)?;
        let Content::Children(children) = &mut parent.content else {
            return None;
        };
        let index = children.iter().position(|child| child.key == key)?;
        Some(children.remove(index))
    }

    /// Replace the content of `key`. Returns false when the key is unknown.
    pub fn set_content(&mut self, key: NodeKey, content: Content) -> bool {
        match self.get_mut(key) {
            Some(element) => {
                element.content = content;
                true
            }
            None => false,
        }
    }

    pub fn set_hidden(&mut self, key: NodeKey, hidden: bool) -> bool {
        match self.get_mut(key) {
            Some(element) => {
                element.hidden = hidden;
                true
            }
            None => false,
        }
    }

    pub fn inner_markup(&self, key: NodeKey) -> Option<String> {
        self.get(key).map(render::inner_markup)
    }

    pub fn outer_markup(&self, key: NodeKey) -> Option<String> {
        self.get(key).map(render::to_markup)
    }

    pub fn to_markup(&self) -> String {
        render::to_markup(&self.root)
    }
}
