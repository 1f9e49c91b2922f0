mod content;
mod fragment;
mod node;

pub use content::Content;
pub use fragment::{Fragment, Item, Piece};
pub use node::{Element, NodeKey};

/// Find an element by key in the tree.
pub fn find_element(root: &Element, key: NodeKey) -> Option<&Element> {
    if root.key == key {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, key) {
            return Some(found);
        }
    }

    None
}

/// Find an element by key in the tree, mutably.
pub fn find_element_mut(root: &mut Element, key: NodeKey) -> Option<&mut Element> {
    if root.key == key {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children.iter_mut() {
            if let Some(found) = find_element_mut(child, key) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the first element carrying the given HTML `id` attribute.
pub fn find_by_id<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id.as_deref() == Some(id) {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_by_id(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find the element whose direct children contain `key`.
pub fn find_parent_mut(root: &mut Element, key: NodeKey) -> Option<&mut Element> {
    if root.child_elements().iter().any(|child| child.key == key) {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children.iter_mut() {
            if let Some(found) = find_parent_mut(child, key) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the key of the element whose direct children contain `key`.
pub fn find_parent(root: &Element, key: NodeKey) -> Option<NodeKey> {
    if root.child_elements().iter().any(|child| child.key == key) {
        return Some(root.key);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_parent(child, key))
}

/// Walk every descendant of `root` (excluding `root`) in document order.
pub fn walk_descendants<'a>(root: &'a Element, visit: &mut impl FnMut(&'a Element)) {
    for child in root.child_elements() {
        visit(child);
        walk_descendants(child, visit);
    }
}
