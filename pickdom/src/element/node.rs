use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Content, Fragment};

static NEXT_KEY: AtomicU64 = AtomicU64::new(0);

/// Stable identity of an element, independent of its HTML `id` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(u64);

impl NodeKey {
    fn next() -> Self {
        Self(NEXT_KEY.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub key: NodeKey,
    /// Tag name. Empty for bare nodes, which serialize as their content only.
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Remaining attributes, kept sorted so serialization is deterministic.
    pub attrs: BTreeMap<String, String>,

    // Content
    pub content: Content,

    // State
    /// Hidden elements serialize with an inline `display: none` style.
    pub hidden: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            key: NodeKey::next(),
            tag: String::new(),
            id: None,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            content: Content::None,
            hidden: false,
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Default::default()
        }
    }

    /// A tagless node holding raw markup.
    ///
    /// Used to keep a handle on markup inserted between existing siblings.
    pub fn bare(markup: impl Into<String>) -> Self {
        Self {
            content: Content::Markup(markup.into()),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn is_bare(&self) -> bool {
        self.tag.is_empty()
    }

    // -------------------------------------------------------------------------
    // Builders
    // -------------------------------------------------------------------------

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        for name in class.into().split_whitespace() {
            if !self.has_class(name) {
                self.classes.push(name.to_string());
            }
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set a `data-*` attribute.
    pub fn data(self, key: &str, value: impl Into<String>) -> Self {
        self.attr(format!("data-{key}"), value)
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn html(mut self, markup: impl Into<String>) -> Self {
        self.content = Content::Markup(markup.into());
        self
    }

    pub fn fragment(mut self, fragment: Fragment) -> Self {
        self.content = Content::Fragment(fragment);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        for child in new_children {
            self = self.child(child);
        }
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Look up an attribute. `id` and `class` resolve to their dedicated fields.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        match name {
            "id" => self.id.as_deref(),
            _ => self.attrs.get(name).map(String::as_str),
        }
    }

    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.attrs.get(&format!("data-{key}")).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match name.as_str() {
            "id" => self.id = Some(value),
            "class" => {
                self.classes.clear();
                self.classes
                    .extend(value.split_whitespace().map(str::to_string));
            }
            _ => {
                self.attrs.insert(name, value);
            }
        }
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        match name {
            "id" => self.id.take(),
            _ => self.attrs.remove(name),
        }
    }

    /// Direct child elements. Empty unless the content is `Children`.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Concatenated text of this element and its descendants.
    ///
    /// Raw markup and fragments are not text and contribute nothing.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
        Content::None | Content::Markup(_) | Content::Fragment(_) => {}
    }
}
