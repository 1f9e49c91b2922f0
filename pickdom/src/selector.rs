//! Compound selectors.
//!
//! Supports a single compound selector: an optional tag (or `*`), followed by
//! any number of `#id`, `.class`, `[attr]` and `[attr=value]` parts. Combinators
//! and selector lists are not supported and fail to parse.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::element::Element;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unexpected '{found}' at position {position} in selector '{selector}'")]
    Unexpected {
        selector: String,
        found: char,
        position: usize,
    },

    #[error("missing name after '{marker}' in selector '{selector}'")]
    MissingName { selector: String, marker: char },

    #[error("unterminated attribute selector in '{0}'")]
    UnterminatedAttribute(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrMatch {
    name: String,
    value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let source = input.trim();
        if source.is_empty() {
            return Err(SelectorError::Empty);
        }
        Parser::new(source).parse()
    }

    /// A selector matching a tag name.
    pub fn tag(name: impl Into<String>) -> Self {
        Self {
            tag: Some(name.into().to_ascii_lowercase()),
            ..Default::default()
        }
    }

    pub fn matches(&self, element: &Element) -> bool {
        if element.is_bare() {
            return false;
        }
        if let Some(tag) = &self.tag {
            if !element.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|class| element.has_class(class)) {
            return false;
        }
        self.attrs.iter().all(|attr| attr_matches(element, attr))
    }

    /// Class names this selector requires.
    pub fn class_names(&self) -> &[String] {
        &self.classes
    }

    /// Value for a `class` attribute that makes an element match the class
    /// part of this selector.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}

fn attr_matches(element: &Element, attr: &AttrMatch) -> bool {
    if attr.name == "class" {
        return match &attr.value {
            None => !element.classes.is_empty(),
            Some(value) => element.classes.join(" ") == *value,
        };
    }
    match (element.get_attr(&attr.name), &attr.value) {
        (Some(_), None) => true,
        (Some(actual), Some(expected)) => actual == expected,
        (None, _) => false,
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        if let Some(tag) = &self.tag {
            write!(f, "{tag}")?;
            wrote = true;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
            wrote = true;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
            wrote = true;
        }
        for attr in &self.attrs {
            match &attr.value {
                Some(value) => write!(f, "[{}=\"{}\"]", attr.name, value)?,
                None => write!(f, "[{}]", attr.name)?,
            }
            wrote = true;
        }
        if !wrote {
            write!(f, "*")?;
        }
        Ok(())
    }
}

// =============================================================================
// Parser
// =============================================================================

struct Parser<'a> {
    source: &'a str,
    chars: Vec<char>,
    pos: usize,
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn unexpected(&self, found: char) -> SelectorError {
        SelectorError::Unexpected {
            selector: self.source.to_string(),
            found,
            position: self.pos,
        }
    }

    fn name(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(is_name_char) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    fn required_name(&mut self, marker: char) -> Result<String, SelectorError> {
        let name = self.name();
        if name.is_empty() {
            return Err(SelectorError::MissingName {
                selector: self.source.to_string(),
                marker,
            });
        }
        Ok(name)
    }

    fn parse(mut self) -> Result<Selector, SelectorError> {
        let mut selector = Selector::default();

        match self.peek() {
            Some('*') => self.pos += 1,
            Some(c) if is_name_char(c) => {
                selector.tag = Some(self.name().to_ascii_lowercase());
            }
            _ => {}
        }

        while let Some(c) = self.peek() {
            self.pos += 1;
            match c {
                '#' => {
                    let id = self.required_name('#')?;
                    selector.id = Some(id);
                }
                '.' => {
                    let class = self.required_name('.')?;
                    selector.classes.push(class);
                }
                '[' => {
                    let attr = self.attribute()?;
                    selector.attrs.push(attr);
                }
                other => {
                    self.pos -= 1;
                    return Err(self.unexpected(other));
                }
            }
        }

        Ok(selector)
    }

    /// Parse the inside of `[...]`; the opening bracket is already consumed.
    fn attribute(&mut self) -> Result<AttrMatch, SelectorError> {
        let name = self.required_name('[')?;
        match self.peek() {
            Some(']') => {
                self.pos += 1;
                Ok(AttrMatch { name, value: None })
            }
            Some('=') => {
                self.pos += 1;
                let value = self.attribute_value()?;
                match self.peek() {
                    Some(']') => {
                        self.pos += 1;
                        Ok(AttrMatch {
                            name,
                            value: Some(value),
                        })
                    }
                    Some(other) => Err(self.unexpected(other)),
                    None => Err(SelectorError::UnterminatedAttribute(
                        self.source.to_string(),
                    )),
                }
            }
            Some(other) => Err(self.unexpected(other)),
            None => Err(SelectorError::UnterminatedAttribute(
                self.source.to_string(),
            )),
        }
    }

    fn attribute_value(&mut self) -> Result<String, SelectorError> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.pos += 1;
                let start = self.pos;
                while let Some(c) = self.peek() {
                    if c == quote {
                        let value = self.chars[start..self.pos].iter().collect();
                        self.pos += 1;
                        return Ok(value);
                    }
                    self.pos += 1;
                }
                Err(SelectorError::UnterminatedAttribute(
                    self.source.to_string(),
                ))
            }
            _ => Ok(self.name()),
        }
    }
}
