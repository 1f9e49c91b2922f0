//! Markup serialization.
//!
//! Elements serialize with their `id`, then `class`, then the remaining
//! attributes in sorted order, so the same tree always produces the same
//! bytes. Hidden elements and hidden fragment items carry an inline
//! `display: none` style, the same way a browser script hides a node.
//! Hidden markup without a single root element is wrapped in `<template>`.

mod hide;

pub use hide::{hide_markup, HIDDEN_STYLE};

use crate::element::{Content, Element, Fragment, Piece};

/// Elements that never have content or an end tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// Serialize an element and its content.
pub fn to_markup(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

/// Serialize only the content of an element.
pub fn inner_markup(element: &Element) -> String {
    let mut out = String::new();
    write_content(&element.content, &mut out);
    out
}

pub fn fragment_markup(fragment: &Fragment) -> String {
    let mut out = String::new();
    write_fragment(fragment, &mut out);
    out
}

fn write_element(element: &Element, out: &mut String) {
    if element.is_bare() {
        if element.hidden {
            out.push_str(&hide_markup(&inner_markup(element)));
        } else {
            write_content(&element.content, out);
        }
        return;
    }

    out.push('<');
    out.push_str(&element.tag);
    if let Some(id) = &element.id {
        write_attr(out, "id", id);
    }
    if !element.classes.is_empty() {
        write_attr(out, "class", &element.classes.join(" "));
    }
    for (name, value) in &element.attrs {
        if name == "style" && element.hidden {
            continue;
        }
        write_attr(out, name, value);
    }
    if element.hidden {
        let style = match element.attrs.get("style") {
            Some(existing) => format!("{HIDDEN_STYLE} {existing}"),
            None => HIDDEN_STYLE.to_string(),
        };
        write_attr(out, "style", &style);
    }
    out.push('>');

    if is_void(&element.tag) {
        return;
    }

    write_content(&element.content, out);
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

fn write_content(content: &Content, out: &mut String) {
    match content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape_text(text)),
        Content::Markup(markup) => out.push_str(markup),
        Content::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
        Content::Fragment(fragment) => write_fragment(fragment, out),
    }
}

fn write_fragment(fragment: &Fragment, out: &mut String) {
    for piece in fragment.pieces() {
        match piece {
            Piece::Markup(markup) => out.push_str(markup),
            Piece::Item(item) if item.hidden => out.push_str(&hide_markup(&item.markup)),
            Piece::Item(item) => out.push_str(&item.markup),
        }
    }
}

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
