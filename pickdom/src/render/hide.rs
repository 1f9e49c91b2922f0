/// Inline style applied to hidden nodes.
pub const HIDDEN_STYLE: &str = "display: none;";

/// Wrapper for hidden markup that is not a single element. Template content
/// is never rendered and the tag is allowed inside lists and tables.
const HIDDEN_WRAPPER: (&str, &str) = ("<template>", "</template>");

/// Hide `markup`.
///
/// A single element gets `display: none` on its start tag, extending an
/// existing `style` attribute rather than duplicating it. Anything else (text
/// first, several top-level elements, a stray closing tag) is wrapped whole
/// in a `<template>`. Blank markup is returned unchanged.
pub fn hide_markup(markup: &str) -> String {
    let lead = markup.len() - markup.trim_start().len();
    let rest = &markup[lead..];
    if rest.trim_end().is_empty() {
        return markup.to_string();
    }

    let tag = match start_tag_end(rest) {
        Some(end) if is_single_element(rest) => &rest[..end],
        _ => {
            let (open, close) = HIDDEN_WRAPPER;
            return format!("{open}{markup}{close}");
        }
    };
    let end = tag.len();

    let mut out = String::with_capacity(markup.len() + HIDDEN_STYLE.len() + 10);
    out.push_str(&markup[..lead]);

    match style_value_start(tag) {
        Some(at) => {
            out.push_str(&tag[..at]);
            out.push_str(HIDDEN_STYLE);
            out.push(' ');
            out.push_str(&tag[at..]);
        }
        None => {
            let (head, tail) = match tag.strip_suffix('/') {
                Some(head) => (head.trim_end(), "/"),
                None => (tag, ""),
            };
            out.push_str(head);
            out.push_str(" style=\"");
            out.push_str(HIDDEN_STYLE);
            out.push('"');
            out.push_str(tail);
        }
    }

    out.push_str(&rest[end..]);
    out
}

fn opens_element(markup: &str) -> bool {
    let mut chars = markup.chars();
    chars.next() == Some('<') && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
}

/// Whether `markup` is one element followed by nothing but whitespace.
///
/// Tags are balanced by depth only; an element left open runs to the end of
/// the markup and still counts as one.
fn is_single_element(markup: &str) -> bool {
    if !opens_element(markup) {
        return false;
    }

    let mut depth = 0usize;
    let mut pos = 0;
    while pos < markup.len() {
        let rest = &markup[pos..];
        if pos > 0 && depth == 0 {
            return rest.trim().is_empty();
        }

        if let Some(comment) = rest.strip_prefix("<!--") {
            match comment.find("-->") {
                Some(end) => pos += 4 + end + 3,
                None => return true,
            }
        } else if rest.starts_with("</") {
            let Some(end) = start_tag_end(rest) else {
                return true;
            };
            depth = depth.saturating_sub(1);
            pos += end + 1;
        } else if opens_element(rest) {
            let Some(end) = start_tag_end(rest) else {
                return true;
            };
            let tag = &rest[1..end];
            let name = tag
                .split(|c: char| c.is_whitespace() || c == '/')
                .next()
                .unwrap_or_default()
                .to_ascii_lowercase();
            if !tag.ends_with('/') && !super::is_void(&name) {
                depth += 1;
            }
            pos += end + 1;
        } else {
            let skip = rest.chars().next().map_or(1, char::len_utf8);
            match rest[skip..].find('<') {
                Some(next) => pos += skip + next,
                None => return true,
            }
        }
    }
    true
}

/// Byte offset of the `>` closing the first start tag, ignoring quoted `>`.
fn start_tag_end(markup: &str) -> Option<usize> {
    let mut quote = None;
    for (i, c) in markup.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' => quote = Some(c),
                '>' => return Some(i),
                _ => {}
            },
        }
    }
    None
}

/// Byte offset just past `style="` (or `style='`) inside a start tag.
fn style_value_start(tag: &str) -> Option<usize> {
    let lower = tag.to_ascii_lowercase();
    ["style=\"", "style='"].iter().find_map(|needle| {
        lower.match_indices(needle).find_map(|(at, _)| {
            let preceded_by_space = lower[..at]
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace);
            preceded_by_space.then_some(at + needle.len())
        })
    })
}
