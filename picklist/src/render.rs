//! Full refresh of both views.
//!
//! A refresh rebuilds the option list and the selected-output panel from the
//! registry, then re-applies the current filter. Rebuilding the list discards
//! any earlier visibility toggling, so the filter pass must always follow.

use pickdom::{Content, Document, Fragment, Item, NodeKey};

use crate::behavior::Behavior;
use crate::config::{Config, Selectors};
use crate::filter::{apply_visibility, SearchText};
use crate::mount::Anchors;
use crate::registry::OptionRegistry;
use crate::template::{self, RowContext};

/// Stand-in for the rows while the container shell is rendered, so the rows
/// can be located in the result without searching for their markup.
const ROWS_SLOT: &str = "\u{0}picklist-rows\u{0}";

/// Everything a renderer may read.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a Config,
    pub selectors: &'a Selectors,
    pub search: &'a SearchText,
    /// Markup shown in the output panel when nothing is selected
    pub empty_output: &'a str,
}

/// One rendered option row and the value it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub value: String,
    pub markup: String,
}

/// Render a row for every option, in registry order.
pub fn option_rows(registry: &OptionRegistry, cx: &RenderContext<'_>) -> Vec<RenderedRow> {
    let select_class = cx.selectors.select_action.class_attr();
    registry
        .list()
        .iter()
        .map(|option| {
            let row_cx = RowContext::for_option(
                option,
                &cx.config.button_text,
                &cx.config.selected_button_text,
                &select_class,
            );
            RenderedRow {
                value: option.value.clone(),
                markup: template::render_option_row(&cx.config.templates.option_row, option, &row_cx),
            }
        })
        .collect()
}

/// Render the selected-output panel, falling back to the empty-state markup.
pub fn selected_output(registry: &OptionRegistry, cx: &RenderContext<'_>) -> String {
    let remove_class = cx.selectors.remove_action.class_attr();
    let output: String = registry
        .selected()
        .map(|option| {
            template::render_selected_row(&cx.config.templates.selected_row, option, &remove_class)
        })
        .collect();

    if output.is_empty() {
        cx.empty_output.to_string()
    } else {
        output
    }
}

/// Wrap `rows` in the container shell, keeping each row addressable.
///
/// A container template without `{{initialOptions}}` drops the rows. If the
/// placeholder appears more than once, only the first copy is filterable.
pub fn assemble_list(rows: Vec<RenderedRow>, cx: &RenderContext<'_>) -> Fragment {
    let shell = template::render_container(
        &cx.config.templates.container,
        ROWS_SLOT,
        cx.search.as_str(),
        &cx.config.placeholder_text,
    );

    let mut fragment = Fragment::new();
    let Some((head, tail)) = shell.split_once(ROWS_SLOT) else {
        fragment.push_markup(shell);
        return fragment;
    };

    let tail = if tail.contains(ROWS_SLOT) {
        let options_markup: String = rows.iter().map(|row| row.markup.as_str()).collect();
        tail.replace(ROWS_SLOT, &options_markup)
    } else {
        tail.to_string()
    };

    fragment.push_markup(head);
    for row in rows {
        fragment.push_item(Item::new(row.value, row.markup));
    }
    fragment.push_markup(tail);
    fragment
}

/// Rebuild the option list and output panel, then re-apply the filter.
pub fn refresh<B: Behavior + ?Sized>(
    doc: &mut Document,
    anchors: &Anchors,
    registry: &OptionRegistry,
    cx: &RenderContext<'_>,
    behavior: &B,
) {
    let rows = behavior.render_options(registry, cx);
    let row_count = rows.len();
    doc.set_content(anchors.list, Content::Fragment(assemble_list(rows, cx)));

    let output = behavior.render_output(registry, cx);
    doc.set_content(anchors.output, Content::Markup(output));

    let hidden = refilter(doc, anchors.list, registry, cx.search, behavior);
    log::debug!(
        "[render] #{} refreshed: {} rows, {} selected, {} hidden",
        anchors.control_id,
        row_count,
        registry.selected().count(),
        hidden
    );
}

/// Re-render the container shell around the rows installed in `list`, so
/// the search input shows the current search text. Rows keep their markup.
pub fn rewrap_rows(doc: &mut Document, list: NodeKey, cx: &RenderContext<'_>) {
    let Some(Content::Fragment(fragment)) = doc.get_mut(list).map(|element| &mut element.content)
    else {
        return;
    };
    let rows = fragment
        .items()
        .map(|item| RenderedRow {
            value: item.value.clone(),
            markup: item.markup.clone(),
        })
        .collect();
    *fragment = assemble_list(rows, cx);
}

/// Re-apply the filter to the rows currently installed in `list`.
///
/// Returns the number of hidden rows.
pub fn refilter<B: Behavior + ?Sized>(
    doc: &mut Document,
    list: NodeKey,
    registry: &OptionRegistry,
    search: &SearchText,
    behavior: &B,
) -> usize {
    let visible = behavior.filter(registry, search);
    match doc.get_mut(list).map(|element| &mut element.content) {
        Some(Content::Fragment(fragment)) => apply_visibility(fragment, &visible),
        _ => 0,
    }
}
