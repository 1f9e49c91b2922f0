//! Attaching to and detaching from the host document.
//!
//! Mounting validates everything it needs before touching the document, so
//! a failed mount leaves the page exactly as it was.

use pickdom::{Content, Document, Element, NodeKey, Selector};

use crate::config::{Config, Selectors};
use crate::error::{ContainerRole, InitError};
use crate::registry::OptionRegistry;
use crate::select_all::SelectAllControl;
use crate::template;

/// Document nodes a mounted widget owns or writes to.
#[derive(Debug, Clone)]
pub struct Anchors {
    pub control_id: String,
    /// The backing `<select>`
    pub control: NodeKey,
    /// The control's parent; containers are looked up inside it
    pub parent: NodeKey,
    pub list: NodeKey,
    pub output: NodeKey,
    /// The inserted select-all block, if insertion succeeded
    pub select_all: Option<NodeKey>,
    /// Nodes hidden by the mount, shown again on teardown
    pub hidden: Vec<NodeKey>,
    /// Output panel markup shown while nothing is selected
    pub empty_output: String,
    saved_list: Content,
    saved_output: Content,
}

/// Find the backing control by its HTML id.
pub fn locate_control(doc: &Document, control_id: &str) -> Result<NodeKey, InitError> {
    doc.find_by_id(control_id)
        .map(|element| element.key)
        .ok_or_else(|| InitError::ControlNotFound(control_id.to_string()))
}

/// Hide the control and its labels, and insert the select-all block.
pub fn initialize(
    doc: &mut Document,
    control: NodeKey,
    config: &Config,
    selectors: &Selectors,
) -> Result<Anchors, InitError> {
    let control_id = doc
        .get(control)
        .and_then(|element| element.id.clone())
        .unwrap_or_default();
    let parent = doc
        .parent_of(control)
        .ok_or_else(|| InitError::Detached(control_id.clone()))?;

    let missing = |role, selector: &Selector| InitError::MissingContainer {
        role,
        selector: selector.to_string(),
        control: control_id.clone(),
    };
    let list = doc
        .query_first(parent, &selectors.container)
        .ok_or_else(|| missing(ContainerRole::OptionList, &selectors.container))?;
    let output = doc
        .query_first(parent, &selectors.output)
        .ok_or_else(|| missing(ContainerRole::Output, &selectors.output))?;

    let empty_output = doc
        .inner_markup(output)
        .map(|markup| markup.trim().to_string())
        .unwrap_or_default();
    let saved_list = doc.get(list).map(|el| el.content.clone()).unwrap_or_default();
    let saved_output = doc.get(output).map(|el| el.content.clone()).unwrap_or_default();

    let mut hidden = Vec::new();
    hide(doc, control, &mut hidden);
    for label in labels_for(doc, parent, &control_id) {
        hide(doc, label, &mut hidden);
    }

    let markup = template::render_select_all(
        &config.templates.select_all,
        &config.select_all_text,
        false,
    );
    let select_all = doc.insert_before(list, Element::bare(markup));
    if select_all.is_none() {
        log::warn!("[mount] #{}: could not place select-all before the list", control_id);
    }

    log::debug!(
        "[mount] #{} attached: list {}, output {}, {} node(s) hidden",
        control_id,
        list,
        output,
        hidden.len()
    );

    Ok(Anchors {
        control_id,
        control,
        parent,
        list,
        output,
        select_all,
        hidden,
        empty_output,
        saved_list,
        saved_output,
    })
}

fn labels_for(doc: &Document, parent: NodeKey, control_id: &str) -> Vec<NodeKey> {
    if control_id.is_empty() {
        return Vec::new();
    }
    doc.query(parent, &Selector::tag("label"))
        .into_iter()
        .filter(|&key| {
            doc.get(key)
                .is_some_and(|label| label.get_attr("for") == Some(control_id))
        })
        .collect()
}

/// Hide `key` and remember it, unless it was already hidden.
fn hide(doc: &mut Document, key: NodeKey, hidden: &mut Vec<NodeKey>) {
    if let Some(element) = doc.get_mut(key) {
        if !element.hidden {
            element.hidden = true;
            hidden.push(key);
        }
    }
}

/// Re-render the select-all block from the control state.
pub fn render_select_all(
    doc: &mut Document,
    anchors: &Anchors,
    control: &SelectAllControl,
    config: &Config,
) {
    let Some(key) = anchors.select_all else {
        return;
    };
    let markup = template::render_select_all(
        &config.templates.select_all,
        control.label(),
        control.is_checked(),
    );
    doc.set_content(key, Content::Markup(markup));
}

/// Mirror the registry's selected flags onto the control's `<option>`s.
///
/// Options are paired by position, the order they were read in.
pub fn sync_control(doc: &mut Document, control: NodeKey, registry: &OptionRegistry) {
    let Some(element) = doc.get_mut(control) else {
        return;
    };
    let mut flags = registry.list().iter().map(|option| option.selected);
    sync_options(element, &mut flags);
}

fn sync_options(element: &mut Element, flags: &mut impl Iterator<Item = bool>) {
    let Content::Children(children) = &mut element.content else {
        return;
    };
    for child in children.iter_mut() {
        if child.tag == "option" {
            match flags.next() {
                Some(true) => {
                    if child.get_attr("selected").is_none() {
                        child.set_attr("selected", "selected");
                    }
                }
                Some(false) => {
                    child.remove_attr("selected");
                }
                None => return,
            }
        }
        sync_options(child, flags);
    }
}

/// Undo [`initialize`]: show hidden nodes, drop the select-all block and put
/// the containers' original content back.
pub fn teardown(doc: &mut Document, anchors: &Anchors) {
    for &key in &anchors.hidden {
        doc.set_hidden(key, false);
    }
    if let Some(key) = anchors.select_all {
        doc.remove(key);
    }
    doc.set_content(anchors.list, anchors.saved_list.clone());
    doc.set_content(anchors.output, anchors.saved_output.clone());
    log::debug!("[mount] #{} detached", anchors.control_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLayer;

    fn page() -> (Document, NodeKey) {
        let control = Element::new("select")
            .id("people")
            .child(Element::new("option").attr("value", "a").text("Alice"))
            .child(
                Element::new("option")
                    .attr("value", "b")
                    .attr("selected", "")
                    .text("Bob"),
            );
        let key = control.key;
        let root = Element::div()
            .child(Element::new("label").attr("for", "people").text("People"))
            .child(Element::new("label").attr("for", "other").text("Other"))
            .child(control)
            .child(Element::div().class("left-col"))
            .child(Element::new("ul").id("selected-list").html("  <li>Nothing</li>\n"));
        (Document::new(root), key)
    }

    fn mount(doc: &mut Document, control: NodeKey) -> Result<Anchors, InitError> {
        let config = Config::default();
        let selectors = config.selectors()?;
        initialize(doc, control, &config, &selectors)
    }

    #[test]
    fn test_initialize_hides_control_and_its_label() {
        let (mut doc, control) = page();
        let anchors = mount(&mut doc, control).unwrap();

        assert_eq!(anchors.control_id, "people");
        assert_eq!(anchors.empty_output, "<li>Nothing</li>");
        assert!(doc.get(control).unwrap().hidden);
        assert_eq!(anchors.hidden.len(), 2);

        let markup = doc.to_markup();
        assert!(markup.contains("<label for=\"other\">Other</label>"));
        assert!(markup.contains("searchable-select-all"));
    }

    #[test]
    fn test_missing_output_leaves_document_untouched() {
        let (mut doc, control) = page();
        let before = doc.to_markup();

        let config = Config::layered([&ConfigLayer::new().output_selector("#nowhere")]);
        let selectors = config.selectors().unwrap();
        let err = initialize(&mut doc, control, &config, &selectors).unwrap_err();

        assert!(matches!(
            err,
            InitError::MissingContainer { role: ContainerRole::Output, .. }
        ));
        assert_eq!(doc.to_markup(), before);
    }

    #[test]
    fn test_sync_control_writes_selected_attributes() {
        let (mut doc, control) = page();
        let registry = OptionRegistry::from_control(doc.get(control).unwrap());
        assert_eq!(registry.selected_values(), vec!["b"]);

        let mut registry = registry;
        registry.set_selected("a", true);
        registry.set_selected("b", false);
        sync_control(&mut doc, control, &registry);

        let reread = OptionRegistry::from_control(doc.get(control).unwrap());
        assert_eq!(reread.selected_values(), vec!["a"]);
    }

    #[test]
    fn test_teardown_restores_page() {
        let (mut doc, control) = page();
        let before = doc.to_markup();

        let anchors = mount(&mut doc, control).unwrap();
        doc.set_content(anchors.output, Content::Markup("<li>Alice</li>".into()));
        teardown(&mut doc, &anchors);

        assert_eq!(doc.to_markup(), before);
    }
}
