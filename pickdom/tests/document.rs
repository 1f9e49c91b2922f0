use pickdom::{Content, Document, Element, Fragment, Item, Selector};

fn page() -> (Document, pickdom::NodeKey, pickdom::NodeKey) {
    let list = Element::div().class("left-col");
    let output = Element::new("ul").id("picked").html("<li>Nothing yet</li>");
    let (list_key, output_key) = (list.key, output.key);
    let root = Element::div()
        .id("root")
        .child(Element::div().class("wrapper").child(list).child(output));
    (Document::new(root), list_key, output_key)
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_get_and_find_by_id() {
    let (doc, list, output) = page();
    assert!(doc.get(list).unwrap().has_class("left-col"));
    assert_eq!(doc.find_by_id("picked").unwrap().key, output);
    assert!(doc.find_by_id("missing").is_none());
}

#[test]
fn test_query_is_scoped_to_descendants() {
    let (doc, list, _) = page();
    let wrapper = doc.parent_of(list).unwrap();
    let selector = Selector::parse(".wrapper").unwrap();

    // The scope itself is not a descendant of itself
    assert!(doc.query(wrapper, &selector).is_empty());
    assert_eq!(doc.query(doc.root().key, &selector), vec![wrapper]);
}

#[test]
fn test_query_returns_document_order() {
    let first = Element::new("li").class("row");
    let second = Element::new("li").class("row");
    let keys = vec![first.key, second.key];
    let root = Element::new("ul").child(first).child(second);
    let doc = Document::new(root);

    let found = doc.query(doc.root().key, &Selector::parse("li.row").unwrap());
    assert_eq!(found, keys);
}

// ============================================================================
// Edits
// ============================================================================

#[test]
fn test_insert_before_places_sibling() {
    let (mut doc, list, _) = page();
    let inserted = doc.insert_before(list, Element::bare("<p>all</p>")).unwrap();

    let wrapper = doc.get(doc.parent_of(list).unwrap()).unwrap();
    let order: Vec<_> = wrapper.child_elements().iter().map(|c| c.key).collect();
    assert_eq!(order[0], inserted);
    assert_eq!(order[1], list);
}

#[test]
fn test_insert_before_root_fails() {
    let (mut doc, _, _) = page();
    let root = doc.root().key;
    assert!(doc.insert_before(root, Element::div()).is_none());
}

#[test]
fn test_remove_detaches_element() {
    let (mut doc, list, _) = page();
    let removed = doc.remove(list).unwrap();
    assert_eq!(removed.key, list);
    assert!(doc.get(list).is_none());
}

#[test]
fn test_set_content_and_inner_markup() {
    let (mut doc, _, output) = page();
    assert_eq!(doc.inner_markup(output).unwrap(), "<li>Nothing yet</li>");

    assert!(doc.set_content(output, Content::Markup("<li>A</li>".into())));
    assert_eq!(doc.inner_markup(output).unwrap(), "<li>A</li>");
}

#[test]
fn test_fragment_items_toggle_in_place() {
    let (mut doc, list, _) = page();
    let mut fragment = Fragment::from_markup("<ul>");
    fragment.push_item(Item::new("a", "<li>A</li>"));
    fragment.push_item(Item::new("b", "<li>B</li>"));
    fragment.push_markup("</ul>");
    doc.set_content(list, Content::Fragment(fragment));

    if let Some(element) = doc.get_mut(list) {
        if let Content::Fragment(fragment) = &mut element.content {
            for item in fragment.items_mut().filter(|item| item.value == "a") {
                item.hide();
            }
        }
    }

    assert_eq!(
        doc.inner_markup(list).unwrap(),
        "<ul><li style=\"display: none;\">A</li><li>B</li></ul>"
    );
}
