use super::*;
use indexmap::IndexMap;

use crate::cloner::Cloner;
use crate::dom::{to_html, Document, NodeId};
use crate::scheme::{AnchoredIndexScheme, IdentifierScheme};

fn find_by_tag(doc: &Document, tag: &str) -> NodeId {
    doc.descendant_elements(doc.root())
        .into_iter()
        .find(|&node| doc.tag(node) == Some(tag))
        .unwrap()
}

fn inputs(doc: &Document, root: NodeId) -> Vec<NodeId> {
    doc.descendant_elements(root)
        .into_iter()
        .filter(|&node| doc.tag(node) == Some("input"))
        .collect()
}

#[test]
fn empty_array_renders_one_template_row() {
    let mut doc = Document::new();
    let root = doc.root();
    let container = ArrayWidget::new("id_things", "things").render(&mut doc, root, &[]);

    assert_eq!(doc.attr(container, "data-next"), Some("1"));
    let list = find_by_tag(&doc, "ul");
    assert_eq!(doc.child_elements(list).len(), 1);

    let input = inputs(&doc, container)[0];
    assert_eq!(doc.attr(input, "id"), Some("id_things_array-index-0"));
    assert_eq!(doc.attr(input, "name"), Some("things"));
    assert_eq!(doc.attr(input, "value"), None);
}

#[test]
fn prefilled_array_renders_one_row_per_value() {
    let mut doc = Document::new();
    let root = doc.root();
    let container =
        ArrayWidget::new("id_things", "things").render(&mut doc, root, &["one", "two"]);

    assert_eq!(doc.attr(container, "data-next"), Some("2"));
    let all = inputs(&doc, container);
    assert_eq!(all.len(), 2);
    assert_eq!(doc.attr(all[0], "value"), Some("one"));
    assert_eq!(doc.attr(all[1], "id"), Some("id_things_array-index-1"));
    assert_eq!(doc.attr(all[1], "value"), Some("two"));
}

#[test]
fn array_markup_carries_add_and_remove_controls() {
    let mut doc = Document::new();
    let root = doc.root();
    let container = ArrayWidget::new("id_things", "things").render(&mut doc, root, &[]);

    let html = to_html(&doc, container);
    assert!(html.contains(r#"<a class="add-array-item">Add item</a>"#));
    assert!(html.contains(r#"<a class="remove-array-item">Remove</a>"#));
}

#[test]
fn keyvalue_renders_paired_inputs() {
    let mut doc = Document::new();
    let root = doc.root();
    let container =
        KeyValueWidget::new("id_dict", "dict").render(&mut doc, root, &[("color", "red")]);

    let all = inputs(&doc, container);
    assert_eq!(all.len(), 2);
    assert_eq!(doc.attr(all[0], "id"), Some("id_dict_key-index-0"));
    assert_eq!(doc.attr(all[0], "value"), Some("color"));
    assert_eq!(doc.attr(all[1], "id"), Some("id_dict_value-index-0"));
    assert_eq!(doc.attr(all[1], "value"), Some("red"));
    // Both inputs post under the shared field name.
    assert_eq!(doc.attr(all[0], "name"), Some("dict"));
    assert_eq!(doc.attr(all[1], "name"), Some("dict"));
}

#[test]
fn nested_form_renders_labelled_flattened_fields() {
    let mut doc = Document::new();
    let root = doc.root();
    let mut values = IndexMap::new();
    values.insert("bar_fizz".to_string(), "2".to_string());

    let widget =
        NestedFormWidget::new("nested", vec!["foo".to_string(), "bar_fizz".to_string()]);
    let container = widget.render(&mut doc, root, &values);

    let all = inputs(&doc, container);
    assert_eq!(doc.attr(all[0], "id"), Some("id_nested_foo"));
    assert_eq!(doc.attr(all[0], "name"), Some("nested_foo"));
    assert_eq!(doc.attr(all[0], "value"), None);
    assert_eq!(doc.attr(all[1], "name"), Some("nested_bar_fizz"));
    assert_eq!(doc.attr(all[1], "value"), Some("2"));

    let label = find_by_tag(&doc, "label");
    assert_eq!(doc.attr(label, "for"), Some("id_nested_foo"));
}

#[test]
fn rendered_array_markup_is_clonable() {
    // End to end: the widget's anchored ids are exactly what the anchored
    // scheme expects, so the cloner can grow the rendered group.
    let mut doc = Document::new();
    let root = doc.root();
    let scheme = AnchoredIndexScheme::new().unwrap();
    let container = ArrayWidget::new("id_things", "things")
        .counter_attribute(scheme.counter_attribute().to_string())
        .render(&mut doc, root, &["first"]);

    let cloner = Cloner::new(scheme);
    let item = cloner.add_item(&mut doc, container).unwrap();

    let input = inputs(&doc, item)[0];
    assert_eq!(doc.attr(input, "id"), Some("id_things_array-index-1"));
    assert_eq!(doc.attr(input, "value"), None);
    assert_eq!(doc.attr(container, "data-next-index"), Some("2"));
}
