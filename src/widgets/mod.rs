//! Server-side rendering of repeatable-group markup.
//!
//! Each widget builds its container directly into a [`Document`], always
//! with at least one row so the cloner has a template to copy, and with
//! the counter attribute set to the number of rendered rows (the next free
//! index). Pre-filled values appear as `value` attributes.

pub mod array;
pub mod keyvalue;
pub mod nested;

#[cfg(test)]
mod tests;

pub use array::ArrayWidget;
pub use keyvalue::KeyValueWidget;
pub use nested::NestedFormWidget;

use indexmap::IndexMap;

use crate::dom::{Document, NodeId};

pub(crate) fn element(
    doc: &mut Document,
    parent: NodeId,
    tag: &str,
    attrs: &[(&str, &str)],
) -> NodeId {
    let attrs: IndexMap<String, String> = attrs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    doc.create_element(parent, tag, attrs)
}

pub(crate) fn text_element(
    doc: &mut Document,
    parent: NodeId,
    tag: &str,
    attrs: &[(&str, &str)],
    text: &str,
) -> NodeId {
    let node = element(doc, parent, tag, attrs);
    doc.create_text(node, text);
    node
}
