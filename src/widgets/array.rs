//! Repeatable list of one input per row.

use crate::dom::{Document, NodeId};

use super::{element, text_element};

pub struct ArrayWidget {
    id: String,
    name: String,
    counter_attribute: String,
}

impl ArrayWidget {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            counter_attribute: "data-next".to_string(),
        }
    }

    /// Overrides the counter attribute name; must match the identifier
    /// scheme the deployment clones with.
    pub fn counter_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.counter_attribute = attribute.into();
        self
    }

    /// Renders the group container under `parent`. With no values, a
    /// single empty template row is emitted.
    pub fn render(&self, doc: &mut Document, parent: NodeId, values: &[&str]) -> NodeId {
        let rows = values.len().max(1);
        let container = element(
            doc,
            parent,
            "div",
            &[
                ("class", "dynamic-array"),
                ("id", &self.id),
                (&self.counter_attribute, &rows.to_string()),
            ],
        );

        let list = element(doc, container, "ul", &[]);
        for row in 0..rows {
            let item = element(doc, list, "li", &[("class", "dynamic-array-item")]);
            let input_id = format!("{}_array-index-{row}", self.id);
            let mut attrs = vec![
                ("type", "text"),
                ("id", input_id.as_str()),
                ("name", self.name.as_str()),
            ];
            if let Some(value) = values.get(row).copied() {
                attrs.push(("value", value));
            }
            element(doc, item, "input", &attrs);
            text_element(doc, item, "a", &[("class", "remove-array-item")], "Remove");
        }

        text_element(doc, container, "a", &[("class", "add-array-item")], "Add item");
        container
    }
}
