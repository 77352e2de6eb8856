//! Repeatable key/value pair rows.

use crate::dom::{Document, NodeId};

use super::{element, text_element};

pub struct KeyValueWidget {
    id: String,
    name: String,
    counter_attribute: String,
}

impl KeyValueWidget {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            counter_attribute: "data-next".to_string(),
        }
    }

    pub fn counter_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.counter_attribute = attribute.into();
        self
    }

    /// Renders the group container under `parent`. Key and value inputs
    /// share the field name and are told apart positionally on submit.
    pub fn render(&self, doc: &mut Document, parent: NodeId, pairs: &[(&str, &str)]) -> NodeId {
        let rows = pairs.len().max(1);
        let container = element(
            doc,
            parent,
            "div",
            &[
                ("class", "key-value-field"),
                ("id", &self.id),
                (&self.counter_attribute, &rows.to_string()),
            ],
        );

        let list = element(doc, container, "ul", &[]);
        for row in 0..rows {
            let item = element(doc, list, "li", &[("class", "key-value-item")]);
            let pair = pairs.get(row).copied();

            let key_id = format!("{}_key-index-{row}", self.id);
            let mut key_attrs = vec![
                ("type", "text"),
                ("id", key_id.as_str()),
                ("name", self.name.as_str()),
            ];
            if let Some((key, _)) = pair {
                key_attrs.push(("value", key));
            }
            element(doc, item, "input", &key_attrs);

            let value_id = format!("{}_value-index-{row}", self.id);
            let mut value_attrs = vec![
                ("type", "text"),
                ("id", value_id.as_str()),
                ("name", self.name.as_str()),
            ];
            if let Some((_, value)) = pair {
                value_attrs.push(("value", value));
            }
            element(doc, item, "input", &value_attrs);

            text_element(doc, item, "a", &[("class", "remove-key-value-item")], "Remove");
        }

        text_element(doc, container, "a", &[("class", "add-key-value-item")], "Add item");
        container
    }
}
