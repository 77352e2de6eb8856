//! A fixed sub-form rendered inline: one labelled input per subfield.
//!
//! Nesting flattens into the field names with underscores, so a form
//! `bar` with fields `fizz`/`buzz` inside a parent `nested` posts as
//! `nested_bar_fizz` and `nested_bar_buzz`; callers pass the already
//! flattened field names.

use indexmap::IndexMap;

use crate::dom::{Document, NodeId};

use super::element;

pub struct NestedFormWidget {
    name: String,
    fields: Vec<String>,
}

impl NestedFormWidget {
    pub fn new(name: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn render(
        &self,
        doc: &mut Document,
        parent: NodeId,
        values: &IndexMap<String, String>,
    ) -> NodeId {
        let container = element(doc, parent, "div", &[("class", "nested-form")]);

        for field in &self.fields {
            let input_id = format!("id_{}_{}", self.name, field);
            let input_name = format!("{}_{}", self.name, field);

            let label = element(doc, container, "label", &[("for", input_id.as_str())]);
            doc.create_text(label, field);

            let mut attrs = vec![
                ("type", "text"),
                ("id", input_id.as_str()),
                ("name", input_name.as_str()),
            ];
            if let Some(value) = values.get(field) {
                attrs.push(("value", value.as_str()));
            }
            element(doc, container, "input", &attrs);
        }

        container
    }
}
