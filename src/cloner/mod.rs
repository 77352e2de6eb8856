//! The Repeated-Group Cloner.
//!
//! A group container is an element carrying the scheme's counter attribute
//! and exactly one `<ul>` whose first `<li>` is the template row. Cloning
//! deep-copies the template, renumbers every form control's `id`/`name`
//! with the checked-out index, strips carried-over values, appends the copy
//! and advances the counter. Removal respects a floor of one remaining row
//! and never rolls the counter back, so indices are unique for the life of
//! the page.


use thiserror::Error;

use crate::dom::{Document, NodeId};
use crate::scheme::{GroupContext, IdentifierScheme, SchemeError};

#[derive(Error, Debug)]
pub enum CloneError {
    #[error("Target node is not an element")]
    NotAnElement,
    #[error("Group container has no '{0}' attribute")]
    MissingCounter(String),
    #[error("Counter attribute '{attribute}' is not an integer: '{value}'")]
    InvalidCounter { attribute: String, value: String },
    #[error("Group container has no item list")]
    MissingList,
    #[error("Item list has no template item")]
    MissingTemplate,
    #[error("Form control has no id attribute")]
    MissingControlId,
    #[error(transparent)]
    Scheme(#[from] SchemeError),
    #[error("Item is not attached to a list")]
    DetachedItem,
}

pub struct Cloner<S> {
    scheme: S,
}

impl<S: IdentifierScheme> Cloner<S> {
    pub fn new(scheme: S) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> &S {
        &self.scheme
    }

    /// Clones the template row into a new last item of the container's
    /// list and returns the new item's node.
    ///
    /// The counter attribute is removed for the duration of the operation
    /// and restored at `N + 1` on success; a failure part-way through
    /// leaves it absent, making the faulted state visible in the markup.
    /// All failure modes are contract violations in the server-rendered
    /// markup, not recoverable runtime conditions.
    pub fn add_item(&self, doc: &mut Document, container: NodeId) -> Result<NodeId, CloneError> {
        if doc.element(container).is_none() {
            return Err(CloneError::NotAnElement);
        }

        // Check out the counter: removing the attribute makes the
        // in-progress state observable and guarantees a single reader.
        let attribute = self.scheme.counter_attribute().to_string();
        let raw = doc
            .remove_attr(container, &attribute)
            .ok_or_else(|| CloneError::MissingCounter(attribute.clone()))?;
        let index: u64 = raw.trim().parse().map_err(|_| CloneError::InvalidCounter {
            attribute: attribute.clone(),
            value: raw.clone(),
        })?;

        let list = doc
            .child_elements(container)
            .into_iter()
            .find(|&child| doc.tag(child) == Some("ul"))
            .ok_or(CloneError::MissingList)?;
        let template = doc
            .child_elements(list)
            .into_iter()
            .find(|&child| doc.tag(child) == Some("li"))
            .ok_or(CloneError::MissingTemplate)?;

        let ctx = GroupContext::new(doc.attr(container, "id").map(str::to_owned));
        let item = doc.clone_subtree(template);
        for node in doc.descendant_elements(item) {
            let Some(tag) = doc.tag(node) else { continue };
            if !is_form_control(tag) {
                continue;
            }

            let id = doc
                .attr(node, "id")
                .map(str::to_owned)
                .ok_or(CloneError::MissingControlId)?;
            let new_id = self.scheme.rewrite_id(&ctx, &id, index)?;
            doc.set_attr(node, "id", &new_id);

            if let Some(name) = doc.attr(node, "name").map(str::to_owned) {
                let new_name = self.scheme.rewrite_name(&ctx, &name, index)?;
                doc.set_attr(node, "name", &new_name);
            }

            // The clone starts blank regardless of what the user typed
            // into the template row.
            doc.remove_attr(node, "value");
        }

        doc.append_child(list, item);
        doc.set_attr(container, &attribute, &(index + 1).to_string());
        log::debug!("added item {index} to group {:?}", doc.attr(container, "id"));
        Ok(item)
    }

    /// Removes `item` from its list unless it is the last remaining row.
    /// Returns whether a removal happened. The counter is deliberately left
    /// alone: removed indices are never handed out again.
    pub fn remove_item(&self, doc: &mut Document, item: NodeId) -> Result<bool, CloneError> {
        if doc.element(item).is_none() {
            return Err(CloneError::NotAnElement);
        }
        let list = doc.parent(item).ok_or(CloneError::DetachedItem)?;
        if doc.child_elements(list).len() <= 1 {
            log::debug!("refusing to remove the last item of a group");
            return Ok(false);
        }
        doc.remove(item);
        Ok(true)
    }
}

fn is_form_control(tag: &str) -> bool {
    matches!(tag, "input" | "select" | "textarea")
}
