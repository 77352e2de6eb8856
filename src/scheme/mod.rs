//! Identifier grammars for indexed sub-form fields.
//!
//! Two conventions exist in deployed markup and they are not composed:
//! a deployment picks exactly one. Both answer the same question, "where
//! inside this identifier does the item index live, and what does the
//! identifier look like with a new index" — so they share one strategy
//! trait instead of two copies of the cloner.

pub mod anchored;
pub mod double_underscore;


pub use anchored::AnchoredIndexScheme;
pub use double_underscore::DoubleUnderscoreScheme;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SchemeError {
    #[error("Identifier '{identifier}' does not start with prefix '{prefix}'")]
    MissingPrefix { identifier: String, prefix: String },
    #[error("Identifier '{0}' has no index segment")]
    MissingIndex(String),
    #[error("Group container has no id attribute")]
    MissingGroupId,
    #[error("Invalid anchor pattern: {0}")]
    BadAnchor(String),
}

/// Container-derived naming context for one rewrite pass.
///
/// The container's own `id` attribute is the shared id prefix; the name
/// prefix is that id with the leading `id_` marker stripped (a no-op when
/// the marker is absent).
#[derive(Debug, Clone)]
pub struct GroupContext {
    container_id: Option<String>,
}

impl GroupContext {
    pub fn new(container_id: Option<impl Into<String>>) -> Self {
        Self {
            container_id: container_id.map(Into::into),
        }
    }

    pub fn id_prefix(&self) -> Result<&str, SchemeError> {
        self.container_id
            .as_deref()
            .ok_or(SchemeError::MissingGroupId)
    }

    pub fn name_prefix(&self) -> Result<&str, SchemeError> {
        let id = self.id_prefix()?;
        Ok(id.strip_prefix("id_").unwrap_or(id))
    }
}

/// Strategy over "rewrite the index embedded in an identifier".
pub trait IdentifierScheme {
    /// Name of the container attribute holding the next free index.
    fn counter_attribute(&self) -> &str;

    /// Rewrites an `id` attribute value to carry `index`.
    fn rewrite_id(
        &self,
        ctx: &GroupContext,
        value: &str,
        index: u64,
    ) -> Result<String, SchemeError>;

    /// Rewrites a `name` attribute value to carry `index`.
    fn rewrite_name(
        &self,
        ctx: &GroupContext,
        value: &str,
        index: u64,
    ) -> Result<String, SchemeError>;
}

impl<T: IdentifierScheme + ?Sized> IdentifierScheme for Box<T> {
    fn counter_attribute(&self) -> &str {
        (**self).counter_attribute()
    }

    fn rewrite_id(
        &self,
        ctx: &GroupContext,
        value: &str,
        index: u64,
    ) -> Result<String, SchemeError> {
        (**self).rewrite_id(ctx, value, index)
    }

    fn rewrite_name(
        &self,
        ctx: &GroupContext,
        value: &str,
        index: u64,
    ) -> Result<String, SchemeError> {
        (**self).rewrite_name(ctx, value, index)
    }
}

/// Per-deployment scheme selector, e.g. from a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeKind {
    DoubleUnderscore,
    AnchoredIndex,
}

impl SchemeKind {
    pub fn into_scheme(self) -> Result<Box<dyn IdentifierScheme>, SchemeError> {
        match self {
            SchemeKind::DoubleUnderscore => Ok(Box::new(DoubleUnderscoreScheme::new())),
            SchemeKind::AnchoredIndex => Ok(Box::new(AnchoredIndexScheme::new()?)),
        }
    }
}
