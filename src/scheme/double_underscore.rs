//! Convention A: `{prefix}__{field-path}`, where the field path carries one
//! numeric segment naming the item index.
//!
//! The identifier is parsed into (prefix, head, index, tail) once and
//! re-serialized with the new index, so the prefix can never be confused
//! with the field path even when it contains digits itself.

use super::{GroupContext, IdentifierScheme, SchemeError};

const SEPARATOR: &str = "__";
const COUNTER_ATTRIBUTE: &str = "data-next";

#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleUnderscoreScheme;

impl DoubleUnderscoreScheme {
    pub fn new() -> Self {
        Self
    }

    fn rewrite(&self, prefix: &str, value: &str, index: u64) -> Result<String, SchemeError> {
        let parsed = ParsedIdentifier::parse(prefix, value)?;
        Ok(parsed.with_index(index))
    }
}

impl IdentifierScheme for DoubleUnderscoreScheme {
    fn counter_attribute(&self) -> &str {
        COUNTER_ATTRIBUTE
    }

    fn rewrite_id(
        &self,
        ctx: &GroupContext,
        value: &str,
        index: u64,
    ) -> Result<String, SchemeError> {
        self.rewrite(ctx.id_prefix()?, value, index)
    }

    fn rewrite_name(
        &self,
        ctx: &GroupContext,
        value: &str,
        index: u64,
    ) -> Result<String, SchemeError> {
        self.rewrite(ctx.name_prefix()?, value, index)
    }
}

/// One identifier split into its components: `{prefix}__{head}{index}{tail}`.
struct ParsedIdentifier<'a> {
    prefix: &'a str,
    head: &'a str,
    tail: &'a str,
}

impl<'a> ParsedIdentifier<'a> {
    fn parse(prefix: &'a str, value: &'a str) -> Result<Self, SchemeError> {
        let field_path = value
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix(SEPARATOR))
            .ok_or_else(|| SchemeError::MissingPrefix {
                identifier: value.to_string(),
                prefix: prefix.to_string(),
            })?;

        // First digit run inside the field path is the index segment.
        let start = field_path
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| SchemeError::MissingIndex(value.to_string()))?;
        let len = field_path[start..]
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(field_path.len() - start);

        Ok(Self {
            prefix,
            head: &field_path[..start],
            tail: &field_path[start + len..],
        })
    }

    fn with_index(&self, index: u64) -> String {
        format!(
            "{}{}{}{}{}",
            self.prefix, SEPARATOR, self.head, index, self.tail
        )
    }
}
