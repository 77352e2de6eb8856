//! Convention B: identifiers end with a literal anchor followed by the item
//! index, e.g. `id_dict_key-index-0`. A secondary numeric suffix after the
//! index (`id_dict_key-index-0_1`, the multi-widget sub-index) is dropped
//! on rewrite — deployed pages depend on this, so it is kept as observed
//! and pinned by a test.

use regex::Regex;

use super::{GroupContext, IdentifierScheme, SchemeError};

const DEFAULT_ANCHOR: &str = "-index-";
const COUNTER_ATTRIBUTE: &str = "data-next-index";

#[derive(Debug, Clone)]
pub struct AnchoredIndexScheme {
    anchor: String,
    pattern: Regex,
}

impl AnchoredIndexScheme {
    pub fn new() -> Result<Self, SchemeError> {
        Self::with_anchor(DEFAULT_ANCHOR)
    }

    pub fn with_anchor(anchor: &str) -> Result<Self, SchemeError> {
        let pattern = Regex::new(&format!(r"{}(\d+)(_\d+)?$", regex::escape(anchor)))
            .map_err(|err| SchemeError::BadAnchor(err.to_string()))?;
        Ok(Self {
            anchor: anchor.to_string(),
            pattern,
        })
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    fn rewrite(&self, value: &str, index: u64) -> Result<String, SchemeError> {
        let captures = self
            .pattern
            .captures(value)
            .ok_or_else(|| SchemeError::MissingIndex(value.to_string()))?;
        let digits = captures
            .get(1)
            .ok_or_else(|| SchemeError::MissingIndex(value.to_string()))?;
        // Everything after the anchored digit run (the secondary suffix,
        // when present) is discarded.
        Ok(format!("{}{}", &value[..digits.start()], index))
    }
}

impl IdentifierScheme for AnchoredIndexScheme {
    fn counter_attribute(&self) -> &str {
        COUNTER_ATTRIBUTE
    }

    fn rewrite_id(
        &self,
        _ctx: &GroupContext,
        value: &str,
        index: u64,
    ) -> Result<String, SchemeError> {
        self.rewrite(value, index)
    }

    /// Names in anchored deployments are usually shared verbatim across
    /// items and carry no index; those pass through unchanged. A name that
    /// does carry the anchor is renumbered like an id.
    fn rewrite_name(
        &self,
        _ctx: &GroupContext,
        value: &str,
        index: u64,
    ) -> Result<String, SchemeError> {
        if self.pattern.is_match(value) {
            self.rewrite(value, index)
        } else {
            Ok(value.to_string())
        }
    }
}
