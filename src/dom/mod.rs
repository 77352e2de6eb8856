//! In-memory document model for server-rendered form markup.
//! Nodes live in an arena indexed by [`NodeId`]; removal unlinks a subtree
//! but never reclaims slots, so node ids stay valid for the document's
//! lifetime.

pub mod arena;
pub mod parse;
pub mod serialize;


pub use arena::{Document, Element, NodeId, NodeKind};
pub use parse::parse;
pub use serialize::to_html;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("Malformed markup at byte {0}: {1}")]
    Parse(usize, String),
}

/// Elements that never take a closing tag.
pub(crate) fn is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}
