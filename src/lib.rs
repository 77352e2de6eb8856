//! Repeatable sub-form groups.
//!
//! A server renders a group container holding one template row; this crate
//! renders that markup ([`widgets`]), clones rows with renumbered field
//! identifiers ([`cloner`]), and reassembles posted flat data into lists
//! and maps ([`submission`]). The markup lives in a small in-memory
//! document model ([`dom`]); the two identifier grammars sit behind one
//! strategy trait ([`scheme`]).

pub mod cloner;
pub mod dom;
pub mod scheme;
pub mod submission;
pub mod widgets;

pub use cloner::{CloneError, Cloner};
pub use dom::{Document, DomError, NodeId};
pub use scheme::{
    AnchoredIndexScheme, DoubleUnderscoreScheme, GroupContext, IdentifierScheme, SchemeError,
    SchemeKind,
};
