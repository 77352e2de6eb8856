//! Serializes a subtree back to markup. Attribute insertion order is
//! preserved, so the output is deterministic; values are written verbatim
//! (the markup contract assumes trusted, server-controlled content).

use super::arena::{Document, NodeId, NodeKind};
use super::is_void_tag;

pub fn to_html(doc: &Document, node: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, node, &mut out);
    out
}

fn write_node(doc: &Document, node: NodeId, out: &mut String) {
    match doc.kind(node) {
        NodeKind::Document => {
            for &child in doc.children(node) {
                write_node(doc, child, out);
            }
        }
        NodeKind::Text(text) => out.push_str(text),
        NodeKind::Element(element) => {
            out.push('<');
            out.push_str(&element.tag);
            for (name, value) in &element.attrs {
                out.push(' ');
                out.push_str(name);
                if !value.is_empty() {
                    out.push_str("=\"");
                    out.push_str(value);
                    out.push('"');
                }
            }
            out.push('>');
            if is_void_tag(&element.tag) {
                return;
            }
            for &child in doc.children(node) {
                write_node(doc, child, out);
            }
            out.push_str("</");
            out.push_str(&element.tag);
            out.push('>');
        }
    }
}
