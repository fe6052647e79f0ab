//! HTML serializer
//!
//! Follows the HTML5 fragment serialization algorithm closely enough that
//! parse -> serialize is stable for documents html5ever produced.

use crate::{DomTree, NodeData, NodeId};

/// Elements that never have an end tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame",
    "hr", "img", "input", "keygen", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose text children are written without escaping
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "style", "script", "xmp", "iframe", "noembed", "noframes", "plaintext",
    "noscript",
];

/// Elements where the parser drops one leading newline
const NEWLINE_SENSITIVE: &[&str] = &["pre", "textarea", "listing"];

/// Serialize a whole tree to HTML text
pub fn serialize(tree: &DomTree) -> String {
    let mut out = String::with_capacity(tree.len() * 16);
    for (child, _) in tree.children(tree.root()) {
        write_node(tree, child, &mut out);
    }
    tracing::trace!("Serialized {} nodes into {} bytes", tree.len(), out.len());
    out
}

fn write_node(tree: &DomTree, id: NodeId, out: &mut String) {
    let Some(node) = tree.get(id) else { return };

    match &node.data {
        NodeData::Document => {
            for (child, _) in tree.children(id) {
                write_node(tree, child, out);
            }
        }
        NodeData::Doctype { name, .. } => {
            out.push_str("<!DOCTYPE ");
            out.push_str(name);
            out.push('>');
        }
        NodeData::Element(elem) => {
            let tag = elem.name.to_string();
            out.push('<');
            out.push_str(&tag);
            for attr in &elem.attrs {
                out.push(' ');
                out.push_str(&attr.name.to_string());
                out.push_str("=\"");
                escape_attr(&attr.value, out);
                out.push('"');
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&elem.tag()) {
                return;
            }

            if NEWLINE_SENSITIVE.contains(&elem.tag()) {
                let first = tree.get(node.first_child).and_then(|n| n.as_text());
                if first.is_some_and(|t| t.starts_with('\n')) {
                    out.push('\n');
                }
            }

            for (child, _) in tree.children(id) {
                write_node(tree, child, out);
            }

            out.push_str("</");
            out.push_str(&tag);
            out.push('>');
        }
        NodeData::Text(text) => {
            let raw = tree.get(node.parent)
                .and_then(|p| p.as_element())
                .is_some_and(|e| RAW_TEXT_ELEMENTS.contains(&e.tag()));
            if raw {
                out.push_str(text);
            } else {
                escape_text(text, out);
            }
        }
        NodeData::Comment(text) => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
        NodeData::ProcessingInstruction { target, data } => {
            out.push_str("<?");
            out.push_str(target);
            out.push(' ');
            out.push_str(data);
            out.push('>');
        }
    }
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}
