//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it into the arena DOM. Text is kept
//! byte-for-byte (whitespace included) so serialization changes nothing but
//! the class attributes the rewriter touches.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use rip_dom::{Document, DomTree, ElementData, NodeData, NodeId, QualName};

use crate::HtmlError;

/// HTML5 parser
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Result<Document, HtmlError> {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML, tagging the document with `url`
    pub fn parse_with_url(&self, html: &str, url: &str) -> Result<Document, HtmlError> {
        tracing::debug!("Parsing HTML document: {}", url);

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .map_err(|source| HtmlError::Read { url: url.to_string(), source })?;

        let mut document = Document::empty(url);
        let root = document.tree().root();
        self.convert_children(&dom.document, document.tree_mut(), root);

        tracing::debug!("Parsed {} nodes", document.tree().len());
        Ok(document)
    }

    fn convert_children(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) {
        for child in handle.children.borrow().iter() {
            self.convert_node(child, tree, parent);
        }
    }

    /// Convert an RcDom node (and its subtree) into the arena
    fn convert_node(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) {
        match &handle.data {
            RcNodeData::Document => {
                self.convert_children(handle, tree, parent);
            }
            RcNodeData::Doctype { name, public_id, system_id } => {
                let id = tree.push(NodeData::Doctype {
                    name: name.to_string(),
                    public_id: public_id.to_string(),
                    system_id: system_id.to_string(),
                });
                tree.append_child(parent, id);
            }
            RcNodeData::Text { contents } => {
                let id = tree.create_text(&contents.borrow());
                tree.append_child(parent, id);
            }
            RcNodeData::Comment { contents } => {
                let id = tree.create_comment(contents);
                tree.append_child(parent, id);
            }
            RcNodeData::Element { name, attrs, template_contents, .. } => {
                let mut elem = ElementData::new(QualName::new(name.local.to_string()));

                for attr in attrs.borrow().iter() {
                    let attr_name = match &attr.name.prefix {
                        Some(prefix) => QualName::prefixed(prefix.to_string(), attr.name.local.to_string()),
                        None => QualName::new(attr.name.local.to_string()),
                    };
                    elem.attrs.push(rip_dom::Attribute {
                        name: attr_name,
                        value: attr.value.to_string(),
                    });
                }

                let id = tree.push(NodeData::Element(elem));
                tree.append_child(parent, id);

                // <template> keeps its content in a separate fragment
                if let Some(contents) = template_contents.borrow().as_ref() {
                    self.convert_children(contents, tree, id);
                }
                self.convert_children(handle, tree, id);
            }
            RcNodeData::ProcessingInstruction { target, contents } => {
                let id = tree.push(NodeData::ProcessingInstruction {
                    target: target.to_string(),
                    data: contents.to_string(),
                });
                tree.append_child(parent, id);
            }
        }
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}
