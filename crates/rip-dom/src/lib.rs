//! classrip DOM
//!
//! Arena-allocated document tree that the HTML provider fills and the
//! class rewriter mutates in place.

mod node;
mod tree;
mod document;
mod classlist;
mod serialize;

pub use node::{Node, NodeData, ElementData, Attribute, QualName};
pub use tree::{DomTree, Children, Descendants};
pub use document::Document;
pub use classlist::ClassList;
pub use serialize::serialize;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID (always the document node)
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Whether this id points at a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}
