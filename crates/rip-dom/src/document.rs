//! Document - a parsed HTML file and where it came from

use crate::{DomTree, serialize};

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Caller-supplied identifier (usually the source path)
    url: String,
}

impl Document {
    /// Create a document with an empty tree
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
        }
    }

    /// Identifier this document was parsed from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Serialize back to HTML text
    pub fn to_html(&self) -> String {
        serialize(&self.tree)
    }
}
