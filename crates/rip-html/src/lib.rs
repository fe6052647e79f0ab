//! classrip HTML Parser
//!
//! HTML5 parser built on html5ever, producing the arena DOM that the class
//! rewriter works on.

mod parser;

pub use parser::HtmlParser;
pub use rip_dom::{Document, DomTree, serialize};

/// Parse an HTML string into a document
pub fn parse(url: &str, html: &str) -> Result<Document, HtmlError> {
    HtmlParser::new().parse_with_url(html, url)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("Failed to read HTML input for {url}: {source}")]
    Read {
        url: String,
        #[source]
        source: std::io::Error,
    },
}
