//! classrip CSS
//!
//! Stylesheet trees backed by lightningcss. The dead-rule eliminator prunes
//! and the class rewriter renames the lightningcss rule and selector trees in
//! place; printing goes back through the lightningcss printer.

mod minify;
mod parser;
mod rules;
mod selector;
mod visit;

pub use minify::minify;
pub use parser::CssParser;
pub use rules::{child_rules, child_rules_mut};
pub use selector::{Compound, build_selector, compounds, is_anchor};

pub use lightningcss::rules::CssRule;
pub use lightningcss::rules::style::StyleRule;
pub use lightningcss::selector::{Combinator, Component, Selector, SelectorList};
pub use lightningcss::values::ident::Ident;
pub use parcel_selectors::parser::NthOfSelectorData;

use lightningcss::stylesheet::{PrinterOptions, StyleSheet};

/// Parse a CSS stylesheet
pub fn parse_stylesheet(css: &str) -> Result<Stylesheet<'_>, CssError> {
    CssParser::new().parse(css)
}

/// Parsed stylesheet, borrowing from its source text
pub struct Stylesheet<'i> {
    sheet: StyleSheet<'i>,
}

impl<'i> Stylesheet<'i> {
    pub(crate) fn new(sheet: StyleSheet<'i>) -> Self {
        Self { sheet }
    }

    /// Number of top-level rules
    pub fn len(&self) -> usize {
        self.sheet.rules.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheet.rules.0.is_empty()
    }

    pub fn rules(&self) -> &[CssRule<'i>] {
        &self.sheet.rules.0
    }

    /// Top-level rules, for in-place pruning
    pub fn rules_mut(&mut self) -> &mut Vec<CssRule<'i>> {
        &mut self.sheet.rules.0
    }

    /// Print back to compact CSS text.
    ///
    /// Only whitespace is dropped; values come out in lightningcss's
    /// canonical form (`blue` prints as `#00f`).
    pub fn to_css(&self) -> Result<String, CssError> {
        let printer_options = PrinterOptions {
            minify: true,
            ..Default::default()
        };

        let result = self.sheet
            .to_css(printer_options)
            .map_err(|source| CssError::Print(source.to_string()))?;
        Ok(result.code)
    }
}

impl std::fmt::Debug for Stylesheet<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stylesheet")
            .field("rules", &self.len())
            .finish()
    }
}

/// CSS errors
#[derive(Debug, thiserror::Error)]
pub enum CssError {
    #[error("Parse error at line {line}, column {column}: {message}")]
    ParseError { line: u32, column: u32, message: String },

    #[error("Failed to print stylesheet: {0}")]
    Print(String),

    #[error("Minify error: {0}")]
    Minify(String),
}
