//! CSS Parser using lightningcss

use lightningcss::stylesheet::{ParserOptions, StyleSheet};

use crate::{CssError, Stylesheet};

/// CSS Parser
pub struct CssParser;

impl CssParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a CSS stylesheet
    pub fn parse<'i>(&self, css: &'i str) -> Result<Stylesheet<'i>, CssError> {
        self.parse_named(css, "")
    }

    /// Parse a CSS stylesheet, naming `filename` in lightningcss diagnostics
    pub fn parse_named<'i>(&self, css: &'i str, filename: &str) -> Result<Stylesheet<'i>, CssError> {
        let options = ParserOptions {
            filename: filename.to_string(),
            ..ParserOptions::default()
        };

        let stylesheet = StyleSheet::parse(css, options).map_err(|e| {
            let (line, column) = e.loc.as_ref().map_or((0, 0), |loc| (loc.line + 1, loc.column));
            CssError::ParseError {
                line,
                column,
                message: e.kind.to_string(),
            }
        })?;

        let sheet = Stylesheet::new(stylesheet);
        tracing::debug!(
            "Parsed stylesheet {}: {} top-level rules, {} style rules",
            filename,
            sheet.len(),
            sheet.style_rule_count()
        );
        Ok(sheet)
    }
}

impl Default for CssParser {
    fn default() -> Self {
        Self::new()
    }
}
