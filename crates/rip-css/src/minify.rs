//! Bundle minification
//!
//! Uses [`lightningcss`] to shrink the rewritten bundle further (colors,
//! units, merged rules). Runs after renaming, so it never sees the original
//! class names.

use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};

use crate::CssError;

/// Minify CSS text
pub fn minify(input: &str) -> Result<String, CssError> {
    let mut style_sheet = StyleSheet::parse(input, ParserOptions::default())
        .map_err(|source| CssError::Minify(source.to_string()))?;

    style_sheet
        .minify(MinifyOptions::default())
        .map_err(|source| CssError::Minify(source.to_string()))?;

    let printer_options = PrinterOptions {
        minify: true,
        ..Default::default()
    };

    let result = style_sheet
        .to_css(printer_options)
        .map_err(|source| CssError::Minify(source.to_string()))?;

    tracing::debug!("lightningcss minify: {} -> {} bytes", input.len(), result.code.len());
    Ok(result.code)
}
