//! Orchestration of one build unit
//!
//! HTML -> counts; CSS -> pruned -> counts; rank; rename CSS (building the
//! map); rename HTML with the map; serialize.

use std::collections::HashSet;

use rip_css::{CssParser, Stylesheet};
use rip_dom::Document;

use crate::{
    ClassCounts, RenameMap, RenamePlan, RipConfig, RipError, RipReport, count_css_classes,
    count_html_classes, eliminate_dead_rules, rank, rename_css, rename_html,
};

/// One input or output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Caller's identifier for the file, usually its path
    pub identifier: String,
    pub text: String,
}

impl SourceFile {
    pub fn new(identifier: impl Into<String>, text: impl Into<String>) -> Self {
        Self { identifier: identifier.into(), text: text.into() }
    }
}

/// All stylesheets of a build unit, rewritten and concatenated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssBundle {
    pub text: String,
}

/// Result of one build unit
#[derive(Debug, Clone)]
pub struct RipOutput {
    pub css_bundle: CssBundle,
    /// Rewritten documents, in input order
    pub html_documents: Vec<SourceFile>,
    pub rename_map: RenameMap,
    pub report: RipReport,
}

/// Runs build units with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Ripper {
    config: RipConfig,
}

impl Ripper {
    pub fn new(config: RipConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RipConfig {
        &self.config
    }

    /// Process one build unit
    pub fn rip(&self, html: &[SourceFile], css: &[SourceFile]) -> Result<RipOutput, RipError> {
        let config = &self.config;
        let mut report = RipReport {
            html_files: html.len(),
            css_files: css.len(),
            bytes_in: html.iter().chain(css).map(|f| f.text.len()).sum(),
            ..Default::default()
        };

        // 1. HTML -> trees -> counts
        let mut counts = ClassCounts::new();
        let mut documents = Vec::with_capacity(html.len());
        for file in html {
            let document = rip_html::parse(&file.identifier, &file.text)?;
            let tokens = count_html_classes(document.tree(), &mut counts);
            tracing::debug!("{}: {} class tokens", file.identifier, tokens);
            documents.push(document);
        }
        report.classes_seen = counts.len();

        // 2. CSS -> trees -> pruned -> counts
        let parser = CssParser::new();
        let mut sheets = Vec::with_capacity(css.len());
        for file in css {
            let mut sheet = parser.parse_named(&file.text, &file.identifier).map_err(|source| {
                RipError::Css { identifier: file.identifier.clone(), source }
            })?;
            let is_known = |name: &str| counts.contains(name) || config.is_kept(name);
            report.prune += eliminate_dead_rules(&mut sheet, &is_known);
            sheets.push(sheet);
        }
        for sheet in &sheets {
            count_css_classes(sheet, &mut counts, config)?;
        }

        // 3. rank, reserving every spelling that will stay in the output.
        // HTML-only classes still hold their rank index; they are never
        // renamed because no selector names them.
        let ranked = rank(&counts);
        let reserved: HashSet<String> = counts.html_only()
            .map(str::to_string)
            .chain(config.keep.iter().cloned())
            .collect();
        let plan = RenamePlan::assign(
            ranked.iter().filter(|class| !config.is_kept(&class.name)),
            &reserved,
        );

        // 4. rename CSS, then HTML with the map the CSS pass produced
        let rename_map = rename_css(&mut sheets, &plan);
        report.classes_renamed = rename_map.len();
        for document in &mut documents {
            report.html_tokens_renamed += rename_html(document, &rename_map);
        }

        // 5. serialize
        let css_bundle = CssBundle { text: self.bundle(css, &sheets)? };
        let html_documents: Vec<SourceFile> = documents.iter()
            .map(|document: &Document| SourceFile::new(document.url(), document.to_html()))
            .collect();

        report.bytes_out = css_bundle.text.len()
            + html_documents.iter().map(|f| f.text.len()).sum::<usize>();
        tracing::info!(
            "Ripped {} html + {} css files: {} classes renamed, {} rules removed, {} -> {} bytes",
            report.html_files,
            report.css_files,
            report.classes_renamed,
            report.prune.rules_removed,
            report.bytes_in,
            report.bytes_out
        );

        Ok(RipOutput { css_bundle, html_documents, rename_map, report })
    }

    fn bundle(&self, css: &[SourceFile], sheets: &[Stylesheet<'_>]) -> Result<String, RipError> {
        let text = css.iter()
            .zip(sheets)
            .map(|(file, sheet)| {
                sheet.to_css().map_err(|source| RipError::Css {
                    identifier: file.identifier.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?
            .join(&self.config.bundle_separator);

        if self.config.minify_css {
            rip_css::minify(&text).map_err(RipError::Minify)
        } else {
            Ok(text)
        }
    }
}

/// Process one build unit with the default configuration
pub fn rip(html: &[SourceFile], css: &[SourceFile]) -> Result<RipOutput, RipError> {
    Ripper::default().rip(html, css)
}
