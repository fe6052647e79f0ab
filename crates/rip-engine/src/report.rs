//! Build unit summary

use std::fmt;

use crate::PruneStats;

/// What one `rip` invocation did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RipReport {
    pub html_files: usize,
    pub css_files: usize,
    /// Input HTML + CSS bytes
    pub bytes_in: usize,
    /// Output HTML + CSS bundle bytes
    pub bytes_out: usize,
    /// Distinct classnames found in HTML
    pub classes_seen: usize,
    /// Classnames renamed in CSS (and therefore in HTML)
    pub classes_renamed: usize,
    /// Class tokens rewritten across all documents
    pub html_tokens_renamed: usize,
    pub prune: PruneStats,
}

impl RipReport {
    /// Bytes saved (0 if the output grew)
    pub fn bytes_saved(&self) -> usize {
        self.bytes_in.saturating_sub(self.bytes_out)
    }
}

impl fmt::Display for RipReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "files: {} html, {} css", self.html_files, self.css_files)?;
        writeln!(
            f,
            "classes: {} seen, {} renamed, {} html tokens rewritten",
            self.classes_seen, self.classes_renamed, self.html_tokens_renamed
        )?;
        writeln!(
            f,
            "pruned: {} rules, {} selectors, {} class selectors",
            self.prune.rules_removed, self.prune.selectors_removed, self.prune.components_removed
        )?;
        write!(f, "bytes: {} -> {} (saved {})", self.bytes_in, self.bytes_out, self.bytes_saved())
    }
}
