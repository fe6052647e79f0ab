//! classrip Engine
//!
//! Shrinks a set of HTML documents and their stylesheets by renaming CSS
//! classes to the shortest tokens available and dropping rules no document
//! can match.
//!
//! # Pipeline
//! 1. Count class tokens across every HTML document ([`count_html_classes`])
//! 2. Prune selectors that name unknown classes, then count what survives
//!    ([`eliminate_dead_rules`], [`count_css_classes`])
//! 3. Rank by byte weight and assign short names ([`rank`], [`RenamePlan`])
//! 4. Rewrite the stylesheets, then the documents ([`rename_css`], [`rename_html`])
//!
//! # Example
//! ```rust,ignore
//! use rip_engine::{rip, SourceFile};
//!
//! let out = rip(
//!     &[SourceFile::new("index.html", r#"<p class="intro">hi</p>"#)],
//!     &[SourceFile::new("site.css", ".intro{color:red}.gone{color:blue}")],
//! )?;
//! assert_eq!(out.css_bundle.text, ".a{color:red}");
//! ```

mod config;
mod counter;
mod error;
mod pipeline;
mod plan;
mod prune;
mod report;
mod rewrite;

pub use config::RipConfig;
pub use counter::{ClassCount, ClassCounts, count_html_classes};
pub use error::RipError;
pub use pipeline::{CssBundle, RipOutput, Ripper, SourceFile, rip};
pub use plan::{RankedClass, RenamePlan, rank, short_name};
pub use prune::{PruneStats, count_css_classes, eliminate_dead_rules};
pub use report::RipReport;
pub use rewrite::{RenameMap, rename_css, rename_html};

// Re-export the tree providers for callers that drive the stages directly
pub use rip_css as css;
pub use rip_dom as dom;
pub use rip_html as html;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
