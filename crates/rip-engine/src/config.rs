//! Engine configuration

use serde::Deserialize;

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RipConfig {
    /// Run the rewritten bundle through lightningcss
    pub minify_css: bool,
    /// Classes that are never pruned and never renamed (e.g. toggled from JS)
    pub keep: Vec<String>,
    /// Text placed between serialized stylesheets in the bundle
    pub bundle_separator: String,
}

impl RipConfig {
    /// Whether `class` is exempt from pruning and renaming
    pub fn is_kept(&self, class: &str) -> bool {
        self.keep.iter().any(|k| k == class)
    }
}
