//! Classname counting
//!
//! One insertion-ordered map per build unit. Insertion order is the order a
//! class was first seen, which makes it the tie-break for equal weights.

use indexmap::IndexMap;
use rip_dom::{ClassList, DomTree};

/// Occurrences of one classname
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassCount {
    /// Tokens in `class` attributes
    pub html: usize,
    /// Class selectors that survived pruning
    pub css: usize,
}

impl ClassCount {
    pub fn total(&self) -> usize {
        self.html + self.css
    }
}

/// Classname -> occurrence counts for one build unit
#[derive(Debug, Clone, Default)]
pub struct ClassCounts {
    counts: IndexMap<String, ClassCount>,
}

impl ClassCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one `class` attribute token
    pub fn add_html(&mut self, class: &str) {
        self.entry(class).html += 1;
    }

    /// Record one surviving class selector.
    ///
    /// Returns `false` (and records nothing) when `class` was never seen in
    /// HTML.
    pub fn add_css(&mut self, class: &str) -> bool {
        match self.counts.get_mut(class) {
            Some(count) => {
                count.css += 1;
                true
            }
            None => false,
        }
    }

    fn entry(&mut self, class: &str) -> &mut ClassCount {
        if !self.counts.contains_key(class) {
            self.counts.insert(class.to_string(), ClassCount::default());
        }
        &mut self.counts[class]
    }

    /// Whether `class` is part of the known set
    pub fn contains(&self, class: &str) -> bool {
        self.counts.contains_key(class)
    }

    pub fn get(&self, class: &str) -> Option<ClassCount> {
        self.counts.get(class).copied()
    }

    /// Total occurrences of `class` (0 if unknown)
    pub fn total(&self, class: &str) -> usize {
        self.get(class).map_or(0, |c| c.total())
    }

    /// Distinct classnames
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Classnames with their counts, in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, ClassCount)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Classnames that appear in HTML but in no surviving selector
    pub fn html_only(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|(_, c)| c.css == 0).map(|(name, _)| name)
    }
}

/// Count every class token of every element in `tree`.
///
/// `class="a b a"` adds two to `a` and one to `b`. Returns the number of
/// tokens seen.
pub fn count_html_classes(tree: &DomTree, counts: &mut ClassCounts) -> usize {
    let mut tokens = 0;

    for (_, node) in tree.descendants(tree.root()) {
        let Some(class) = node.as_element().and_then(|e| e.class_attr()) else {
            continue;
        };
        for token in ClassList::from_string(class).iter() {
            counts.add_html(token);
            tokens += 1;
        }
    }

    tokens
}
