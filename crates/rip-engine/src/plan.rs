//! Rename planning
//!
//! Greedy: the classes contributing the most bytes get the shortest names.
//! Not globally optimal, but deterministic and linear after the sort.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::ClassCounts;

/// A classname with its ranking key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedClass {
    pub name: String,
    /// Occurrences across HTML and surviving CSS
    pub count: usize,
    /// `count * name.len()`
    pub weight: usize,
}

/// Sort classnames by byte weight, heaviest first.
///
/// The sort is stable, so equal weights keep first-seen order.
pub fn rank(counts: &ClassCounts) -> Vec<RankedClass> {
    let mut ranked: Vec<RankedClass> = counts.iter()
        .map(|(name, count)| RankedClass {
            name: name.to_string(),
            count: count.total(),
            weight: count.total() * name.len(),
        })
        .collect();

    ranked.sort_by(|a, b| b.weight.cmp(&a.weight));
    ranked
}

/// Short name for rank `index`: `a`..`z`, then `a0`..`z0`, `a1`..`z1`, ...
pub fn short_name(index: usize) -> String {
    let letter = char::from(b'a' + (index % 26) as u8);
    match index / 26 {
        0 => letter.to_string(),
        round => format!("{}{}", letter, round - 1),
    }
}

/// Original classname -> assigned short name, in rank order
#[derive(Debug, Clone, Default)]
pub struct RenamePlan {
    names: IndexMap<String, String>,
}

impl RenamePlan {
    /// Assign short names to `ranked` in order.
    ///
    /// Generated names found in `reserved` are skipped: those spellings stay
    /// in the output unrenamed, and reusing them would merge two classes.
    pub fn assign<'a>(
        ranked: impl IntoIterator<Item = &'a RankedClass>,
        reserved: &HashSet<String>,
    ) -> Self {
        let mut names = IndexMap::new();
        let mut next = 0;

        for class in ranked {
            let short = loop {
                let candidate = short_name(next);
                next += 1;
                if !reserved.contains(&candidate) {
                    break candidate;
                }
            };
            tracing::trace!("Planned .{} -> .{} (weight {})", class.name, short, class.weight);
            names.insert(class.name.clone(), short);
        }

        Self { names }
    }

    /// Short name planned for `original`
    pub fn get(&self, original: &str) -> Option<&str> {
        self.names.get(original).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Planned pairs in rank order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(from, to)| (from.as_str(), to.as_str()))
    }
}
