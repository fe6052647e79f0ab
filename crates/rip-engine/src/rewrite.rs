//! Tree rewriting
//!
//! The stylesheets are renamed first, and only classes actually renamed
//! there enter the [`RenameMap`]. Documents are then rewritten with that map,
//! so a class that only appears in HTML keeps its original spelling.

use std::collections::HashSet;

use indexmap::IndexMap;
use rip_css::{Ident, Stylesheet};
use rip_dom::{ClassList, Document};

use crate::RenamePlan;

/// Original classname -> short name, as applied to the stylesheets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameMap {
    names: IndexMap<String, String>,
}

impl RenameMap {
    pub fn get(&self, original: &str) -> Option<&str> {
        self.names.get(original).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Pairs in rank order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(from, to)| (from.as_str(), to.as_str()))
    }
}

/// Rename every planned class selector in `sheets`.
///
/// Each selector is looked up once by its original name, so a short name
/// that equals another original class is never renamed a second time.
pub fn rename_css(sheets: &mut [Stylesheet<'_>], plan: &RenamePlan) -> RenameMap {
    let mut applied = HashSet::new();

    for sheet in sheets.iter_mut() {
        sheet.for_each_class_mut(&mut |name| {
            if let Some(short) = plan.get(&**name) {
                applied.insert(name.to_string());
                *name = Ident::from(short.to_string());
            }
        });
    }

    let names: IndexMap<String, String> = plan.iter()
        .filter(|(from, _)| applied.contains(*from))
        .map(|(from, to)| {
            tracing::trace!("Renamed .{} -> .{}", from, to);
            (from.to_string(), to.to_string())
        })
        .collect();

    tracing::debug!("Renamed {} classes across {} stylesheets", names.len(), sheets.len());
    RenameMap { names }
}

/// Rewrite the `class` attributes of `document` with `map`.
///
/// Tokens missing from the map are left alone. Attributes with no renamed
/// token are not touched at all. Returns the number of tokens rewritten.
pub fn rename_html(document: &mut Document, map: &RenameMap) -> usize {
    let tree = document.tree_mut();
    let mut renamed = 0;

    for id in tree.element_ids() {
        let Some(elem) = tree.get_mut(id).and_then(|n| n.as_element_mut()) else {
            continue;
        };
        let Some(value) = elem.class_attr() else {
            continue;
        };

        let mut classes = ClassList::from_string(value);
        let changed = classes.map_tokens(|token| map.get(token).map(str::to_string));
        if changed > 0 {
            elem.set_class_attr(classes.value());
            renamed += changed;
        }
    }

    tracing::debug!("{}: rewrote {} class tokens", document.url(), renamed);
    renamed
}
