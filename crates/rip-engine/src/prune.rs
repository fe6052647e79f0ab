//! Dead-rule elimination
//!
//! Removes class selectors naming classes no document uses, then selectors
//! left with nothing, then rules left with no selectors. Works directly on
//! the lightningcss rule tree, nested style rules and group at-rules
//! included. `Vec::retain_mut` visits each original element exactly once
//! while removing.

use rip_css::{
    Component, Compound, CssRule, NthOfSelectorData, Selector, SelectorList, StyleRule, Stylesheet,
    build_selector, child_rules_mut, compounds,
};

use crate::{ClassCounts, RipConfig, RipError};

/// What elimination removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneStats {
    /// Class selector components (and emptied pseudo-classes)
    pub components_removed: usize,
    /// Selectors left without components
    pub selectors_removed: usize,
    /// Style rules left without selectors, and group rules left empty
    pub rules_removed: usize,
}

impl std::ops::AddAssign for PruneStats {
    fn add_assign(&mut self, other: Self) {
        self.components_removed += other.components_removed;
        self.selectors_removed += other.selectors_removed;
        self.rules_removed += other.rules_removed;
    }
}

/// Prune `sheet` down to selectors whose classes all satisfy `is_known`.
pub fn eliminate_dead_rules<F>(sheet: &mut Stylesheet<'_>, is_known: &F) -> PruneStats
where
    F: Fn(&str) -> bool,
{
    let mut stats = PruneStats::default();
    prune_rules(sheet.rules_mut(), is_known, &mut stats);
    tracing::debug!(
        "Pruned {} class selectors, {} selectors, {} rules",
        stats.components_removed,
        stats.selectors_removed,
        stats.rules_removed
    );
    stats
}

fn prune_rules<F>(rules: &mut Vec<CssRule<'_>>, is_known: &F, stats: &mut PruneStats)
where
    F: Fn(&str) -> bool,
{
    rules.retain_mut(|rule| {
        let keep = match rule {
            CssRule::Style(style) => prune_style_rule(style, is_known, stats),
            CssRule::Nesting(nesting) => prune_style_rule(&mut nesting.style, is_known, stats),
            CssRule::Scope(scope) => {
                let start_alive = scope
                    .scope_start
                    .as_mut()
                    .is_none_or(|start| prune_selector_list(start, is_known, stats));
                if !start_alive {
                    false
                } else {
                    let end_alive = scope
                        .scope_end
                        .as_mut()
                        .map(|end| prune_selector_list(end, is_known, stats));
                    // an unmatchable limit no longer bounds the scope
                    if end_alive == Some(false) {
                        scope.scope_end = None;
                    }
                    prune_group(&mut scope.rules.0, is_known, stats)
                }
            }
            _ => match child_rules_mut(rule) {
                Some(children) => prune_group(children, is_known, stats),
                // no selectors
                None => true,
            },
        };
        if !keep {
            stats.rules_removed += 1;
        }
        keep
    });
}

/// Prune a group body; false once a non-empty group has been emptied
fn prune_group<F>(rules: &mut Vec<CssRule<'_>>, is_known: &F, stats: &mut PruneStats) -> bool
where
    F: Fn(&str) -> bool,
{
    let had_rules = !rules.is_empty();
    prune_rules(rules, is_known, stats);
    !(had_rules && rules.is_empty())
}

fn prune_style_rule<F>(style: &mut StyleRule<'_>, is_known: &F, stats: &mut PruneStats) -> bool
where
    F: Fn(&str) -> bool,
{
    if !prune_selector_list(&mut style.selectors, is_known, stats) {
        return false;
    }
    prune_rules(&mut style.rules.0, is_known, stats);
    true
}

/// Prune every selector of `list`; false once none is left
fn prune_selector_list<F>(list: &mut SelectorList<'_>, is_known: &F, stats: &mut PruneStats) -> bool
where
    F: Fn(&str) -> bool,
{
    list.0.retain_mut(|selector| keep_selector(selector, is_known, stats));
    !list.0.is_empty()
}

/// Prune a pseudo-class argument list; false once none is left
fn prune_selector_args<'i, F>(
    list: &mut Box<[Selector<'i>]>,
    is_known: &F,
    stats: &mut PruneStats,
) -> bool
where
    F: Fn(&str) -> bool,
{
    let mut selectors = std::mem::take(list).into_vec();
    selectors.retain_mut(|selector| keep_selector(selector, is_known, stats));
    *list = selectors.into_boxed_slice();
    !list.is_empty()
}

fn keep_selector<F>(selector: &mut Selector<'_>, is_known: &F, stats: &mut PruneStats) -> bool
where
    F: Fn(&str) -> bool,
{
    let keep = prune_selector(selector, is_known, stats);
    if !keep {
        stats.selectors_removed += 1;
    }
    keep
}

/// Remove unknown classes from one selector; false when nothing is left.
///
/// A compound that loses all of its components is dropped together with the
/// combinator in front of it, so `.a > .gone` becomes `.a`, never `.a >`.
/// An emptied compound in front of a pseudo-element stays as an empty
/// placeholder: `.gone::before` becomes `::before`.
fn prune_selector<F>(selector: &mut Selector<'_>, is_known: &F, stats: &mut PruneStats) -> bool
where
    F: Fn(&str) -> bool,
{
    let before = *stats;
    let mut parts = compounds(selector);
    let original_lens: Vec<usize> = parts.iter().map(|part| part.components.len()).collect();
    for part in &mut parts {
        part.components.retain_mut(|component| prune_component(component, is_known, stats));
    }
    if *stats == before {
        return true;
    }

    let before_pseudo_element: Vec<bool> = (0..parts.len())
        .map(|index| {
            parts
                .get(index + 1)
                .and_then(|next| next.combinator)
                .is_some_and(|combinator| !combinator.is_tree_combinator())
        })
        .collect();

    let mut kept: Vec<Compound<'_>> = Vec::with_capacity(parts.len());
    for (index, part) in parts.into_iter().enumerate() {
        let emptied = original_lens[index] > 0 && part.components.is_empty();
        if emptied && !before_pseudo_element[index] {
            continue;
        }
        kept.push(part);
    }
    if let Some(first) = kept.first_mut() {
        first.combinator = None;
    }

    // `&` or `:scope` alone no longer matches anything the rule meant
    if kept
        .iter()
        .all(|part| part.components.is_empty() || part.is_anchor_only())
    {
        return false;
    }

    *selector = build_selector(kept);
    true
}

/// Whether `component` survives
fn prune_component<F>(component: &mut Component<'_>, is_known: &F, stats: &mut PruneStats) -> bool
where
    F: Fn(&str) -> bool,
{
    let keep = match component {
        Component::Class(name) => {
            let known = is_known(&**name);
            if !known {
                tracing::trace!("Removing unknown class selector .{}", name);
            }
            known
        }
        Component::Negation(list)
        | Component::Where(list)
        | Component::Is(list)
        | Component::Has(list)
        | Component::Any(_, list) => prune_selector_args(list, is_known, stats),
        Component::NthOf(data) => {
            let mut selectors = data.clone_selectors();
            let keep = prune_selector_args(&mut selectors, is_known, stats);
            *data = NthOfSelectorData::new(*data.nth_data(), selectors);
            keep
        }
        Component::Slotted(selector) | Component::Host(Some(selector)) => {
            keep_selector(selector, is_known, stats)
        }
        _ => true,
    };
    if !keep {
        stats.components_removed += 1;
    }
    keep
}

/// Count every class selector left in `sheet`.
///
/// Kept classes are skipped. Any other class missing from `counts` means
/// pruning let an unknown class through, which aborts the build unit.
pub fn count_css_classes(
    sheet: &Stylesheet<'_>,
    counts: &mut ClassCounts,
    config: &RipConfig,
) -> Result<usize, RipError> {
    let mut counted = 0;
    let mut violation = None;

    sheet.for_each_class(&mut |name: &str| {
        if violation.is_some() || config.is_kept(name) {
            return;
        }
        if counts.add_css(name) {
            counted += 1;
        } else {
            violation = Some(name.to_string());
        }
    });

    match violation {
        Some(class) => Err(RipError::InvariantViolation { class }),
        None => Ok(counted),
    }
}
