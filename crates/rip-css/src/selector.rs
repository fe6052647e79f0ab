//! Compound view over lightningcss selectors
//!
//! lightningcss stores a selector's components in match order (rightmost
//! compound first). The pruner works compound by compound in source order,
//! so selectors are split into [`Compound`]s and rebuilt afterwards.

use crate::{Combinator, Component, Selector};

/// One compound selector and the combinator that precedes it
#[derive(Debug, Clone, PartialEq)]
pub struct Compound<'i> {
    /// `None` for the leading compound
    pub combinator: Option<Combinator>,
    pub components: Vec<Component<'i>>,
}

impl Compound<'_> {
    /// True when the compound holds nothing but `&` or `:scope` anchors
    pub fn is_anchor_only(&self) -> bool {
        !self.components.is_empty() && self.components.iter().all(is_anchor)
    }
}

/// Split `selector` into compounds, in source order
pub fn compounds<'i>(selector: &Selector<'i>) -> Vec<Compound<'i>> {
    let parts: Vec<&[Component<'i>]> = selector
        .iter_raw_match_order()
        .as_slice()
        .split(|component| component.is_combinator())
        .rev()
        .collect();
    let combinators: Vec<Combinator> = selector
        .iter_raw_match_order()
        .rev()
        .filter_map(|component| component.as_combinator())
        .collect();

    parts
        .into_iter()
        .enumerate()
        .map(|(i, components)| Compound {
            combinator: i.checked_sub(1).and_then(|prev| combinators.get(prev).copied()),
            components: components.to_vec(),
        })
        .collect()
}

/// Rebuild a selector from source-ordered compounds
pub fn build_selector<'i>(compounds: Vec<Compound<'i>>) -> Selector<'i> {
    let mut parse_order = Vec::new();
    for (i, compound) in compounds.into_iter().enumerate() {
        if i > 0 {
            parse_order.push(Component::Combinator(
                compound.combinator.unwrap_or(Combinator::Descendant),
            ));
        }
        parse_order.extend(compound.components);
    }
    Selector::from(parse_order)
}

/// `&` and `:scope` stand for the enclosing context, not for an element
pub fn is_anchor(component: &Component<'_>) -> bool {
    matches!(component, Component::Nesting | Component::Scope)
}
