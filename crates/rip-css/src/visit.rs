//! Class selector walks
//!
//! Both walks visit class selectors in document order. They cover nested
//! style rules, group at-rules, `@scope` preludes and selector arguments of
//! pseudo-classes such as `:not()`, `:is()`, `:has()` and `:nth-child(of S)`.

use crate::rules::{child_rules, child_rules_mut};
use crate::{Component, CssRule, Ident, NthOfSelectorData, Selector, Stylesheet};

impl<'i> Stylesheet<'i> {
    /// Call `f` with the name of every class selector
    pub fn for_each_class(&self, f: &mut impl FnMut(&str)) {
        for rule in self.rules() {
            walk_rule(rule, f);
        }
    }

    /// Call `f` with every class selector's identifier, allowing it to be renamed
    pub fn for_each_class_mut(&mut self, f: &mut impl FnMut(&mut Ident<'i>)) {
        for rule in self.rules_mut() {
            walk_rule_mut(rule, f);
        }
    }

    /// Style rules at any depth, nested ones included
    pub fn style_rule_count(&self) -> usize {
        fn count(rules: &[CssRule<'_>]) -> usize {
            rules
                .iter()
                .map(|rule| {
                    let own = matches!(rule, CssRule::Style(_) | CssRule::Nesting(_)) as usize;
                    own + child_rules(rule).map_or(0, count)
                })
                .sum()
        }
        count(self.rules())
    }
}

fn walk_rule(rule: &CssRule<'_>, f: &mut impl FnMut(&str)) {
    match rule {
        CssRule::Style(style) => walk_selectors(&style.selectors.0, f),
        CssRule::Nesting(nesting) => walk_selectors(&nesting.style.selectors.0, f),
        CssRule::Scope(scope) => {
            for list in [&scope.scope_start, &scope.scope_end].into_iter().flatten() {
                walk_selectors(&list.0, f);
            }
        }
        _ => {}
    }
    for child in child_rules(rule).unwrap_or_default() {
        walk_rule(child, f);
    }
}

fn walk_selectors(selectors: &[Selector<'_>], f: &mut impl FnMut(&str)) {
    for selector in selectors {
        // match order reverses compounds; visit them source first
        let parts: Vec<_> = selector
            .iter_raw_match_order()
            .as_slice()
            .split(|component| component.is_combinator())
            .rev()
            .collect();
        for component in parts.into_iter().flatten() {
            walk_component(component, f);
        }
    }
}

fn walk_component(component: &Component<'_>, f: &mut impl FnMut(&str)) {
    match component {
        Component::Class(name) => f(&**name),
        Component::Negation(list)
        | Component::Where(list)
        | Component::Is(list)
        | Component::Has(list)
        | Component::Any(_, list) => walk_selectors(list, f),
        Component::NthOf(data) => walk_selectors(data.selectors(), f),
        Component::Slotted(selector) | Component::Host(Some(selector)) => {
            walk_selectors(std::slice::from_ref(selector), f)
        }
        _ => {}
    }
}

fn walk_rule_mut<'i>(rule: &mut CssRule<'i>, f: &mut impl FnMut(&mut Ident<'i>)) {
    match rule {
        CssRule::Style(style) => walk_selectors_mut(&mut style.selectors.0, f),
        CssRule::Nesting(nesting) => walk_selectors_mut(&mut nesting.style.selectors.0, f),
        CssRule::Scope(scope) => {
            for list in [&mut scope.scope_start, &mut scope.scope_end].into_iter().flatten() {
                walk_selectors_mut(&mut list.0, f);
            }
        }
        _ => {}
    }
    if let Some(children) = child_rules_mut(rule) {
        for child in children {
            walk_rule_mut(child, f);
        }
    }
}

fn walk_selectors_mut<'i>(selectors: &mut [Selector<'i>], f: &mut impl FnMut(&mut Ident<'i>)) {
    for selector in selectors {
        let mut parts: Vec<_> = selector
            .iter_mut_raw_match_order()
            .into_slice()
            .split_mut(|component| component.is_combinator())
            .collect();
        parts.reverse();
        for component in parts.into_iter().flatten() {
            walk_component_mut(component, f);
        }
    }
}

fn walk_component_mut<'i>(component: &mut Component<'i>, f: &mut impl FnMut(&mut Ident<'i>)) {
    match component {
        Component::Class(name) => f(name),
        Component::Negation(list)
        | Component::Where(list)
        | Component::Is(list)
        | Component::Has(list)
        | Component::Any(_, list) => walk_selectors_mut(list, f),
        Component::NthOf(data) => {
            let mut selectors = data.clone_selectors();
            walk_selectors_mut(&mut selectors, f);
            *data = NthOfSelectorData::new(*data.nth_data(), selectors);
        }
        Component::Slotted(selector) | Component::Host(Some(selector)) => {
            walk_selectors_mut(std::slice::from_mut(selector), f)
        }
        _ => {}
    }
}
