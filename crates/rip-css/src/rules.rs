//! Rules that hold other rules

use crate::CssRule;

/// Nested rules of `rule`: the body of a conditional group (`@media`,
/// `@supports`, `@layer`, `@container`, `@scope`, `@starting-style`,
/// `@-moz-document`) or the nested rules of a style rule.
pub fn child_rules<'a, 'i>(rule: &'a CssRule<'i>) -> Option<&'a [CssRule<'i>]> {
    let rules = match rule {
        CssRule::Media(media) => &media.rules,
        CssRule::Supports(supports) => &supports.rules,
        CssRule::LayerBlock(layer) => &layer.rules,
        CssRule::Container(container) => &container.rules,
        CssRule::Scope(scope) => &scope.rules,
        CssRule::StartingStyle(starting) => &starting.rules,
        CssRule::MozDocument(document) => &document.rules,
        CssRule::Style(style) => &style.rules,
        CssRule::Nesting(nesting) => &nesting.style.rules,
        _ => return None,
    };
    Some(&rules.0)
}

/// Mutable counterpart of [`child_rules`]
pub fn child_rules_mut<'a, 'i>(rule: &'a mut CssRule<'i>) -> Option<&'a mut Vec<CssRule<'i>>> {
    let rules = match rule {
        CssRule::Media(media) => &mut media.rules,
        CssRule::Supports(supports) => &mut supports.rules,
        CssRule::LayerBlock(layer) => &mut layer.rules,
        CssRule::Container(container) => &mut container.rules,
        CssRule::Scope(scope) => &mut scope.rules,
        CssRule::StartingStyle(starting) => &mut starting.rules,
        CssRule::MozDocument(document) => &mut document.rules,
        CssRule::Style(style) => &mut style.rules,
        CssRule::Nesting(nesting) => &mut nesting.style.rules,
        _ => return None,
    };
    Some(&mut rules.0)
}
