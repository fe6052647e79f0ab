//! Integration tests - full pipeline over a build unit
//!
//! HTML + CSS -> counts -> pruning -> plan -> rewritten bundle and documents

use std::collections::{HashMap, HashSet};

use pretty_assertions::assert_eq;
use rip_engine::html::HtmlParser;
use rip_engine::{
    ClassCounts, RenamePlan, RipConfig, RipError, Ripper, SourceFile, count_css_classes,
    count_html_classes, eliminate_dead_rules, rank, rip,
};

fn class_attrs(html: &str) -> Vec<String> {
    let doc = HtmlParser::new().parse(html).unwrap();
    doc.tree()
        .descendants(doc.tree().root())
        .filter_map(|(_, node)| node.as_element()?.class_attr().map(str::to_string))
        .collect()
}

// ============================================================================
// END-TO-END
// ============================================================================

#[test]
fn test_header_text_scenario() {
    let html = SourceFile::new(
        "index.html",
        r#"<div class="header header"><p class="header text">Hi</p></div>"#,
    );
    let css = SourceFile::new("site.css", ".header{color:blue}.unused{color:red}.text{font-size:1em}");

    let out = rip(&[html], &[css]).unwrap();

    // lightningcss prints colors in their shortest form
    assert_eq!(out.css_bundle.text, ".a{color:#00f}.b{font-size:1em}");
    assert_eq!(out.rename_map.get("header"), Some("a"));
    assert_eq!(out.rename_map.get("text"), Some("b"));
    assert_eq!(out.rename_map.get("unused"), None);

    assert_eq!(out.html_documents.len(), 1);
    assert_eq!(out.html_documents[0].identifier, "index.html");
    assert_eq!(class_attrs(&out.html_documents[0].text), ["a a", "a b"]);
    assert_eq!(
        out.html_documents[0].text,
        r#"<html><head></head><body><div class="a a"><p class="a b">Hi</p></div></body></html>"#
    );
}

#[test]
fn test_header_text_counts_by_stage() {
    let doc = HtmlParser::new()
        .parse(r#"<div class="header header"><p class="header text">Hi</p></div>"#)
        .unwrap();
    let mut counts = ClassCounts::new();
    count_html_classes(doc.tree(), &mut counts);
    assert_eq!(counts.total("header"), 3);
    assert_eq!(counts.total("text"), 1);

    let mut sheet = rip_engine::css::parse_stylesheet(
        ".header{color:blue}.unused{color:red}.text{font-size:1em}",
    )
    .unwrap();
    let stats = eliminate_dead_rules(&mut sheet, &|name: &str| counts.contains(name));
    assert_eq!(stats.rules_removed, 1);
    assert_eq!(sheet.to_css().unwrap(), ".header{color:#00f}.text{font-size:1em}");

    count_css_classes(&sheet, &mut counts, &RipConfig::default()).unwrap();
    assert!(!counts.contains("unused"));

    let ranked = rank(&counts);
    assert_eq!(ranked[0].name, "header");
    assert_eq!(ranked[1].name, "text");
    assert!(ranked[0].weight > ranked[1].weight);

    let plan = RenamePlan::assign(&ranked, &HashSet::new());
    assert_eq!(plan.get("header"), Some("a"));
    assert_eq!(plan.get("text"), Some("b"));
}

#[test]
fn test_html_only_class_left_unrenamed() {
    let out = rip(
        &[SourceFile::new("a.html", r#"<p class="styled hook">x</p>"#)],
        &[SourceFile::new("a.css", ".styled{margin:0}")],
    )
    .unwrap();

    assert_eq!(out.rename_map.get("hook"), None);
    assert_eq!(class_attrs(&out.html_documents[0].text), ["a hook"]);

    // a heavier HTML-only class still takes the first rank index
    let out = rip(
        &[SourceFile::new("b.html", r#"<p class="bigonlyhtml bigonlyhtml">x</p><p class="x">y</p>"#)],
        &[SourceFile::new("b.css", ".x{color:red}")],
    )
    .unwrap();

    assert_eq!(out.rename_map.iter().collect::<Vec<_>>(), [("x", "b")]);
    assert_eq!(out.css_bundle.text, ".b{color:red}");
    assert_eq!(class_attrs(&out.html_documents[0].text), ["bigonlyhtml bigonlyhtml", "b"]);
}

#[test]
fn test_generated_names_avoid_unrenamed_tokens() {
    // "a" is used in HTML but styled nowhere, so it keeps its spelling and
    // the styled class must not also become "a"
    let out = rip(
        &[SourceFile::new("a.html", r#"<p class="a">x</p><p class="styled">y</p>"#)],
        &[SourceFile::new("a.css", ".styled{margin:0}")],
    )
    .unwrap();

    assert_eq!(out.rename_map.get("styled"), Some("b"));
    assert_eq!(class_attrs(&out.html_documents[0].text), ["a", "b"]);
    assert_eq!(out.css_bundle.text, ".b{margin:0}");
}

#[test]
fn test_multiple_files_share_one_map() {
    let html = [
        SourceFile::new("one.html", r#"<nav class="menu"><a class="item item-active">1</a></nav>"#),
        SourceFile::new("two.html", r#"<nav class="menu"><a class="item">2</a><a class="item">3</a></nav>"#),
    ];
    let css = [
        SourceFile::new("base.css", ".menu{display:flex}.footer{padding:0}"),
        SourceFile::new("extra.css", ".item{color:red}.item-active{margin:0}"),
    ];

    let out = rip(&html, &css).unwrap();

    // item: 3 html + 1 css = 4 * 4 = 16; item-active: 2 * 11 = 22; menu: 3 * 4 = 12
    assert_eq!(out.rename_map.get("item-active"), Some("a"));
    assert_eq!(out.rename_map.get("item"), Some("b"));
    assert_eq!(out.rename_map.get("menu"), Some("c"));
    assert_eq!(out.css_bundle.text, ".c{display:flex}.b{color:red}.a{margin:0}");
    assert_eq!(class_attrs(&out.html_documents[0].text), ["c", "b a"]);
    assert_eq!(class_attrs(&out.html_documents[1].text), ["c", "b", "b"]);
}

#[test]
fn test_bundle_separator() {
    let config = RipConfig { bundle_separator: "\n".into(), ..Default::default() };
    let out = Ripper::new(config)
        .rip(
            &[SourceFile::new("a.html", r#"<i class="x y"></i>"#)],
            &[SourceFile::new("1.css", ".x{margin:0}"), SourceFile::new("2.css", ".y{padding:0}")],
        )
        .unwrap();
    assert_eq!(out.css_bundle.text, ".a{margin:0}\n.b{padding:0}");
}

#[test]
fn test_kept_classes_survive_untouched() {
    let config = RipConfig { keep: vec!["is-open".into()], ..Default::default() };
    let out = Ripper::new(config)
        .rip(
            &[SourceFile::new("a.html", r#"<div class="drawer"></div>"#)],
            &[SourceFile::new("a.css", ".drawer{left:0}.drawer.is-open{left:10px}")],
        )
        .unwrap();

    assert_eq!(out.css_bundle.text, ".a{left:0}.a.is-open{left:10px}");
    assert_eq!(out.rename_map.get("is-open"), None);
}

#[test]
fn test_minified_bundle() {
    let config = RipConfig { minify_css: true, ..Default::default() };
    let out = Ripper::new(config)
        .rip(
            &[SourceFile::new("a.html", r#"<p class="lead">x</p>"#)],
            &[SourceFile::new("a.css", ".lead { color: #ff0000; margin: 0px 0px 0px 0px; }\n.gone { color: red }")],
        )
        .unwrap();

    assert!(out.css_bundle.text.starts_with(".a{"), "{}", out.css_bundle.text);
    assert!(!out.css_bundle.text.contains("gone"));
    assert!(!out.css_bundle.text.contains(' '));
}

#[test]
fn test_media_queries_and_escapes() {
    let out = rip(
        &[SourceFile::new("a.html", r#"<div class="sm:flex card"></div>"#)],
        &[SourceFile::new(
            "a.css",
            r"@media (min-width:640px){.sm\:flex{display:flex}.md\:flex{display:flex}}.card:not(.dark){}",
        )],
    )
    .unwrap();

    // sm:flex weighs 2 * 7, card 2 * 4
    let bundle = &out.css_bundle.text;
    assert!(bundle.starts_with("@media "), "{}", bundle);
    assert!(bundle.contains("{.a{display:flex}}"), "{}", bundle);
    assert!(bundle.ends_with("}.b{}"), "{}", bundle);
    assert!(!bundle.contains("md") && !bundle.contains("dark"), "{}", bundle);
    assert_eq!(class_attrs(&out.html_documents[0].text), ["a b"]);
}

#[test]
fn test_nesting_blocks_renamed_consistently() {
    let out = rip(
        &[SourceFile::new("a.html", r#"<p class="card active">x</p>"#)],
        &[SourceFile::new("a.css", ".active{color:red}.card{color:green;&.active{margin:0}}")],
    )
    .unwrap();

    // active: 1 html + 2 css = 3 * 6; card: 2 * 4
    assert_eq!(out.rename_map.get("active"), Some("a"));
    assert_eq!(out.rename_map.get("card"), Some("b"));
    let bundle = &out.css_bundle.text;
    assert!(bundle.starts_with(".a{color:red}.b{color:green"), "{}", bundle);
    assert!(bundle.contains("&.a{margin:0}"), "{}", bundle);
    assert!(!bundle.contains("active") && !bundle.contains("card"), "{}", bundle);
    assert_eq!(class_attrs(&out.html_documents[0].text), ["b a"]);
}

#[test]
fn test_nesting_blocks_pruned() {
    let out = rip(
        &[SourceFile::new("a.html", r#"<p class="card">x</p>"#)],
        &[SourceFile::new("a.css", ".card{color:green;&.gone{margin:0}.gone &{padding:0}}")],
    )
    .unwrap();

    assert_eq!(out.css_bundle.text, ".a{color:green}");
    assert_eq!(out.report.prune.rules_removed, 2);
}

#[test]
fn test_non_ascii_space_stays_inside_token() {
    let out = rip(
        &[SourceFile::new("a.html", "<p class=\"foo\u{a0}bar\">x</p>")],
        &[SourceFile::new("a.css", ".foo{color:red}")],
    )
    .unwrap();

    assert_eq!(out.css_bundle.text, "");
    assert!(out.rename_map.is_empty());
    assert_eq!(out.report.prune.rules_removed, 1);
    assert_eq!(class_attrs(&out.html_documents[0].text), ["foo\u{a0}bar"]);
}

// ============================================================================
// PROPERTIES
// ============================================================================

fn sample_unit() -> (Vec<SourceFile>, Vec<SourceFile>) {
    let html = vec![
        SourceFile::new(
            "index.html",
            r#"<!DOCTYPE html><html><head><title>x</title></head><body>
<header class="site-header sticky"><nav class="nav nav--main"><a class="nav__link is-active">Home</a><a class="nav__link">About</a></nav></header>
<main class="content"><article class="card card--wide"><h2 class="card__title">T</h2><p class="card__body muted">B</p></article></main>
</body></html>"#,
        ),
        SourceFile::new(
            "about.html",
            r#"<main class="content"><article class="card"><h2 class="card__title">A</h2></article><footer class="footer muted"></footer></main>"#,
        ),
    ];
    let css = vec![SourceFile::new(
        "site.css",
        r#"
        .site-header { position: relative }
        .sticky, .fixed { position: sticky }
        .nav > .nav__link { padding: 1em }
        .nav__link.is-active, .nav__link.is-disabled { font-weight: bold }
        .card .card__title, .modal .modal__title { font-size: 2em }
        .card--wide { width: 100% }
        .tooltip { display: none }
        @media print { .footer, .ad { display: none } }
        body > .content { margin: 0 auto }
        "#,
    )];
    (html, css)
}

#[test]
fn test_deterministic_output() {
    let (html, css) = sample_unit();
    let first = rip(&html, &css).unwrap();
    let second = rip(&html, &css).unwrap();

    assert_eq!(first.css_bundle, second.css_bundle);
    assert_eq!(first.html_documents, second.html_documents);
    assert_eq!(first.rename_map, second.rename_map);
}

#[test]
fn test_rename_map_injective() {
    let (html, css) = sample_unit();
    let out = rip(&html, &css).unwrap();

    let targets: HashSet<&str> = out.rename_map.iter().map(|(_, to)| to).collect();
    assert_eq!(targets.len(), out.rename_map.len());
    assert!(out.rename_map.len() > 5);
}

#[test]
fn test_html_tokens_are_original_or_mapped() {
    let (html, css) = sample_unit();
    let out = rip(&html, &css).unwrap();

    for (input, output) in html.iter().zip(&out.html_documents) {
        let before = class_attrs(&input.text);
        let after = class_attrs(&output.text);
        assert_eq!(before.len(), after.len());

        for (b, a) in before.iter().zip(&after) {
            let b: Vec<&str> = b.split_whitespace().collect();
            let a: Vec<&str> = a.split_whitespace().collect();
            assert_eq!(b.len(), a.len());
            for (orig, new) in b.iter().zip(&a) {
                match out.rename_map.get(orig) {
                    Some(mapped) => assert_eq!(mapped, *new),
                    None => assert_eq!(orig, new),
                }
            }
        }
    }
}

#[test]
fn test_every_surviving_class_selector_is_renamed() {
    let (html, css) = sample_unit();
    let out = rip(&html, &css).unwrap();

    let sheet = rip_engine::css::parse_stylesheet(&out.css_bundle.text).unwrap();
    let short_names: HashSet<&str> = out.rename_map.iter().map(|(_, to)| to).collect();
    let mut seen = HashMap::new();
    sheet.for_each_class(&mut |name| {
        *seen.entry(name.to_string()).or_insert(0) += 1;
    });

    assert!(!seen.is_empty());
    for name in seen.keys() {
        assert!(short_names.contains(name.as_str()), "unrenamed selector .{}", name);
    }
    for dead in ["fixed", "is-disabled", "modal", "tooltip", "ad"] {
        assert!(out.rename_map.get(dead).is_none());
    }
}

#[test]
fn test_output_smaller_than_input() {
    let (html, css) = sample_unit();
    let out = rip(&html, &css).unwrap();
    assert!(out.report.bytes_out < out.report.bytes_in);
    assert!(out.report.bytes_saved() > 0);
}

#[test]
fn test_invariant_error_is_internal() {
    let err = RipError::InvariantViolation { class: "x".into() };
    assert!(err.to_string().starts_with("internal error"));
}
