//! Comprehensive tests for rip-html
//!
//! Parsing edge cases and parse -> serialize stability.

use rip_html::{HtmlParser, parse};

#[test]
fn test_parse_minimal_html() {
    let doc = HtmlParser::new().parse("").unwrap();
    assert!(doc.tree().len() >= 1, "Even empty HTML should have root");
}

#[test]
fn test_parse_keeps_url() {
    let doc = parse("pages/index.html", "<p>x</p>").unwrap();
    assert_eq!(doc.url(), "pages/index.html");
}

#[test]
fn test_doctype_round_trip() {
    let html = "<!DOCTYPE html><html><head></head><body><p class=\"a\">x</p></body></html>";
    let doc = HtmlParser::new().parse(html).unwrap();
    assert_eq!(doc.to_html(), html);
}

#[test]
fn test_whitespace_text_kept() {
    let html = "<!DOCTYPE html><html><head></head><body>\n  <ul>\n    <li>1</li>\n  </ul>\n</body></html>";
    let doc = HtmlParser::new().parse(html).unwrap();
    assert_eq!(doc.to_html(), html);
}

#[test]
fn test_parse_script_and_style_round_trip() {
    let html = r#"<html><head><style>.foo > .bar { color: blue; }</style><script>if (a < b && c) { x = "<div>"; }</script></head><body></body></html>"#;
    let doc = HtmlParser::new().parse(html).unwrap();
    assert_eq!(doc.to_html(), html);
}

#[test]
fn test_parse_entities_reescaped() {
    let doc = HtmlParser::new().parse("<p>&lt;tag&gt; &amp; &quot;q&quot;</p>").unwrap();
    assert!(doc.to_html().contains("<p>&lt;tag&gt; &amp; \"q\"</p>"));
}

#[test]
fn test_attribute_quotes_normalized() {
    let doc = HtmlParser::new().parse("<div class=a data-x='1\"2'></div>").unwrap();
    assert!(doc.to_html().contains(r#"<div class="a" data-x="1&quot;2"></div>"#));
}

#[test]
fn test_parse_malformed_html() {
    let html = r#"
        <div>
            <p>Unclosed paragraph
            <span>Unclosed span
        </div>
        <p>Another paragraph without closing
    "#;

    let doc = HtmlParser::new().parse(html).unwrap();
    assert!(doc.tree().len() > 1);
}

#[test]
fn test_svg_class_is_an_element_class() {
    let doc = HtmlParser::new()
        .parse(r##"<svg class="icon"><use xlink:href="#i"></use></svg>"##)
        .unwrap();
    let classes: Vec<_> = doc.tree()
        .descendants(doc.tree().root())
        .filter_map(|(_, n)| n.as_element()?.class_attr().map(str::to_string))
        .collect();
    assert_eq!(classes, ["icon"]);
    assert!(doc.to_html().contains(r##"<use xlink:href="#i">"##));
}
