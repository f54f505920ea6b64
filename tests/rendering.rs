//! End-to-end rendering of whole pages

use rstest::rstest;
use wikimark::wiki::testing::{fixed_context, fixed_context_with, render_str, render_with};
use wikimark::wiki::transforms::standard::SEGMENTATION;
use wikimark::Renderer;

#[rstest]
#[case::level_one("+A", "<h1>A</h1>")]
#[case::level_four("++++ Deep (Link)", "<h4>Deep <a href=\"/wiki/Link\">Link</a></h4>")]
#[case::too_deep("+++++A", "<p>+++++A</p>")]
#[case::page_link("(Foo)", "<p><a href=\"/wiki/Foo\">Foo</a></p>")]
#[case::display_text("(Foo\\Bar)", "<p><a href=\"/wiki/Foo\">Bar</a></p>")]
#[case::cell_form("(Foo\\\\Bar)", "<p><a href=\"/wiki/Foo\">Bar</a></p>")]
#[case::unknown_directive("[bogus x=1\n]", "bogus x=1")]
#[case::unterminated("[open\nmore text", "[open\n<p>more text</p>")]
#[case::bad_directive_name("[ spaced\n]", "<p>[ spaced</p>\n<p>]</p>")]
#[case::blank_lines("a\n\n\nb", "<p>a</p>\n\n\n<p>b</p>")]
#[case::multi_line_comment("a/* x\ny */b", "<p>ab</p>")]
#[case::comment_only("/* nothing */", "")]
#[case::passthrough("<small>s</small><br><big>b</big>", "<p><small>s</small><br><big>b</big></p>")]
fn renders(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(render_str(source), expected);
}

#[test]
fn table_round_trip() {
    assert_eq!(
        render_str("[table\nA\\\\B\n1\\\\2\n]"),
        "<div class=\"wiki-table\"><table><thead><tr><th>A</th><th>B</th></tr></thead>\
         <tbody><tr><td>1</td><td>2</td></tr></tbody></table></div>"
    );
}

#[test]
fn table_surrounded_by_text() {
    let html = render_str("before\n[table\nname=T\nH\\\\I\n(x)\\\\a<b\n]\nafter");
    assert!(html.starts_with("<p>before</p>\n<div class=\"wiki-table\"><h4>T</h4>"));
    assert!(html.contains("<td><a href=\"/wiki/x\">x</a></td><td>a&lt;b</td>"));
    assert!(html.ends_with("</table></div>\n<p>after</p>"));
}

#[test]
fn template_substitution_is_reparsed() {
    let ctx = fixed_context_with("Home", &[("MyTpl", "<;title;>")]);
    assert_eq!(render_with(&ctx, "[MyTpl title=Hi]"), "<p>Hi</p>");
    assert_eq!(
        render_with(&ctx, "[MyTpl title=(Hi)]"),
        "<p><a href=\"/wiki/Hi\">Hi</a></p>"
    );
}

#[test]
fn templates_can_use_other_templates() {
    let ctx = fixed_context_with(
        "Home",
        &[("outer", "+<;1;>\n[inner 1=<;1;>]"), ("inner", "see (<;1;>)")],
    );
    assert_eq!(
        render_with(&ctx, "[outer 1=Topic]"),
        "<h1>Topic</h1>\n<p>see <a href=\"/wiki/Topic\">Topic</a></p>"
    );
}

#[test]
fn template_page_name_is_the_including_page() {
    let ctx = fixed_context_with("Main Page", &[("whoami", "<pagename>")]);
    assert_eq!(render_with(&ctx, "[whoami]"), "<p>Main Page</p>");
}

#[test]
fn template_special_tags_expand_once() {
    let ctx = fixed_context_with("Home", &[("js", "<script>go(<;1;>);</script>")]);
    let html = render_with(&ctx, "[js 1=1]");
    assert_eq!(html.matches("class=\"script-container\"").count(), 1);
}

#[test]
fn recursive_template_is_bounded() {
    let ctx = fixed_context_with("Home", &[("again", "[again]")]);
    let html = render_with(&ctx, "[again]");
    assert_eq!(html, "[template again: nesting deeper than 16 levels]");
}

#[test]
fn time_uses_render_timestamp() {
    assert_eq!(
        render_with(&fixed_context("P"), "<time>"),
        "<p>2024-01-02 03:04:05</p>"
    );
}

#[test]
fn redirect_survives_post_processing() {
    let html = render_str("[[[RD Home]]]");
    assert_eq!(
        html,
        "<p><script data-wiki-redirect>window.location.href = \"/wiki/Home\";</script>\
         <span class=\"wiki-redirect\">Redirecting to: <a href=\"/wiki/Home\">Home</a></span></p>"
    );
}

#[test]
fn file_directive() {
    assert_eq!(
        render_str("[file\nname=report.pdf\n]"),
        "<a href=\"/wiki/files/report.pdf\" class=\"file-link\">report.pdf</a>"
    );
    assert_eq!(render_str("[file]"), "[missing file parameter: name]");
}

#[test]
fn navbox_directive() {
    let html = render_str("[navbox\nname=Site\ng1=Pages\nl1=(Home)\n]");
    assert!(html.starts_with("<div class=\"navbox\">"));
    assert!(html.contains("<span>Site</span>"));
    assert!(html.contains("<a href=\"/wiki/Home\">Home</a>"));
}

#[test]
fn renderer_reports_fresh_clock() {
    let html = Renderer::default().render("plain", "Home");
    assert_eq!(html, "<p>plain</p>");
}

#[test]
fn segmentation_snapshot() {
    let blocks = SEGMENTATION.run("+A\n\ntext".to_string()).unwrap();
    let json = serde_json::to_string(&blocks).unwrap();
    insta::assert_snapshot!(json, @r#"[{"kind":"header","level":1,"text":"A"},{"kind":"blank"},{"kind":"paragraph","text":"text"}]"#);
}

#[test]
fn header_snapshot() {
    insta::assert_snapshot!(render_str("++ <up>1</up>st (Place)"), @r#"<h2><sup>1</sup>st <a href="/wiki/Place">Place</a></h2>"#);
}
