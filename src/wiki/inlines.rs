//! Inline engine
//!
//! Expands inline constructs within one line, one table cell or one collapsible body.
//! The line is first split into [`Segment`]s with `<plantext>` spans set aside, then
//! each rule runs once, in this order:
//!
//!  1. comments       `/* ... */` removed
//!  2. redirect       `[[[RD target]]]`
//!  3. page link      `(target)`, `(target\display)`, `(target\\display)`
//!  4. GitHub link    `(github:owner/repo[\display])`
//!  5. Pages embed    `(ghp:user:page)`
//!  6. external link  `{{url}}`, `{{url\display}}`
//!  7. sup/sub        `<up>..</up>`, `<dn>..</dn>`
//!  8. substitutions  `<pagename>`, `<time>`
//!
//! `<small>`, `<big>` and `<br>` are already HTML and are left as written.
//!
//! Rules only rewrite text segments and emit HTML segments, so no rule sees the output
//! of another. Protected spans stay placeholders in the returned HTML; the page is
//! restored after the special-tag pass.

mod formatting;
mod links;
mod protect;
mod rewrite;

pub use links::split_display;
pub use protect::protect_literals;
pub use rewrite::{rename_paired_tag, rewrite_text};

use crate::wiki::ast::inline::flatten;
use crate::wiki::ast::Segment;
use crate::wiki::context::RenderContext;

type InlineRule = fn(&RenderContext, Vec<Segment>) -> Vec<Segment>;

const RULES: &[(&str, InlineRule)] = &[
    ("comments", formatting::strip_comments),
    ("redirect", links::redirect),
    ("page_link", links::page_link),
    ("github_link", links::github_link),
    ("ghp_embed", links::ghp_embed),
    ("external_link", links::external_link),
    ("sup_sub", formatting::sup_sub),
    ("substitutions", formatting::substitutions),
];

/// Parse inline markup in `text` and return HTML
pub fn parse_inline(ctx: &RenderContext, text: &str) -> String {
    flatten(&parse_segments(ctx, text))
}

/// Parse inline markup, keeping the segment structure
pub fn parse_segments(ctx: &RenderContext, text: &str) -> Vec<Segment> {
    let mut segments = protect_literals(text);
    for (name, rule) in RULES {
        tracing::trace!(rule = name, "applying inline rule");
        segments = rule(ctx, segments);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wiki::testing::{fixed_context, FIXED_TIMESTAMP_TEXT};
    use crate::wiki::verbatim::restore;

    fn inline(text: &str) -> String {
        restore(&parse_inline(&fixed_context("Main Page"), text))
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(inline("hello world"), "hello world");
    }

    #[test]
    fn small_big_br_pass_through() {
        assert_eq!(
            inline("<small>a</small><br><big>b</big>"),
            "<small>a</small><br><big>b</big>"
        );
    }

    #[test]
    fn page_link_forms() {
        assert_eq!(inline("(Foo)"), "<a href=\"/wiki/Foo\">Foo</a>");
        assert_eq!(inline("(Foo\\Bar)"), "<a href=\"/wiki/Foo\">Bar</a>");
        assert_eq!(inline("(Foo\\\\Bar)"), "<a href=\"/wiki/Foo\">Bar</a>");
    }

    #[test]
    fn double_backslash_takes_precedence() {
        assert_eq!(inline("(a\\b\\\\c)"), "<a href=\"/wiki/a\\b\">c</a>");
    }

    #[test]
    fn github_link_is_not_taken_by_page_link() {
        assert_eq!(
            inline("(github:rust-lang/rust)"),
            "<a href=\"https://github.com/rust-lang/rust\" target=\"_blank\">rust-lang/rust</a>"
        );
        assert_eq!(
            inline("(github:rust-lang/rust\\Rust)"),
            "<a href=\"https://github.com/rust-lang/rust\" target=\"_blank\">Rust</a>"
        );
    }

    #[test]
    fn ghp_embed_and_error() {
        let html = inline("(ghp:octo:site)");
        assert!(html.contains("<iframe src=\"https://octo.github.io/site\""));
        assert!(html.contains("height=\"600\""));
        assert_eq!(
            inline("(ghp:nocolon)"),
            "[GitHub Pages embed error: nocolon]"
        );
    }

    #[test]
    fn external_links_get_scheme() {
        assert_eq!(
            inline("{{example.com}}"),
            "<a href=\"https://example.com\" target=\"_blank\" rel=\"noopener noreferrer\">https://example.com</a>"
        );
        assert_eq!(
            inline("{{http://example.com\\Example}}"),
            "<a href=\"http://example.com\" target=\"_blank\" rel=\"noopener noreferrer\">Example</a>"
        );
    }

    #[test]
    fn sup_and_sub() {
        assert_eq!(inline("x<up>2</up> H<dn>2</dn>O"), "x<sup>2</sup> H<sub>2</sub>O");
    }

    #[test]
    fn sup_wraps_link() {
        assert_eq!(
            inline("<up>(Note)</up>"),
            "<sup><a href=\"/wiki/Note\">Note</a></sup>"
        );
    }

    #[test]
    fn pagename_and_time() {
        assert_eq!(
            inline("<pagename> at <time>"),
            format!("Main Page at {}", FIXED_TIMESTAMP_TEXT)
        );
    }

    #[test]
    fn inline_comments_are_removed() {
        assert_eq!(inline("a/* hidden */b"), "ab");
    }

    #[test]
    fn plantext_is_never_interpreted() {
        assert_eq!(
            inline("<plantext>(Home) <up>x</up> & {{y}}</plantext>"),
            "(Home) &lt;up&gt;x&lt;/up&gt; &amp; {{y}}"
        );
    }

    #[test]
    fn plantext_next_to_markup() {
        assert_eq!(
            inline("(A) <plantext>(B)</plantext> (C)"),
            "<a href=\"/wiki/A\">A</a> (B) <a href=\"/wiki/C\">C</a>"
        );
    }

    #[test]
    fn rule_output_is_not_rescanned() {
        // The page title contains link syntax; substitution happens last and its
        // output is never interpreted.
        let ctx = fixed_context("(Odd)");
        assert_eq!(parse_inline(&ctx, "<pagename>"), "(Odd)");
    }

    #[test]
    fn redirect_executes_immediately_by_default() {
        let html = inline("[[[RD Target Page]]]");
        assert!(html.starts_with(
            "<script data-wiki-redirect>window.location.href = \"/wiki/Target Page\";</script>"
        ));
        assert!(html.contains("<a href=\"/wiki/Target Page\">Target Page</a>"));
    }
}
