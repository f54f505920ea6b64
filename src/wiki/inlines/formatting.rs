//! Comment stripping, sup/sub tags and token substitutions

use super::rewrite::{rename_paired_tag, rewrite_text};
use crate::wiki::ast::Segment;
use crate::wiki::context::RenderContext;
use crate::wiki::html::escape;
use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("comment pattern is valid"));
static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<pagename>|<time>").expect("token pattern is valid"));

pub(super) fn strip_comments(_ctx: &RenderContext, segments: Vec<Segment>) -> Vec<Segment> {
    rewrite_text(segments, &BLOCK_COMMENT, |_| Some(Segment::text("")))
}

pub(super) fn sup_sub(_ctx: &RenderContext, segments: Vec<Segment>) -> Vec<Segment> {
    let segments = rename_paired_tag(segments, "<up>", "</up>", "<sup>", "</sup>");
    rename_paired_tag(segments, "<dn>", "</dn>", "<sub>", "</sub>")
}

/// `<pagename>` becomes the escaped page title, `<time>` the render timestamp.
pub(super) fn substitutions(ctx: &RenderContext, segments: Vec<Segment>) -> Vec<Segment> {
    rewrite_text(segments, &TOKEN, |caps| match &caps[0] {
        "<pagename>" => Some(Segment::Html(escape(ctx.page_title()))),
        _ => Some(Segment::Html(ctx.timestamp_text())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wiki::ast::inline::flatten;
    use crate::wiki::testing::fixed_context;

    #[test]
    fn test_strip_comments_merges_text() {
        let ctx = fixed_context("Home");
        let out = strip_comments(&ctx, vec![Segment::text("a /* x */ b /* y\nz */c")]);
        assert_eq!(out, vec![Segment::text("a  b c")]);
    }

    #[test]
    fn test_pagename_is_escaped() {
        let ctx = fixed_context("A & B");
        let out = substitutions(&ctx, vec![Segment::text("[<pagename>]")]);
        assert_eq!(flatten(&out), "[A &amp; B]");
    }

    #[test]
    fn test_sup_sub_independent() {
        let ctx = fixed_context("Home");
        let out = sup_sub(&ctx, vec![Segment::text("<up>1<dn>2</dn></up>")]);
        assert_eq!(flatten(&out), "<sup>1<sub>2</sub></sup>");
    }
}
