//! Link rules: redirects, page links, GitHub links, GitHub Pages embeds, external links

use super::rewrite::rewrite_text;
use crate::wiki::ast::Segment;
use crate::wiki::context::RenderContext;
use crate::wiki::html::escape;
use once_cell::sync::Lazy;
use regex::Regex;

static REDIRECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[\[RD\s+(.+?)\]\]\]").expect("redirect pattern is valid"));
static PAGE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^)]+)\)").expect("page link pattern is valid"));
static GITHUB_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(github:([^)]+)\)").expect("github pattern is valid"));
static GHP_EMBED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(ghp:([^)]+)\)").expect("ghp pattern is valid"));
static EXTERNAL_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("external link pattern is valid"));

/// Prefixes reserved for the GitHub rules; the page-link rule leaves these alone.
const RESERVED_PREFIXES: [&str; 2] = ["github:", "ghp:"];

/// Split link content into `(target, display)`.
///
/// `\\` (the form used inside table cells) wins over a single `\`. Without a
/// separator the target doubles as display text.
pub fn split_display(content: &str) -> (&str, &str) {
    if let Some(pair) = content.split_once("\\\\") {
        return pair;
    }
    if let Some(pair) = content.split_once('\\') {
        return pair;
    }
    (content, content)
}

pub(super) fn redirect(ctx: &RenderContext, segments: Vec<Segment>) -> Vec<Segment> {
    rewrite_text(segments, &REDIRECT, |caps| {
        let target = caps[1].trim();
        let url = ctx.page_url(target);
        let script_tag = if ctx.config().redirect.execute_immediately {
            "<script data-wiki-redirect>"
        } else {
            "<script>"
        };
        Some(Segment::html(format!(
            "{}window.location.href = \"{}\";</script><span class=\"wiki-redirect\">Redirecting to: <a href=\"{}\">{}</a></span>",
            script_tag, url, url, target
        )))
    })
}

pub(super) fn page_link(ctx: &RenderContext, segments: Vec<Segment>) -> Vec<Segment> {
    rewrite_text(segments, &PAGE_LINK, |caps| {
        let content = &caps[1];
        if RESERVED_PREFIXES
            .iter()
            .any(|prefix| content.starts_with(prefix))
        {
            return None;
        }
        let (target, display) = split_display(content);
        Some(Segment::html(format!(
            "<a href=\"{}\">{}</a>",
            ctx.page_url(target),
            display
        )))
    })
}

pub(super) fn github_link(_ctx: &RenderContext, segments: Vec<Segment>) -> Vec<Segment> {
    rewrite_text(segments, &GITHUB_LINK, |caps| {
        let (repo, display) = split_display(&caps[1]);
        Some(Segment::html(format!(
            "<a href=\"https://github.com/{}\" target=\"_blank\">{}</a>",
            repo, display
        )))
    })
}

pub(super) fn ghp_embed(ctx: &RenderContext, segments: Vec<Segment>) -> Vec<Segment> {
    rewrite_text(segments, &GHP_EMBED, |caps| {
        let content = &caps[1];
        let parts: Vec<&str> = content.split(':').collect();
        let html = match parts.as_slice() {
            [user, page] => format!(
                "<div class=\"ghp-container\"><iframe src=\"https://{}.github.io/{}\" width=\"100%\" height=\"{}\" frameborder=\"0\" allowfullscreen></iframe></div>",
                user,
                page,
                ctx.config().embeds.ghp_height
            ),
            _ => {
                tracing::warn!(input = content, "malformed GitHub Pages shorthand");
                format!("[GitHub Pages embed error: {}]", escape(content))
            }
        };
        Some(Segment::Html(html))
    })
}

pub(super) fn external_link(_ctx: &RenderContext, segments: Vec<Segment>) -> Vec<Segment> {
    rewrite_text(segments, &EXTERNAL_LINK, |caps| {
        let content = &caps[1];
        let html = match content.split_once("\\\\").or_else(|| content.split_once('\\')) {
            Some((url, display)) => external_anchor(&with_scheme(url), display),
            None => {
                let url = with_scheme(content);
                external_anchor(&url, &url)
            }
        };
        Some(Segment::Html(html))
    })
}

fn with_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

fn external_anchor(url: &str, display: &str) -> String {
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        url, display
    )
}
