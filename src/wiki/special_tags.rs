//! Special-tag post-processor
//!
//! Runs once over the assembled page fragment, after blocks and inlines, so it also
//! sees HTML produced by templates and directives. Each rule scans the whole fragment
//! in turn:
//!
//!     style    <style>..</style>                   passed through
//!     script   <script>..</script>                 "Run script" disclosure with a
//!                                                  sandboxed frame
//!     iframe   <iframe src="..">..</iframe>        fixed-height responsive container
//!     img      <img src="..">..</img>              styled image
//!     button   <button .. "touchEvent"="..">..</button>
//!                                                  button whose click inserts the
//!                                                  inline-parsed event text
//!     code     <code lang="..">..</code>           escaped, language-tagged block
//!     co       <co>..</co>                         collapsible panel
//!     mw       <mw>..</mw>                         escaped raw markup
//!     doc      <doc>..</doc>                       removed
//!
//! Redirect scripts carry a `data-wiki-redirect` attribute and are not matched by the
//! script rule, so they still navigate on load.
//!
//! Markup generated by the script, iframe, img, button and code rules is sealed, so
//! the collapsible rule, which inline-parses its body, never reads it a second time.
//! Tag bodies arrive as placeholders and are escaped exactly once, when the page is
//! restored.

use crate::wiki::context::RenderContext;
use crate::wiki::html::{element_id, escape, escape_js_template};
use crate::wiki::inlines::parse_inline;
use crate::wiki::verbatim::{restore, reveal_raw, seal};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

type TagRule = fn(&RenderContext, &str) -> String;

const RULES: &[(&str, TagRule)] = &[
    ("style", style),
    ("script", script),
    ("iframe", iframe),
    ("img", img),
    ("button", button),
    ("code", code),
    ("co", collapsible),
    ("mw", raw_markup),
    ("doc", doc_comment),
];

static STYLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<style>(.*?)</style>").expect("style pattern is valid"));
static SCRIPT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<script>(.*?)</script>").expect("script pattern is valid"));
static IFRAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<iframe src="([^"]+)">.*?</iframe>"#).expect("iframe pattern is valid")
});
static IMG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<img src="([^"]+)">.*?</img>"#).expect("img pattern is valid")
});
// Buttons are matched within a single line.
static BUTTON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<button(.*?)\s*"touchEvent"="([^"]*)"[^>]*>(.*?)</button>"#)
        .expect("button pattern is valid")
});
static BUTTON_STYLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"style="([^"]*)""#).expect("style attribute pattern is valid"));
static CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<code lang="([^"]*)">(.*?)</code>"#).expect("code pattern is valid")
});
static COLLAPSIBLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<co>(.*?)</co>").expect("collapsible pattern is valid"));
static RAW_MARKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<mw>(.*?)</mw>").expect("mw pattern is valid"));
static DOC_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<doc>.*?</doc>").expect("doc pattern is valid"));

/// Apply every special-tag rule, in order, to a rendered fragment
pub fn expand_special_tags(ctx: &RenderContext, html: &str) -> String {
    let mut text = html.to_string();
    for (name, rule) in RULES {
        tracing::trace!(rule = name, "applying special-tag rule");
        text = rule(ctx, &text);
    }
    text
}

fn style(_ctx: &RenderContext, text: &str) -> String {
    STYLE
        .replace_all(text, |caps: &Captures| format!("<style>{}</style>", &caps[1]))
        .into_owned()
}

fn script(ctx: &RenderContext, text: &str) -> String {
    let height = ctx.config().embeds.script_height;
    SCRIPT
        .replace_all(text, |caps: &Captures| {
            seal(&format!(
                "<div class=\"script-container\"><button class=\"script-run-btn\" onclick=\"runScript(this)\">Run script</button>\
                 <div class=\"script-output\" style=\"display:none;\"><iframe sandbox=\"allow-scripts\" \
                 srcdoc=\"<!DOCTYPE html><html><head><script>{}</script></head><body></body></html>\" \
                 width=\"100%\" height=\"{}\"></iframe></div></div>",
                escape(&caps[1]),
                height
            ))
        })
        .into_owned()
}

fn iframe(ctx: &RenderContext, text: &str) -> String {
    let height = ctx.config().embeds.iframe_height;
    IFRAME
        .replace_all(text, |caps: &Captures| {
            seal(&format!(
                "<div class=\"iframe-container\"><iframe src=\"{}\" width=\"100%\" height=\"{}\" frameborder=\"0\" allowfullscreen></iframe></div>",
                &caps[1], height
            ))
        })
        .into_owned()
}

fn img(_ctx: &RenderContext, text: &str) -> String {
    IMG.replace_all(text, |caps: &Captures| {
        seal(&format!("<img src=\"{}\" class=\"wiki-image\">", &caps[1]))
    })
    .into_owned()
}

fn button(ctx: &RenderContext, text: &str) -> String {
    BUTTON
        .replace_all(text, |caps: &Captures| {
            let attrs = &caps[1];
            let touch_event = reveal_raw(&caps[2]);
            let label = &caps[3];
            let style = BUTTON_STYLE
                .captures(attrs)
                .and_then(|style| style.get(1))
                .map_or("", |style| style.as_str());
            let id = element_id("btn", &format!("{}{}", label, touch_event));
            let output = escape_js_template(&restore(&parse_inline(ctx, &touch_event)));
            seal(&format!(
                "<button id=\"{id}\" class=\"wiki-button\" style=\"{style}\">{label}</button>\
                 <script>document.getElementById('{id}').addEventListener('click', function() {{ \
                 var output = document.createElement('div'); output.className = 'button-output'; \
                 output.innerHTML = `{output}`; this.parentNode.insertBefore(output, this.nextSibling); }});</script>"
            ))
        })
        .into_owned()
}

fn code(_ctx: &RenderContext, text: &str) -> String {
    CODE.replace_all(text, |caps: &Captures| {
        seal(&format!(
            "<pre><code class=\"language-{}\">{}</code></pre>",
            &caps[1],
            escape(&caps[2])
        ))
    })
    .into_owned()
}

fn collapsible(ctx: &RenderContext, text: &str) -> String {
    COLLAPSIBLE
        .replace_all(text, |caps: &Captures| {
            let content = &caps[1];
            let id = element_id("co", content);
            format!(
                "<div class=\"collapsible\"><button class=\"collapsible-btn\" onclick=\"toggleCollapse('{id}')\">Show/hide content</button>\
                 <div id=\"{id}\" class=\"collapsible-content\">{}</div></div>",
                parse_inline(ctx, content)
            )
        })
        .into_owned()
}

fn raw_markup(_ctx: &RenderContext, text: &str) -> String {
    RAW_MARKUP
        .replace_all(text, |caps: &Captures| {
            format!("<div class=\"mw-content\">{}</div>", escape(&caps[1]))
        })
        .into_owned()
}

fn doc_comment(_ctx: &RenderContext, text: &str) -> String {
    DOC_COMMENT.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wiki::config::WikiConfig;
    use crate::wiki::testing::fixed_context;
    use std::sync::Arc;

    fn expand(html: &str) -> String {
        restore(&expand_special_tags(&fixed_context("Home"), html))
    }

    #[test]
    fn test_plain_html_is_untouched() {
        assert_eq!(expand("<p>hello</p>\n<h1>x</h1>"), "<p>hello</p>\n<h1>x</h1>");
    }

    #[test]
    fn test_style_passthrough() {
        assert_eq!(expand("<style>p { color: red }</style>"), "<style>p { color: red }</style>");
    }

    #[test]
    fn test_script_becomes_disclosure() {
        let html = expand("<script>if (a < b) go();</script>");
        assert!(html.starts_with("<div class=\"script-container\">"));
        assert!(html.contains("onclick=\"runScript(this)\">Run script</button>"));
        assert!(html.contains("<script>if (a &lt; b) go();</script></head>"));
        assert!(html.contains("height=\"200\""));
    }

    #[test]
    fn test_script_spanning_lines() {
        let html = expand("<script>\nlet x = 1;\n</script>");
        assert!(html.contains("<script>\nlet x = 1;\n</script></head>"));
    }

    #[test]
    fn test_redirect_script_is_not_wrapped() {
        let redirect = "<script data-wiki-redirect>window.location.href = \"/wiki/A\";</script>";
        assert_eq!(expand(redirect), redirect);
    }

    #[test]
    fn test_iframe_uses_configured_height() {
        let mut config = WikiConfig::default();
        config.embeds.iframe_height = 320;
        let ctx = fixed_context("Home").with_config(Arc::new(config));
        assert_eq!(
            restore(&expand_special_tags(&ctx, "<iframe src=\"https://example.com\">x</iframe>")),
            "<div class=\"iframe-container\"><iframe src=\"https://example.com\" width=\"100%\" height=\"320\" frameborder=\"0\" allowfullscreen></iframe></div>"
        );
    }

    #[test]
    fn test_img() {
        assert_eq!(
            expand("<img src=\"/a.png\"></img>"),
            "<img src=\"/a.png\" class=\"wiki-image\">"
        );
    }

    #[test]
    fn test_button_with_touch_event() {
        let html = expand(
            "<button style=\"color:red\" \"touchEvent\"=\"See (Help)\">Click</button>",
        );
        let id = element_id("btn", "ClickSee (Help)");
        assert!(html.starts_with(&format!(
            "<button id=\"{}\" class=\"wiki-button\" style=\"color:red\">Click</button>",
            id
        )));
        assert!(html.contains(&format!("document.getElementById('{}')", id)));
        assert!(html.contains("output.innerHTML = `See <a href=\"/wiki/Help\">Help</a>`;"));
    }

    #[test]
    fn test_button_without_style() {
        let html = expand("<button \"touchEvent\"=\"hi\">Go</button>");
        assert!(html.contains("class=\"wiki-button\" style=\"\">Go</button>"));
    }

    #[test]
    fn test_button_script_is_not_wrapped() {
        let html = expand("<button \"touchEvent\"=\"hi\">Go</button>");
        assert!(!html.contains("script-container"));
    }

    #[test]
    fn test_code_is_escaped() {
        assert_eq!(
            expand("<code lang=\"rust\">fn main() { a < b }</code>"),
            "<pre><code class=\"language-rust\">fn main() { a &lt; b }</code></pre>"
        );
    }

    #[test]
    fn test_collapsible() {
        let html = expand("<co>(Secret)</co>");
        let id = element_id("co", "(Secret)");
        assert_eq!(
            html,
            format!(
                "<div class=\"collapsible\"><button class=\"collapsible-btn\" onclick=\"toggleCollapse('{id}')\">Show/hide content</button>\
                 <div id=\"{id}\" class=\"collapsible-content\"><a href=\"/wiki/Secret\">Secret</a></div></div>"
            )
        );
    }

    #[test]
    fn test_collapsible_ids_differ_by_content() {
        let html = expand("<co>a</co><co>b</co>");
        assert!(html.contains(&element_id("co", "a")));
        assert!(html.contains(&element_id("co", "b")));
    }

    #[test]
    fn test_button_inside_collapsible_is_not_reparsed() {
        let html = expand("<co><button \"touchEvent\"=\"hi\">Go</button></co>");
        let id = element_id("btn", "Gohi");
        assert!(html.contains(&format!("document.getElementById('{}')", id)));
        assert!(!html.contains("<a href"));
    }

    #[test]
    fn test_mw_and_doc() {
        assert_eq!(
            expand("<mw><b>raw</b></mw>"),
            "<div class=\"mw-content\">&lt;b&gt;raw&lt;/b&gt;</div>"
        );
        assert_eq!(expand("a<doc>\nnotes\n</doc>b"), "ab");
    }
}
