//! Verbatim spans
//!
//! Text that must reach the output without being read as wiki markup is swapped for an
//! opaque placeholder before the page is split into lines, and swapped back once the
//! special-tag pass has run. A placeholder is the hex-encoded UTF-8 of the hidden text
//! between private-use delimiters, so no block, inline or special-tag rule can match
//! inside it, and it never contains a line break.
//!
//! There are two kinds of placeholder:
//!
//!     escaped   `<plantext>` spans, and the bodies of `<code lang="..">`, `<script>`
//!               and `<mw>`; HTML-escaped when restored
//!     raw       `<style>` bodies, `"touchEvent"` values and sealed special-tag
//!               output; restored as written
//!
//! Bodies of verbatim tags keep their tags around the placeholder so the special-tag
//! rules still find them. A `<plantext>` span inside such a body is unwrapped, since
//! the body is shown as written anyway.

use crate::wiki::html::escape;
use once_cell::sync::Lazy;
use regex::{Captures, Match, Regex};

const ESCAPED_OPEN: char = '\u{E000}';
const RAW_OPEN: char = '\u{E001}';
const CLOSE: char = '\u{E002}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Escaped,
    Raw,
}

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([\x{E000}\x{E001}])((?:[0-9a-f]{2})*)\x{E002}")
        .expect("placeholder pattern is valid")
});
static PLANTEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<plantext>(.*?)</plantext>").expect("plantext pattern is valid")
});
static BODIES: Lazy<Vec<(Regex, Kind)>> = Lazy::new(|| {
    [
        (r#"(?s)(<code lang="[^"]*">)(.*?)(</code>)"#, Kind::Escaped),
        (r"(?s)(<script>)(.*?)(</script>)", Kind::Escaped),
        (r"(?s)(<mw>)(.*?)(</mw>)", Kind::Escaped),
        (r"(?s)(<style>)(.*?)(</style>)", Kind::Raw),
    ]
    .into_iter()
    .map(|(pattern, kind)| (Regex::new(pattern).expect("body pattern is valid"), kind))
    .collect()
});
static TOUCH_EVENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""touchEvent"="([^"]*)""#).expect("touch event pattern is valid")
});

fn placeholder(kind: Kind, text: &str) -> String {
    let open = match kind {
        Kind::Escaped => ESCAPED_OPEN,
        Kind::Raw => RAW_OPEN,
    };
    let hex: String = text.bytes().map(|byte| format!("{:02x}", byte)).collect();
    format!("{}{}{}", open, hex, CLOSE)
}

fn decode(hex: &str) -> Option<String> {
    let bytes = (0..hex.len())
        .step_by(2)
        .map(|i| {
            hex.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        })
        .collect::<Option<Vec<u8>>>()?;
    String::from_utf8(bytes).ok()
}

/// Rewrite every well-formed placeholder in `text`; malformed ones stay as they are.
fn replace_placeholders(text: &str, f: impl Fn(Kind, String) -> String) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            let kind = if caps[1].starts_with(RAW_OPEN) {
                Kind::Raw
            } else {
                Kind::Escaped
            };
            match decode(&caps[2]) {
                Some(content) => f(kind, content),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// One level of placeholders back to the text they hide, without escaping.
fn reveal_all(text: &str) -> String {
    replace_placeholders(text, |_, content| content)
}

/// Hide every `<plantext>` span behind an escaped placeholder
pub fn protect_plantext(text: &str) -> String {
    PLANTEXT
        .replace_all(text, |caps: &Captures| placeholder(Kind::Escaped, &caps[1]))
        .into_owned()
}

/// Hide every verbatim region of a page source
///
/// `<plantext>` spans go first, so wiki syntax inside them can never open a verbatim
/// tag, then tag bodies, then touch-event values.
pub fn protect_source(source: &str) -> String {
    let mut text = protect_plantext(source);
    for (pattern, kind) in BODIES.iter() {
        text = pattern
            .replace_all(&text, |caps: &Captures| {
                format!(
                    "{}{}{}",
                    &caps[1],
                    placeholder(*kind, &reveal_all(&caps[2])),
                    &caps[3]
                )
            })
            .into_owned();
    }
    TOUCH_EVENT
        .replace_all(&text, |caps: &Captures| {
            format!(
                "\"touchEvent\"=\"{}\"",
                placeholder(Kind::Raw, &reveal_raw(&caps[1]))
            )
        })
        .into_owned()
}

/// Hide generated HTML so later passes leave it alone
pub fn seal(html: &str) -> String {
    placeholder(Kind::Raw, html)
}

/// Undo raw placeholders one level, leaving escaped ones in place
pub fn reveal_raw(text: &str) -> String {
    replace_placeholders(text, |kind, content| match kind {
        Kind::Raw => content,
        Kind::Escaped => placeholder(Kind::Escaped, &content),
    })
}

/// Replace every placeholder with its final HTML
pub fn restore(html: &str) -> String {
    replace_placeholders(html, |kind, content| match kind {
        Kind::Escaped => escape(&content),
        Kind::Raw => restore(&content),
    })
}

/// Placeholders in `text`, in order
pub fn placeholders(text: &str) -> impl Iterator<Item = Match<'_>> + '_ {
    PLACEHOLDER.find_iter(text)
}
