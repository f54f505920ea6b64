//! Literal-text protection
//!
//! Protected text reaches the inline engine as placeholders (see
//! [`crate::wiki::verbatim`]). Any `<plantext>` span still written out is hidden the
//! same way, then every placeholder becomes a [`Segment::Literal`], which rules never
//! touch.

use crate::wiki::ast::inline::push_text;
use crate::wiki::ast::Segment;
use crate::wiki::verbatim::{placeholders, protect_plantext};

/// Split `text` into text segments and protected literal segments
pub fn protect_literals(text: &str) -> Vec<Segment> {
    let text = protect_plantext(text);
    let mut segments = Vec::new();
    let mut last = 0;
    for hidden in placeholders(&text) {
        push_text(&mut segments, &text[last..hidden.start()]);
        segments.push(Segment::Literal(hidden.as_str().to_string()));
        last = hidden.end();
    }
    push_text(&mut segments, &text[last..]);
    segments
}
