//! Inline segments
//!
//!     Inline rules never see a line as one flat string. A line is a sequence of
//!     segments, and every rule rewrites only `Text` segments:
//!
//!         Text      markup not yet interpreted
//!         Html      output of a rule, never scanned again
//!         Literal   placeholder for protected text, see [`crate::wiki::verbatim`]
//!
//!     Keeping the three apart is what guarantees that a protected span is never
//!     reinterpreted and that no rule re-enters another rule's output. Literals
//!     flatten to their placeholder; the text behind it is restored only after the
//!     special-tag pass.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Html(String),
    Literal(String),
}

impl Segment {
    pub fn text(s: impl Into<String>) -> Self {
        Segment::Text(s.into())
    }

    pub fn html(s: impl Into<String>) -> Self {
        Segment::Html(s.into())
    }

    /// Render this segment as HTML output
    pub fn flatten_into(&self, out: &mut String) {
        match self {
            Segment::Text(text) | Segment::Html(text) | Segment::Literal(text) => {
                out.push_str(text)
            }
        }
    }
}

/// Append text to a segment list, merging with a trailing text segment.
pub fn push_text(segments: &mut Vec<Segment>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Segment::Text(existing)) = segments.last_mut() {
        existing.push_str(text);
    } else {
        segments.push(Segment::Text(text.to_string()));
    }
}

/// Flatten segments to the final HTML string
pub fn flatten(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        segment.flatten_into(&mut out);
    }
    out
}
