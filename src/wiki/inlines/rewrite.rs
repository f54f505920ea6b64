//! Segment rewriting primitives shared by the inline rules

use crate::wiki::ast::inline::push_text;
use crate::wiki::ast::Segment;
use regex::{Captures, Regex};

/// Rewrite every match of `pattern` inside text segments.
///
/// `replace` returns the replacement segment, or `None` to keep the match as text.
/// Html and literal segments are passed through untouched.
pub fn rewrite_text<F>(segments: Vec<Segment>, pattern: &Regex, mut replace: F) -> Vec<Segment>
where
    F: FnMut(&Captures) -> Option<Segment>,
{
    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        let Segment::Text(text) = segment else {
            out.push(segment);
            continue;
        };

        let mut last = 0;
        for caps in pattern.captures_iter(&text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let Some(replacement) = replace(&caps) else {
                continue;
            };
            push_text(&mut out, &text[last..whole.start()]);
            match replacement {
                Segment::Text(replaced) => push_text(&mut out, &replaced),
                other => out.push(other),
            }
            last = whole.end();
        }
        push_text(&mut out, &text[last..]);
    }
    out
}

/// Rename a pair of tags, e.g. `<up>..</up>` to `<sup>..</sup>`.
///
/// Each opening tag pairs with the nearest closing tag after it, across segment
/// boundaries, so a pair may enclose rendered HTML. Unpaired tags stay as written.
pub fn rename_paired_tag(
    mut segments: Vec<Segment>,
    open: &str,
    close: &str,
    new_open: &str,
    new_close: &str,
) -> Vec<Segment> {
    let mut marks: Vec<(usize, usize, bool)> = Vec::new();
    for (index, segment) in segments.iter().enumerate() {
        if let Segment::Text(text) = segment {
            let mut found: Vec<(usize, bool)> = text
                .match_indices(open)
                .map(|(offset, _)| (offset, true))
                .chain(text.match_indices(close).map(|(offset, _)| (offset, false)))
                .collect();
            found.sort_unstable();
            marks.extend(found.into_iter().map(|(offset, is_open)| (index, offset, is_open)));
        }
    }

    let mut paired = Vec::new();
    let mut pending = None;
    for mark in marks {
        match (mark.2, pending) {
            (true, None) => pending = Some(mark),
            (false, Some(opening)) => {
                paired.push(opening);
                paired.push(mark);
                pending = None;
            }
            _ => {}
        }
    }

    // Replace from the end so earlier offsets stay valid.
    for (index, offset, is_open) in paired.into_iter().rev() {
        let (old, new) = if is_open {
            (open, new_open)
        } else {
            (close, new_close)
        };
        if let Some(Segment::Text(text)) = segments.get_mut(index) {
            text.replace_range(offset..offset + old.len(), new);
        }
    }
    segments
}
