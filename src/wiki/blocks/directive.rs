//! Directive recognition
//!
//! A line starting with `[` (but not `[[`) opens a directive. The block ends at the
//! first line, from the opening line on, that is exactly `]` once trimmed; without one
//! the opening line stands alone. The joined slice must then read as `[name ...]`.

use crate::wiki::ast::{Block, Directive, Params};
use once_cell::sync::Lazy;
use regex::Regex;

static DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^\[(\w+)(.*?)\]").expect("directive pattern is valid"));

/// Try to read a directive opening at `lines[start]`.
///
/// Returns the block and the index of its last line, or `None` when the line should
/// be handled as an ordinary paragraph. An opening line with no closing line that
/// does not read as a directive becomes a [`Block::Literal`] of itself.
pub fn scan_directive(lines: &[&str], start: usize) -> Option<(Block, usize)> {
    let line = *lines.get(start)?;
    if !line.starts_with('[') || line.starts_with("[[") {
        return None;
    }

    let closing = lines[start..]
        .iter()
        .position(|candidate| candidate.trim() == "]")
        .map(|offset| start + offset);
    let end = closing.unwrap_or(start);
    let source = lines[start..=end].join("\n");

    match DIRECTIVE.captures(&source) {
        Some(caps) => {
            let name = caps[1].to_string();
            let params = Params::parse(caps[2].trim());
            let directive = Directive::new(name, params, source.as_str()).spanning(start..end + 1);
            Some((Block::Directive(directive), end))
        }
        None if closing.is_none() => Some((Block::literal(line), start)),
        None => None,
    }
}
