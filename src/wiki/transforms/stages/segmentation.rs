//! Block segmentation stage
//!
//! Splits the page source into lines and reads each one, in order, as a blank line, a
//! header, a directive (which may consume the following lines) or a paragraph.

use crate::wiki::ast::Block;
use crate::wiki::blocks::{parse_header, scan_directive};
use crate::wiki::transforms::{Runnable, TransformError};

/// Block segmentation stage
///
/// # Input
/// - `String` - page source with comments already stripped
///
/// # Output
/// - `Vec<Block>` - one block per line, or per directive
pub struct SegmentBlocks;

impl SegmentBlocks {
    pub fn new() -> Self {
        SegmentBlocks
    }
}

impl Default for SegmentBlocks {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, Vec<Block>> for SegmentBlocks {
    fn run(&self, input: String) -> Result<Vec<Block>, TransformError> {
        Ok(segment(&input))
    }
}

impl Runnable<&str, Vec<Block>> for SegmentBlocks {
    fn run(&self, input: &str) -> Result<Vec<Block>, TransformError> {
        Ok(segment(input))
    }
}

/// Segment `source` into blocks
///
/// Lines are split on `\n`; a trailing `\r` is dropped. Directive recognition sees the
/// lines as written, everything else sees them with trailing whitespace removed.
pub fn segment(source: &str) -> Vec<Block> {
    let lines: Vec<&str> = source
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let mut blocks = Vec::new();
    let mut index = 0;
    while index < lines.len() {
        let line = lines[index].trim_end();

        if line.trim().is_empty() {
            blocks.push(Block::Blank);
            index += 1;
            continue;
        }

        if let Some((level, text)) = parse_header(line) {
            blocks.push(Block::header(level, text));
            index += 1;
            continue;
        }

        if let Some((block, end)) = scan_directive(&lines, index) {
            blocks.push(block);
            index = end + 1;
            continue;
        }

        blocks.push(Block::paragraph(line));
        index += 1;
    }

    tracing::debug!(blocks = blocks.len(), lines = lines.len(), "segmented page");
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<&'static str> {
        segment(source).iter().map(Block::kind).collect()
    }

    #[test]
    fn test_empty_source_is_one_blank_line() {
        assert_eq!(segment(""), vec![Block::Blank]);
    }

    #[test]
    fn test_line_kinds() {
        assert_eq!(
            kinds("+Title\n\ntext\n[file name=a.txt]\n   "),
            vec!["header", "blank", "paragraph", "directive", "blank"]
        );
    }

    #[test]
    fn test_directive_consumes_lines() {
        let blocks = segment("[table\nA\\\\B\n]\nafter");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1], Block::paragraph("after"));
    }

    #[test]
    fn test_trailing_whitespace_and_crlf() {
        assert_eq!(
            segment("one  \r\n++two\r\n"),
            vec![Block::paragraph("one"), Block::header(2, "two"), Block::Blank]
        );
    }

    #[test]
    fn test_five_pluses_is_paragraph() {
        assert_eq!(segment("+++++A"), vec![Block::paragraph("+++++A")]);
    }

    #[test]
    fn test_unterminated_bracket_consumes_only_its_line() {
        assert_eq!(
            segment("[open\nnext"),
            vec![Block::literal("[open"), Block::paragraph("next")]
        );
    }

    #[test]
    fn test_str_input() {
        let blocks = SegmentBlocks::new().run("text").unwrap();
        assert_eq!(blocks, vec![Block::paragraph("text")]);
    }
}
