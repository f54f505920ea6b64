//! Block element
//!
//!     A block is the unit produced by segmentation. Most blocks cover one source
//!     line; a directive covers every line from its opening `[name` line up to and
//!     including the first line that is exactly `]`.
//!
//! Syntax
//!
//!     <blank>                  blank line, kept to preserve spacing
//!     "+"{1,4} <text>          header of level 1 to 4
//!     "[" <name> <body> "]"    block directive
//!     <text>                   paragraph
//!
//!     A bracketed line that cannot be read as a directive and has no closing line
//!     is kept as a literal block and emitted exactly as written.

use super::directive::Directive;
use serde::Serialize;

/// A segmented unit of the page source
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Blank,
    Header { level: u8, text: String },
    Directive(Directive),
    Literal { text: String },
    Paragraph { text: String },
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Block::Literal { text: text.into() }
    }

    pub fn header(level: u8, text: impl Into<String>) -> Self {
        Block::Header {
            level,
            text: text.into(),
        }
    }

    /// Short label used in logs and the CLI block listing
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Blank => "blank",
            Block::Header { .. } => "header",
            Block::Directive(_) => "directive",
            Block::Literal { .. } => "literal",
            Block::Paragraph { .. } => "paragraph",
        }
    }
}
