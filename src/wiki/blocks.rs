//! Block engine
//!
//! Turns segmented [`Block`]s into HTML. Headers and paragraphs go through the inline
//! engine; directives are dispatched by name:
//!
//!     table       -> [`table::render_table`]
//!     navbox      -> [`navbox::render_navbox`]
//!     file        -> [`file::render_file`]
//!     <template>  -> [`templates::expand_custom`] when the store has that name
//!     anything else renders its own source with the outer brackets removed
//!
//! Recognising blocks in the source is done by [`header::parse_header`] and
//! [`directive::scan_directive`], used by the segmentation stage.

pub mod directive;
pub mod file;
pub mod header;
pub mod navbox;
pub mod table;

pub use directive::scan_directive;
pub use header::parse_header;

use crate::wiki::ast::{Block, Directive};
use crate::wiki::context::RenderContext;
use crate::wiki::inlines::parse_inline;
use crate::wiki::templates;

/// Render one block to its HTML fragment
pub fn render_block(ctx: &RenderContext, block: &Block) -> String {
    match block {
        Block::Blank => String::new(),
        Block::Header { level, text } => {
            format!("<h{0}>{1}</h{0}>", level, parse_inline(ctx, text))
        }
        Block::Directive(directive) => render_directive(ctx, directive),
        Block::Literal { text } => text.clone(),
        Block::Paragraph { text } => format!("<p>{}</p>", parse_inline(ctx, text)),
    }
}

/// Dispatch a directive to its generator
pub fn render_directive(ctx: &RenderContext, directive: &Directive) -> String {
    tracing::debug!(name = %directive.name, lines = ?directive.lines, "rendering directive");
    match directive.name.as_str() {
        "table" => table::render_table(ctx, &directive.params),
        "navbox" => navbox::render_navbox(ctx, &directive.params),
        "file" => file::render_file(ctx, &directive.params),
        name if ctx.templates().contains(name) => {
            templates::expand_custom(ctx, name, &directive.params)
        }
        _ => directive.fallback_text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wiki::ast::Params;
    use crate::wiki::testing::{fixed_context, fixed_context_with};

    #[test]
    fn test_header_and_paragraph() {
        let ctx = fixed_context("Home");
        assert_eq!(
            render_block(&ctx, &Block::header(2, "(Foo)")),
            "<h2><a href=\"/wiki/Foo\">Foo</a></h2>"
        );
        assert_eq!(render_block(&ctx, &Block::paragraph("text")), "<p>text</p>");
        assert_eq!(render_block(&ctx, &Block::Blank), "");
    }

    #[test]
    fn test_literal_is_verbatim() {
        let ctx = fixed_context("Home");
        assert_eq!(render_block(&ctx, &Block::literal("[x (y)")), "[x (y)");
    }

    #[test]
    fn test_unknown_directive_falls_back() {
        let ctx = fixed_context("Home");
        let directive = Directive::new("bogus", Params::parse("x=1"), "[bogus x=1\n]");
        assert_eq!(render_directive(&ctx, &directive), "bogus x=1");
    }

    #[test]
    fn test_builtin_names_win_over_templates() {
        let ctx = fixed_context_with("Home", &[("file", "shadowed")]);
        let directive = Directive::new("file", Params::parse("name=a.txt"), "[file name=a.txt]");
        assert_eq!(
            render_directive(&ctx, &directive),
            "<a href=\"/wiki/files/a.txt\" class=\"file-link\">a.txt</a>"
        );
    }

    #[test]
    fn test_template_dispatch() {
        let ctx = fixed_context_with("Home", &[("hi", "<;1;>!")]);
        let directive = Directive::new("hi", Params::parse("1=Bob"), "[hi 1=Bob]");
        assert_eq!(render_directive(&ctx, &directive), "<p>Bob!</p>");
    }
}
