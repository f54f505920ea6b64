//! Block rendering stage
//!
//! Renders every block with the render context and joins the fragments with newlines.
//! Blank blocks render as empty strings, so blank lines survive as empty lines.

use crate::wiki::ast::Block;
use crate::wiki::blocks::render_block;
use crate::wiki::context::RenderContext;
use crate::wiki::transforms::{Runnable, TransformError};
use std::sync::Arc;

/// Block rendering stage
///
/// # Input
/// - `Vec<Block>` - segmented page
///
/// # Output
/// - `String` - HTML fragments joined with `\n`
pub struct RenderBlocks {
    ctx: Arc<RenderContext>,
}

impl RenderBlocks {
    pub fn new(ctx: Arc<RenderContext>) -> Self {
        RenderBlocks { ctx }
    }
}

impl Runnable<Vec<Block>, String> for RenderBlocks {
    fn run(&self, input: Vec<Block>) -> Result<String, TransformError> {
        let fragments: Vec<String> = input
            .iter()
            .map(|block| render_block(&self.ctx, block))
            .collect();
        Ok(fragments.join("\n"))
    }
}
