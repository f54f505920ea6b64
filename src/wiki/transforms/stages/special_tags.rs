//! Special-tag stage: runs the post-processor over the assembled fragment

use crate::wiki::context::RenderContext;
use crate::wiki::special_tags::expand_special_tags;
use crate::wiki::transforms::{Runnable, TransformError};
use std::sync::Arc;

pub struct ExpandSpecialTags {
    ctx: Arc<RenderContext>,
}

impl ExpandSpecialTags {
    pub fn new(ctx: Arc<RenderContext>) -> Self {
        ExpandSpecialTags { ctx }
    }
}

impl Runnable<String, String> for ExpandSpecialTags {
    fn run(&self, input: String) -> Result<String, TransformError> {
        Ok(expand_special_tags(&self.ctx, &input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wiki::testing::fixed_context;

    #[test]
    fn test_expands_tags() {
        let stage = ExpandSpecialTags::new(Arc::new(fixed_context("Home")));
        let html = stage.run("<p>a</p><doc>x</doc>".to_string()).unwrap();
        assert_eq!(html, "<p>a</p>");
    }
}
