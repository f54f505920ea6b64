//! Standard transform definitions
//!
//! Segmentation needs no context and is a `once_cell::sync::Lazy` static. The full
//! document pipeline depends on the render context and is assembled per render by
//! [`document_pipeline`].

use crate::wiki::ast::Block;
use crate::wiki::context::RenderContext;
use crate::wiki::transforms::stages::{
    ExpandSpecialTags, ProtectVerbatim, RenderBlocks, RestoreVerbatim, SegmentBlocks,
    StripComments,
};
use crate::wiki::transforms::Transform;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// Type alias for the segmentation transform
pub type SegmentationTransform = Transform<String, Vec<Block>>;

/// Type alias for a page rendering transform
pub type DocumentTransform = Transform<String, String>;

/// Segmentation transform: String → Vec<Block>
///
/// 1. Strip block comments
/// 2. Hide verbatim regions behind placeholders
/// 3. Segment lines into blocks
///
/// ```rust,ignore
/// use wikimark::wiki::transforms::standard::SEGMENTATION;
///
/// let blocks = SEGMENTATION.run("+Title\ntext".to_string()).unwrap();
/// assert_eq!(blocks.len(), 2);
/// ```
pub static SEGMENTATION: Lazy<SegmentationTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(StripComments::new())
        .then(ProtectVerbatim::new())
        .then(SegmentBlocks::new())
});

/// Document transform: String → String
///
/// Segmentation followed by block rendering and, for top-level renders, special-tag
/// expansion and restoration of verbatim text. Template bodies are rendered with a
/// nested context and leave both to the page that includes them, so every tag is
/// expanded exactly once and protected text is escaped exactly once.
pub fn document_pipeline(ctx: Arc<RenderContext>) -> DocumentTransform {
    let rendered = Transform::from_fn(Ok)
        .then_transform(&*SEGMENTATION)
        .then(RenderBlocks::new(Arc::clone(&ctx)));
    if ctx.is_nested() {
        rendered
    } else {
        rendered
            .then(ExpandSpecialTags::new(ctx))
            .then(RestoreVerbatim::new())
    }
}
