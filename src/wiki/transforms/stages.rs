//! Individual transformation stages
//!
//! This module contains the individual stages that can be composed into pipelines.
//! Each stage implements the `Runnable` trait.

pub mod block_rendering;
pub mod comments;
pub mod segmentation;
pub mod special_tags;
pub mod verbatim;

pub use block_rendering::RenderBlocks;
pub use comments::StripComments;
pub use segmentation::SegmentBlocks;
pub use special_tags::ExpandSpecialTags;
pub use verbatim::{ProtectVerbatim, RestoreVerbatim};
