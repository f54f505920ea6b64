//! Comment stripping stage
//!
//! Removes `/* ... */` block comments, including ones spanning lines, from the whole
//! page source before it is split into lines.

use crate::wiki::transforms::{Runnable, TransformError};
use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("comment pattern is valid"));

/// Comment stripping stage
///
/// # Input
/// - `String` - raw page source
///
/// # Output
/// - `String` - source without block comments
pub struct StripComments;

impl StripComments {
    pub fn new() -> Self {
        StripComments
    }
}

impl Default for StripComments {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, String> for StripComments {
    fn run(&self, input: String) -> Result<String, TransformError> {
        tracing::debug!(bytes = input.len(), "stripping comments");
        Ok(BLOCK_COMMENT.replace_all(&input, "").into_owned())
    }
}
