//! Verbatim stages
//!
//! `ProtectVerbatim` hides `<plantext>` spans, verbatim tag bodies and touch-event
//! values from the page source before it is split into lines, so spans that cross
//! lines stay whole. `RestoreVerbatim` puts the hidden text back once the special-tag
//! pass is done.

use crate::wiki::transforms::{Runnable, TransformError};
use crate::wiki::verbatim::{protect_source, restore};

/// Verbatim protection stage
///
/// # Input
/// - `String` - page source with comments already stripped
///
/// # Output
/// - `String` - source with verbatim regions replaced by placeholders
pub struct ProtectVerbatim;

impl ProtectVerbatim {
    pub fn new() -> Self {
        ProtectVerbatim
    }
}

impl Default for ProtectVerbatim {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, String> for ProtectVerbatim {
    fn run(&self, input: String) -> Result<String, TransformError> {
        Ok(protect_source(&input))
    }
}

/// Verbatim restoration stage
///
/// # Input
/// - `String` - fully expanded page fragment
///
/// # Output
/// - `String` - fragment with placeholders replaced by their final HTML
pub struct RestoreVerbatim;

impl RestoreVerbatim {
    pub fn new() -> Self {
        RestoreVerbatim
    }
}

impl Default for RestoreVerbatim {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, String> for RestoreVerbatim {
    fn run(&self, input: String) -> Result<String, TransformError> {
        Ok(restore(&input))
    }
}
