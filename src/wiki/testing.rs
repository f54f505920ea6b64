//! Testing helpers
//!
//! Rendering reads the clock for `<time>`, so tests build contexts with a fixed
//! timestamp instead. Use these helpers from unit tests and from `tests/`:
//!
//! ```rust,ignore
//! let ctx = fixed_context_with("Home", &[("greet", "Hello <;who;>")]);
//! let html = render_with(&ctx, "[greet who=World]");
//! ```

use crate::wiki::context::RenderContext;
use crate::wiki::render;
use crate::wiki::templates::TemplateStore;
use chrono::{NaiveDate, NaiveDateTime};

/// The timestamp used by fixed contexts, `2024-01-02 03:04:05`
pub const FIXED_TIMESTAMP_TEXT: &str = "2024-01-02 03:04:05";

pub fn fixed_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 2)
        .and_then(|date| date.and_hms_opt(3, 4, 5))
        .unwrap_or_default()
}

/// Context with no templates and a fixed timestamp
pub fn fixed_context(page_title: &str) -> RenderContext {
    fixed_context_with(page_title, &[])
}

/// Context with the given `(name, body)` templates and a fixed timestamp
pub fn fixed_context_with(page_title: &str, templates: &[(&str, &str)]) -> RenderContext {
    RenderContext::new(page_title, store(templates)).with_timestamp(fixed_timestamp())
}

pub fn store(templates: &[(&str, &str)]) -> TemplateStore {
    templates.iter().copied().collect()
}

/// Render a full page in the given context
pub fn render_with(ctx: &RenderContext, source: &str) -> String {
    render::render_fragment(ctx, source)
}

/// Render a full page titled `Test` with no templates
pub fn render_str(source: &str) -> String {
    render_with(&fixed_context("Test"), source)
}
