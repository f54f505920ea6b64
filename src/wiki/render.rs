//! Rendering entry points
//!
//! [`Renderer`] is what a host holds on to: configuration, a template source and a
//! file resolver. Every call to [`Renderer::render`] builds a fresh
//! [`RenderContext`], reloading templates, so edits are visible on the next render and
//! concurrent renders share nothing mutable.
//!
//! Rendering never fails from the caller's side. Malformed markup degrades to visible
//! text, and a pipeline failure becomes a `[render error: ...]` fragment.

use crate::wiki::ast::Params;
use crate::wiki::config::WikiConfig;
use crate::wiki::context::RenderContext;
use crate::wiki::files::FileResolver;
use crate::wiki::html::escape;
use crate::wiki::special_tags::expand_special_tags;
use crate::wiki::templates::{self, TemplateSource, TemplateStore};
use crate::wiki::transforms::standard::document_pipeline;
use crate::wiki::transforms::TransformError;
use crate::wiki::verbatim::restore;
use std::sync::Arc;

/// Render `source` in `ctx`, reporting pipeline failures as an error.
pub fn try_render_fragment(ctx: &RenderContext, source: &str) -> Result<String, TransformError> {
    let span = tracing::debug_span!("render", title = %ctx.page_title(), depth = ctx.depth());
    let _enter = span.enter();
    document_pipeline(Arc::new(ctx.clone())).run(source.to_string())
}

/// Render `source` in `ctx`; failures are rendered as an inline error message.
pub fn render_fragment(ctx: &RenderContext, source: &str) -> String {
    try_render_fragment(ctx, source).unwrap_or_else(|err| {
        tracing::error!(error = %err, title = %ctx.page_title(), "render failed");
        format!("[render error: {}]", escape(&err.to_string()))
    })
}

/// Renders pages with a fixed configuration, template source and file resolver
pub struct Renderer {
    config: Arc<WikiConfig>,
    templates: Box<dyn TemplateSource>,
    files: Option<Arc<dyn FileResolver>>,
}

impl Renderer {
    /// Renderer with no templates and the configured file prefix
    pub fn new(config: WikiConfig) -> Self {
        Self {
            config: Arc::new(config),
            templates: Box::new(TemplateStore::new()),
            files: None,
        }
    }

    pub fn with_templates(mut self, templates: impl TemplateSource + 'static) -> Self {
        self.templates = Box::new(templates);
        self
    }

    pub fn with_file_resolver(mut self, files: Arc<dyn FileResolver>) -> Self {
        self.files = Some(files);
        self
    }

    pub fn config(&self) -> &WikiConfig {
        &self.config
    }

    /// A fresh context for one render of `page_title`, with templates reloaded
    pub fn context(&self, page_title: &str) -> RenderContext {
        let ctx = RenderContext::new(page_title, self.templates.load())
            .with_config(Arc::clone(&self.config));
        match &self.files {
            Some(files) => ctx.with_file_resolver(Arc::clone(files)),
            None => ctx,
        }
    }

    /// Render a page to an HTML fragment
    pub fn render(&self, raw_text: &str, page_title: &str) -> String {
        render_fragment(&self.context(page_title), raw_text)
    }

    pub fn try_render(&self, raw_text: &str, page_title: &str) -> Result<String, TransformError> {
        try_render_fragment(&self.context(page_title), raw_text)
    }

    /// Render a single template by name, as if `[name ...]` appeared on `page_title`
    pub fn expand_template(&self, name: &str, params: &Params, page_title: &str) -> String {
        let ctx = self.context(page_title);
        let expanded = templates::expand_custom(&ctx, name, params);
        restore(&expand_special_tags(&ctx, &expanded))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(WikiConfig::default())
    }
}
