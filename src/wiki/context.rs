//! Render context
//!
//! Everything one render call needs besides the page source: the page title, a
//! snapshot of the template store, configuration, the file resolver, the render-time
//! clock reading and the current template nesting depth.
//!
//! A context is built fresh for every top-level render (templates reloaded), and is
//! never shared mutably; nested template renders derive a child with [`RenderContext::nested`].

use crate::wiki::config::WikiConfig;
use crate::wiki::files::{FileResolver, PrefixFileResolver};
use crate::wiki::templates::TemplateStore;
use chrono::{Local, NaiveDateTime};
use std::fmt::{self, Write};
use std::sync::Arc;

const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone)]
pub struct RenderContext {
    page_title: String,
    templates: Arc<TemplateStore>,
    config: Arc<WikiConfig>,
    files: Arc<dyn FileResolver>,
    timestamp: NaiveDateTime,
    depth: usize,
}

impl RenderContext {
    /// Context with default configuration, reading the clock now
    pub fn new(page_title: impl Into<String>, templates: TemplateStore) -> Self {
        let config = Arc::new(WikiConfig::default());
        let files = Arc::new(PrefixFileResolver::new(config.links.file_prefix.clone()));
        Self {
            page_title: page_title.into(),
            templates: Arc::new(templates),
            config,
            files,
            timestamp: Local::now().naive_local(),
            depth: 0,
        }
    }

    /// Replace the configuration; the file resolver follows the configured prefix.
    pub fn with_config(mut self, config: Arc<WikiConfig>) -> Self {
        self.files = Arc::new(PrefixFileResolver::new(config.links.file_prefix.clone()));
        self.config = config;
        self
    }

    pub fn with_file_resolver(mut self, files: Arc<dyn FileResolver>) -> Self {
        self.files = files;
        self
    }

    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Child context for rendering a template body one level deeper
    pub fn nested(&self) -> Self {
        let mut child = self.clone();
        child.depth += 1;
        child
    }

    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    pub fn config(&self) -> &WikiConfig {
        &self.config
    }

    pub fn files(&self) -> &dyn FileResolver {
        self.files.as_ref()
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// The render timestamp in the configured format
    ///
    /// An invalid format string falls back to `YYYY-MM-DD HH:MM:SS`.
    pub fn timestamp_text(&self) -> String {
        let format = &self.config.render.timestamp_format;
        let mut text = String::new();
        if write!(text, "{}", self.timestamp.format(format)).is_err() {
            tracing::warn!(%format, "invalid timestamp format, using default");
            return self.timestamp.format(DEFAULT_TIMESTAMP_FORMAT).to_string();
        }
        text
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_nested(&self) -> bool {
        self.depth > 0
    }

    /// URL of a wiki page
    pub fn page_url(&self, target: &str) -> String {
        format!("{}{}", self.config.links.page_prefix, target)
    }
}

impl fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("page_title", &self.page_title)
            .field("templates", &self.templates.len())
            .field("timestamp", &self.timestamp)
            .field("depth", &self.depth)
            .finish()
    }
}
