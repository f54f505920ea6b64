//! Template store
//!
//! Templates are named markup fragments kept as files named `TEMPLATE.<name>[.<ext>]`.
//! The name is the first dot-separated segment after the `TEMPLATE.` prefix, so
//! `TEMPLATE.infobox.3p` defines the template `infobox`.
//!
//! A template body uses placeholder tokens:
//!
//!     <;key;>     replaced by the named parameter `key`
//!     <;1;>..<;9;> positional parameters, empty when not supplied
//!
//! After substitution the body is rendered through the whole pipeline again, so a
//! template may contain headers, directives, other templates and special tags.

use crate::wiki::ast::Params;
use crate::wiki::context::RenderContext;
use crate::wiki::render;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// File name prefix marking a template
pub const TEMPLATE_PREFIX: &str = "TEMPLATE.";

/// Extension used when writing template files
pub const TEMPLATE_EXTENSION: &str = "3p";

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<;([^;]+);>").expect("placeholder pattern is valid"));

/// Errors raised while loading templates
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read template directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Snapshot of template name → raw body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateStore {
    templates: BTreeMap<String, String>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `TEMPLATE.*` file in `dir`.
    ///
    /// A missing directory gives an empty store. Files that cannot be read as UTF-8
    /// text are skipped. Entries are visited in file-name order, so when two files
    /// map to the same name the last one wins deterministically.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let dir = dir.as_ref();
        let mut store = TemplateStore::new();
        if !dir.exists() {
            debug!(path = %dir.display(), "template directory missing");
            return Ok(store);
        }

        let entries = fs::read_dir(dir).map_err(|source| TemplateError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files: Vec<(String, PathBuf)> = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => {
                    if let Some(file_name) = entry.file_name().to_str() {
                        files.push((file_name.to_string(), entry.path()));
                    }
                }
                Err(err) => warn!(error = %err, "skipping unreadable directory entry"),
            }
        }
        files.sort();

        for (file_name, path) in files {
            let Some(name) = template_name(&file_name) else {
                continue;
            };
            match fs::read_to_string(&path) {
                Ok(body) => store.insert(name, body),
                Err(err) => warn!(path = %path.display(), error = %err, "skipping template"),
            }
        }
        debug!(count = store.len(), path = %dir.display(), "loaded templates");
        Ok(store)
    }

    pub fn insert(&mut self, name: impl Into<String>, body: impl Into<String>) {
        self.templates.insert(name.into(), body.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Template names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for TemplateStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut store = TemplateStore::new();
        for (name, body) in iter {
            store.insert(name, body);
        }
        store
    }
}

/// Template name encoded in a file name, if it is a template file
pub fn template_name(file_name: &str) -> Option<&str> {
    let rest = file_name.strip_prefix(TEMPLATE_PREFIX)?;
    let name = rest.split('.').next().unwrap_or(rest);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Canonical file name for a template, e.g. `TEMPLATE.infobox.3p`
pub fn template_file_name(name: &str) -> String {
    format!("{}{}.{}", TEMPLATE_PREFIX, name, TEMPLATE_EXTENSION)
}

/// Provides the template snapshot used by one render call
pub trait TemplateSource: Send + Sync {
    fn load(&self) -> TemplateStore;
}

impl TemplateSource for TemplateStore {
    fn load(&self) -> TemplateStore {
        self.clone()
    }
}

/// Reads templates from a directory on every render, so edits show up immediately
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TemplateSource for DirectorySource {
    fn load(&self) -> TemplateStore {
        TemplateStore::load_dir(&self.dir).unwrap_or_else(|err| {
            warn!(error = %err, "rendering without templates");
            TemplateStore::new()
        })
    }
}

/// Replace placeholder tokens in a single left-to-right pass.
///
/// Named tokens take the matching parameter. Positional tokens `<;1;>`..`<;9;>`
/// without a parameter become empty. Other tokens are left as written. Inserted
/// values are never scanned again.
pub fn substitute(body: &str, params: &Params) -> String {
    PLACEHOLDER
        .replace_all(body, |caps: &Captures| {
            let key = &caps[1];
            match params.get(key) {
                Some(value) => value.to_string(),
                None if is_positional(key) => String::new(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn is_positional(key: &str) -> bool {
    matches!(key.as_bytes(), [b'1'..=b'9'])
}

/// Expand the template `name` with `params` and render the result one level deeper.
pub fn expand_custom(ctx: &RenderContext, name: &str, params: &Params) -> String {
    let Some(body) = ctx.templates().get(name) else {
        return format!("[template {} not found]", name);
    };

    let max_depth = ctx.config().render.max_template_depth;
    if ctx.depth() >= max_depth {
        warn!(template = name, max_depth, "template nesting limit reached");
        return format!("[template {}: nesting deeper than {} levels]", name, max_depth);
    }

    debug!(template = name, depth = ctx.depth(), "expanding template");
    let expanded = substitute(body, params);
    render::render_fragment(&ctx.nested(), &expanded)
}
