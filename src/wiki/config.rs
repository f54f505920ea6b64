//! Configuration loader for wikimark.
//!
//! `defaults/wikimark.default.toml` is embedded into the library so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files and
//! environment variables on top of those defaults via [`Loader`] before deserializing
//! into [`WikiConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../../defaults/wikimark.default.toml");

/// Prefix of environment variables read by [`Loader::with_env`]
pub const ENV_PREFIX: &str = "WIKIMARK";

/// Top-level configuration consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WikiConfig {
    pub render: RenderConfig,
    pub links: LinksConfig,
    pub navbox: NavboxConfig,
    pub embeds: EmbedConfig,
    pub redirect: RedirectConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RenderConfig {
    pub max_template_depth: usize,
    pub timestamp_format: String,
}

/// URL prefixes for generated links.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinksConfig {
    pub page_prefix: String,
    pub file_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavboxConfig {
    pub title_color: String,
    pub group_color: String,
    pub default_title: String,
}

/// Frame heights, in pixels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmbedConfig {
    pub iframe_height: u32,
    pub ghp_height: u32,
    pub script_height: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RedirectConfig {
    pub execute_immediately: bool,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            render: RenderConfig {
                max_template_depth: 16,
                timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
            },
            links: LinksConfig {
                page_prefix: "/wiki/".to_string(),
                file_prefix: "/wiki/files/".to_string(),
            },
            navbox: NavboxConfig {
                title_color: "#cfe3ff".to_string(),
                group_color: "#e8f2ff".to_string(),
                default_title: "Navigation".to_string(),
            },
            embeds: EmbedConfig {
                iframe_height: 500,
                ghp_height: 600,
                script_height: 200,
            },
            redirect: RedirectConfig {
                execute_immediately: true,
            },
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `WIKIMARK__SECTION__KEY` environment variables.
    pub fn with_env(mut self) -> Self {
        let source = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<WikiConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<WikiConfig, ConfigError> {
    Loader::new().build()
}
