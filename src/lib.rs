//! # wikimark
//!
//! A renderer for wikimark, the line-oriented markup used by the wiki's pages.
//!
//! File Layout
//!
//! Rendering is a fixed chain of stages over typed intermediate values, so each stage can
//! be run and tested on its own. The contract is a single global input (the page source,
//! its title and the template store) and a single global output (an HTML fragment).
//!
//! src/wiki
//!   ├── transforms    Stage trait, composition and the pipeline stages
//!   ├── ast           Block and inline intermediate representation
//!   ├── inlines       Inline rules (links, sup/sub, substitutions)
//!   ├── blocks        Headers and bracketed block directives
//!   ├── special_tags  Post-processing of embedded tags
//!   └── templates     Template store and placeholder substitution
//!
//! The entry point is [`Renderer`](wiki::render::Renderer).
//!
//! For test helpers, see the [testing module](wiki::testing).

#![allow(rustdoc::invalid_html_tags)]

pub mod wiki;

pub use wiki::context::RenderContext;
pub use wiki::render::Renderer;
