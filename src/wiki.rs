//! Main module for wikimark library functionality

pub mod ast;
pub mod blocks;
pub mod config;
pub mod context;
pub mod files;
pub mod html;
pub mod inlines;
pub mod render;
pub mod special_tags;
pub mod templates;
pub mod testing;
pub mod transforms;
pub mod verbatim;
