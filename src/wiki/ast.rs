//! Intermediate representation shared by the rendering stages
//!
//! A page is segmented into a flat sequence of [`Block`]s, one per logical line or
//! bracketed directive. Inline text is carried as a sequence of [`Segment`]s so that
//! protected literal spans and already-rendered HTML are kept apart from markup that
//! still has to be interpreted.

pub mod block;
pub mod directive;
pub mod inline;

pub use block::Block;
pub use directive::{Directive, Params};
pub use inline::Segment;
