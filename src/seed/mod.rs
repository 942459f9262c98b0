//! Seeding subsystem: raw input model and the two seeding strategies.
//!
//! Seeding is the act of populating an instance's slots from a raw input.
//! The strategy is selected by the input's shape at construction time: a
//! JSON mapping is seeded pair-by-pair, a duck-typed [`AttributeSource`]
//! is probed attribute-by-attribute. Nested attributes dispatch into the
//! nested resolver, which recurses through the same pipeline.

pub(crate) mod mapping;
pub(crate) mod nested;
pub(crate) mod object;
mod source;

pub use source::{AttributeSource, Raw};
