//! Schema subsystem: declaration builder and error taxonomy.
//!
//! A schema is declared once through the chained builder calls
//! ([`Schema::required`], [`Schema::optional`], [`Schema::nested`]) and is
//! immutable afterwards. Instance construction never mutates the schema, so
//! one schema may back any number of concurrent constructions.

mod errors;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use types::{AttributeDef, Nested, Schema};
