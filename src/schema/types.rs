//! Schema definitions: attribute specs, nesting, and the declaration builder.
//!
//! A [`Schema`] is the declared set of attribute names for one structured
//! type, each marked required or optional and optionally carrying a nested
//! sub-schema. Declaration order is preserved: validation walks attributes
//! in the order they were declared, so the first missing attribute named in
//! an error is deterministic.

use serde::{Deserialize, Serialize};

use super::errors::{SchemaError, SchemaResult};
use crate::instance::Instance;
use crate::seed::{AttributeSource, Raw};

/// Nested resolution shape for an attribute.
///
/// Inner schemas are owned by value: a nested instance has no existence
/// independent of its parent slot, and a schema cannot be declared
/// cyclically because ownership would have to be infinite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Nested {
    /// A single nested instance built from one input value
    One {
        /// Schema applied to the input value
        schema: Schema,
    },
    /// A homogeneous list of nested instances, one per input element
    Many {
        /// Schema applied to each element of the input list
        schema: Schema,
    },
}

impl Nested {
    /// Nested shape resolving one input value into one instance
    pub fn one(schema: Schema) -> Self {
        Nested::One { schema }
    }

    /// Nested shape resolving an input list element-wise
    pub fn many(schema: Schema) -> Self {
        Nested::Many { schema }
    }

    /// Returns the inner schema
    pub fn schema(&self) -> &Schema {
        match self {
            Nested::One { schema } | Nested::Many { schema } => schema,
        }
    }
}

/// Definition of a single declared attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDef {
    /// Attribute name (a valid identifier)
    pub name: String,
    /// Whether the attribute must be assigned for validation to pass
    pub required: bool,
    /// Nested sub-schema, if this attribute's value is itself structured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested: Option<Nested>,
}

/// A declared attribute schema.
///
/// Built once through the chained declaration calls and treated as
/// immutable thereafter; a schema may be shared read-only across any
/// number of concurrent instance constructions.
///
/// Declaring a name that already exists overwrites the earlier definition
/// in place (last write wins, original position kept). This mirrors plain
/// mapping semantics and is intentional, not validated against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Attribute definitions in declaration order
    attributes: Vec<AttributeDef>,
}

impl Schema {
    /// Creates an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the given names as required attributes.
    ///
    /// # Errors
    ///
    /// Returns `SEED_INVALID_SCHEMA` if any name is not an identifier.
    pub fn required<I, S>(mut self, names: I) -> SchemaResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.declare(name.into(), true, None)?;
        }
        Ok(self)
    }

    /// Declares the given names as optional attributes.
    ///
    /// # Errors
    ///
    /// Returns `SEED_INVALID_SCHEMA` if any name is not an identifier.
    pub fn optional<I, S>(mut self, names: I) -> SchemaResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.declare(name.into(), false, None)?;
        }
        Ok(self)
    }

    /// Declares a nested attribute resolved through an inner schema.
    ///
    /// Nested attributes are always required; the engine offers no way to
    /// declare an optional nested attribute. Known limitation, preserved
    /// for compatibility with the overall declaration contract.
    ///
    /// # Errors
    ///
    /// Returns `SEED_INVALID_SCHEMA` if the name is not an identifier.
    pub fn nested(mut self, name: impl Into<String>, nested: Nested) -> SchemaResult<Self> {
        self.declare(name.into(), true, Some(nested))?;
        Ok(self)
    }

    fn declare(&mut self, name: String, required: bool, nested: Option<Nested>) -> SchemaResult<()> {
        if !is_identifier(&name) {
            return Err(SchemaError::invalid_schema(name));
        }

        log::trace!(
            "declared attribute '{}' (required: {}, nested: {})",
            name,
            required,
            nested.is_some()
        );

        let def = AttributeDef {
            name,
            required,
            nested,
        };

        match self.attributes.iter_mut().find(|a| a.name == def.name) {
            Some(existing) => *existing = def,
            None => self.attributes.push(def),
        }

        Ok(())
    }

    /// Checks identifier validity and name uniqueness.
    ///
    /// The builder enforces both by construction; schemas arriving through
    /// deserialization bypass the builder and must be checked explicitly.
    pub fn validate_structure(&self) -> SchemaResult<()> {
        for (i, def) in self.attributes.iter().enumerate() {
            if !is_identifier(&def.name) {
                return Err(SchemaError::invalid_schema(def.name.clone()));
            }
            if self.attributes[..i].iter().any(|a| a.name == def.name) {
                return Err(SchemaError::invalid_schema(def.name.clone()));
            }
            if let Some(nested) = &def.nested {
                nested.schema().validate_structure()?;
            }
        }
        Ok(())
    }

    /// Looks up an attribute definition by name
    pub fn get(&self, name: &str) -> Option<&AttributeDef> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Returns the position of an attribute in declaration order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name == name)
    }

    /// Iterates attribute definitions in declaration order
    pub fn attributes(&self) -> impl Iterator<Item = &AttributeDef> {
        self.attributes.iter()
    }

    /// Returns the number of declared attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns true if no attributes are declared
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Constructs a validated instance from a JSON mapping.
    ///
    /// The input must be a JSON object; its pairs seed the instance in the
    /// mapping's own iteration order. Unknown keys are rejected.
    ///
    /// # Errors
    ///
    /// - `SEED_TYPE_MISMATCH` if the input is not an object, or a
    ///   nested-list attribute receives a non-list value
    /// - `SEED_UNKNOWN_ATTRIBUTE` if the mapping contains an undeclared key
    /// - `SEED_MISSING_ATTRIBUTE` if a required attribute ends up unassigned
    pub fn construct(&self, input: &serde_json::Value) -> SchemaResult<Instance<'_>> {
        Instance::build(self, Raw::Value(input))
    }

    /// Constructs a validated instance from a duck-typed source.
    ///
    /// Each declared attribute is probed via [`AttributeSource::try_read`]
    /// in declaration order; an absent required attribute fails immediately.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Schema::construct`], minus
    /// `SEED_UNKNOWN_ATTRIBUTE` (only declared names are probed).
    pub fn construct_from(&self, source: &dyn AttributeSource) -> SchemaResult<Instance<'_>> {
        Instance::build(self, Raw::Source(source))
    }
}

/// Returns true if `name` is a valid attribute identifier.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
