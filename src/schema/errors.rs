//! Error types for schema declaration and instance construction.
//!
//! Error codes:
//! - SEED_INVALID_SCHEMA (declaration rejected)
//! - SEED_UNKNOWN_ATTRIBUTE (construction rejected)
//! - SEED_MISSING_ATTRIBUTE (construction rejected)
//! - SEED_TYPE_MISMATCH (construction rejected)

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while declaring a schema or constructing an instance.
///
/// All errors are detected synchronously and abort the remainder of
/// construction; errors raised during nested resolution propagate
/// unchanged through every enclosing level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Schema declaration was given a non-identifier attribute name
    #[error("Invalid attribute name: {name:?}")]
    InvalidSchema {
        /// The rejected name
        name: String,
    },

    /// Mapping input contained a key absent from the schema
    #[error("Unknown attribute: {attribute}")]
    UnknownAttribute {
        /// The offending input key
        attribute: String,
    },

    /// A required attribute could not be resolved
    #[error("Missing attribute: {attribute}")]
    MissingAttribute {
        /// The unresolved attribute
        attribute: String,
    },

    /// A value did not have the shape its attribute spec demands
    #[error("Attribute '{attribute}': expected {expected}, got {actual}")]
    TypeMismatch {
        /// Attribute path ("$root" for the construction input itself)
        attribute: String,
        /// Expected shape
        expected: &'static str,
        /// Shape actually found
        actual: String,
    },
}

impl SchemaError {
    /// Create an invalid schema error
    pub fn invalid_schema(name: impl Into<String>) -> Self {
        SchemaError::InvalidSchema { name: name.into() }
    }

    /// Create an unknown attribute error
    pub fn unknown_attribute(attribute: impl Into<String>) -> Self {
        SchemaError::UnknownAttribute {
            attribute: attribute.into(),
        }
    }

    /// Create a missing attribute error
    pub fn missing_attribute(attribute: impl Into<String>) -> Self {
        SchemaError::MissingAttribute {
            attribute: attribute.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(
        attribute: impl Into<String>,
        expected: &'static str,
        actual: impl Into<String>,
    ) -> Self {
        SchemaError::TypeMismatch {
            attribute: attribute.into(),
            expected,
            actual: actual.into(),
        }
    }

    /// Returns the stable string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::InvalidSchema { .. } => "SEED_INVALID_SCHEMA",
            SchemaError::UnknownAttribute { .. } => "SEED_UNKNOWN_ATTRIBUTE",
            SchemaError::MissingAttribute { .. } => "SEED_MISSING_ATTRIBUTE",
            SchemaError::TypeMismatch { .. } => "SEED_TYPE_MISMATCH",
        }
    }

    /// Returns the attribute name this error points at, if any
    pub fn attribute(&self) -> Option<&str> {
        match self {
            SchemaError::InvalidSchema { name } => Some(name),
            SchemaError::UnknownAttribute { attribute }
            | SchemaError::MissingAttribute { attribute }
            | SchemaError::TypeMismatch { attribute, .. } => Some(attribute),
        }
    }
}
