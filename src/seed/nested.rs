//! Nested resolver: recursively constructs instances for nested attributes.

use serde_json::Value;

use super::source::Raw;
use crate::instance::{Instance, SlotValue};
use crate::schema::{Nested, SchemaError, SchemaResult};

/// Resolves a nested attribute value by running the full construction
/// pipeline against the inner schema.
///
/// Any failure inside a nested construction propagates unchanged; for a
/// list, resolution stops at the first failing element and no partial
/// list is surfaced.
pub(crate) fn resolve<'r>(
    nested: &'r Nested,
    attribute: &str,
    raw: Raw<'_>,
) -> SchemaResult<SlotValue<'r>> {
    match nested {
        Nested::One { schema } => Ok(SlotValue::Nested(Instance::build(schema, raw)?)),
        Nested::Many { schema } => {
            let elements = match raw {
                Raw::Value(Value::Array(items)) => items.iter().map(Raw::Value).collect(),
                Raw::List(items) => items,
                other => {
                    return Err(SchemaError::type_mismatch(
                        attribute,
                        "list",
                        other.shape_name(),
                    ))
                }
            };

            let mut instances = Vec::with_capacity(elements.len());
            for element in elements {
                instances.push(Instance::build(schema, element)?);
            }
            Ok(SlotValue::NestedList(instances))
        }
    }
}
