//! The validated schema instance and its construction pipeline.

use super::slot::{AttributeSlot, SlotValue};
use super::validator;
use crate::schema::{Schema, SchemaError, SchemaResult};
use crate::seed::mapping::MappingSeeder;
use crate::seed::object::ObjectSeeder;
use crate::seed::{nested, AttributeSource, Raw};

/// A validated instance of a schema.
///
/// Construction is strictly sequential: the instance is allocated with one
/// unassigned slot per declared attribute, seeded by the strategy matching
/// the raw input's shape, then validated. A failure at any step aborts
/// construction and no partial instance escapes to the caller.
///
/// The instance borrows its schema: schemas are shared, read-only and
/// long-lived, instances are short-lived and own no part of the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance<'r> {
    schema: &'r Schema,
    slots: Vec<AttributeSlot<'r>>,
}

impl<'r> Instance<'r> {
    /// Runs the full pipeline: allocate, seed, validate.
    pub(crate) fn build(schema: &'r Schema, raw: Raw<'_>) -> SchemaResult<Self> {
        let mut instance = Self::unseeded(schema);
        match instance.seed(raw).and_then(|()| validator::validate(&instance)) {
            Ok(()) => Ok(instance),
            Err(err) => {
                log::debug!("instance construction failed: {}", err);
                Err(err)
            }
        }
    }

    /// Allocates an instance with every slot present and unassigned.
    fn unseeded(schema: &'r Schema) -> Self {
        let slots = schema
            .attributes()
            .map(|def| AttributeSlot::new(def.name.as_str()))
            .collect();
        Self { schema, slots }
    }

    /// Selects the seeding strategy from the raw input's shape.
    fn seed(&mut self, raw: Raw<'_>) -> SchemaResult<()> {
        let shape = raw.shape_name();
        match raw {
            Raw::Value(value) => {
                let map = value
                    .as_object()
                    .ok_or_else(|| SchemaError::type_mismatch("$root", "mapping", shape))?;
                MappingSeeder::new(map).seed(self)
            }
            Raw::Source(source) => ObjectSeeder::new(source).seed(self),
            Raw::List(_) => Err(SchemaError::type_mismatch("$root", "mapping", shape)),
        }
    }

    /// Assigns one attribute's slot from raw input.
    ///
    /// This is the single unknown-attribute guard: assigning a name absent
    /// from the schema is always an error. Nested attributes dispatch into
    /// the nested resolver; everything else is stored as an opaque leaf.
    pub(crate) fn assign(&mut self, name: &str, raw: Raw<'_>) -> SchemaResult<()> {
        let schema = self.schema;
        let (position, def) = schema
            .attributes()
            .enumerate()
            .find(|(_, def)| def.name == name)
            .ok_or_else(|| SchemaError::unknown_attribute(name))?;

        let value = match &def.nested {
            Some(spec) => nested::resolve(spec, name, raw)?,
            None => match raw {
                Raw::Value(value) => SlotValue::Leaf(value.clone()),
                other => {
                    return Err(SchemaError::type_mismatch(
                        name,
                        "leaf value",
                        other.shape_name(),
                    ))
                }
            },
        };

        self.slots[position].assign(value);
        Ok(())
    }

    /// Returns the schema this instance was built from
    pub fn schema(&self) -> &'r Schema {
        self.schema
    }

    /// Reads an attribute's stored value.
    ///
    /// Returns `None` for an optional attribute that was never assigned
    /// (and for names not declared at all); reading is never an error.
    pub fn get(&self, name: &str) -> Option<&SlotValue<'r>> {
        self.slot(name).and_then(|slot| slot.value())
    }

    /// Reads a leaf attribute's value
    pub fn leaf(&self, name: &str) -> Option<&serde_json::Value> {
        self.get(name).and_then(SlotValue::as_leaf)
    }

    /// Reads a scalar nested attribute's instance
    pub fn nested(&self, name: &str) -> Option<&Instance<'r>> {
        self.get(name).and_then(SlotValue::as_nested)
    }

    /// Reads a list nested attribute's instances
    pub fn nested_list(&self, name: &str) -> Option<&[Instance<'r>]> {
        self.get(name).and_then(SlotValue::as_nested_list)
    }

    /// Looks up a single slot for introspection
    pub fn slot(&self, name: &str) -> Option<&AttributeSlot<'r>> {
        let position = self.schema.position(name)?;
        Some(&self.slots[position])
    }

    /// Exposes all slots (name, value, assigned flag) in declaration order
    pub fn slots(&self) -> &[AttributeSlot<'r>] {
        &self.slots
    }
}

/// A built instance can itself seed another schema: each assigned slot
/// reads back as raw input, each unassigned slot reads as absent.
impl AttributeSource for Instance<'_> {
    fn try_read(&self, name: &str) -> Option<Raw<'_>> {
        self.get(name).map(SlotValue::as_raw)
    }
}

#[cfg(test)]
mod tests {
    use crate::schema::{Nested, Schema};
    use serde_json::json;

    fn person_schema() -> Schema {
        Schema::new()
            .required(["name"])
            .unwrap()
            .optional(["nickname"])
            .unwrap()
            .nested(
                "address",
                Nested::one(Schema::new().required(["city"]).unwrap()),
            )
            .unwrap()
    }

    #[test]
    fn test_all_slots_exist_after_construction() {
        let schema = person_schema();
        let input = json!({ "name": "Ana", "address": { "city": "Lima" } });

        let instance = schema.construct(&input).unwrap();
        let names: Vec<&str> = instance.slots().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["name", "nickname", "address"]);
        assert!(!instance.slot("nickname").unwrap().is_assigned());
    }

    #[test]
    fn test_validation_names_first_missing_in_declaration_order() {
        let schema = Schema::new().required(["first", "second"]).unwrap();

        let err = schema.construct(&json!({})).unwrap_err();
        assert_eq!(err.attribute(), Some("first"));
    }

    #[test]
    fn test_unassigned_optional_reads_as_none() {
        let schema = person_schema();
        let input = json!({ "name": "Ana", "address": { "city": "Lima" } });

        let instance = schema.construct(&input).unwrap();
        assert_eq!(instance.get("nickname"), None);
        assert_eq!(instance.leaf("nickname"), None);
    }

    #[test]
    fn test_instance_seeds_another_schema() {
        let schema = person_schema();
        let input = json!({
            "name": "Ana",
            "nickname": "An",
            "address": { "city": "Lima" }
        });
        let first = schema.construct(&input).unwrap();

        // A narrower schema fed from the built instance
        let narrow = Schema::new()
            .required(["name"])
            .unwrap()
            .nested(
                "address",
                Nested::one(Schema::new().required(["city"]).unwrap()),
            )
            .unwrap();

        let second = narrow.construct_from(&first).unwrap();
        assert_eq!(second.leaf("name"), Some(&json!("Ana")));
        assert_eq!(
            second.nested("address").unwrap().leaf("city"),
            Some(&json!("Lima"))
        );
    }

    #[test]
    fn test_instance_source_exposes_nested_lists() {
        let inner = Schema::new().required(["city"]).unwrap();
        let schema = Schema::new()
            .nested("addresses", Nested::many(inner.clone()))
            .unwrap();
        let input = json!({ "addresses": [ { "city": "Lima" }, { "city": "Quito" } ] });
        let first = schema.construct(&input).unwrap();

        let mirror = Schema::new()
            .nested("addresses", Nested::many(inner))
            .unwrap();
        let second = mirror.construct_from(&first).unwrap();
        let addresses = second.nested_list("addresses").unwrap();
        assert_eq!(addresses.len(), 2);
        assert_eq!(addresses[1].leaf("city"), Some(&json!("Quito")));
    }
}
