//! Object seeder: populates an instance by probing a duck-typed source.

use super::source::AttributeSource;
use crate::instance::Instance;
use crate::schema::{SchemaError, SchemaResult};

/// Seeds an instance by probing a source for each declared attribute.
///
/// Attributes are probed in declaration order. An absent read is fatal for
/// a required attribute and leaves the slot unassigned for an optional
/// one. Only declared names are ever probed, so this seeder cannot hit
/// the unknown-attribute guard.
pub(crate) struct ObjectSeeder<'a> {
    source: &'a dyn AttributeSource,
}

impl<'a> ObjectSeeder<'a> {
    pub(crate) fn new(source: &'a dyn AttributeSource) -> Self {
        Self { source }
    }

    pub(crate) fn seed(&self, instance: &mut Instance<'_>) -> SchemaResult<()> {
        let schema = instance.schema();
        for def in schema.attributes() {
            match self.source.try_read(&def.name) {
                Some(raw) => instance.assign(&def.name, raw)?,
                None if def.required => {
                    return Err(SchemaError::missing_attribute(&def.name));
                }
                None => {} // optional and absent: slot stays unassigned
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::schema::Schema;
    use crate::seed::{AttributeSource, Raw};
    use serde_json::{json, Value};

    /// Test double standing in for an arbitrary accessor-bearing object.
    struct Provider {
        foo: Value,
        bar: Option<Value>,
    }

    impl AttributeSource for Provider {
        fn try_read(&self, name: &str) -> Option<Raw<'_>> {
            match name {
                "foo" => Some(Raw::Value(&self.foo)),
                "bar" => self.bar.as_ref().map(Raw::Value),
                _ => None,
            }
        }
    }

    #[test]
    fn test_reads_declared_attributes() {
        let schema = Schema::new()
            .required(["foo"])
            .unwrap()
            .optional(["bar"])
            .unwrap();
        let provider = Provider {
            foo: json!("YES"),
            bar: Some(json!(22)),
        };

        let instance = schema.construct_from(&provider).unwrap();
        assert_eq!(instance.leaf("foo"), Some(&json!("YES")));
        assert_eq!(instance.leaf("bar"), Some(&json!(22)));
    }

    #[test]
    fn test_absent_optional_left_unassigned() {
        let schema = Schema::new()
            .required(["foo"])
            .unwrap()
            .optional(["bar"])
            .unwrap();
        let provider = Provider {
            foo: json!("YES"),
            bar: None,
        };

        let instance = schema.construct_from(&provider).unwrap();
        assert!(!instance.slot("bar").unwrap().is_assigned());
        assert_eq!(instance.get("bar"), None);
    }

    #[test]
    fn test_absent_required_fails_naming_attribute() {
        let schema = Schema::new().required(["foo", "baz"]).unwrap();
        let provider = Provider {
            foo: json!("YES"),
            bar: None,
        };

        let err = schema.construct_from(&provider).unwrap_err();
        assert_eq!(err.code(), "SEED_MISSING_ATTRIBUTE");
        assert_eq!(err.attribute(), Some("baz"));
    }

    #[test]
    fn test_extra_accessors_ignored() {
        // The source knows "foo" and "bar" but the schema only wants "foo".
        let schema = Schema::new().required(["foo"]).unwrap();
        let provider = Provider {
            foo: json!("YES"),
            bar: Some(json!("never read")),
        };

        let instance = schema.construct_from(&provider).unwrap();
        assert_eq!(instance.slots().len(), 1);
    }
}
