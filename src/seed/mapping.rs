//! Mapping seeder: populates an instance from key/value pairs.

use serde_json::{Map, Value};

use super::source::Raw;
use crate::instance::Instance;
use crate::schema::SchemaResult;

/// Seeds an instance from a JSON mapping.
///
/// Pairs are applied in the mapping's own iteration order. Every key goes
/// through the instance's unknown-attribute guard, so a key absent from
/// the schema aborts seeding immediately.
pub(crate) struct MappingSeeder<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> MappingSeeder<'a> {
    pub(crate) fn new(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    pub(crate) fn seed(&self, instance: &mut Instance<'_>) -> SchemaResult<()> {
        for (key, value) in self.map {
            instance.assign(key, Raw::Value(value))?;
        }
        Ok(())
    }
}
