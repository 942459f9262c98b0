//! Post-seeding validation.

use super::types::Instance;
use crate::schema::{SchemaError, SchemaResult};

/// Checks that every required attribute ended up assigned.
///
/// Attributes are checked in declaration order and the first invalid one
/// fails construction; optional attributes are always valid. Order decides
/// only which name appears in the error, not whether validation passes.
pub(crate) fn validate(instance: &Instance<'_>) -> SchemaResult<()> {
    for (def, slot) in instance.schema().attributes().zip(instance.slots()) {
        if def.required && !slot.is_assigned() {
            return Err(SchemaError::missing_attribute(&def.name));
        }
    }
    Ok(())
}
