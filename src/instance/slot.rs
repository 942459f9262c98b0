//! Per-instance attribute storage.

use std::fmt;

use serde_json::Value;

use super::types::Instance;
use crate::seed::Raw;

/// A resolved attribute value held by a slot.
///
/// Nested values are owned outright: a nested instance (or list of
/// instances) has no existence independent of its parent slot.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotValue<'r> {
    /// A leaf value, passed through from the input unchanged
    Leaf(Value),
    /// A nested instance built from an inner schema
    Nested(Instance<'r>),
    /// A list of nested instances, input order preserved
    NestedList(Vec<Instance<'r>>),
}

impl<'r> SlotValue<'r> {
    /// Returns the leaf value, if this is a leaf slot value
    pub fn as_leaf(&self) -> Option<&Value> {
        match self {
            SlotValue::Leaf(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the nested instance, if this is a scalar nested value
    pub fn as_nested(&self) -> Option<&Instance<'r>> {
        match self {
            SlotValue::Nested(instance) => Some(instance),
            _ => None,
        }
    }

    /// Returns the nested instances, if this is a list nested value
    pub fn as_nested_list(&self) -> Option<&[Instance<'r>]> {
        match self {
            SlotValue::NestedList(instances) => Some(instances),
            _ => None,
        }
    }

    /// Re-exposes the stored value as raw input, so a built instance can
    /// act as a source when seeding another schema.
    pub(crate) fn as_raw(&self) -> Raw<'_> {
        match self {
            SlotValue::Leaf(value) => Raw::Value(value),
            SlotValue::Nested(instance) => Raw::Source(instance),
            SlotValue::NestedList(instances) => {
                Raw::List(instances.iter().map(|i| Raw::Source(i)).collect())
            }
        }
    }
}

/// Per-instance storage cell for one declared attribute.
///
/// Created unassigned when the owning instance is allocated; `assign` is
/// only ever called during seeding, and the assigned flag is never reset.
#[derive(Clone, PartialEq)]
pub struct AttributeSlot<'r> {
    name: &'r str,
    value: Option<SlotValue<'r>>,
}

impl<'r> AttributeSlot<'r> {
    pub(crate) fn new(name: &'r str) -> Self {
        Self { name, value: None }
    }

    /// Returns the attribute name
    pub fn name(&self) -> &str {
        self.name
    }

    /// Returns the stored value, or `None` while unassigned
    pub fn value(&self) -> Option<&SlotValue<'r>> {
        self.value.as_ref()
    }

    /// Returns true once the slot has been assigned
    pub fn is_assigned(&self) -> bool {
        self.value.is_some()
    }

    pub(crate) fn assign(&mut self, value: SlotValue<'r>) {
        self.value = Some(value);
    }
}

// Renders as `name=value`, or `name=<unassigned>` before assignment.
impl fmt::Debug for AttributeSlot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={:?}", self.name, value),
            None => write!(f, "{}=<unassigned>", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_slot_starts_unassigned() {
        let slot = AttributeSlot::new("foo");
        assert!(!slot.is_assigned());
        assert!(slot.value().is_none());
        assert_eq!(format!("{:?}", slot), "foo=<unassigned>");
    }

    #[test]
    fn test_assignment_sets_flag_and_value() {
        let mut slot = AttributeSlot::new("foo");
        slot.assign(SlotValue::Leaf(json!("YES")));
        assert!(slot.is_assigned());
        assert_eq!(slot.value().unwrap().as_leaf(), Some(&json!("YES")));
    }

    #[test]
    fn test_null_leaf_still_counts_as_assigned() {
        let mut slot = AttributeSlot::new("foo");
        slot.assign(SlotValue::Leaf(json!(null)));
        assert!(slot.is_assigned());
    }

    #[test]
    fn test_debug_renders_name_and_value() {
        let mut slot = AttributeSlot::new("foo");
        slot.assign(SlotValue::Leaf(json!(22)));
        let rendered = format!("{:?}", slot);
        assert!(rendered.starts_with("foo="));
        assert!(rendered.contains("22"));
    }
}
