//! Raw input model for instance construction.
//!
//! Duck typing is modelled as an explicit capability: anything that can be
//! probed one attribute at a time implements [`AttributeSource`], and
//! absence is an `Option`, not a trapped missing-method condition.

use std::fmt;

use serde_json::Value;

/// A duck-typed input probed one attribute at a time.
///
/// Implemented by adapters over whatever concrete type supplies attribute
/// reads; a built [`Instance`](crate::instance::Instance) implements it
/// too, so one validated instance can seed another schema.
pub trait AttributeSource {
    /// Attempts to read the named attribute, returning `None` when absent.
    fn try_read(&self, name: &str) -> Option<Raw<'_>>;
}

/// Raw input fed to instance construction.
#[derive(Clone)]
pub enum Raw<'a> {
    /// A JSON value: mappings seed by key, leaves pass through unchanged
    Value(&'a Value),
    /// A duck-typed source probed per declared attribute
    Source(&'a dyn AttributeSource),
    /// An already-materialized sequence of raw elements
    List(Vec<Raw<'a>>),
}

impl Raw<'_> {
    /// Returns the shape name for error messages.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Raw::Value(value) => json_shape_name(value),
            Raw::Source(_) => "object source",
            Raw::List(_) => "list",
        }
    }
}

impl<'a> From<&'a Value> for Raw<'a> {
    fn from(value: &'a Value) -> Self {
        Raw::Value(value)
    }
}

impl fmt::Debug for Raw<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Raw::Value(value) => write!(f, "Raw::Value({})", value),
            Raw::Source(_) => write!(f, "Raw::Source(..)"),
            Raw::List(items) => write!(f, "Raw::List(len={})", items.len()),
        }
    }
}

/// Returns the shape name of a JSON value for error messages.
pub(crate) fn json_shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_shape_names() {
        assert_eq!(json_shape_name(&json!(null)), "null");
        assert_eq!(json_shape_name(&json!(true)), "bool");
        assert_eq!(json_shape_name(&json!(22)), "int");
        assert_eq!(json_shape_name(&json!(22.5)), "float");
        assert_eq!(json_shape_name(&json!("YES")), "string");
        assert_eq!(json_shape_name(&json!([1, 2])), "list");
        assert_eq!(json_shape_name(&json!({})), "mapping");
    }

    #[test]
    fn test_raw_shape_names() {
        let value = json!("YES");
        assert_eq!(Raw::Value(&value).shape_name(), "string");
        assert_eq!(Raw::List(vec![]).shape_name(), "list");
    }
}
