//! The property-reflection bridge: typed values ⇄ name→value mappings.
//!
//! serde is the reflection capability here. A content value is reflected to a
//! JSON value tree for flattening, and a folded mapping is handed back to
//! serde to construct the target type. `serde_json` is built with
//! `preserve_order`, so the mapping iterates in struct declaration order —
//! the flattener depends on that for stable wire output.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{DecodeError, EncodeError};

/// An ordered name→value mapping of one object's properties.
pub type Properties = serde_json::Map<String, Value>;

/// Reflect a value to its JSON value tree.
pub(crate) fn reflect<T: Serialize>(value: &T) -> Result<Value, EncodeError> {
    serde_json::to_value(value).map_err(|e| EncodeError::Serialize(e.to_string()))
}

/// Reflect a value expected to be an object into its property mapping.
pub fn to_properties<T: Serialize>(value: &T) -> Result<Properties, EncodeError> {
    match reflect(value)? {
        Value::Object(map) => Ok(map),
        other => Err(EncodeError::Serialize(format!(
            "expected an object with named properties, got JSON {}",
            json_kind(&other)
        ))),
    }
}

/// Construct an instance of `T` from a folded property mapping.
///
/// Construction failures (missing required field, type mismatch) surface as
/// [`DecodeError::PropertyConstruction`], unchanged.
pub fn from_properties<T: DeserializeOwned>(properties: Properties) -> Result<T, DecodeError> {
    from_value(Value::Object(properties))
}

/// Construct an instance of `T` from any folded JSON value (object or
/// wrapped scalar).
pub(crate) fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, DecodeError> {
    serde_json::from_value(value).map_err(|e| DecodeError::PropertyConstruction(e.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Order {
        // Deliberately not alphabetical: ordering below must be declaration
        // order, not key order.
        total: u32,
        customer: String,
        open: bool,
    }

    #[test]
    fn properties_iterate_in_declaration_order() {
        let order = Order {
            total: 3,
            customer: "Ada".into(),
            open: true,
        };
        let props = to_properties(&order).unwrap();
        let names: Vec<&str> = props.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["total", "customer", "open"]);
    }

    #[test]
    fn scalar_is_not_an_object() {
        let err = to_properties(&42).unwrap_err();
        assert!(matches!(err, EncodeError::Serialize(_)));
    }

    #[test]
    fn from_properties_builds_the_instance() {
        let mut props = Properties::new();
        props.insert("total".into(), 3u32.into());
        props.insert("customer".into(), "Ada".into());
        props.insert("open".into(), true.into());
        let order: Order = from_properties(props).unwrap();
        assert_eq!(
            order,
            Order {
                total: 3,
                customer: "Ada".into(),
                open: true,
            }
        );
    }

    #[test]
    fn missing_required_field_is_a_construction_error() {
        let mut props = Properties::new();
        props.insert("total".into(), 3u32.into());
        let err = from_properties::<Order>(props).unwrap_err();
        assert!(matches!(err, DecodeError::PropertyConstruction(_)));
    }
}
