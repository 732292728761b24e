//! The recursive type descriptor a caller uses to describe the shape it
//! wants extracted, and the validation-with-coercion it drives.

use std::collections::BTreeMap;

use serde_json::{Number, Value};
use tracing::trace;

/// A recursive, immutable descriptor of the shape a decoded JSON value must
/// have. Constructed once and shared across `parse` calls.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// A JSON object. `required` drives which keys must be present;
    /// `properties` drives which present keys get recursively validated
    /// (and possibly coerced).
    Object {
        properties: BTreeMap<String, Schema>,
        required: Vec<String>,
    },
    /// A JSON array. `items`, when set, is applied to every element.
    Array { items: Option<Box<Schema>> },
    /// A JSON string.
    String,
    /// A JSON number (integer or floating point).
    Number,
    /// A JSON boolean.
    Boolean,
    /// JSON `null`.
    Null,
}

impl Schema {
    /// Build an object schema with no required fields.
    pub fn object(properties: impl IntoIterator<Item = (&'static str, Schema)>) -> Self {
        Schema::Object {
            properties: properties.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
            required: Vec::new(),
        }
    }

    /// Build an object schema with the given required fields.
    pub fn object_with_required(
        properties: impl IntoIterator<Item = (&'static str, Schema)>,
        required: impl IntoIterator<Item = &'static str>,
    ) -> Self {
        Schema::Object {
            properties: properties.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
            required: required.into_iter().map(str::to_string).collect(),
        }
    }

    /// Build an array schema whose elements all conform to `items`.
    pub fn array(items: Schema) -> Self {
        Schema::Array {
            items: Some(Box::new(items)),
        }
    }

    /// Build an array schema with no element constraint.
    pub fn array_any() -> Self {
        Schema::Array { items: None }
    }

    /// Validate (and, where trivially possible, coerce) `value` against this
    /// schema. Returns the accepted — possibly rewritten — value, or `None`
    /// if `value` is rejected.
    ///
    /// Rejection is a signal, not an error: per the parser's contract a
    /// rejected candidate is simply skipped in favor of the next one.
    pub fn validated(&self, value: Value) -> Option<Value> {
        match self {
            Schema::Object {
                properties,
                required,
            } => Self::validate_object(properties, required, value),
            Schema::Array { items } => Self::validate_array(items.as_deref(), value),
            Schema::String => Self::validate_scalar(value, ScalarKind::String),
            Schema::Number => Self::validate_scalar(value, ScalarKind::Number),
            Schema::Boolean => Self::validate_scalar(value, ScalarKind::Boolean),
            Schema::Null => Self::validate_scalar(value, ScalarKind::Null),
        }
    }

    fn validate_object(
        properties: &BTreeMap<String, Schema>,
        required: &[String],
        value: Value,
    ) -> Option<Value> {
        let mut value = value;
        if let Value::Array(arr) = value {
            if arr.is_empty() {
                trace!("object validation: empty array, rejecting");
                return None;
            }
            value = arr.into_iter().next().expect("checked non-empty");
        }

        let mut map = match value {
            Value::Object(map) => map,
            _ => {
                trace!("object validation: not an object after array-unwrap, rejecting");
                return None;
            }
        };

        if !required.is_empty() {
            if let Some(missing) = required.iter().find(|key| !map.contains_key(key.as_str())) {
                trace!(field = %missing, "object validation: missing required field, rejecting");
                return None;
            }
        } else if !properties.keys().any(|key| map.contains_key(key)) {
            trace!("object validation: no recognizable property present, rejecting");
            return None;
        }

        for (key, sub_schema) in properties {
            if let Some(child) = map.get(key).cloned() {
                match sub_schema.validated(child) {
                    Some(coerced) => {
                        map.insert(key.clone(), coerced);
                    }
                    None => {
                        trace!(field = %key, "object validation: sub-schema rejected field");
                        return None;
                    }
                }
            }
        }

        Some(Value::Object(map))
    }

    fn validate_array(items: Option<&Schema>, value: Value) -> Option<Value> {
        let candidate = match value {
            Value::Object(map) => {
                if map.is_empty() {
                    trace!("array validation: empty object has no value to unwrap, rejecting");
                    return None;
                }
                map.into_iter().next().expect("checked non-empty").1
            }
            other => other,
        };

        let arr = match candidate {
            Value::Array(arr) => arr,
            _ => {
                trace!("array validation: not an array after object-unwrap, rejecting");
                return None;
            }
        };

        if let Some(item_schema) = items {
            for item in &arr {
                if item_schema.validated(item.clone()).is_none() {
                    trace!("array validation: an element failed its item schema, rejecting");
                    return None;
                }
            }
        }

        Some(Value::Array(arr))
    }

    fn validate_scalar(value: Value, kind: ScalarKind) -> Option<Value> {
        match (kind, &value) {
            (ScalarKind::String, Value::String(_)) => Some(value),
            (ScalarKind::Number, Value::Number(_)) => Some(value),
            (ScalarKind::Boolean, Value::Bool(_)) => Some(value),
            (ScalarKind::Null, Value::Null) => Some(value),
            (ScalarKind::Number, Value::String(s)) => coerce_number(s),
            // Booleans and null accept no textual coercion; a string never
            // satisfies them.
            _ => {
                trace!(?kind, "scalar validation: type mismatch, rejecting");
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum ScalarKind {
    String,
    Number,
    Boolean,
    Null,
}

fn coerce_number(s: &str) -> Option<Value> {
    if s.contains('.') {
        let f: f64 = s.parse().ok()?;
        Number::from_f64(f).map(Value::Number)
    } else {
        let i: i64 = s.parse().ok()?;
        Some(Value::Number(Number::from(i)))
    }
}
