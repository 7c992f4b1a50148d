//! Conversion between open-ended JSON payloads and `google.protobuf.Struct`.
//!
//! SLSA v0.2 leaves `invocation.parameters`, `invocation.environment` and
//! `buildConfig` schema-free. They arrive as [`serde_json::Value`] and are
//! stored in Grafeas as [`Struct`], which can only hold a JSON object at the
//! top level and doubles for every number.
//!
//! ## Examples
//!
//! ```
//! use slsa_grafeas::in_toto::value::to_proto_struct;
//! use serde_json::json;
//!
//! let parameters = to_proto_struct(Some(json!({"ref": "main", "depth": 1}))).unwrap();
//! assert_eq!(parameters.unwrap().fields.len(), 2);
//!
//! // An absent payload stays absent instead of becoming `{}`
//! assert!(to_proto_struct(None).unwrap().is_none());
//! ```

use protobuf::well_known_types::struct_::{ListValue, NullValue, Struct, Value, value::Kind};
use serde_json::{Map, Number, Value as JsonValue};
use thiserror::Error;

/// Integers above this magnitude lose precision when stored as a double.
const MAX_EXACT_INTEGER: u64 = 1 << 53;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("expected a JSON object, found {shape}")]
    NotAnObject { shape: &'static str },

    #[error("number {value} at {path} cannot be represented exactly as a double")]
    InexactNumber { path: String, value: String },
}

impl ValueError {
    /// Shape of the value that could not be converted.
    pub fn shape(&self) -> &'static str {
        match self {
            ValueError::NotAnObject { shape } => shape,
            ValueError::InexactNumber { .. } => "number",
        }
    }
}

/// Names the JSON shape of a value, as used in error messages.
pub fn shape_of(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// Converts an optional JSON object into a protobuf `Struct`.
///
/// `None` maps to `None`, so a field that was never set stays distinguishable
/// from one set to `{}`.
///
/// # Errors
///
/// Returns [`ValueError::NotAnObject`] when the top-level value is present but
/// not an object, and [`ValueError::InexactNumber`] when a nested integer is
/// too large to survive the conversion to a double.
pub fn to_proto_struct(input: Option<JsonValue>) -> Result<Option<Struct>, ValueError> {
    match input {
        None => Ok(None),
        Some(JsonValue::Object(map)) => object_to_struct(map, "").map(Some),
        Some(other) => Err(ValueError::NotAnObject {
            shape: shape_of(&other),
        }),
    }
}

/// Converts any JSON value into a protobuf `Value`.
pub fn to_proto_value(input: JsonValue) -> Result<Value, ValueError> {
    json_to_value(input, "")
}

/// Renders a protobuf `Struct` back into JSON.
///
/// Whole numbers within the exactly representable range come back as JSON
/// integers; `NaN` and infinities, which JSON cannot express, become `null`.
pub fn from_proto_struct(input: &Struct) -> JsonValue {
    let map = input
        .fields
        .iter()
        .map(|(key, value)| (key.clone(), value_to_json(value)))
        .collect::<Map<String, JsonValue>>();

    JsonValue::Object(map)
}

fn object_to_struct(map: Map<String, JsonValue>, path: &str) -> Result<Struct, ValueError> {
    let mut result = Struct::new();
    for (key, value) in map {
        let child_path = format!("{}/{}", path, escape_pointer_token(&key));
        let converted = json_to_value(value, &child_path)?;
        result.fields.insert(key, converted);
    }

    Ok(result)
}

fn json_to_value(input: JsonValue, path: &str) -> Result<Value, ValueError> {
    let mut value = Value::new();
    match input {
        JsonValue::Null => value.set_null_value(NullValue::NULL_VALUE),
        JsonValue::Bool(b) => value.set_bool_value(b),
        JsonValue::Number(n) => value.set_number_value(number_to_f64(&n, path)?),
        JsonValue::String(s) => value.set_string_value(s),
        JsonValue::Array(items) => {
            let mut list = ListValue::new();
            for (index, item) in items.into_iter().enumerate() {
                let child_path = format!("{}/{}", path, index);
                list.values.push(json_to_value(item, &child_path)?);
            }
            value.set_list_value(list);
        }
        JsonValue::Object(map) => value.set_struct_value(object_to_struct(map, path)?),
    }

    Ok(value)
}

fn number_to_f64(n: &Number, path: &str) -> Result<f64, ValueError> {
    let inexact = || ValueError::InexactNumber {
        path: if path.is_empty() { "/".to_string() } else { path.to_string() },
        value: n.to_string(),
    };

    if let Some(i) = n.as_i64() {
        if i.unsigned_abs() > MAX_EXACT_INTEGER {
            return Err(inexact());
        }
        return Ok(i as f64);
    }

    if let Some(u) = n.as_u64() {
        if u > MAX_EXACT_INTEGER {
            return Err(inexact());
        }
        return Ok(u as f64);
    }

    n.as_f64().ok_or_else(inexact)
}

fn value_to_json(value: &Value) -> JsonValue {
    match &value.kind {
        None | Some(Kind::NullValue(_)) => JsonValue::Null,
        Some(Kind::BoolValue(b)) => JsonValue::Bool(*b),
        Some(Kind::NumberValue(f)) => number_to_json(*f),
        Some(Kind::StringValue(s)) => JsonValue::String(s.clone()),
        Some(Kind::ListValue(list)) => {
            JsonValue::Array(list.values.iter().map(value_to_json).collect())
        }
        Some(Kind::StructValue(s)) => from_proto_struct(s),
        // kinds added to google.protobuf.Value after this was written
        Some(_) => JsonValue::Null,
    }
}

fn number_to_json(f: f64) -> JsonValue {
    if f.fract() == 0.0 && f.abs() <= MAX_EXACT_INTEGER as f64 {
        return JsonValue::from(f as i64);
    }

    Number::from_f64(f).map_or(JsonValue::Null, JsonValue::Number)
}

// RFC 6901
fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}
