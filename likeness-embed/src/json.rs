// likeness-embed - JSON conversion
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Conversion between JSON documents and likeness values.
//!
//! | JSON | Value |
//! |------|-------|
//! | `null` | `Null` |
//! | `true` / `false` | `Bool` |
//! | integer that fits `i64` | `Int` |
//! | any other number | `Float` |
//! | string | `Text` |
//! | array | `Seq` |
//! | object | `Record` |
//!
//! Going back, sets become arrays, maps with text keys become objects (other
//! maps become arrays of `[key, value]` pairs), timestamps become RFC 3339
//! strings and boxes are transparent. Absent record fields are left out.
//! Callables, pending values and wildcards have no JSON form.

use chrono::SecondsFormat;
use likeness_core::{Error, Kind, Result, Value, Vector};
use serde_json::{Map, Number, Value as Json};

/// Convert a JSON document into a value.
pub fn from_json(json: &Json) -> Value {
    convert(json, None)
}

/// Convert a JSON document into a pattern: strings equal to `wildcard`
/// become [`Value::Any`] at any depth.
pub fn pattern_from_json(json: &Json, wildcard: &str) -> Value {
    convert(json, Some(wildcard))
}

/// Parse JSON text into a value.
pub fn parse_json(text: &str) -> Result<Value> {
    let json: Json = serde_json::from_str(text).map_err(Error::invalid_json)?;
    Ok(from_json(&json))
}

fn convert(json: &Json, wildcard: Option<&str>) -> Value {
    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Value::int(i),
            None => Value::float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Json::String(s) if wildcard == Some(s.as_str()) => Value::Any,
        Json::String(s) => Value::text(s.as_str()),
        Json::Array(items) => Value::seq(items.iter().map(|j| convert(j, wildcard)).collect()),
        Json::Object(fields) => Value::record(
            fields
                .iter()
                .map(|(k, v)| (k.as_str(), convert(v, wildcard))),
        ),
    }
}

/// Convert a value into a JSON document.
pub fn to_json(value: &Value) -> Result<Json> {
    Ok(match value {
        Value::Absent | Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Int(n) => Json::Number(Number::from(*n)),
        // Non-finite floats have no JSON number
        Value::Float(n) => Number::from_f64(*n).map_or(Json::Null, Json::Number),
        Value::Text(s) => Json::String(s.to_string()),
        Value::Seq(items) | Value::Set(items) => {
            Json::Array(items.iter().map(to_json).collect::<Result<_>>()?)
        }
        Value::Map(pairs) => map_to_json(pairs)?,
        Value::Timestamp(at) => Json::String(at.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        Value::Record(record) => {
            let mut object = Map::new();
            for (key, field) in record.iter() {
                if !matches!(field, Value::Absent) {
                    object.insert(key.to_string(), to_json(field)?);
                }
            }
            Json::Object(object)
        }
        Value::Boxed(inner) => to_json(inner)?,
        Value::Callable(_) | Value::Pending(_) | Value::Any => {
            return Err(Error::Unrepresentable {
                kind: value.kind(),
            });
        }
    })
}

fn map_to_json(pairs: &Vector<(Value, Value)>) -> Result<Json> {
    if pairs.iter().all(|(k, _)| k.kind() == Kind::Text) {
        let mut object = Map::new();
        for (key, value) in pairs.iter() {
            let key = key.as_text().unwrap_or_default().to_string();
            object.insert(key, to_json(value)?);
        }
        Ok(Json::Object(object))
    } else {
        let entries = pairs
            .iter()
            .map(|(k, v)| Ok(Json::Array(vec![to_json(k)?, to_json(v)?])))
            .collect::<Result<_>>()?;
        Ok(Json::Array(entries))
    }
}
