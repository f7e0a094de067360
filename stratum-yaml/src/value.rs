//! YAML to JSON normalization
//!
//! YAML allows keys of any type and carries a native timestamp type; the
//! JSON object model does neither. Parsed documents are walked variant by
//! variant: keys are coerced to strings, timestamp scalars to instants,
//! nested mappings and sequences recursively.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde_json::Value as JsonValue;
use serde_yaml::{Mapping, Value as YamlValue};
use stratum_config::{DecodeError, DecodeResult, JsonObject};

use crate::processor::FORMAT;

/// Parse one YAML document and normalize it into the JSON object model.
///
/// Only plain scalars, sequences and mappings are admitted; tagged values
/// are rejected rather than constructed. A document holding nothing but
/// comments parses to null and decodes to an empty object.
pub(crate) fn decode(input: &[u8]) -> DecodeResult<JsonObject> {
    let text = String::from_utf8_lossy(input);
    let document: YamlValue = serde_yaml::from_str(&text).map_err(|err| DecodeError::Parse {
        format: FORMAT,
        source: Box::new(err),
    })?;

    match document {
        YamlValue::Null => Ok(JsonObject::new()),
        YamlValue::Mapping(mapping) => jsonify(mapping),
        other => Err(DecodeError::Structure {
            format: FORMAT,
            message: format!("expected a top-level mapping, found {}", shape(&other)),
        }),
    }
}

fn jsonify(mapping: Mapping) -> DecodeResult<JsonObject> {
    let mut object = JsonObject::new();
    for (key, val) in mapping {
        object.insert(key_string(key)?, json_value(val)?);
    }
    Ok(object)
}

fn json_value(value: YamlValue) -> DecodeResult<JsonValue> {
    match value {
        YamlValue::Null => Ok(JsonValue::Null),
        YamlValue::Bool(b) => Ok(JsonValue::Bool(b)),
        YamlValue::Number(number) => Ok(json_number(number)),
        YamlValue::String(text) => Ok(match parse_timestamp(&text) {
            Some(instant) => {
                JsonValue::String(instant.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            None => JsonValue::String(text),
        }),
        YamlValue::Sequence(items) => Ok(JsonValue::Array(
            items
                .into_iter()
                .map(json_value)
                .collect::<DecodeResult<_>>()?,
        )),
        YamlValue::Mapping(mapping) => Ok(JsonValue::Object(jsonify(mapping)?)),
        YamlValue::Tagged(tagged) => Err(DecodeError::Structure {
            format: FORMAT,
            message: format!("unsupported tag {}", tagged.tag),
        }),
    }
}

fn key_string(key: YamlValue) -> DecodeResult<String> {
    match key {
        YamlValue::String(text) => Ok(text),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Number(number) => Ok(number.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        // sequence and mapping keys render as their compact JSON form
        other => Ok(json_value(other)?.to_string()),
    }
}

fn json_number(number: serde_yaml::Number) -> JsonValue {
    if let Some(n) = number.as_i64() {
        JsonValue::from(n)
    } else if let Some(n) = number.as_u64() {
        JsonValue::from(n)
    } else if let Some(n) = number.as_f64() {
        // .nan and the infinities have no JSON representation
        serde_json::Number::from_f64(n)
            .map(JsonValue::Number)
            .unwrap_or_else(|| JsonValue::String(number.to_string()))
    } else {
        JsonValue::String(number.to_string())
    }
}

/// Timestamp shapes recognized during normalization.
///
/// A bare `YYYY-MM-DD` date reads as midnight UTC of that day; a full
/// RFC 3339 date-time is converted to UTC. Instants render as RFC 3339
/// strings with a `Z` offset. Quoting is not visible after parsing, so a
/// quoted string of the same shape converts as well.
fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

fn shape(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "a boolean",
        YamlValue::Number(_) => "a number",
        YamlValue::String(_) => "a string",
        YamlValue::Sequence(_) => "a sequence",
        YamlValue::Mapping(_) => "a mapping",
        YamlValue::Tagged(_) => "a tagged value",
    }
}
