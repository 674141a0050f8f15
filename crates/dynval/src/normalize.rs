//! Recursive conversion of a parsed JSON tree into [`DynamicValue`].
//!
//! Conversion is total: every node maps to exactly one variant and the walk
//! never fails. Numbers take the narrowest width that holds them; strings are
//! checked against date-time grammars before being kept verbatim.

use chrono::{DateTime, NaiveDateTime};
use serde_json::Value;

use crate::value::{DynamicValue, Map};

/// Offset-aware grammars tried after RFC 3339 (offsets without a colon).
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M:%S%z"];

/// Offset-less grammars. Trailing offset text makes these fail, so an
/// offset-aware string can never land here with its offset dropped.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Convert one parsed tree node into its narrowest dynamic representation.
///
/// The node is consumed; element order and object key order carry over
/// unchanged, and duplicate object keys resolve to the last-seen value.
pub fn normalize(node: Value) -> DynamicValue {
    match node {
        Value::Null => DynamicValue::Null,
        Value::Bool(b) => DynamicValue::Bool(b),
        Value::Number(n) => normalize_number(&n),
        Value::String(s) => normalize_string(s),
        Value::Array(items) => DynamicValue::Array(items.into_iter().map(normalize).collect()),
        Value::Object(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (key, child) in entries {
                map.insert(key, normalize(child));
            }
            DynamicValue::Map(map)
        }
    }
}

fn normalize_number(n: &serde_json::Number) -> DynamicValue {
    if let Some(i) = n.as_i64() {
        return narrow_i64(i);
    }
    if let Some(f) = n.as_f64() {
        return DynamicValue::Float64(f);
    }
    // Fits no supported width; dropped rather than surfaced.
    DynamicValue::Null
}

pub(crate) fn narrow_i64(i: i64) -> DynamicValue {
    match i32::try_from(i) {
        Ok(small) => DynamicValue::Int32(small),
        Err(_) => DynamicValue::Int64(i),
    }
}

pub(crate) fn narrow_u64(u: u64) -> DynamicValue {
    match i64::try_from(u) {
        Ok(i) => narrow_i64(i),
        Err(_) => DynamicValue::Float64(u as f64),
    }
}

fn normalize_string(s: String) -> DynamicValue {
    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return DynamicValue::DateTimeOffset(dt);
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&s, fmt) {
            return DynamicValue::DateTimeOffset(dt);
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&s, fmt) {
            return DynamicValue::DateTime(dt);
        }
    }
    DynamicValue::String(s)
}
