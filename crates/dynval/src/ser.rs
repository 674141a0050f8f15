//! serde::Serializer integration for [`DynamicValue`]: the standard encoder
//! shape the converter registry falls back to.
//!
//! Date-time variants go through chrono's serde impls, so they come out as
//! ISO 8601 / RFC 3339 strings.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::value::DynamicValue;

impl Serialize for DynamicValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DynamicValue::Null => serializer.serialize_unit(),
            DynamicValue::Bool(b) => serializer.serialize_bool(*b),
            DynamicValue::Int32(i) => serializer.serialize_i32(*i),
            DynamicValue::Int64(i) => serializer.serialize_i64(*i),
            DynamicValue::Float64(x) => serializer.serialize_f64(*x),
            DynamicValue::String(s) => serializer.serialize_str(s),
            DynamicValue::DateTime(dt) => dt.serialize(serializer),
            DynamicValue::DateTimeOffset(dt) => dt.serialize(serializer),
            DynamicValue::Array(items) => serializer.collect_seq(items),
            DynamicValue::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map.iter() {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}
