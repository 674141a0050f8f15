use chrono::{DateTime, FixedOffset, NaiveDateTime};

/// A decoded JSON value in its narrowest native representation.
///
/// Produced by [`normalize`](crate::normalize::normalize) and by the
/// `Deserialize` impl; every JSON node maps to exactly one variant.
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicValue {
    Null,
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    String(String),
    /// Date-time without UTC offset information.
    DateTime(NaiveDateTime),
    /// Date-time carrying an explicit UTC offset.
    DateTimeOffset(DateTime<FixedOffset>),
    Array(Vec<DynamicValue>),
    Map(Map),
}

impl DynamicValue {
    pub fn is_scalar(&self) -> bool {
        !matches!(self, DynamicValue::Array(_) | DynamicValue::Map(_))
    }

    /// Short kind label used by diagnostic output.
    pub fn type_name(&self) -> &'static str {
        match self {
            DynamicValue::Null => "null",
            DynamicValue::Bool(_) => "bool",
            DynamicValue::Int32(_) => "int32",
            DynamicValue::Int64(_) => "int64",
            DynamicValue::Float64(_) => "float64",
            DynamicValue::String(_) => "string",
            DynamicValue::DateTime(_) => "datetime",
            DynamicValue::DateTimeOffset(_) => "datetime-offset",
            DynamicValue::Array(_) => "array",
            DynamicValue::Map(_) => "map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DynamicValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[DynamicValue]> {
        match self {
            DynamicValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            DynamicValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl core::fmt::Display for DynamicValue {
    /// Lexical form of the value. Scalars render their content (floats in
    /// shortest round-trip form, date-times in ISO 8601); composites render
    /// as `array(n)` / `map(n)`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DynamicValue::Null => f.write_str("null"),
            DynamicValue::Bool(b) => write!(f, "{}", b),
            DynamicValue::Int32(i) => write!(f, "{}", i),
            DynamicValue::Int64(i) => write!(f, "{}", i),
            DynamicValue::Float64(x) => f.write_str(ryu::Buffer::new().format(*x)),
            DynamicValue::String(s) => f.write_str(s),
            DynamicValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
            DynamicValue::DateTimeOffset(dt) => f.write_str(&dt.to_rfc3339()),
            DynamicValue::Array(items) => write!(f, "array({})", items.len()),
            DynamicValue::Map(map) => write!(f, "map({})", map.len()),
        }
    }
}

/// Insertion-ordered `String -> DynamicValue` mapping.
///
/// Duplicate keys resolve to the last-written value; the key keeps the
/// position of its first insertion.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Map {
    entries: Vec<(String, DynamicValue)>,
}

impl Map {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert, returning the previous value when `key` was already present.
    pub fn insert(&mut self, key: String, value: DynamicValue) -> Option<DynamicValue> {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k.as_str() == key) {
            return Some(core::mem::replace(&mut entry.1, value));
        }
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &str) -> Option<&DynamicValue> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DynamicValue)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl FromIterator<(String, DynamicValue)> for Map {
    fn from_iter<I: IntoIterator<Item = (String, DynamicValue)>>(iter: I) -> Self {
        let mut map = Map::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl IntoIterator for Map {
    type Item = (String, DynamicValue);
    type IntoIter = std::vec::IntoIter<(String, DynamicValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = &'a (String, DynamicValue);
    type IntoIter = core::slice::Iter<'a, (String, DynamicValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
