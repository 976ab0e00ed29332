use indexmap::IndexMap;
use serde_json::Value;

/// Insertion-ordered mapping of tag names to their raw values.
pub type TagMap = IndexMap<String, RawValue>;

/// A tag value as handed back by a tag-tree decoder, before any formatting.
///
/// Decoders produce every shape here: plain scalars, multi-valued tags as
/// [`RawValue::Sequence`], UNDEFINED payloads as [`RawValue::Bytes`] and grouped
/// values (rationals, coordinates) as [`RawValue::Struct`].
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Text(String),
    Number(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    Sequence(Vec<RawValue>),
    Struct(TagMap),
}

impl RawValue {
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    pub fn as_struct(&self) -> Option<&TagMap> {
        match self {
            RawValue::Struct(map) => Some(map),
            _ => None,
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<u32> for RawValue {
    fn from(n: u32) -> Self {
        RawValue::Number(f64::from(n))
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<Vec<RawValue>> for RawValue {
    fn from(items: Vec<RawValue>) -> Self {
        RawValue::Sequence(items)
    }
}

impl From<TagMap> for RawValue {
    fn from(map: TagMap) -> Self {
        RawValue::Struct(map)
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RawValue::Null,
            Value::Bool(b) => RawValue::Bool(b),
            Value::Number(n) => RawValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => RawValue::Text(s),
            Value::Array(items) => {
                RawValue::Sequence(items.into_iter().map(RawValue::from).collect())
            }
            Value::Object(map) => match node_buffer_bytes(&map) {
                Some(bytes) => RawValue::Bytes(bytes),
                None => RawValue::Struct(
                    map.into_iter()
                        .map(|(k, v)| (k, RawValue::from(v)))
                        .collect(),
                ),
            },
        }
    }
}

/// Recognizes the JSON form of a Node.js buffer: `{"type": "Buffer", "data": [..]}`.
fn node_buffer_bytes(map: &serde_json::Map<String, Value>) -> Option<Vec<u8>> {
    if map.len() != 2 || map.get("type").and_then(Value::as_str) != Some("Buffer") {
        return None;
    }
    map.get("data")?
        .as_array()?
        .iter()
        .map(|b| b.as_u64().and_then(|b| u8::try_from(b).ok()))
        .collect()
}
