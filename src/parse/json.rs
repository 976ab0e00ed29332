use super::{TagTree, TagTreeDecoder};
use crate::error::MetadataError;
use crate::raw_value::RawValue;
use serde_json::Value;

/// Decodes a JSON tag tree such as the output of JavaScript EXIF readers:
///
/// ```json
/// { "Image": { "Make": "Canon" }, "GPSInfo": { "GPSAltitude": 12.5 } }
/// ```
///
/// Node.js buffers serialized as `{"type": "Buffer", "data": [..]}` come back
/// as [`RawValue::Bytes`].
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonDecoder;

impl JsonDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl TagTreeDecoder for JsonDecoder {
    fn decode(&self, payload: &[u8]) -> Result<TagTree, MetadataError> {
        let mut deserializer = serde_json::Deserializer::from_slice(payload);
        let root: Value = serde_path_to_error::deserialize(&mut deserializer)?;
        deserializer.end()?;

        match root {
            Value::Object(sections) => Ok(sections
                .into_iter()
                .map(|(name, section)| (name, RawValue::from(section)))
                .collect()),
            other => Err(MetadataError::UnexpectedFormat {
                expected: "an object of sections",
                found: json_kind(&other),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_decode_sections() -> Result<(), MetadataError> {
        let payload = br#"{
            "Image": {"Make": "Canon", "XResolution": 72},
            "Photo": {"ComponentsConfiguration": {"type": "Buffer", "data": [1, 2, 3, 0]}},
            "GPSInfo": {"GPSLatitude": [52, 22, 14.5]}
        }"#;
        let tree = JsonDecoder::new().decode(payload)?;

        let names: Vec<&str> = tree.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Image", "Photo", "GPSInfo"]);

        let photo = tree["Photo"].as_struct().unwrap();
        assert_eq!(
            photo["ComponentsConfiguration"],
            RawValue::Bytes(vec![1, 2, 3, 0])
        );
        let image = tree["Image"].as_struct().unwrap();
        assert_eq!(image["XResolution"], RawValue::Number(72.0));
        Ok(())
    }

    #[test]
    fn test_non_object_root() {
        let result = JsonDecoder::new().decode(b"[1, 2]");
        assert_matches!(
            result,
            Err(MetadataError::UnexpectedFormat {
                found: "an array",
                ..
            })
        );
    }

    #[test]
    fn test_malformed_json_reports_path() {
        let result = JsonDecoder::new().decode(br#"{"Image": {"Make": "Canon",}}"#);
        assert_matches!(result, Err(MetadataError::Deserialization { .. }));
    }

    #[test]
    fn test_trailing_data() {
        let result = JsonDecoder::new().decode(br#"{"Image": {}} {"#);
        assert_matches!(result, Err(MetadataError::Json(_)));
    }
}
