use crate::error::MetadataError;
use crate::parse::{TagTree, TagTreeDecoder, TiffDecoder};
use crate::raw_value::TagMap;
use crate::utils::format_file_size;
use serde::{Deserialize, Serialize};

/// Sections merged into [`Metadata::exif`], in merge order.
pub const EXIF_SECTIONS: [&str; 6] = ["0th", "Image", "Exif", "Photo", "Interop", "1st"];

/// Sections merged into [`Metadata::gps`], in merge order.
pub const GPS_SECTIONS: [&str; 2] = ["GPS", "GPSInfo"];

/// Raster facts reported by the image decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageProperties {
    pub format: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Basic facts about the image file itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    pub format: Option<String>,
    /// Human readable size, e.g. `2.5 MB`.
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub height: Option<u32>,
}

impl FileInfo {
    pub fn new(file_name: &str, file_byte_length: u64, properties: &ImageProperties) -> Self {
        Self {
            name: file_name.to_string(),
            format: properties.format.clone(),
            size: format_file_size(file_byte_length),
            width: properties.width,
            height: properties.height,
        }
    }
}

/// Everything extracted from one image: file facts plus flattened EXIF and
/// GPS tags. `exif` and `gps` are `None` rather than empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    pub file: FileInfo,
    pub exif: Option<TagMap>,
    pub gps: Option<TagMap>,
}

impl Metadata {
    pub fn has_tags(&self) -> bool {
        self.exif.is_some() || self.gps.is_some()
    }
}

/// Builds [`Metadata`] for an image, decoding `raw_exif` as binary EXIF.
///
/// `file_name` is used verbatim; pass the base name. A payload that fails to
/// decode is logged and yields file-only metadata, so this never fails.
///
/// ```
/// use exif_view::{extract, ImageProperties};
///
/// let properties = ImageProperties {
///     format: Some("png".into()),
///     width: Some(640),
///     height: Some(480),
/// };
/// let metadata = extract("photo.png", 1500, &properties, None);
/// assert_eq!(metadata.file.size, "1.5 KB");
/// assert!(metadata.exif.is_none());
/// ```
pub fn extract(
    file_name: &str,
    file_byte_length: u64,
    properties: &ImageProperties,
    raw_exif: Option<&[u8]>,
) -> Metadata {
    extract_with(&TiffDecoder, file_name, file_byte_length, properties, raw_exif)
}

/// Same as [`extract`] with a caller supplied tag-tree decoder.
pub fn extract_with<D>(
    decoder: &D,
    file_name: &str,
    file_byte_length: u64,
    properties: &ImageProperties,
    raw_exif: Option<&[u8]>,
) -> Metadata
where
    D: TagTreeDecoder + ?Sized,
{
    let file = FileInfo::new(file_name, file_byte_length, properties);
    match raw_exif {
        None => Metadata {
            file,
            exif: None,
            gps: None,
        },
        Some(payload) => normalize(file, decoder.decode(payload)),
    }
}

/// Flattens a decoded tag tree into [`Metadata`].
///
/// A decode error is reported through `log` and leaves only `file` populated.
pub fn normalize(file: FileInfo, decoded: Result<TagTree, MetadataError>) -> Metadata {
    let tree = match decoded {
        Ok(tree) => tree,
        Err(err) => {
            log::warn!("Failed to parse EXIF data of {}: {}", file.name, err);
            return Metadata {
                file,
                exif: None,
                gps: None,
            };
        }
    };

    Metadata {
        exif: non_empty(merge_sections(&tree, &EXIF_SECTIONS)),
        gps: non_empty(merge_sections(&tree, &GPS_SECTIONS)),
        file,
    }
}

/// Merges the named sections in order; later sections override earlier ones
/// and null values are dropped.
fn merge_sections(tree: &TagTree, sections: &[&str]) -> TagMap {
    let mut merged = TagMap::new();
    for &name in sections {
        let Some(section) = tree.get(name) else {
            continue;
        };
        let Some(tags) = section.as_struct() else {
            log::debug!("Skipping EXIF section {} that is not a mapping", name);
            continue;
        };
        for (key, value) in tags {
            if !value.is_null() {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    merged
}

fn non_empty(map: TagMap) -> Option<TagMap> {
    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::JsonDecoder;
    use crate::raw_value::RawValue;

    fn png_properties() -> ImageProperties {
        ImageProperties {
            format: Some("png".to_string()),
            width: Some(64),
            height: Some(32),
        }
    }

    fn tree_from_json(json: &str) -> TagTree {
        JsonDecoder::new().decode(json.as_bytes()).unwrap()
    }

    #[test]
    fn test_file_only_without_payload() {
        let metadata = extract("photo.png", 500, &png_properties(), None);
        assert_eq!(
            metadata.file,
            FileInfo {
                name: "photo.png".to_string(),
                format: Some("png".to_string()),
                size: "500 B".to_string(),
                width: Some(64),
                height: Some(32),
            }
        );
        assert!(metadata.exif.is_none());
        assert!(metadata.gps.is_none());
        assert!(!metadata.has_tags());
    }

    #[test]
    fn test_missing_dimensions_stay_missing() {
        let properties = ImageProperties {
            format: None,
            width: Some(10),
            height: None,
        };
        let metadata = extract("x", 2_500_000, &properties, None);
        assert_eq!(metadata.file.format, None);
        assert_eq!(metadata.file.width, Some(10));
        assert_eq!(metadata.file.height, None);
        assert_eq!(metadata.file.size, "2.5 MB");
    }

    #[test]
    fn test_decode_failure_degrades_to_file_only() {
        let metadata = extract("broken.jpg", 1500, &png_properties(), Some(&b"garbage"[..]));
        assert_eq!(metadata.file.size, "1.5 KB");
        assert!(metadata.exif.is_none());
        assert!(metadata.gps.is_none());
    }

    #[test]
    fn test_sections_are_merged_in_order() {
        let tree = tree_from_json(
            r#"{
                "Photo": {"ExposureTime": 0.01, "Shared": "photo"},
                "Image": {"Make": "Canon", "Shared": "image"},
                "Exif": {"Shared": "exif", "FNumber": 2.8},
                "GPSInfo": {"GPSAltitude": 12.5},
                "GPS": {"GPSAltitude": 3, "GPSLatitudeRef": "N"}
            }"#,
        );
        let metadata = normalize(FileInfo::new("a.jpg", 1, &ImageProperties::default()), Ok(tree));

        let exif = metadata.exif.unwrap();
        assert_eq!(exif["Shared"], RawValue::from("photo"));
        let keys: Vec<&str> = exif.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Make", "Shared", "FNumber", "ExposureTime"]);

        let gps = metadata.gps.unwrap();
        assert_eq!(gps["GPSAltitude"], RawValue::Number(12.5));
        assert_eq!(gps["GPSLatitudeRef"], RawValue::from("N"));
    }

    #[test]
    fn test_non_mapping_and_unknown_sections_are_skipped() {
        let tree = tree_from_json(
            r#"{
                "Image": "not a section",
                "Photo": [1, 2],
                "Thumbnail": {"Orientation": 1},
                "GPSInfo": {}
            }"#,
        );
        let metadata = normalize(FileInfo::new("a.jpg", 1, &ImageProperties::default()), Ok(tree));
        assert!(metadata.exif.is_none());
        assert!(metadata.gps.is_none());
    }

    #[test]
    fn test_null_tags_are_not_inserted() {
        let tree = tree_from_json(
            r#"{"Image": {"Artist": null}, "GPSInfo": {"GPSDOP": null, "GPSSpeed": 0}}"#,
        );
        let metadata = normalize(FileInfo::new("a.jpg", 1, &ImageProperties::default()), Ok(tree));
        assert!(metadata.exif.is_none());

        let gps = metadata.gps.unwrap();
        assert_eq!(gps.len(), 1);
        assert_eq!(gps["GPSSpeed"], RawValue::Number(0.0));
    }

    #[test]
    fn test_extract_with_json_decoder() {
        let payload = br#"{"Image": {"Software": "GIMP"}}"#;
        let metadata = extract_with(&JsonDecoder, "a.webp", 1, &png_properties(), Some(&payload[..]));
        assert_eq!(
            metadata.exif.unwrap()["Software"],
            RawValue::from("GIMP")
        );
        assert!(metadata.gps.is_none());
    }
}
