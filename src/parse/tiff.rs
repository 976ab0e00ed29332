use super::{TagTree, TagTreeDecoder};
use crate::error::MetadataError;
use crate::raw_value::{RawValue, TagMap};
use exif::{Context, Field, In, Reader, Rational, SRational, Value};

const APP1_EXIF_HEADER: &[u8] = b"Exif\0\0";

/// Decodes binary EXIF (a TIFF structure) with `kamadak-exif`.
///
/// The payload may start either with the TIFF byte order mark or with the
/// `Exif\0\0` header that precedes it in JPEG APP1 segments.
///
/// Fields of the primary image are grouped by tag context into the `Image`,
/// `Photo`, `GPSInfo` and `Interop` sections. Every thumbnail field goes to
/// `1st`; further IFDs found in some RAW formats land in `IFD<n>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TiffDecoder;

impl TiffDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl TagTreeDecoder for TiffDecoder {
    fn decode(&self, payload: &[u8]) -> Result<TagTree, MetadataError> {
        let tiff = payload.strip_prefix(APP1_EXIF_HEADER).unwrap_or(payload);
        let exif = Reader::new().read_raw(tiff.to_vec())?;

        let mut tree = TagTree::new();
        for field in exif.fields() {
            let section = tree
                .entry(section_name(field))
                .or_insert_with(|| RawValue::Struct(TagMap::new()));
            if let RawValue::Struct(tags) = section {
                tags.insert(field.tag.to_string(), convert_value(&field.value));
            }
        }
        log::debug!(
            "Decoded {} EXIF fields into {} sections",
            exif.fields().count(),
            tree.len()
        );
        Ok(tree)
    }
}

fn section_name(field: &Field) -> String {
    match field.ifd_num {
        In::PRIMARY => match field.tag.context() {
            Context::Tiff => "Image",
            Context::Exif => "Photo",
            Context::Gps => "GPSInfo",
            Context::Interop => "Interop",
            _ => "Image",
        }
        .to_string(),
        In::THUMBNAIL => "1st".to_string(),
        In(n) => format!("IFD{}", n),
    }
}

fn convert_value(value: &Value) -> RawValue {
    match value {
        Value::Byte(v) => collapse(v.iter().map(|&n| RawValue::Number(f64::from(n)))),
        Value::SByte(v) => collapse(v.iter().map(|&n| RawValue::Number(f64::from(n)))),
        Value::Short(v) => collapse(v.iter().map(|&n| RawValue::Number(f64::from(n)))),
        Value::SShort(v) => collapse(v.iter().map(|&n| RawValue::Number(f64::from(n)))),
        Value::Long(v) => collapse(v.iter().map(|&n| RawValue::Number(f64::from(n)))),
        Value::SLong(v) => collapse(v.iter().map(|&n| RawValue::Number(f64::from(n)))),
        Value::Float(v) => collapse(v.iter().map(|&n| RawValue::Number(f64::from(n)))),
        Value::Double(v) => collapse(v.iter().map(|&n| RawValue::Number(n))),
        Value::Rational(v) => collapse(v.iter().map(|r| RawValue::Number(Rational::to_f64(r)))),
        Value::SRational(v) => {
            collapse(v.iter().map(|r| RawValue::Number(SRational::to_f64(r))))
        }
        Value::Ascii(v) => collapse(
            v.iter()
                .map(|s| RawValue::Text(String::from_utf8_lossy(s).into_owned())),
        ),
        Value::Undefined(bytes, _) => RawValue::Bytes(bytes.clone()),
        #[allow(unreachable_patterns)]
        _ => RawValue::Null,
    }
}

/// Single values stand alone, several become a sequence, none is null.
fn collapse(values: impl Iterator<Item = RawValue>) -> RawValue {
    let mut values: Vec<RawValue> = values.collect();
    match values.len() {
        0 => RawValue::Null,
        1 => values.remove(0),
        _ => RawValue::Sequence(values),
    }
}
