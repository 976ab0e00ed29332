//! Decoders that turn a raw EXIF payload into a [`TagTree`].
//!
//! Two payload flavours are supported:
//!
//! - [`TiffDecoder`] reads binary EXIF blocks, the TIFF structure embedded in
//!   JPEG APP1 segments, PNG `eXIf` chunks and WebP `EXIF` chunks.
//! - [`JsonDecoder`] reads a tag tree that was already decoded elsewhere and
//!   serialized as JSON, keyed by section name.

mod json;
mod tiff;

pub use json::JsonDecoder;
pub use tiff::TiffDecoder;

use crate::error::MetadataError;
use crate::raw_value::RawValue;
use indexmap::IndexMap;

/// Tag sections keyed by IFD name (`"Image"`, `"Photo"`, `"GPSInfo"`, ...).
///
/// A section is normally a [`RawValue::Struct`]; anything else is ignored when
/// the sections are merged.
pub type TagTree = IndexMap<String, RawValue>;

/// Decodes a raw EXIF payload into its tag sections.
pub trait TagTreeDecoder {
    fn decode(&self, payload: &[u8]) -> Result<TagTree, MetadataError>;
}
