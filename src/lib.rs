//! # exif-view
//!
//! Extracts embedded image metadata (file facts, EXIF and GPS tags) and turns
//! it into stable, human readable strings for display.
//!
//! The image itself is decoded elsewhere: callers pass in the file name, its
//! size in bytes, the format and dimensions reported by their decoder and the
//! raw EXIF payload, if any.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use exif_view::{extract, render_html, ImageProperties, MetadataError, ViewSettings};
//!
//! fn main() -> Result<(), MetadataError> {
//!     let bytes = std::fs::read("path/to/photo.jpg")?;
//!     let properties = ImageProperties {
//!         format: Some("jpeg".to_string()),
//!         width: Some(4000),
//!         height: Some(3000),
//!     };
//!     // The EXIF block, e.g. taken from the JPEG APP1 segment.
//!     let raw_exif: Option<&[u8]> = None;
//!
//!     // Never fails: undecodable EXIF is logged and left out.
//!     let metadata = extract("photo.jpg", bytes.len() as u64, &properties, raw_exif);
//!
//!     let html = render_html(&metadata, "file:///path/to/photo.jpg", &ViewSettings::default())?;
//!     println!("{}", html);
//!     Ok(())
//! }
//! ```
//!
//! ## Formatting single tags
//!
//! ```
//! use exif_view::format::{format_key, stringify_value};
//! use exif_view::RawValue;
//!
//! assert_eq!(format_key("GPSAltitude"), "Altitude");
//!
//! let components = RawValue::Bytes(vec![1, 2, 3]);
//! assert_eq!(stringify_value("Components Configuration", &components), "Y, Cb, Cr");
//! ```

mod config;
mod error;
mod metadata;
mod raw_value;
mod utils;

pub mod format;
pub mod parse;
pub mod view;

pub use config::ViewSettings;
pub use error::MetadataError;
pub use metadata::{
    extract, extract_with, normalize, FileInfo, ImageProperties, Metadata, EXIF_SECTIONS,
    GPS_SECTIONS,
};
pub use parse::{JsonDecoder, TagTree, TagTreeDecoder, TiffDecoder};
pub use raw_value::{RawValue, TagMap};
pub use utils::format_file_size;
pub use view::{render_html, FormattedMetadata, Section};
