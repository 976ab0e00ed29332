//! Reads a JPEG, prints its metadata tables and the JSON dump.
//!
//! `cargo run --example read_metadata -- path/to/photo.jpg`
use exif_view::view::sections;
use exif_view::{extract, FormattedMetadata, ImageProperties, MetadataError};
use std::io::Cursor;
use std::path::Path;

const IMAGE_PATH: &str = "data/image.jpg";

fn main() -> Result<(), MetadataError> {
    let arg = std::env::args().nth(1);
    let path = Path::new(arg.as_deref().unwrap_or(IMAGE_PATH));
    let bytes = std::fs::read(path)?;

    // Raster facts come from the image decoder, not from this crate.
    let reader = image::ImageReader::new(Cursor::new(&bytes)).with_guessed_format()?;
    let format = reader
        .format()
        .and_then(|f| f.extensions_str().first().copied())
        .map(str::to_string);
    let (width, height) = match reader.into_dimensions() {
        Ok((w, h)) => (Some(w), Some(h)),
        Err(_) => (None, None),
    };
    let properties = ImageProperties {
        format,
        width,
        height,
    };

    let raw_exif = exif::get_exif_attr_from_jpeg(&mut Cursor::new(&bytes)).ok();

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let metadata = extract(&file_name, bytes.len() as u64, &properties, raw_exif.as_deref());

    for section in sections(&metadata) {
        println!("--- {} ---", section.title);
        for (label, value) in &section.entries {
            println!("{:<32} {}", label, value);
        }
    }
    if !metadata.has_tags() {
        println!("No EXIF data found.");
    }

    println!("\n--- Data (JSON) ---");
    println!("{}", FormattedMetadata::new(&metadata).to_json_pretty()?);
    Ok(())
}
