const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formats a byte count with decimal (base 1000) units.
///
/// Bytes are printed as a whole number, every larger unit with exactly one
/// decimal digit: `500 B`, `1.5 KB`, `2.5 MB`.
pub fn format_file_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1000.0 && unit < SIZE_UNITS.len() - 1 {
        size /= 1000.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, SIZE_UNITS[0])
    } else {
        format!("{} {}", one_decimal(size), SIZE_UNITS[unit])
    }
}

/// Rounds the stored binary value to one decimal. Exact halves (`x.25`,
/// `x.75`) round up.
fn one_decimal(value: f64) -> String {
    let scaled = value * 10.0;
    if (value * 4.0).fract() == 0.0 && scaled.fract() == 0.5 {
        let tenths = (scaled + 0.5) as u64;
        format!("{}.{}", tenths / 10, tenths % 10)
    } else {
        format!("{:.1}", value)
    }
}
