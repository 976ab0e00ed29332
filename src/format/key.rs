use regex::Regex;
use std::sync::LazyLock;

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid camel case pattern"));
static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("valid acronym pattern"));
static DIGIT_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z])([0-9]+)").expect("valid digit run pattern"));

/// Turns a raw tag name into a display label.
///
/// The rules run in a fixed order, each one on the output of the previous:
///
/// 1. a leading `GPS` is dropped (`GPSLatitudeRef` → `LatitudeRef`)
/// 2. camel case boundaries get a space (`aB` → `a B`)
/// 3. underscores become spaces
/// 4. an upper case run is split from a following capitalized word
/// 5. a letter is split from a following run of digits (`ISO100` → `ISO 100`)
/// 6. the first character is upper cased
///
/// ```
/// use exif_view::format::format_key;
///
/// assert_eq!(format_key("DateTimeOriginal"), "Date Time Original");
/// assert_eq!(format_key("GPSLatitudeRef"), "Latitude Ref");
/// ```
pub fn format_key(raw_key: &str) -> String {
    let key = raw_key.strip_prefix("GPS").unwrap_or(raw_key);

    let label = CAMEL_BOUNDARY.replace_all(key, "$1 $2");
    let label = label.replace('_', " ");
    let label = ACRONYM_BOUNDARY.replace_all(&label, "$1 $2");
    let label = DIGIT_BOUNDARY.replace_all(&label, "$1 $2");

    capitalize_first(&label)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
