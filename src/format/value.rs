use super::format_key;
use crate::raw_value::RawValue;

/// Placeholder shown for byte payloads with no printable text.
pub const BINARY_DATA: &str = "[Binary Data]";

const COMPONENTS_CONFIGURATION: &str = "Components Configuration";
const COMPONENT_NAMES: [&str; 7] = ["", "Y", "Cb", "Cr", "R", "G", "B"];

/// Renders a raw tag value as a single display string.
///
/// Sequences are flattened into one comma separated list, using `key` for every
/// element. Structs render as `Label=value` pairs where each nested value is
/// formatted under its own key. This never fails: every [`RawValue`] has a
/// rendering.
///
/// ```
/// use exif_view::format::stringify_value;
/// use exif_view::RawValue;
///
/// let value = RawValue::Sequence(vec![1.0.into(), 2.0.into(), 3.0.into()]);
/// assert_eq!(stringify_value("key", &value), "1, 2, 3");
/// ```
pub fn stringify_value(key: &str, value: &RawValue) -> String {
    match value {
        RawValue::Null => String::new(),
        RawValue::Bytes(bytes) if key == COMPONENTS_CONFIGURATION => component_names(bytes),
        RawValue::Bytes(bytes) => printable_text(bytes),
        RawValue::Text(s) => s.clone(),
        RawValue::Number(n) => number_to_string(*n),
        RawValue::Bool(b) => b.to_string(),
        RawValue::Sequence(items) => items
            .iter()
            .map(|item| stringify_value(key, item))
            .collect::<Vec<_>>()
            .join(", "),
        RawValue::Struct(map) => map
            .iter()
            .map(|(k, v)| format!("{}={}", format_key(k), stringify_value(k, v)))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn component_names(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&c| match COMPONENT_NAMES.get(usize::from(c)) {
            Some(name) => (*name).to_string(),
            None => format!("Unknown({})", c),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn printable_text(bytes: &[u8]) -> String {
    let decoded = String::from_utf8_lossy(bytes);
    let printable: String = decoded.chars().filter(|&c| !is_control(c)).collect();
    let printable = printable.trim();
    if printable.is_empty() {
        BINARY_DATA.to_string()
    } else {
        printable.to_string()
    }
}

// C0 controls, DEL and C1 controls.
fn is_control(c: char) -> bool {
    matches!(u32::from(c), 0x00..=0x1F | 0x7F..=0x9F)
}

/// Number rendering in the style of JavaScript's `String(n)`: integral values
/// carry no fraction, and magnitudes of at least 1e21 or below 1e-6 use
/// exponent form with an explicit sign (`1e-7`, `1.5e+21`).
fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        // also covers -0.0
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let exponent = format!("{:e}", n);
        match exponent.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => exponent,
        }
    } else {
        n.to_string()
    }
}
