use crate::error::MetadataError;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

const DEFAULT_FONT_FAMILY: &str = "monospace";
const DEFAULT_FONT_SIZE: u32 = 14;

/// Presentation settings for the rendered metadata page.
///
/// Usually mirrored from the host editor's font settings. Missing, empty or
/// zero values fall back to the defaults (`monospace`, 14px).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSettings {
    #[serde(default = "default_font_family", deserialize_with = "font_family")]
    pub font_family: String,
    #[serde(default = "default_font_size", deserialize_with = "font_size")]
    pub font_size: u32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
        }
    }
}

impl ViewSettings {
    pub fn new(font_family: Option<&str>, font_size: Option<u32>) -> Self {
        Self {
            font_family: font_family
                .filter(|f| !f.trim().is_empty())
                .map_or_else(default_font_family, str::to_string),
            font_size: font_size.filter(|&s| s > 0).unwrap_or(DEFAULT_FONT_SIZE),
        }
    }

    /// Parses settings from a JSON object such as
    /// `{"fontFamily": "Fira Code", "fontSize": 13}`.
    pub fn from_json_str(json: &str) -> Result<Self, MetadataError> {
        let deserializer = &mut serde_json::Deserializer::from_str(json);
        Ok(serde_path_to_error::deserialize(deserializer)?)
    }

    /// Loads settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, MetadataError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_string()
}

fn default_font_size() -> u32 {
    DEFAULT_FONT_SIZE
}

fn font_family<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let family: Option<String> = Option::deserialize(deserializer)?;
    Ok(ViewSettings::new(family.as_deref(), None).font_family)
}

fn font_size<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let size: Option<u32> = Option::deserialize(deserializer)?;
    Ok(ViewSettings::new(None, size).font_size)
}
