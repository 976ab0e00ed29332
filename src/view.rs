//! Presentation of [`Metadata`]: the pretty JSON dump, key/value tables per
//! section and the HTML page that combines both.

use crate::config::ViewSettings;
use crate::error::MetadataError;
use crate::format::{format_key, stringify_value};
use crate::metadata::{FileInfo, Metadata};
use crate::raw_value::TagMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// [`Metadata`] with every tag value already rendered to a string.
///
/// Tag keys stay in their raw source form; labels are only applied in the
/// tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedMetadata {
    pub file: FileInfo,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub exif: Option<IndexMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gps: Option<IndexMap<String, String>>,
}

impl FormattedMetadata {
    pub fn new(metadata: &Metadata) -> Self {
        Self {
            file: metadata.file.clone(),
            exif: metadata.exif.as_ref().map(stringify_tags),
            gps: metadata.gps.as_ref().map(stringify_tags),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, MetadataError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn stringify_tags(tags: &TagMap) -> IndexMap<String, String> {
    tags.iter()
        .map(|(key, value)| (key.clone(), stringify_value(key, value)))
        .collect()
}

/// A titled table of label/value rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub entries: Vec<(String, String)>,
}

pub fn file_section(file: &FileInfo) -> Section {
    let mut entries = vec![
        ("File Name".to_string(), file.name.clone()),
        (
            "Format".to_string(),
            file.format.clone().unwrap_or_else(|| "Unknown".to_string()),
        ),
        ("Size".to_string(), file.size.clone()),
    ];
    match (file.width, file.height) {
        (Some(width), Some(height)) if width > 0 && height > 0 => {
            entries.push(("Resolution".to_string(), format!("{} x {}", width, height)));
        }
        _ => {}
    }
    Section {
        title: "File Information",
        entries,
    }
}

fn tag_section(title: &'static str, tags: &TagMap) -> Section {
    let entries = tags
        .iter()
        .map(|(key, value)| (format_key(key), stringify_value(key, value)))
        .collect();
    Section { title, entries }
}

/// The file table followed by the EXIF and GPS tables that have data.
pub fn sections(metadata: &Metadata) -> Vec<Section> {
    let mut sections = vec![file_section(&metadata.file)];
    if let Some(exif) = &metadata.exif {
        sections.push(tag_section("EXIF Data", exif));
    }
    if let Some(gps) = &metadata.gps {
        sections.push(tag_section("GPS Data", gps));
    }
    sections
}

/// Renders the full metadata page shown next to the image.
pub fn render_html(
    metadata: &Metadata,
    image_uri: &str,
    settings: &ViewSettings,
) -> Result<String, MetadataError> {
    let name = escape_html(&metadata.file.name);
    let json = FormattedMetadata::new(metadata).to_json_pretty()?;

    let mut html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{name}</title>
  <style>
    body {{
      font-family: {font_family};
      font-size: {font_size}px;
      color: var(--vscode-editor-foreground);
      background-color: var(--vscode-editor-background);
      padding: 1em;
      margin: 0;
    }}
    .image-preview {{ margin-bottom: 1em; }}
    .section {{ margin-bottom: 2em; }}
    .section-title {{
      font-size: 1.2em;
      font-weight: bold;
      margin-bottom: 0.5em;
      padding-bottom: 0.25em;
      border-bottom: 1px solid #ccc;
    }}
    .info-table {{ width: 100%; border-collapse: collapse; }}
    .info-table th, .info-table td {{
      text-align: left;
      padding: 0.25em 0.5em;
      border-bottom: 1px solid #eee;
    }}
    .info-table th {{
      font-weight: bold;
      background-color: var(--vscode-editor-lineHighlightBackground);
      width: 200px;
    }}
    .info-table td {{ word-break: break-all; }}
    .json-data {{
      padding: 1em;
      border-radius: 4px;
      white-space: pre-wrap;
      background-color: var(--vscode-editor-lineHighlightBackground);
      overflow-x: auto;
    }}
  </style>
</head>
<body>
  <img src="{src}" class="image-preview" alt="{name}" />
"#,
        font_family = escape_html(&settings.font_family),
        font_size = settings.font_size,
        src = escape_html(image_uri),
    );

    for section in sections(metadata) {
        render_section(&mut html, &section);
    }
    if !metadata.has_tags() {
        html.push_str("  <p>No EXIF data found.</p>\n");
    }

    html.push_str(&format!(
        r#"  <div class="section">
    <div class="section-title">Data (JSON)</div>
    <div class="json-data">{}</div>
  </div>
</body>
</html>
"#,
        escape_html(&json)
    ));
    Ok(html)
}

fn render_section(html: &mut String, section: &Section) {
    html.push_str(&format!(
        r#"  <div class="section">
    <div class="section-title">{}</div>
    <table class="info-table">
"#,
        escape_html(section.title)
    ));
    for (label, value) in &section.entries {
        html.push_str(&format!(
            "      <tr><th>{}</th><td>{}</td></tr>\n",
            escape_html(label),
            escape_html(value)
        ));
    }
    html.push_str("    </table>\n  </div>\n");
}

pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
