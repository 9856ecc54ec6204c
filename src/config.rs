//! Icon configuration table
//!
//! Maps logical component names ("ArrowBack") to SVG file identifiers
//! ("arrow-thick-circle-left"). The table is JSON; an entry's value is either
//! a bare file name or an object carrying per-icon generation flags:
//!
//! ```json
//! {
//!    "ArrowBack": "arrow-thick-circle-left",
//!    "Logo": { "file": "Toba Logo", "preserveAttributes": true }
//! }
//! ```
//!
//! Entry order is preserved on load and becomes the barrel export order.

use std::path::Path;

use serde::Deserialize;

use crate::error::{GlyphGenError, Result};

/// One configured icon: logical name plus the source file it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    /// Logical component name, unique within the table
    pub name: String,
    /// Source file name, without extension
    pub file: String,
    /// Keep class attributes in generated markup instead of stripping them
    pub preserve_attributes: bool,
}

/// An entry value as authored: a bare file name or the full config object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Name(String),
    Full {
        file: String,
        #[serde(default, rename = "preserveAttributes")]
        preserve_attributes: bool,
    },
}

/// Load and normalize the icon table from a JSON file.
pub async fn load(path: &Path) -> Result<Vec<IconSpec>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| GlyphGenError::ConfigRead {
            path: path.display().to_string(),
            source: e,
        })?;

    parse(&text).map_err(|e| GlyphGenError::ConfigParse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Parse the table text, folding both entry forms into [`IconSpec`].
///
/// serde_json's preserve_order feature keeps the author's entry order.
pub fn parse(text: &str) -> serde_json::Result<Vec<IconSpec>> {
    let table: serde_json::Map<String, serde_json::Value> = serde_json::from_str(text)?;

    table
        .into_iter()
        .map(|(name, value)| {
            let entry: RawEntry = serde_json::from_value(value)?;
            Ok(match entry {
                RawEntry::Name(file) => IconSpec {
                    name,
                    file,
                    preserve_attributes: false,
                },
                RawEntry::Full {
                    file,
                    preserve_attributes,
                } => IconSpec {
                    name,
                    file,
                    preserve_attributes,
                },
            })
        })
        .collect()
}
