//! Packaged emoji table parsing.
//!
//! The table is a JSON array of `{ "face_name": ..., "face_file": ... }`
//! records. Parsing is record-by-record so one bad record never costs the
//! rest of the table.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EmojiError, EmojiResult};

/// One record of the packaged table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FaceRecord {
    /// Emoji code, e.g. `[TUIEmoji_Smile]`
    #[serde(default)]
    pub face_name: Option<String>,
    /// Asset file stem, e.g. `emoji_0`
    #[serde(default)]
    pub face_file: Option<String>,
}

impl FaceRecord {
    /// Build a complete record.
    pub fn new(face_name: impl Into<String>, face_file: impl Into<String>) -> Self {
        Self {
            face_name: Some(face_name.into()),
            face_file: Some(face_file.into()),
        }
    }

    /// `(face_name, face_file)` when both are present and non-empty.
    pub fn usable(&self) -> Option<(&str, &str)> {
        let name = self.face_name.as_deref().filter(|s| !s.is_empty())?;
        let file = self.face_file.as_deref().filter(|s| !s.is_empty())?;
        Some((name, file))
    }
}

/// Parse a table from JSON text.
///
/// The top level must be an array. Elements that are not objects, or whose
/// fields have the wrong type, are skipped.
pub fn parse_table(json: &str) -> Result<Vec<FaceRecord>, serde_json::Error> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let total = values.len();
    let records: Vec<FaceRecord> = values
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!("Skipping malformed emoji record: {}", e);
                None
            }
        })
        .collect();

    if records.len() < total {
        tracing::debug!("Parsed {} of {} emoji records", records.len(), total);
    }
    Ok(records)
}

/// Read and parse the table at `path`.
pub fn read_table(path: &Path) -> EmojiResult<Vec<FaceRecord>> {
    let json = fs::read_to_string(path).map_err(|e| EmojiError::from_io(path, e))?;
    parse_table(&json).map_err(|source| EmojiError::TableParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a JSON array of strings, e.g. the default reaction list.
pub fn read_name_list(path: &Path) -> EmojiResult<Vec<String>> {
    let json = fs::read_to_string(path).map_err(|e| EmojiError::from_io(path, e))?;
    serde_json::from_str(&json).map_err(|source| EmojiError::TableParse {
        path: path.to_path_buf(),
        source,
    })
}
