//! Localized emoji labels.
//!
//! Each emoji's display label is looked up with its code as the key, the way
//! platform string tables work: `"[TUIEmoji_Smile]" -> "[Smile]"`. A missing
//! key falls back to the key itself.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EmojiError, EmojiResult, ResultExt};

/// Name-to-label lookup supplied by the host's localization system.
pub trait Localizer: Send + Sync {
    /// Label for `key`, or `None` when the table has no entry.
    fn localize(&self, key: &str) -> Option<String>;

    /// Label for `key`, falling back to the key.
    fn label_for(&self, key: &str) -> String {
        self.localize(key).unwrap_or_else(|| key.to_string())
    }
}

/// Localizer with no translations; every label is its key.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLocalizer;

impl Localizer for IdentityLocalizer {
    fn localize(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Strings table loaded from a JSON object file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringsTable {
    strings: HashMap<String, String>,
}

impl StringsTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `path`; a missing or malformed file gives an empty table.
    pub fn load(path: &Path) -> Self {
        Self::try_load(path).log_and_default("load_strings")
    }

    /// Load `path`, reporting why it failed.
    pub fn try_load(path: &Path) -> EmojiResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| EmojiError::from_io(path, e))?;
        let strings = serde_json::from_str(&json).map_err(|source| EmojiError::TableParse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { strings })
    }

    /// Add or replace one translation.
    pub fn insert(&mut self, key: impl Into<String>, label: impl Into<String>) {
        self.strings.insert(key.into(), label.into());
    }

    /// Number of translations.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the table has no translations.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl FromIterator<(String, String)> for StringsTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            strings: iter.into_iter().collect(),
        }
    }
}

impl Localizer for StringsTable {
    fn localize(&self, key: &str) -> Option<String> {
        self.strings.get(key).cloned()
    }
}
