//! Emoji catalog: the code → asset → label table.
//!
//! Loaded once from the packaged table and then shared read-only. Lookups go
//! through two derived indexes (by code and by localized label) that are
//! rebuilt whenever the entry count changes.

pub mod localize;
pub mod table;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::asset_path_under;
use crate::error::{EmojiResult, ResultExt};

pub use localize::{IdentityLocalizer, Localizer, StringsTable};
pub use table::FaceRecord;

/// One emoji of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmojiEntry {
    name: String,
    asset_path: PathBuf,
    localized_name: String,
}

impl EmojiEntry {
    /// Create an entry.
    pub fn new(
        name: impl Into<String>,
        asset_path: impl Into<PathBuf>,
        localized_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            asset_path: asset_path.into(),
            localized_name: localized_name.into(),
        }
    }

    /// Emoji code, e.g. `[TUIEmoji_Smile]`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the glyph image.
    pub fn asset_path(&self) -> &Path {
        &self.asset_path
    }

    /// Display label, e.g. `[Smile]`.
    pub fn localized_name(&self) -> &str {
        &self.localized_name
    }
}

/// Ordered emoji table with O(1) lookups.
#[derive(Debug, Clone, Default)]
pub struct EmojiCatalog {
    entries: Vec<EmojiEntry>,
    by_name: HashMap<String, usize>,
    by_label: HashMap<String, usize>,
}

impl EmojiCatalog {
    /// Create an empty catalog. Every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from ready entries, keeping their order.
    pub fn from_entries(entries: Vec<EmojiEntry>) -> Self {
        let mut catalog = Self {
            entries,
            by_name: HashMap::new(),
            by_label: HashMap::new(),
        };
        catalog.reindex();
        catalog
    }

    /// Build a catalog from table records.
    ///
    /// Records without a usable `face_name` and `face_file` are skipped.
    /// Asset paths resolve to `<resource_root>/emoji/<face_file>@2x.png`;
    /// labels come from `localizer` keyed by `face_name`.
    pub fn from_records(
        records: &[FaceRecord],
        resource_root: &Path,
        localizer: &dyn Localizer,
    ) -> Self {
        let entries: Vec<EmojiEntry> = records
            .iter()
            .filter_map(|record| {
                let Some((name, file)) = record.usable() else {
                    tracing::debug!("Skipping incomplete emoji record: {:?}", record);
                    return None;
                };
                Some(EmojiEntry::new(
                    name,
                    asset_path_under(resource_root, file),
                    localizer.label_for(name),
                ))
            })
            .collect();
        Self::from_entries(entries)
    }

    /// Load the table at `table_path`.
    ///
    /// A missing or corrupt table gives an empty catalog; the reason is
    /// logged.
    pub fn load(table_path: &Path, resource_root: &Path, localizer: &dyn Localizer) -> Self {
        Self::try_load(table_path, resource_root, localizer).log_and_default("load_catalog")
    }

    /// Load the table at `table_path`, reporting why it failed.
    pub fn try_load(
        table_path: &Path,
        resource_root: &Path,
        localizer: &dyn Localizer,
    ) -> EmojiResult<Self> {
        let records = table::read_table(table_path)?;
        let catalog = Self::from_records(&records, resource_root, localizer);
        tracing::info!(
            "Loaded {} emoji from {} ({} records)",
            catalog.len(),
            table_path.display(),
            records.len()
        );
        Ok(catalog)
    }

    /// Entry for an emoji code.
    pub fn lookup(&self, name: &str) -> Option<&EmojiEntry> {
        self.by_name.get(name).map(|&idx| &self.entries[idx])
    }

    /// Entry whose localized label is `label`.
    pub fn lookup_label(&self, label: &str) -> Option<&EmojiEntry> {
        self.by_label.get(label).map(|&idx| &self.entries[idx])
    }

    /// Check whether `name` is a known code.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Append entries and rebuild the indexes.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = EmojiEntry>) {
        let before = self.entries.len();
        self.entries.extend(entries);
        if self.entries.len() != before {
            self.reindex();
        }
    }

    /// All entries in table order.
    pub fn entries(&self) -> &[EmojiEntry] {
        &self.entries
    }

    /// Iterate entries in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, EmojiEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Asset paths of every entry, in table order.
    pub fn asset_paths(&self) -> Vec<PathBuf> {
        self.entries
            .iter()
            .map(|e| e.asset_path.clone())
            .collect()
    }

    // First entry wins on duplicate codes or labels
    fn reindex(&mut self) {
        self.by_name.clear();
        self.by_label.clear();
        for (idx, entry) in self.entries.iter().enumerate() {
            self.by_name.entry(entry.name.clone()).or_insert(idx);
            self.by_label
                .entry(entry.localized_name.clone())
                .or_insert(idx);
        }
    }
}

impl<'a> IntoIterator for &'a EmojiCatalog {
    type Item = &'a EmojiEntry;
    type IntoIter = std::slice::Iter<'a, EmojiEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn smile() -> EmojiEntry {
        EmojiEntry::new("[smile]", "/path/smile.png", "Smile")
    }

    #[test]
    fn test_empty_catalog_misses() {
        let catalog = EmojiCatalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.lookup("[smile]").is_none());
        assert!(catalog.lookup_label("Smile").is_none());
    }

    #[test]
    fn test_lookup_by_name_and_label() {
        let catalog = EmojiCatalog::from_entries(vec![smile()]);
        assert_eq!(catalog.lookup("[smile]"), Some(&smile()));
        assert_eq!(catalog.lookup_label("Smile"), Some(&smile()));
        assert!(catalog.lookup("[Smile]").is_none());
        assert!(catalog.contains("[smile]"));
    }

    #[test]
    fn test_duplicate_name_first_wins() {
        let catalog = EmojiCatalog::from_entries(vec![
            EmojiEntry::new("[x]", "/first.png", "First"),
            EmojiEntry::new("[x]", "/second.png", "Second"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup("[x]").unwrap().localized_name(), "First");
    }

    #[test]
    fn test_extend_rebuilds_index() {
        let mut catalog = EmojiCatalog::from_entries(vec![smile()]);
        assert!(catalog.lookup("[cry]").is_none());

        catalog.extend(vec![EmojiEntry::new("[cry]", "/cry.png", "Cry")]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup("[cry]").unwrap().asset_path(), Path::new("/cry.png"));
        assert!(catalog.lookup("[smile]").is_some());
    }

    #[test]
    fn test_from_records_resolves_paths_and_labels() {
        let mut strings = StringsTable::new();
        strings.insert("[TUIEmoji_Smile]", "[Smile]");
        let records = vec![
            FaceRecord::new("[TUIEmoji_Smile]", "emoji_0"),
            FaceRecord {
                face_name: Some("[TUIEmoji_Broken]".to_string()),
                face_file: None,
            },
            FaceRecord::new("[TUIEmoji_Cry]", "emoji_1"),
        ];

        let catalog = EmojiCatalog::from_records(&records, Path::new("/res"), &strings);

        assert_eq!(catalog.len(), 2);
        let entry = catalog.lookup("[TUIEmoji_Smile]").unwrap();
        assert_eq!(entry.asset_path(), Path::new("/res/emoji/emoji_0@2x.png"));
        assert_eq!(entry.localized_name(), "[Smile]");
        // No translation: label falls back to the code
        assert_eq!(
            catalog.lookup("[TUIEmoji_Cry]").unwrap().localized_name(),
            "[TUIEmoji_Cry]"
        );
        assert!(catalog.lookup("[TUIEmoji_Broken]").is_none());
    }

    #[test]
    fn test_load_missing_table_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = EmojiCatalog::load(
            &temp_dir.path().join("emoji.json"),
            temp_dir.path(),
            &IdentityLocalizer,
        );
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_corrupt_table_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("emoji.json");
        fs::write(&path, "{{{").unwrap();

        let catalog = EmojiCatalog::load(&path, temp_dir.path(), &IdentityLocalizer);
        assert!(catalog.is_empty());
        assert!(EmojiCatalog::try_load(&path, temp_dir.path(), &IdentityLocalizer).is_err());
    }

    #[test]
    fn test_load_keeps_table_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("emoji.json");
        fs::write(
            &path,
            r#"[{"face_name": "[b]", "face_file": "b"}, {"face_name": "[a]", "face_file": "a"}]"#,
        )
        .unwrap();

        let catalog = EmojiCatalog::load(&path, temp_dir.path(), &IdentityLocalizer);
        let names: Vec<&str> = catalog.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["[b]", "[a]"]);
        assert_eq!(catalog.asset_paths().len(), 2);
    }
}
