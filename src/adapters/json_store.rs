//! File-based key-value store adapter.
//!
//! All keys live in one JSON object, `{ "key": ["a", "b"] }`. Each write
//! rewrites the whole file through a temporary sibling and a rename, so a
//! crash mid-write leaves the previous contents intact.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::traits::{KeyValueStore, StorageError};

type StoreMap = BTreeMap<String, Vec<String>>;

/// JSON-file key-value store.
///
/// # Example
///
/// ```ignore
/// use atomicx_emoji::adapters::JsonFileStore;
/// use atomicx_emoji::traits::KeyValueStore;
///
/// let store = JsonFileStore::new("/tmp/emoji_state.json");
/// store.set_strings("recent_emoji_list", &["[TUIEmoji_Smile]".to_string()])?;
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles on the shared file.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<StoreMap, StorageError> {
        if !self.path.exists() {
            return Ok(StoreMap::new());
        }

        let file = File::open(&self.path)
            .map_err(|e| StorageError::ReadFailed(format!("{}: {}", self.path.display(), e)))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| StorageError::Serialization(format!("{}: {}", self.path.display(), e)))
    }

    fn write_map(&self, map: &StoreMap) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    StorageError::Unavailable(format!("{}: {}", parent.display(), e))
                })?;
            }
        }

        let tmp_path = self.path.with_extension("json.tmp");
        let file = File::create(&tmp_path)
            .map_err(|e| StorageError::WriteFailed(format!("{}: {}", tmp_path.display(), e)))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, map)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        drop(writer);

        fs::rename(&tmp_path, &self.path)
            .map_err(|e| StorageError::WriteFailed(format!("{}: {}", self.path.display(), e)))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_strings(&self, key: &str) -> Result<Option<Vec<String>>, StorageError> {
        Ok(self.read_map()?.remove(key))
    }

    fn set_strings(&self, key: &str, values: &[String]) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        // Corrupt contents are replaced on the next write
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(StorageError::Serialization(msg)) => {
                tracing::warn!("Discarding unreadable store contents: {}", msg);
                StoreMap::new()
            }
            Err(e) => return Err(e),
        };
        map.insert(key.to_string(), values.to_vec());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store(temp_dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(temp_dir.path().join("state").join("emoji_state.json"))
    }

    #[test]
    fn test_get_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        assert_eq!(store.get_strings("recent_emoji_list").unwrap(), None);
    }

    #[test]
    fn test_set_creates_parent_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        let values = vec!["[a]".to_string(), "[b]".to_string()];

        store.set_strings("recent_emoji_list", &values).unwrap();
        assert!(store.path().exists());

        let reopened = JsonFileStore::new(store.path().to_path_buf());
        assert_eq!(reopened.get_strings("recent_emoji_list").unwrap(), Some(values));
    }

    #[test]
    fn test_keys_are_independent() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        store.set_strings("one", &["[x]".to_string()]).unwrap();
        store.set_strings("two", &["[y]".to_string()]).unwrap();

        assert_eq!(store.get_strings("one").unwrap(), Some(vec!["[x]".to_string()]));
        assert_eq!(store.get_strings("two").unwrap(), Some(vec!["[y]".to_string()]));
    }

    #[test]
    fn test_remove_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);

        store.set_strings("one", &["[x]".to_string()]).unwrap();
        store.remove("one").unwrap();
        assert_eq!(store.get_strings("one").unwrap(), None);

        // Removing again is fine
        store.remove("one").unwrap();
    }

    #[test]
    fn test_corrupt_file_read_is_error_and_write_recovers() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("emoji_state.json");
        fs::write(&path, "not json").unwrap();
        let store = JsonFileStore::new(&path);

        assert!(matches!(
            store.get_strings("recent_emoji_list"),
            Err(StorageError::Serialization(_))
        ));

        store
            .set_strings("recent_emoji_list", &["[a]".to_string()])
            .unwrap();
        assert_eq!(
            store.get_strings("recent_emoji_list").unwrap(),
            Some(vec!["[a]".to_string()])
        );
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let store = create_test_store(&temp_dir);
        store.set_strings("k", &[]).unwrap();
        assert!(!store.path().with_extension("json.tmp").exists());
    }
}
