//! In-memory key-value store for testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::traits::{KeyValueStore, StorageError};

/// In-memory store with switchable failures.
///
/// Clones share state, so a test can keep one handle for inspection while
/// the tracker under test owns another.
///
/// # Example
///
/// ```ignore
/// use atomicx_emoji::adapters::mock::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// store.set_write_should_fail(true);
/// assert!(store.set_strings("k", &[]).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    values: Arc<Mutex<HashMap<String, Vec<String>>>>,
    read_should_fail: Arc<Mutex<bool>>,
    write_should_fail: Arc<Mutex<bool>>,
    writes: Arc<Mutex<usize>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one pre-populated key.
    pub fn with_entry(key: &str, values: &[&str]) -> Self {
        let store = Self::new();
        store.insert(key, values.iter().map(|v| v.to_string()).collect());
        store
    }

    /// Configure whether reads should fail.
    pub fn set_read_should_fail(&self, should_fail: bool) {
        *lock(&self.read_should_fail) = should_fail;
    }

    /// Configure whether writes should fail.
    pub fn set_write_should_fail(&self, should_fail: bool) {
        *lock(&self.write_should_fail) = should_fail;
    }

    /// Set a value directly, bypassing failure injection.
    pub fn insert(&self, key: &str, values: Vec<String>) {
        lock(&self.values).insert(key.to_string(), values);
    }

    /// Read a value directly, bypassing failure injection.
    pub fn snapshot(&self, key: &str) -> Option<Vec<String>> {
        lock(&self.values).get(key).cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        *lock(&self.writes)
    }
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl KeyValueStore for InMemoryStore {
    fn get_strings(&self, key: &str) -> Result<Option<Vec<String>>, StorageError> {
        if *lock(&self.read_should_fail) {
            return Err(StorageError::ReadFailed("Mock read failure".to_string()));
        }
        Ok(lock(&self.values).get(key).cloned())
    }

    fn set_strings(&self, key: &str, values: &[String]) -> Result<(), StorageError> {
        if *lock(&self.write_should_fail) {
            return Err(StorageError::WriteFailed("Mock write failure".to_string()));
        }
        lock(&self.values).insert(key.to_string(), values.to_vec());
        *lock(&self.writes) += 1;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if *lock(&self.write_should_fail) {
            return Err(StorageError::WriteFailed("Mock write failure".to_string()));
        }
        lock(&self.values).remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let store = InMemoryStore::new();
        assert_eq!(store.get_strings("k").unwrap(), None);
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let store = InMemoryStore::new();
        store.set_strings("k", &["[a]".to_string()]).unwrap();
        assert_eq!(store.get_strings("k").unwrap(), Some(vec!["[a]".to_string()]));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let store = InMemoryStore::new();
        let other = store.clone();
        store.set_strings("k", &["[a]".to_string()]).unwrap();
        assert_eq!(other.snapshot("k"), Some(vec!["[a]".to_string()]));
    }

    #[test]
    fn test_failure_injection() {
        let store = InMemoryStore::with_entry("k", &["[a]"]);

        store.set_read_should_fail(true);
        assert!(matches!(store.get_strings("k"), Err(StorageError::ReadFailed(_))));

        store.set_write_should_fail(true);
        assert!(matches!(store.set_strings("k", &[]), Err(StorageError::WriteFailed(_))));
        assert!(store.remove("k").is_err());

        // Direct access still sees the original value
        assert_eq!(store.snapshot("k"), Some(vec!["[a]".to_string()]));
    }
}
