//! Key-value storage trait abstraction.
//!
//! The recent-emoji list and the reaction queue live in storage owned by the
//! host application (user defaults on a phone, a JSON file on a desktop).
//! This trait is the seam; implementations are in [`crate::adapters`].

/// Storage operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// Failed to read the stored value
    ReadFailed(String),
    /// Failed to write the value
    WriteFailed(String),
    /// Stored value has the wrong shape
    Serialization(String),
    /// Backing store cannot be reached at all
    Unavailable(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::ReadFailed(msg) => write!(f, "Failed to read from store: {}", msg),
            StorageError::WriteFailed(msg) => write!(f, "Failed to write to store: {}", msg),
            StorageError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            StorageError::Unavailable(msg) => write!(f, "Store unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Synchronous string-list storage keyed by name.
///
/// Writes must be durable when `set_strings` returns `Ok`; callers rely on
/// that to survive an immediate process exit.
///
/// # Example
///
/// ```ignore
/// use atomicx_emoji::traits::KeyValueStore;
///
/// fn bump<S: KeyValueStore>(store: &S) -> Result<(), StorageError> {
///     let mut list = store.get_strings("recent_emoji_list")?.unwrap_or_default();
///     list.insert(0, "[TUIEmoji_Smile]".to_string());
///     store.set_strings("recent_emoji_list", &list)
/// }
/// ```
pub trait KeyValueStore: Send + Sync {
    /// Read the list stored under `key`.
    ///
    /// # Returns
    /// - `Ok(Some(list))` if the key exists
    /// - `Ok(None)` if nothing is stored
    /// - `Err(error)` if the read failed
    fn get_strings(&self, key: &str) -> Result<Option<Vec<String>>, StorageError>;

    /// Replace the list stored under `key`.
    fn set_strings(&self, key: &str, values: &[String]) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        assert_eq!(
            StorageError::ReadFailed("eof".to_string()).to_string(),
            "Failed to read from store: eof"
        );
        assert_eq!(
            StorageError::WriteFailed("disk full".to_string()).to_string(),
            "Failed to write to store: disk full"
        );
        assert_eq!(
            StorageError::Serialization("not a list".to_string()).to_string(),
            "Serialization error: not a list"
        );
        assert_eq!(
            StorageError::Unavailable("no home".to_string()).to_string(),
            "Store unavailable: no home"
        );
    }
}
