//! Recently used emoji.
//!
//! The picker's "recent" row: at most eight codes, most recent first, kept
//! in the host's key-value store under `recent_emoji_list`.

pub mod reactions;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::catalog::{EmojiCatalog, EmojiEntry};
use crate::error::EmojiResult;
use crate::traits::KeyValueStore;

pub use reactions::ReactionQueue;

/// Storage key of the recent list.
pub const RECENT_EMOJI_KEY: &str = "recent_emoji_list";

/// Maximum number of recent codes kept.
pub const MAX_RECENT_COUNT: usize = 8;

/// Move `name` to the front of `list`, dropping duplicates and anything past
/// `max`.
pub fn push_recent(list: &mut Vec<String>, name: &str, max: usize) {
    list.retain(|existing| existing != name);
    list.insert(0, name.to_string());
    list.truncate(max);
}

/// Tracks recently used emoji codes.
///
/// Every change re-reads the stored list, applies the use and writes it back
/// before the call returns. The internal lock is held across the read and
/// the write, so concurrent callers are serialized and no update is lost.
/// The in-memory list only ever holds what was last read from or written to
/// the store.
pub struct RecentEmojis {
    store: Arc<dyn KeyValueStore>,
    list: Mutex<Vec<String>>,
}

impl std::fmt::Debug for RecentEmojis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecentEmojis")
            .field("list", &*self.lock())
            .finish_non_exhaustive()
    }
}

impl RecentEmojis {
    /// Create a tracker and read the stored list.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let tracker = Self {
            store,
            list: Mutex::new(Vec::new()),
        };
        tracker.reload();
        tracker
    }

    /// Re-read the stored list. On failure the current list is kept.
    pub fn reload(&self) {
        let mut list = self.lock();
        if let Some(stored) = self.read_stored() {
            *list = stored;
        }
    }

    /// Record that `name` was used and persist the list.
    ///
    /// Storage failures are logged; see [`RecentEmojis::try_record_use`].
    pub fn record_use(&self, name: &str) {
        if let Err(e) = self.try_record_use(name) {
            tracing::warn!("Failed to persist recent emoji [{}]: {}", e.error_code(), e);
        }
    }

    /// Record that `name` was used, reporting a failed write.
    ///
    /// The update starts from the stored list, or from the last known list
    /// when the store cannot be read. On a failed write the tracker keeps
    /// the last list it read, without this use.
    pub fn try_record_use(&self, name: &str) -> EmojiResult<()> {
        if name.is_empty() {
            return Ok(());
        }

        let mut list = self.lock();
        if let Some(stored) = self.read_stored() {
            *list = stored;
        }

        let mut updated = list.clone();
        push_recent(&mut updated, name, MAX_RECENT_COUNT);
        self.store.set_strings(RECENT_EMOJI_KEY, &updated)?;
        *list = updated;
        Ok(())
    }

    /// Recent codes, most recent first.
    pub fn get_recent(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Recent entries still present in `catalog`, most recent first.
    pub fn resolve_recent_entries<'c>(&self, catalog: &'c EmojiCatalog) -> Vec<&'c EmojiEntry> {
        self.lock()
            .iter()
            .filter_map(|name| catalog.lookup(name))
            .collect()
    }

    /// Forget every recent code.
    pub fn clear(&self) {
        let mut list = self.lock();
        match self.store.remove(RECENT_EMOJI_KEY) {
            Ok(()) => list.clear(),
            Err(e) => tracing::warn!("Failed to clear recent emoji: {}", e),
        }
    }

    /// Number of recent codes.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if nothing was used yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn read_stored(&self) -> Option<Vec<String>> {
        match self.store.get_strings(RECENT_EMOJI_KEY) {
            Ok(stored) => {
                let mut list = stored.unwrap_or_default();
                list.truncate(MAX_RECENT_COUNT);
                Some(list)
            }
            Err(e) => {
                tracing::warn!("Failed to read recent emoji: {}", e);
                None
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.list.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
