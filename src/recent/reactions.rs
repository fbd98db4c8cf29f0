//! Quick-reaction row shown on a message's long-press menu.
//!
//! A fixed number of slots seeded from a packaged default list. Picking an
//! emoji already in the row moves it to the front; picking another one
//! pushes the last slot out.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::catalog::{EmojiCatalog, EmojiEntry};
use crate::traits::KeyValueStore;

/// Storage key of the reaction row.
pub const REACTION_QUEUE_KEY: &str = "chat_pop_menu_queue";

/// Persisted quick-reaction row.
pub struct ReactionQueue {
    store: Arc<dyn KeyValueStore>,
    slots: usize,
    queue: Mutex<Vec<String>>,
}

impl std::fmt::Debug for ReactionQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReactionQueue")
            .field("slots", &self.slots)
            .field("queue", &*self.lock())
            .finish_non_exhaustive()
    }
}

impl ReactionQueue {
    /// Load the row.
    ///
    /// The stored row is used when it is non-empty and every name still
    /// resolves in `catalog`; otherwise the row starts from `defaults`.
    pub fn load(
        store: Arc<dyn KeyValueStore>,
        defaults: Vec<String>,
        slots: usize,
        catalog: &EmojiCatalog,
    ) -> Self {
        let stored = match store.get_strings(REACTION_QUEUE_KEY) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("Failed to read reaction queue: {}", e);
                None
            }
        };

        let mut queue = match stored {
            Some(list) if !list.is_empty() && list.iter().all(|n| catalog.contains(n)) => list,
            Some(list) if !list.is_empty() => {
                tracing::debug!("Stored reaction queue is stale, using defaults");
                defaults
            }
            _ => defaults,
        };
        queue.truncate(slots);

        Self {
            store,
            slots,
            queue: Mutex::new(queue),
        }
    }

    /// Promote `name` to the front of the row and persist it.
    ///
    /// Names unknown to `catalog` leave the row unchanged.
    pub fn update(&self, name: &str, catalog: &EmojiCatalog) {
        let mut queue = self.lock();

        if let Some(pos) = queue.iter().position(|n| n == name) {
            let existing = queue.remove(pos);
            queue.insert(0, existing);
        } else if catalog.contains(name) && self.slots > 0 {
            if queue.len() >= self.slots {
                queue.pop();
            }
            queue.insert(0, name.to_string());
        } else {
            tracing::debug!("Ignoring reaction update for unknown emoji {}", name);
            return;
        }

        if let Err(e) = self.store.set_strings(REACTION_QUEUE_KEY, &queue) {
            tracing::warn!("Failed to persist reaction queue: {}", e);
        }
    }

    /// Codes in display order.
    pub fn names(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Entries in display order, skipping codes missing from `catalog`.
    pub fn resolve<'c>(&self, catalog: &'c EmojiCatalog) -> Vec<&'c EmojiEntry> {
        self.lock()
            .iter()
            .filter_map(|name| catalog.lookup(name))
            .collect()
    }

    /// Number of slots.
    pub fn slots(&self) -> usize {
        self.slots
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemoryStore;

    fn catalog() -> EmojiCatalog {
        EmojiCatalog::from_entries(
            ["[a]", "[b]", "[c]", "[d]", "[e]"]
                .iter()
                .map(|n| EmojiEntry::new(*n, format!("/{}.png", n), *n))
                .collect(),
        )
    }

    fn defaults() -> Vec<String> {
        vec!["[a]".to_string(), "[b]".to_string(), "[c]".to_string()]
    }

    #[test]
    fn test_starts_from_defaults() {
        let store = InMemoryStore::new();
        let queue = ReactionQueue::load(Arc::new(store), defaults(), 3, &catalog());
        assert_eq!(queue.names(), vec!["[a]", "[b]", "[c]"]);
    }

    #[test]
    fn test_defaults_truncated_to_slots() {
        let store = InMemoryStore::new();
        let queue = ReactionQueue::load(Arc::new(store), defaults(), 2, &catalog());
        assert_eq!(queue.names(), vec!["[a]", "[b]"]);
    }

    #[test]
    fn test_existing_moves_to_front() {
        let store = InMemoryStore::new();
        let queue = ReactionQueue::load(Arc::new(store.clone()), defaults(), 3, &catalog());
        queue.update("[c]", &catalog());
        assert_eq!(queue.names(), vec!["[c]", "[a]", "[b]"]);
        assert_eq!(
            store.snapshot(REACTION_QUEUE_KEY),
            Some(vec!["[c]".to_string(), "[a]".to_string(), "[b]".to_string()])
        );
    }

    #[test]
    fn test_new_name_evicts_last() {
        let store = InMemoryStore::new();
        let queue = ReactionQueue::load(Arc::new(store), defaults(), 3, &catalog());
        queue.update("[e]", &catalog());
        assert_eq!(queue.names(), vec!["[e]", "[a]", "[b]"]);
    }

    #[test]
    fn test_unknown_name_leaves_queue() {
        let store = InMemoryStore::new();
        let queue = ReactionQueue::load(Arc::new(store.clone()), defaults(), 3, &catalog());
        queue.update("[zzz]", &catalog());
        assert_eq!(queue.names(), defaults());
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_uses_stored_queue() {
        let store = InMemoryStore::with_entry(REACTION_QUEUE_KEY, &["[d]", "[e]", "[a]"]);
        let queue = ReactionQueue::load(Arc::new(store), defaults(), 3, &catalog());
        assert_eq!(queue.names(), vec!["[d]", "[e]", "[a]"]);
    }

    #[test]
    fn test_stale_stored_queue_falls_back() {
        let store = InMemoryStore::with_entry(REACTION_QUEUE_KEY, &["[d]", "[removed]"]);
        let queue = ReactionQueue::load(Arc::new(store), defaults(), 3, &catalog());
        assert_eq!(queue.names(), defaults());
    }

    #[test]
    fn test_short_queue_grows_up_to_slots() {
        let store = InMemoryStore::new();
        let queue = ReactionQueue::load(Arc::new(store), vec!["[a]".to_string()], 3, &catalog());
        queue.update("[b]", &catalog());
        queue.update("[c]", &catalog());
        queue.update("[d]", &catalog());
        assert_eq!(queue.names(), vec!["[d]", "[c]", "[b]"]);
        assert_eq!(queue.resolve(&catalog()).len(), 3);
    }
}
