//! Process-wide emoji state, built once and passed down explicitly.
//!
//! Construct one [`EmojiContext`] at startup and hand references (or the
//! `Arc` handles it exposes) to whatever renders messages or the picker.

use std::sync::Arc;
use std::thread::JoinHandle;

use crate::adapters::JsonFileStore;
use crate::assets::AssetCache;
use crate::catalog::{table::read_name_list, EmojiCatalog, EmojiEntry, Localizer, StringsTable};
use crate::config::EmojiConfig;
use crate::error::ResultExt;
use crate::recent::{ReactionQueue, RecentEmojis};
use crate::traits::KeyValueStore;
use crate::transcode::{self, TranscodeResult};

/// Catalog, glyph cache and persisted trackers.
pub struct EmojiContext {
    config: EmojiConfig,
    catalog: Arc<EmojiCatalog>,
    assets: AssetCache,
    recent: RecentEmojis,
    reactions: ReactionQueue,
    prime_handle: Option<JoinHandle<usize>>,
}

impl std::fmt::Debug for EmojiContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmojiContext")
            .field("config", &self.config)
            .field("catalog_len", &self.catalog.len())
            .field("cached_assets", &self.assets.len())
            .finish_non_exhaustive()
    }
}

impl EmojiContext {
    /// Build everything from `config`, persisting to `config.store_path`.
    pub fn init(config: EmojiConfig) -> Self {
        let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::new(&config.store_path));
        Self::with_store(config, store)
    }

    /// Build everything from `config` with an injected store.
    pub fn with_store(config: EmojiConfig, store: Arc<dyn KeyValueStore>) -> Self {
        let strings = StringsTable::load(&config.strings_path());
        Self::with_parts(config, store, &strings)
    }

    /// Build everything from `config` with an injected store and localizer.
    pub fn with_parts(
        config: EmojiConfig,
        store: Arc<dyn KeyValueStore>,
        localizer: &dyn Localizer,
    ) -> Self {
        let catalog = Arc::new(EmojiCatalog::load(
            &config.table_path(),
            &config.resource_root,
            localizer,
        ));

        let assets = AssetCache::new().with_placeholder(config.placeholder_path());
        let prime_handle = if config.prime_cache {
            let mut paths = catalog.asset_paths();
            paths.push(config.placeholder_path());
            assets.prime(paths)
        } else {
            None
        };

        let defaults = read_name_list(&config.reaction_defaults_path())
            .log_and_default("load_reaction_defaults");
        let recent = RecentEmojis::new(Arc::clone(&store));
        let reactions = ReactionQueue::load(store, defaults, config.reaction_slots, &catalog);

        Self {
            config,
            catalog,
            assets,
            recent,
            reactions,
            prime_handle,
        }
    }

    /// The config this context was built from.
    pub fn config(&self) -> &EmojiConfig {
        &self.config
    }

    /// The catalog.
    pub fn catalog(&self) -> &EmojiCatalog {
        &self.catalog
    }

    /// Shared catalog handle.
    pub fn catalog_handle(&self) -> Arc<EmojiCatalog> {
        Arc::clone(&self.catalog)
    }

    /// Glyph cache handle.
    pub fn assets(&self) -> &AssetCache {
        &self.assets
    }

    /// Recent-emoji tracker.
    pub fn recent(&self) -> &RecentEmojis {
        &self.recent
    }

    /// Quick-reaction row.
    pub fn reactions(&self) -> &ReactionQueue {
        &self.reactions
    }

    /// Block until cache priming finishes. Returns the number of cached
    /// images, or `None` if priming was off or already awaited.
    pub fn wait_for_prime(&mut self) -> Option<usize> {
        self.prime_handle.take().and_then(|h| h.join().ok())
    }

    /// Segments for `text`.
    pub fn render<'a>(&'a self, text: &'a str) -> TranscodeResult<'a> {
        transcode::to_rendered_segments(text, &self.catalog)
    }

    /// Localized-label form of `text`.
    pub fn label(&self, text: &str) -> String {
        transcode::to_localized_label_string(text, &self.catalog)
    }

    /// Record a picker tap: bump the recent list and return the entry's
    /// segments for insertion. Unknown codes return `None` and are not
    /// recorded.
    pub fn pick(&self, name: &str) -> Option<TranscodeResult<'_>> {
        let entry: &EmojiEntry = self.catalog.lookup(name)?;
        self.recent.record_use(entry.name());
        Some(transcode::wrap_entry(entry))
    }

    /// Recent entries still in the catalog.
    pub fn recent_entries(&self) -> Vec<&EmojiEntry> {
        self.recent.resolve_recent_entries(&self.catalog)
    }
}
