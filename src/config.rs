//! Emoji configuration.
//!
//! Resolves where the packaged emoji resources live and where the persisted
//! state goes. All derived paths hang off [`EmojiConfig::resource_root`].

use std::path::{Path, PathBuf};

/// Environment variable overriding the resource root.
pub const ENV_RESOURCE_ROOT: &str = "ATOMICX_EMOJI_ROOT";
/// Environment variable overriding the strings language.
pub const ENV_LANGUAGE: &str = "ATOMICX_EMOJI_LANG";
/// Environment variable overriding the state file.
pub const ENV_STORE_PATH: &str = "ATOMICX_EMOJI_STORE";

const DEFAULT_RESOURCE_ROOT: &str = "assets/EmojiFace";
const DEFAULT_LANGUAGE: &str = "en";
const STATE_DIR: &str = ".atomicx";
const STATE_FILE: &str = "emoji_state.json";
const DEFAULT_REACTION_SLOTS: usize = 6;

/// Configuration for catalog loading and state persistence.
///
/// # Example
///
/// ```ignore
/// use atomicx_emoji::config::EmojiConfig;
///
/// let config = EmojiConfig::default()
///     .with_resource_root("/opt/chat/EmojiFace")
///     .with_language("zh-Hans")
///     .with_prime_cache(false);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EmojiConfig {
    /// Directory holding `emoji/`, `strings/` and the placeholder asset
    pub resource_root: PathBuf,
    /// Language code selecting `strings/<language>.json`
    pub language: String,
    /// JSON file for the recent list and reaction queue
    pub store_path: PathBuf,
    /// Decode every asset on a background thread after loading
    pub prime_cache: bool,
    /// Length of the quick-reaction row
    pub reaction_slots: usize,
}

impl Default for EmojiConfig {
    fn default() -> Self {
        Self {
            resource_root: PathBuf::from(DEFAULT_RESOURCE_ROOT),
            language: DEFAULT_LANGUAGE.to_string(),
            store_path: default_store_path(),
            prime_cache: true,
            reaction_slots: DEFAULT_REACTION_SLOTS,
        }
    }
}

fn default_store_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(STATE_DIR)
        .join(STATE_FILE)
}

impl EmojiConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resource root.
    pub fn with_resource_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.resource_root = root.into();
        self
    }

    /// Set the strings language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the state file.
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    /// Set whether assets are decoded eagerly.
    pub fn with_prime_cache(mut self, prime: bool) -> Self {
        self.prime_cache = prime;
        self
    }

    /// Set the reaction row length.
    pub fn with_reaction_slots(mut self, slots: usize) -> Self {
        self.reaction_slots = slots;
        self
    }

    /// Defaults overridden by `ATOMICX_EMOJI_ROOT`, `ATOMICX_EMOJI_LANG`
    /// and `ATOMICX_EMOJI_STORE`. Empty values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(root) = env_non_empty(ENV_RESOURCE_ROOT) {
            config = config.with_resource_root(root);
        }
        if let Some(lang) = env_non_empty(ENV_LANGUAGE) {
            config = config.with_language(lang);
        }
        if let Some(store) = env_non_empty(ENV_STORE_PATH) {
            config = config.with_store_path(store);
        }
        config
    }

    /// `<root>/emoji/emoji.json`
    pub fn table_path(&self) -> PathBuf {
        self.resource_root.join("emoji").join("emoji.json")
    }

    /// `<root>/strings/<language>.json`
    pub fn strings_path(&self) -> PathBuf {
        self.resource_root
            .join("strings")
            .join(format!("{}.json", self.language))
    }

    /// `<root>/emoji/emoji_recent_default.json`
    pub fn reaction_defaults_path(&self) -> PathBuf {
        self.resource_root
            .join("emoji")
            .join("emoji_recent_default.json")
    }

    /// Asset drawn for an emoji whose own image cannot be decoded.
    pub fn placeholder_path(&self) -> PathBuf {
        self.resource_root.join("ic_unknown_image@2x.png")
    }

    /// `<root>/emoji/<face_file>@2x.png`
    pub fn asset_path(&self, face_file: &str) -> PathBuf {
        asset_path_under(&self.resource_root, face_file)
    }
}

/// Asset path for `face_file` under `root`.
pub fn asset_path_under(root: &Path, face_file: &str) -> PathBuf {
    root.join("emoji").join(format!("{}@2x.png", face_file))
}

fn env_non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}
