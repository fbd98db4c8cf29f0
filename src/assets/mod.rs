//! Decoded emoji glyph cache.
//!
//! The cache is best-effort. [`AssetCache::prime`] fills it from a
//! background thread right after the catalog loads; any lookup that arrives
//! first, or that asks for an asset the worker could not decode, decodes
//! synchronously instead of waiting.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::thread::JoinHandle;

use image::{DynamicImage, ImageReader};

use crate::error::{EmojiError, EmojiResult};

type ImageMap = HashMap<PathBuf, Arc<DynamicImage>>;

/// Shared cache of decoded emoji images keyed by asset path.
///
/// Cloning is cheap; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct AssetCache {
    images: Arc<RwLock<ImageMap>>,
    placeholder: Option<PathBuf>,
}

impl AssetCache {
    /// Create an empty cache without a placeholder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the asset returned by [`AssetCache::get_or_placeholder`] on a miss.
    pub fn with_placeholder(mut self, path: impl Into<PathBuf>) -> Self {
        self.placeholder = Some(path.into());
        self
    }

    /// Decode `paths` on a background thread.
    ///
    /// Returns the worker handle, which yields the number of images cached.
    /// Dropping the handle detaches the worker. Returns `None` when there is
    /// nothing to do or the thread could not be spawned.
    pub fn prime(&self, paths: Vec<PathBuf>) -> Option<JoinHandle<usize>> {
        if paths.is_empty() {
            return None;
        }

        let cache = self.clone();
        let spawned = std::thread::Builder::new()
            .name("emoji-cache-prime".to_string())
            .spawn(move || {
                let total = paths.len();
                let mut cached = 0;
                for path in paths {
                    if cache.contains(&path) {
                        cached += 1;
                        continue;
                    }
                    match try_decode(&path) {
                        Ok(image) => {
                            cache.write().insert(path, Arc::new(image));
                            cached += 1;
                        }
                        Err(e) => tracing::debug!("Emoji prime skipped: {}", e),
                    }
                }
                tracing::info!("Primed {} of {} emoji assets", cached, total);
                cached
            });

        match spawned {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::warn!("Failed to spawn emoji cache worker: {}", e);
                None
            }
        }
    }

    /// Decoded image for `path`.
    ///
    /// Cache hit first; otherwise decode now, trying `path` and then
    /// `path.gif` for GIF assets stored without their suffix. Successful
    /// lazy decodes are memoized.
    pub fn get(&self, path: &Path) -> Option<Arc<DynamicImage>> {
        if path.as_os_str().is_empty() {
            return None;
        }
        if let Some(image) = self.read().get(path) {
            return Some(Arc::clone(image));
        }

        let decoded = try_decode(path).or_else(|first_err| {
            if path.to_string_lossy().contains(".gif") {
                return Err(first_err);
            }
            try_decode(&with_gif_suffix(path))
        });

        match decoded {
            Ok(image) => {
                let image = Arc::new(image);
                self.write().insert(path.to_path_buf(), Arc::clone(&image));
                Some(image)
            }
            Err(e) => {
                tracing::debug!("Emoji asset unavailable: {}", e);
                None
            }
        }
    }

    /// Image for `path`, or the placeholder when it cannot be decoded.
    pub fn get_or_placeholder(&self, path: &Path) -> Option<Arc<DynamicImage>> {
        self.get(path)
            .or_else(|| self.placeholder.as_deref().and_then(|p| self.get(p)))
    }

    /// Check whether `path` is already decoded.
    pub fn contains(&self, path: &Path) -> bool {
        self.read().contains_key(path)
    }

    /// Number of cached images.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, ImageMap> {
        self.images.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ImageMap> {
        self.images.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Decode the image at `path`, sniffing the format from its contents.
pub fn try_decode(path: &Path) -> EmojiResult<DynamicImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| EmojiError::from_io(path, e))?
        .with_guessed_format()
        .map_err(|e| EmojiError::from_io(path, e))?;
    reader.decode().map_err(|e| EmojiError::AssetDecode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn with_gif_suffix(path: &Path) -> PathBuf {
    let mut raw: OsString = path.as_os_str().to_owned();
    raw.push(".gif");
    PathBuf::from(raw)
}
