//! Unified error type for catalog, asset and storage failures.

use std::path::PathBuf;

use thiserror::Error;

use super::category::ErrorCategory;
use crate::traits::StorageError;

/// Error type for the fallible `try_*` entry points.
#[derive(Debug, Error)]
pub enum EmojiError {
    /// A packaged table does not exist.
    #[error("emoji table not found: {}", path.display())]
    TableNotFound { path: PathBuf },

    /// Reading a packaged file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A packaged JSON file does not match the expected shape.
    #[error("failed to parse {}: {source}", path.display())]
    TableParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An emoji asset could not be decoded.
    #[error("failed to decode asset {}: {message}", path.display())]
    AssetDecode { path: PathBuf, message: String },

    /// The key-value store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl EmojiError {
    /// Category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            EmojiError::TableNotFound { .. } | EmojiError::Io { .. } => ErrorCategory::Resource,
            EmojiError::TableParse { .. } | EmojiError::AssetDecode { .. } => ErrorCategory::Data,
            EmojiError::Storage(_) => ErrorCategory::Storage,
        }
    }

    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            EmojiError::TableNotFound { .. } => "EMOJI_TABLE_NOT_FOUND",
            EmojiError::Io { .. } => "EMOJI_IO",
            EmojiError::TableParse { .. } => "EMOJI_TABLE_PARSE",
            EmojiError::AssetDecode { .. } => "EMOJI_ASSET_DECODE",
            EmojiError::Storage(_) => "EMOJI_STORAGE",
        }
    }

    /// Map an I/O error on `path`, turning `NotFound` into [`EmojiError::TableNotFound`].
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            EmojiError::TableNotFound { path }
        } else {
            EmojiError::Io { path, source }
        }
    }
}
