//! AtomicX emoji - emoji code transcoding for chat text
//!
//! Converts message text between raw bracket codes (`[TUIEmoji_Smile]`),
//! rendered segments with glyph references, and localized labels, and keeps
//! the picker's recent and quick-reaction rows.

pub mod adapters;
pub mod assets;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod matcher;
pub mod recent;
pub mod traits;
pub mod transcode;

pub use catalog::{EmojiCatalog, EmojiEntry};
pub use context::EmojiContext;
pub use transcode::{
    to_localized_label_string, to_raw_code_string, to_rendered_segments, Segment,
    TranscodeResult,
};
