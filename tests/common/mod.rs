//! Shared fixtures for integration tests.
//!
//! ```ignore
//! mod common;
//! let fixture = common::ResourceFixture::new();
//! let config = fixture.config();
//! ```

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use atomicx_emoji::catalog::{EmojiCatalog, EmojiEntry};
use atomicx_emoji::config::EmojiConfig;
use image::{ImageFormat, Rgba, RgbaImage};
use tempfile::TempDir;

/// Codes, files and English labels written by [`ResourceFixture`].
pub const FIXTURE_EMOJI: &[(&str, &str, &str)] = &[
    ("[TUIEmoji_Smile]", "emoji_0", "[Smile]"),
    ("[TUIEmoji_Cry]", "emoji_1", "[Cry]"),
    ("[TUIEmoji_大笑]", "emoji_2", "[Guffaw]"),
    ("[TUIEmoji_Like]", "emoji_3", "[Like]"),
];

/// Small catalog built in memory, no files.
pub fn sample_catalog() -> EmojiCatalog {
    EmojiCatalog::from_entries(
        FIXTURE_EMOJI
            .iter()
            .map(|(name, file, label)| {
                EmojiEntry::new(*name, format!("/res/emoji/{}@2x.png", file), *label)
            })
            .collect(),
    )
}

/// A throwaway resource root with table, strings, defaults and glyphs.
pub struct ResourceFixture {
    pub dir: TempDir,
}

impl ResourceFixture {
    /// Write the full fixture, including PNG glyphs.
    pub fn new() -> Self {
        let fixture = Self::without_glyphs();
        for (_, file, _) in FIXTURE_EMOJI {
            write_png(&fixture.root().join("emoji").join(format!("{}@2x.png", file)));
        }
        write_png(&fixture.root().join("ic_unknown_image@2x.png"));
        fixture
    }

    /// Write table, strings and defaults but no images.
    pub fn without_glyphs() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = dir.path().join("EmojiFace");
        fs::create_dir_all(root.join("emoji")).unwrap();
        fs::create_dir_all(root.join("strings")).unwrap();

        let table: Vec<serde_json::Value> = FIXTURE_EMOJI
            .iter()
            .map(|(name, file, _)| serde_json::json!({ "face_name": name, "face_file": file }))
            .collect();
        fs::write(
            root.join("emoji").join("emoji.json"),
            serde_json::to_string_pretty(&table).unwrap(),
        )
        .unwrap();

        let strings: serde_json::Map<String, serde_json::Value> = FIXTURE_EMOJI
            .iter()
            .map(|(name, _, label)| (name.to_string(), serde_json::Value::from(*label)))
            .collect();
        fs::write(
            root.join("strings").join("en.json"),
            serde_json::to_string_pretty(&strings).unwrap(),
        )
        .unwrap();

        fs::write(
            root.join("emoji").join("emoji_recent_default.json"),
            r#"["[TUIEmoji_Like]", "[TUIEmoji_Smile]", "[TUIEmoji_Cry]"]"#,
        )
        .unwrap();

        Self { dir }
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().join("EmojiFace")
    }

    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("state").join("emoji_state.json")
    }

    /// Config pointing at this fixture, three reaction slots.
    pub fn config(&self) -> EmojiConfig {
        EmojiConfig::new()
            .with_resource_root(self.root())
            .with_store_path(self.store_path())
            .with_reaction_slots(3)
    }
}

pub fn write_png(path: &Path) {
    RgbaImage::from_pixel(2, 2, Rgba([250, 210, 40, 255]))
        .save_with_format(path, ImageFormat::Png)
        .unwrap();
}
