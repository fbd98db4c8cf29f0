// Checks the emoji tables shipped under assets/EmojiFace.

use std::path::PathBuf;

use atomicx_emoji::catalog::table::{read_name_list, read_table};
use atomicx_emoji::catalog::{EmojiCatalog, StringsTable};
use atomicx_emoji::config::EmojiConfig;

fn packaged_config(language: &str) -> EmojiConfig {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("EmojiFace");
    EmojiConfig::new()
        .with_resource_root(root)
        .with_language(language)
}

#[test]
fn test_packaged_table_parses() {
    let config = packaged_config("en");
    let records = read_table(&config.table_path()).unwrap();
    assert!(!records.is_empty());
    assert!(records.iter().all(|r| r.usable().is_some()));
}

#[test]
fn test_every_code_has_english_and_chinese_labels() {
    for language in ["en", "zh-Hans"] {
        let config = packaged_config(language);
        let strings = StringsTable::try_load(&config.strings_path()).unwrap();
        let catalog = EmojiCatalog::try_load(&config.table_path(), &config.resource_root, &strings)
            .unwrap();

        for entry in &catalog {
            assert_ne!(
                entry.localized_name(),
                entry.name(),
                "{} has no {} label",
                entry.name(),
                language
            );
        }
    }
}

#[test]
fn test_packaged_reaction_defaults_are_known_codes() {
    let config = packaged_config("en");
    let strings = StringsTable::load(&config.strings_path());
    let catalog = EmojiCatalog::load(&config.table_path(), &config.resource_root, &strings);
    let defaults = read_name_list(&config.reaction_defaults_path()).unwrap();

    assert!(!defaults.is_empty());
    for name in &defaults {
        assert!(catalog.contains(name), "{} missing from catalog", name);
    }
}
