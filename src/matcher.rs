//! Bracket-token scanner.
//!
//! Finds every `[name]` token in a string, where `name` is one or more ASCII
//! letters, digits, underscores or CJK ideographs (U+4E00..=U+9FA5). The
//! scan is lexical only; deciding which tokens are real emoji is left to the
//! transcoder.
//!
//! Ranges are byte offsets into the scanned `&str` and always fall on char
//! boundaries, so they can be used to slice the same string directly.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

static EMOJI_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\[[a-z0-9_\x{4e00}-\x{9fa5}]+\]").expect("Invalid emoji code regex")
});

/// One bracket token found in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeMatch<'a> {
    /// Byte range of the token, brackets included.
    pub range: Range<usize>,
    /// The token text, brackets included.
    pub name: &'a str,
}

impl CodeMatch<'_> {
    /// Token length in bytes.
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Always false; the grammar has no empty tokens.
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// All bracket tokens in `text`, left to right, non-overlapping.
pub fn find_codes(text: &str) -> Vec<CodeMatch<'_>> {
    EMOJI_CODE_REGEX
        .find_iter(text)
        .map(|m| CodeMatch {
            range: m.range(),
            name: m.as_str(),
        })
        .collect()
}

/// Check whether `text` contains at least one bracket token.
pub fn has_codes(text: &str) -> bool {
    EMOJI_CODE_REGEX.is_match(text)
}
