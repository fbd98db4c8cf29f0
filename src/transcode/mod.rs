//! Emoji code transcoding.
//!
//! Converts between the three forms of a message:
//!
//! - raw codes: `"hi[TUIEmoji_Smile]"`, what goes over the wire
//! - rendered: segments (or [`RenderedText`]) with resolved glyph references
//! - localized labels: `"hi[Smile]"`, for previews and notifications
//!
//! Every function here is pure in `(text, catalog)`. A token that does not
//! resolve is kept as literal text; nothing in this module fails.

mod rendered;
mod segment;

use std::ops::Range;

use crate::catalog::{EmojiCatalog, EmojiEntry};
use crate::matcher::{find_codes, has_codes};

pub use rendered::{Attachment, RenderedText, ATTACHMENT_MARKER};
pub use segment::{Segment, TranscodeResult};

/// Which tokens count as an emoji.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolvePolicy {
    /// Only catalog codes, e.g. `[TUIEmoji_Smile]`.
    #[default]
    Name,
    /// Catalog codes or bracketed localized labels, e.g. `[Smile]`. Used for
    /// text typed or pasted into the composer.
    NameOrLabel,
}

impl ResolvePolicy {
    /// Resolve one token against `catalog`.
    pub fn resolve<'c>(&self, catalog: &'c EmojiCatalog, token: &str) -> Option<&'c EmojiEntry> {
        match self {
            ResolvePolicy::Name => catalog.lookup(token),
            ResolvePolicy::NameOrLabel => catalog
                .lookup(token)
                .or_else(|| catalog.lookup_label(token)),
        }
    }
}

/// Split `text` into literal and emoji segments, resolving codes by name.
///
/// # Example
///
/// ```
/// use atomicx_emoji::catalog::{EmojiCatalog, EmojiEntry};
/// use atomicx_emoji::transcode::to_rendered_segments;
///
/// let catalog = EmojiCatalog::from_entries(vec![EmojiEntry::new(
///     "[smile]",
///     "/path/smile.png",
///     "Smile",
/// )]);
/// let result = to_rendered_segments("hi[smile]!", &catalog);
/// assert_eq!(result.len(), 3);
/// assert_eq!(result.emoji_count(), 1);
/// assert_eq!(result.to_raw_code_string(), "hi[smile]!");
/// ```
pub fn to_rendered_segments<'a>(text: &'a str, catalog: &'a EmojiCatalog) -> TranscodeResult<'a> {
    to_rendered_segments_with(text, catalog, ResolvePolicy::Name)
}

/// Split `text` into segments using `policy` to resolve tokens.
///
/// Adjacent literal spans (gaps and unresolved tokens) are merged, so text
/// without resolvable tokens is a single literal.
pub fn to_rendered_segments_with<'a>(
    text: &'a str,
    catalog: &'a EmojiCatalog,
    policy: ResolvePolicy,
) -> TranscodeResult<'a> {
    let mut segments = Vec::new();
    let mut literal_start = 0;

    if !catalog.is_empty() {
        for code in find_codes(text) {
            let Some(entry) = policy.resolve(catalog, code.name) else {
                continue;
            };
            push_literal(&mut segments, text, literal_start..code.range.start);
            segments.push(Segment::Emoji {
                entry,
                source: code.name,
                range: code.range.clone(),
            });
            literal_start = code.range.end;
        }
    }
    push_literal(&mut segments, text, literal_start..text.len());

    TranscodeResult::from_segments(segments)
}

fn push_literal<'a>(segments: &mut Vec<Segment<'a>>, text: &'a str, range: Range<usize>) {
    if range.is_empty() {
        return;
    }
    segments.push(Segment::Literal {
        text: &text[range.clone()],
        range,
    });
}

/// Segments for a single, already-known entry, e.g. a tapped picker cell.
pub fn wrap_entry(entry: &EmojiEntry) -> TranscodeResult<'_> {
    TranscodeResult::from_segments(vec![Segment::Emoji {
        entry,
        source: entry.name(),
        range: 0..entry.name().len(),
    }])
}

/// Raw-code form of rendered segments.
pub fn to_raw_code_string(result: &TranscodeResult<'_>) -> String {
    result.to_raw_code_string()
}

/// Replace every known code in `text` with its localized label.
///
/// Builds the output left to right.
pub fn to_localized_label_string(text: &str, catalog: &EmojiCatalog) -> String {
    if catalog.is_empty() || !has_codes(text) {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for code in find_codes(text) {
        if let Some(entry) = catalog.lookup(code.name) {
            out.push_str(&text[last..code.range.start]);
            out.push_str(entry.localized_name());
            last = code.range.end;
        }
    }
    out.push_str(&text[last..]);
    out
}

/// Same result as [`to_localized_label_string`], computed by editing one
/// buffer from the last match backwards so earlier ranges stay valid.
pub fn to_localized_label_string_in_place(text: &str, catalog: &EmojiCatalog) -> String {
    let mut buffer = text.to_string();
    for code in find_codes(text).iter().rev() {
        if let Some(entry) = catalog.lookup(code.name) {
            buffer.replace_range(code.range.clone(), entry.localized_name());
        }
    }
    buffer
}
