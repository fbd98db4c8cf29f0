//! Flattened rendered form.
//!
//! Each emoji becomes one U+FFFC OBJECT REPLACEMENT CHARACTER in the text,
//! with a side list of attachments saying which entry sits at which byte
//! offset. This is what a composer's text storage holds; a renderer swaps
//! each marker for the entry's glyph.

use crate::catalog::EmojiEntry;

use super::segment::Segment;

/// Marker standing in for an inline glyph.
pub const ATTACHMENT_MARKER: char = '\u{FFFC}';

const MARKER_LEN: usize = ATTACHMENT_MARKER.len_utf8();

/// An inline glyph in a [`RenderedText`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attachment<'a> {
    /// Byte offset of the marker in the rendered text.
    pub offset: usize,
    pub entry: &'a EmojiEntry,
}

/// Text with inline emoji attachments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedText<'a> {
    text: String,
    attachments: Vec<Attachment<'a>>,
}

impl<'a> RenderedText<'a> {
    /// Build from segments.
    ///
    /// Attachment offsets are the segment's input offset shifted by the
    /// running difference between marker and token lengths of every earlier
    /// substitution.
    pub(crate) fn from_segments(segments: &[Segment<'a>]) -> Self {
        let mut text = String::new();
        let mut attachments = Vec::new();
        let mut delta: isize = 0;

        for segment in segments {
            match segment {
                Segment::Literal { text: literal, .. } => text.push_str(literal),
                Segment::Emoji { entry, range, .. } => {
                    let offset = (range.start as isize + delta) as usize;
                    debug_assert_eq!(offset, text.len());
                    text.push(ATTACHMENT_MARKER);
                    attachments.push(Attachment { offset, entry });
                    delta += MARKER_LEN as isize - range.len() as isize;
                }
            }
        }

        Self { text, attachments }
    }

    /// Text with one marker per emoji.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attachments in offset order.
    pub fn attachments(&self) -> &[Attachment<'a>] {
        &self.attachments
    }

    /// Entry at byte `offset`, if a marker sits there.
    pub fn attachment_at(&self, offset: usize) -> Option<&'a EmojiEntry> {
        self.attachments
            .binary_search_by_key(&offset, |a| a.offset)
            .ok()
            .map(|idx| self.attachments[idx].entry)
    }

    /// Number of visible characters, counting each glyph as one.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Convert back to raw codes for sending.
    pub fn to_raw_code_string(&self) -> String {
        let mut raw = String::with_capacity(self.text.len());
        let mut last = 0;
        for attachment in &self.attachments {
            raw.push_str(&self.text[last..attachment.offset]);
            raw.push_str(attachment.entry.name());
            last = attachment.offset + MARKER_LEN;
        }
        raw.push_str(&self.text[last..]);
        raw
    }
}
