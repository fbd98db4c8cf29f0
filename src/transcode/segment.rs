//! Segment types produced by the transcoder.

use std::ops::Range;

use crate::catalog::EmojiEntry;

use super::rendered::RenderedText;

/// A contiguous piece of transcoded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text kept as-is, including bracket tokens that did not resolve.
    Literal {
        text: &'a str,
        range: Range<usize>,
    },
    /// A bracket token that resolved to a catalog entry.
    Emoji {
        entry: &'a EmojiEntry,
        /// The token as written in the input.
        source: &'a str,
        range: Range<usize>,
    },
}

impl<'a> Segment<'a> {
    /// Byte range in the input.
    pub fn range(&self) -> Range<usize> {
        match self {
            Segment::Literal { range, .. } | Segment::Emoji { range, .. } => range.clone(),
        }
    }

    /// The input text this segment covers.
    pub fn original(&self) -> &'a str {
        match self {
            Segment::Literal { text, .. } => text,
            Segment::Emoji { source, .. } => source,
        }
    }

    /// The resolved entry, for emoji segments.
    pub fn entry(&self) -> Option<&'a EmojiEntry> {
        match self {
            Segment::Literal { .. } => None,
            Segment::Emoji { entry, .. } => Some(entry),
        }
    }

    /// Check if this is an emoji segment.
    pub fn is_emoji(&self) -> bool {
        matches!(self, Segment::Emoji { .. })
    }

    /// Raw-code text: the entry's code for emoji, the text for literals.
    pub fn raw_code(&self) -> &'a str {
        match self {
            Segment::Literal { text, .. } => text,
            Segment::Emoji { entry, .. } => entry.name(),
        }
    }
}

/// Ordered segments covering an input string exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscodeResult<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> TranscodeResult<'a> {
    pub(crate) fn from_segments(segments: Vec<Segment<'a>>) -> Self {
        Self { segments }
    }

    /// All segments, left to right.
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Iterate segments, left to right.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment<'a>> {
        self.segments.iter()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if there are no segments (empty input).
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of emoji segments.
    pub fn emoji_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_emoji()).count()
    }

    /// Resolved entries in order of appearance.
    pub fn entries(&self) -> impl Iterator<Item = &'a EmojiEntry> + '_ {
        self.segments.iter().filter_map(Segment::entry)
    }

    /// Concatenation of every segment's original span; equals the input.
    pub fn original_text(&self) -> String {
        self.segments.iter().map(Segment::original).collect()
    }

    /// Raw-code form: emoji segments emit their code.
    pub fn to_raw_code_string(&self) -> String {
        self.segments.iter().map(Segment::raw_code).collect()
    }

    /// Flatten into the rendered form with inline attachment markers.
    pub fn to_rendered_text(&self) -> RenderedText<'a> {
        RenderedText::from_segments(&self.segments)
    }

    /// Consume into the segment list.
    pub fn into_segments(self) -> Vec<Segment<'a>> {
        self.segments
    }
}

impl<'a> IntoIterator for TranscodeResult<'a> {
    type Item = Segment<'a>;
    type IntoIter = std::vec::IntoIter<Segment<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'r, 'a> IntoIterator for &'r TranscodeResult<'a> {
    type Item = &'r Segment<'a>;
    type IntoIter = std::slice::Iter<'r, Segment<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
