//! The Segment type: one post body with position metadata.

use std::fmt;
use std::ops::Range;

use crate::Measure;

/// One post body, before any marker is appended.
///
/// ## Byte Offsets
///
/// `start` and `end` are byte offsets into the *normalized* text (line
/// endings folded to `\n`), not into the raw input. Segments are trimmed,
/// so the whitespace between two segments belongs to neither:
///
/// ```rust
/// use strands::ThreadSplitter;
///
/// let text = "alpha beta gamma";
/// let splitter = ThreadSplitter::new(30);
/// let segments = splitter.segments(text);
///
/// assert_eq!(&text[segments[0].span()], segments[0].text);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Segment {
    /// The trimmed body text.
    pub text: String,
    /// Byte offset where this segment starts in the normalized text.
    pub start: usize,
    /// Byte offset where this segment ends (exclusive) in the normalized text.
    pub end: usize,
    /// Zero-based index of this segment in the thread.
    pub index: usize,
}

impl Segment {
    /// A body covering `start..end` at position `index`.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }

    /// How much of a post's budget the body uses.
    ///
    /// ```rust
    /// use strands::{Measure, Segment};
    ///
    /// let body = Segment::new("cafe\u{301}", 0, 6, 0);
    /// assert_eq!(body.width(Measure::Chars), 5);
    /// assert_eq!(body.width(Measure::Graphemes), 4);
    /// ```
    #[must_use]
    pub fn width(&self, measure: Measure) -> usize {
        measure.len(&self.text)
    }

    /// Where the body came from in the normalized text.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// One line per body, numbered from 1: `#2 @14..27 "text"`.
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} @{}..{} {:?}",
            self.index + 1,
            self.start,
            self.end,
            self.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_by_measure() {
        let body = Segment::new("👍🏽 ok", 0, 11, 0);
        assert_eq!(body.width(Measure::Chars), 5);
        assert_eq!(body.width(Measure::Graphemes), 4);
    }

    #[test]
    fn test_display_numbers_from_one() {
        let body = Segment::new("second post", 14, 25, 1);
        assert_eq!(body.to_string(), "#2 @14..25 \"second post\"");
    }
}
