//! How post length is counted.
//!
//! Post limits are stated in "characters", which is ambiguous for anything
//! beyond ASCII:
//!
//! ```text
//! "café"  as "cafe\u{301}"   5 chars, 4 graphemes
//! "👍🏽"                       2 chars, 1 grapheme
//! ```
//!
//! [`Measure::Chars`] counts Unicode scalar values and is the default.
//! [`Measure::Graphemes`] counts extended grapheme clusters (UAX #29), so a
//! hard split never tears an accent off its letter or a skin tone off its
//! emoji.

use unicode_segmentation::UnicodeSegmentation;

/// Unit used to measure text against a budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Measure {
    /// Unicode scalar values.
    #[default]
    Chars,
    /// Extended grapheme clusters.
    Graphemes,
}

impl Measure {
    /// Length of `text` in this measure.
    ///
    /// ```rust
    /// use strands::Measure;
    ///
    /// assert_eq!(Measure::Chars.len("cafe\u{301}"), 5);
    /// assert_eq!(Measure::Graphemes.len("cafe\u{301}"), 4);
    /// ```
    #[must_use]
    pub fn len(self, text: &str) -> usize {
        match self {
            Self::Chars => text.chars().count(),
            Self::Graphemes => text.graphemes(true).count(),
        }
    }

    /// Split `text` after its first `n` measured characters.
    ///
    /// The cut always lands on a `char` boundary. If `text` is shorter than
    /// `n`, the tail is empty.
    #[must_use]
    pub fn split_at(self, text: &str, n: usize) -> (&str, &str) {
        let cut = match self {
            Self::Chars => text.char_indices().nth(n).map(|(i, _)| i),
            Self::Graphemes => text.grapheme_indices(true).nth(n).map(|(i, _)| i),
        };
        text.split_at(cut.unwrap_or(text.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_agrees() {
        let text = "hello world";
        assert_eq!(Measure::Chars.len(text), 11);
        assert_eq!(Measure::Graphemes.len(text), 11);
    }

    #[test]
    fn test_split_at_chars() {
        let (head, tail) = Measure::Chars.split_at("a日本語b", 2);
        assert_eq!(head, "a日");
        assert_eq!(tail, "本語b");
    }

    #[test]
    fn test_split_past_end() {
        let (head, tail) = Measure::Chars.split_at("abc", 10);
        assert_eq!(head, "abc");
        assert!(tail.is_empty());
    }

    #[test]
    fn test_graphemes_keep_clusters() {
        let text = "e\u{301}e\u{301}e\u{301}";
        let (head, tail) = Measure::Graphemes.split_at(text, 1);
        assert_eq!(head, "e\u{301}");
        assert_eq!(Measure::Graphemes.len(tail), 2);

        // By scalar values the accent is torn off
        let (head, _) = Measure::Chars.split_at(text, 1);
        assert_eq!(head, "e");
    }
}
