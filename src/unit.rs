//! Tokenization into alternating word and whitespace runs.
//!
//! ```text
//! "Hi  there,\nfriend"
//!
//!  "Hi" "  " "there," "\n" "friend"
//!  Word Space Word    Space Word
//! ```
//!
//! Nothing is dropped: joining the units in order gives back the input.

/// Kind of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// A maximal run of non-whitespace characters.
    Word,
    /// A maximal run of whitespace characters.
    Space,
}

/// A maximal run of one kind of character, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit<'a> {
    /// The run itself.
    pub text: &'a str,
    /// Byte offset of the run in the input.
    pub start: usize,
    /// Whether the run is a word or whitespace.
    pub kind: UnitKind,
}

impl Unit<'_> {
    /// Byte offset just past the run.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Whether the run is whitespace.
    #[must_use]
    pub fn is_space(&self) -> bool {
        self.kind == UnitKind::Space
    }
}

/// Iterate over the units of `text`.
///
/// ```rust
/// use strands::{units, UnitKind};
///
/// let kinds: Vec<_> = units(" a b").map(|u| u.kind).collect();
/// assert_eq!(
///     kinds,
///     [UnitKind::Space, UnitKind::Word, UnitKind::Space, UnitKind::Word]
/// );
/// ```
#[must_use]
pub fn units(text: &str) -> Units<'_> {
    Units { text, offset: 0 }
}

/// Iterator returned by [`units`].
#[derive(Debug, Clone)]
pub struct Units<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Iterator for Units<'a> {
    type Item = Unit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.offset..];
        let first = rest.chars().next()?;
        let space = first.is_whitespace();

        let len = rest
            .char_indices()
            .find(|&(_, c)| c.is_whitespace() != space)
            .map_or(rest.len(), |(i, _)| i);

        let unit = Unit {
            text: &rest[..len],
            start: self.offset,
            kind: if space { UnitKind::Space } else { UnitKind::Word },
        };
        self.offset += len;
        Some(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_runs() {
        let texts: Vec<_> = units("Hi  there,\nfriend").map(|u| u.text).collect();
        assert_eq!(texts, ["Hi", "  ", "there,", "\n", "friend"]);
    }

    #[test]
    fn test_offsets() {
        let all: Vec<_> = units("ab  cd").collect();
        assert_eq!(all[0].start, 0);
        assert_eq!(all[1].start, 2);
        assert_eq!(all[2].start, 4);
        assert_eq!(all[2].end(), 6);
    }

    #[test]
    fn test_reconstructs_input() {
        let text = "  Leading,\n\n\ttabs and 日本語 text  ";
        let joined: String = units(text).map(|u| u.text).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_empty() {
        assert_eq!(units("").count(), 0);
    }

    #[test]
    fn test_unicode_whitespace() {
        let all: Vec<_> = units("a\u{3000}b").collect();
        assert_eq!(all.len(), 3);
        assert!(all[1].is_space());
    }
}
