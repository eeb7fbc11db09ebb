//! Positional markers.
//!
//! Once the thread is split, its length is known and each post gets a
//! `" i/total"` suffix:
//!
//! ```text
//! ["First part", "second part"]  ->  ["First part 1/2", "second part 2/2"]
//! ["Only part"]                  ->  ["Only part"]
//! ```
//!
//! Numbering never re-checks length. The body was already packed against a
//! budget that reserved room for the marker; see [`Budget`](crate::Budget).

use std::fmt;

use crate::{Measure, Segment};

/// The `" i/total"` suffix of a post in a multi-post thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Marker {
    /// Zero-based position of the post.
    pub index: usize,
    /// Number of posts in the thread.
    pub total: usize,
}

impl Marker {
    /// Rendered width in characters, leading space included.
    ///
    /// ```rust
    /// use strands::Marker;
    ///
    /// assert_eq!(Marker { index: 0, total: 12 }.width(), 5); // " 1/12"
    /// ```
    #[must_use]
    pub fn width(&self) -> usize {
        self.to_string().len()
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " {}/{}", self.index + 1, self.total)
    }
}

/// A finished post, ready to display or copy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Post {
    /// Body and marker together: the text to publish.
    pub text: String,
    /// The body this post was built from.
    pub segment: Segment,
    /// The marker, absent for single-post threads.
    pub marker: Option<Marker>,
}

impl Post {
    /// The body without its marker.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.segment.text
    }

    /// Zero-based position in the thread.
    #[must_use]
    pub fn index(&self) -> usize {
        self.segment.index
    }

    /// Length of the published text in `measure`, marker included.
    ///
    /// Markers are ASCII, so they weigh the same in every measure.
    #[must_use]
    pub fn width(&self, measure: Measure) -> usize {
        self.segment.width(measure) + self.marker.as_ref().map_or(0, Marker::width)
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Append positional markers to a split thread.
///
/// An empty thread stays empty and a single segment stays unmarked.
///
/// ```rust
/// use strands::{number, Segment};
///
/// let posts = number(vec![
///     Segment::new("first", 0, 5, 0),
///     Segment::new("second", 6, 12, 1),
/// ]);
/// assert_eq!(posts[0].text, "first 1/2");
/// assert_eq!(posts[1].text, "second 2/2");
/// ```
#[must_use]
pub fn number(segments: Vec<Segment>) -> Vec<Post> {
    let total = segments.len();

    segments
        .into_iter()
        .enumerate()
        .map(|(index, segment)| {
            let body = segment.text.trim();
            let (text, marker) = if total > 1 {
                let marker = Marker { index, total };
                (format!("{body}{marker}"), Some(marker))
            } else {
                (body.to_string(), None)
            };
            Post {
                text,
                segment,
                marker,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(texts: &[&str]) -> Vec<Segment> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Segment::new(*t, 0, t.len(), i))
            .collect()
    }

    #[test]
    fn test_empty_stays_empty() {
        assert!(number(vec![]).is_empty());
    }

    #[test]
    fn test_single_unmarked() {
        let posts = number(segments(&["alone"]));
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].text, "alone");
        assert!(posts[0].marker.is_none());
    }

    #[test]
    fn test_markers_one_based() {
        let posts = number(segments(&["a", "b", "c"]));
        let texts: Vec<_> = posts.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, ["a 1/3", "b 2/3", "c 3/3"]);
        assert_eq!(posts[2].marker, Some(Marker { index: 2, total: 3 }));
        assert_eq!(posts[1].body(), "b");
    }

    #[test]
    fn test_marker_width_matches_render() {
        let marker = Marker {
            index: 99,
            total: 100,
        };
        assert_eq!(marker.to_string(), " 100/100");
        assert_eq!(marker.width(), crate::marker_width(100));
    }

    #[test]
    fn test_post_width_counts_marker() {
        let posts = number(segments(&["e\u{301}e\u{301}", "x"]));
        assert_eq!(posts[0].width(Measure::Graphemes), 2 + 4);
        assert_eq!(posts[0].width(Measure::Chars), posts[0].text.chars().count());
        assert_eq!(number(segments(&["solo"]))[0].width(Measure::Chars), 4);
    }
}
