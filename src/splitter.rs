//! The thread splitter: normalize, tokenize, pack, number.
//!
//! ## Pipeline
//!
//! ```text
//! raw text
//!   │ normalize      blank -> empty thread; "\r\n" -> "\n"
//!   │ units          alternating word / whitespace runs
//!   │ Segmenter      greedy packing against the effective limit
//!   │ number         " i/total" markers (none for a single post)
//!   ▼
//! Vec<Post>
//! ```
//!
//! ## Reserving Room for Markers
//!
//! A marker's width depends on the thread length, which depends on how much
//! room the marker leaves. Two strategies break the cycle:
//!
//! | Reservation | Passes | Budget use |
//! |-------------|--------|------------|
//! | `Static` | 1 | Gives up the full reserve on every post |
//! | `Exact` | 1-3 typically | Reserves only what the realized thread needs |
//!
//! `Exact` starts with no reservation, splits, measures the widest marker the
//! result needs, and splits again with that much reserved until the width
//! stops growing. A wider reserve can only lengthen the thread, so the width
//! climbs monotonically to the smallest one that fits. A text that fits in
//! one post gets the whole limit.

use tracing::{debug, trace};

use crate::{marker_width, normalize, number, units, Budget, Measure, Post, Segment, Segmenter};

/// Passes `Reservation::Exact` makes before settling for the static reserve.
const MAX_EXACT_PASSES: usize = 8;

/// How room for positional markers is set aside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Reservation {
    /// Reserve the budget's fixed worst-case marker width. One pass.
    #[default]
    Static,
    /// Re-split until the reserve matches the realized thread length.
    Exact,
}

/// Splits text into a numbered thread of bounded posts.
///
/// ## Example
///
/// ```rust
/// use strands::ThreadSplitter;
///
/// let splitter = ThreadSplitter::new(50);
/// let text = "The first paragraph is short enough.\n\nSecond paragraph, also short.";
/// let posts = splitter.split(text);
///
/// assert_eq!(posts.len(), 2);
/// assert_eq!(posts[0].text, "The first paragraph is short enough. 1/2");
/// assert!(posts.iter().all(|p| p.text.chars().count() <= 50));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThreadSplitter {
    budget: Budget,
    measure: Measure,
    reservation: Reservation,
}

impl ThreadSplitter {
    /// A splitter for posts of at most `limit` characters.
    ///
    /// Limits below [`MIN_LIMIT`](crate::MIN_LIMIT) are raised to it.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self::default().with_budget(Budget::new(limit))
    }

    /// Use a custom budget.
    #[must_use]
    pub fn with_budget(self, budget: Budget) -> Self {
        Self { budget, ..self }
    }

    /// Count length in the given measure.
    #[must_use]
    pub fn with_measure(self, measure: Measure) -> Self {
        Self { measure, ..self }
    }

    /// Use the given marker reservation strategy.
    #[must_use]
    pub fn with_reservation(self, reservation: Reservation) -> Self {
        Self {
            reservation,
            ..self
        }
    }

    /// The budget in use.
    #[must_use]
    pub fn budget(&self) -> Budget {
        self.budget
    }

    /// The length measure in use.
    #[must_use]
    pub fn measure(&self) -> Measure {
        self.measure
    }

    /// The reservation strategy in use.
    #[must_use]
    pub fn reservation(&self) -> Reservation {
        self.reservation
    }

    /// Split `text` into numbered posts.
    ///
    /// Blank input yields an empty thread.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<Post> {
        number(self.segments(text))
    }

    /// Split `text` into unnumbered post bodies.
    ///
    /// Offsets refer to the normalized text, which differs from `text` only
    /// when it contains `\r\n` line endings or a byte-order mark.
    #[must_use]
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        let Some(text) = normalize(Some(text)) else {
            trace!("blank input, nothing to split");
            return vec![];
        };

        let segments = match self.reservation {
            Reservation::Static => self.pack(&text, self.budget.effective()),
            Reservation::Exact => self.pack_exact(&text),
        };

        debug!(
            requested = self.budget.requested(),
            limit = self.budget.limit(),
            reservation = ?self.reservation,
            segments = segments.len(),
            "split text"
        );
        segments
    }

    fn pack(&self, text: &str, limit: usize) -> Vec<Segment> {
        let mut segmenter = Segmenter::new(text, limit, self.measure);
        for unit in units(text) {
            segmenter.push(unit);
        }
        segmenter.finish()
    }

    fn pack_exact(&self, text: &str) -> Vec<Segment> {
        let limit = self.budget.limit();
        let mut reserve = 0;

        for pass in 0..MAX_EXACT_PASSES {
            if reserve >= limit {
                break;
            }
            let segments = self.pack(text, limit - reserve);
            let needed = marker_width(segments.len());
            trace!(pass, reserve, needed, "exact reservation pass");
            if needed <= reserve {
                return segments;
            }
            reserve = needed;
        }

        debug!("exact reservation did not settle, using static reserve");
        self.pack(text, self.budget.effective())
    }
}

/// Split `text` into ready-to-post strings of at most `limit` characters.
///
/// Absent, empty, and whitespace-only input give an empty thread. Limits
/// below [`MIN_LIMIT`](crate::MIN_LIMIT) are raised to it. Every post of a
/// multi-post thread ends with its `" i/total"` marker.
///
/// ```rust
/// use strands::segment;
///
/// assert_eq!(segment(Some("hello world"), 280), ["hello world"]);
/// assert!(segment(None, 280).is_empty());
/// ```
#[must_use]
pub fn segment(text: Option<&str>, limit: usize) -> Vec<String> {
    let Some(text) = text else {
        return vec![];
    };
    ThreadSplitter::new(limit)
        .split(text)
        .into_iter()
        .map(|post| post.text)
        .collect()
}
