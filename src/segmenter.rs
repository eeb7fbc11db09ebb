//! Greedy packing of units into bounded segments.
//!
//! ## The Algorithm
//!
//! Units (words and whitespace runs) are fed one at a time into an
//! accumulator with two states:
//!
//! ```text
//!              unit fits                      unit fits
//!   ┌───────┐ ───────────▶ ┌──────────────┐ ◀──────────┐
//!   │ Empty │              │ Accumulating │ ───────────┘
//!   └───────┘ ◀─────────── └──────────────┘
//!          overflow: flush, re-enter with the unit (words only)
//!          oversize: flush, emit hard-split pieces, keep the remainder
//! ```
//!
//! With an effective limit of 12:
//!
//! ```text
//! "The quick brown fox"
//!
//! "The"        Empty        -> Accumulating "The"
//! " "          fits         -> "The "
//! "quick"      fits         -> "The quick"        (9)
//! " "          fits         -> "The quick "       (10)
//! "brown"      overflow     -> flush "The quick", Accumulating "brown"
//! " fox"       fits         -> "brown fox"
//! end                       -> flush "brown fox"
//! ```
//!
//! ## Whitespace
//!
//! Whitespace never starts a segment and never carries over a boundary: a
//! whitespace run that arrives while `Empty`, or that does not fit, is
//! dropped. Whitespace inside a segment (including blank lines between
//! paragraphs) is kept verbatim.
//!
//! ## Oversize Words
//!
//! A word longer than the limit (a URL, a hash) cannot be kept whole. It is
//! cut into pieces of exactly `limit` characters; every full piece becomes
//! its own segment and the remainder starts the next accumulation, so the
//! text after it can still join it.

use tracing::trace;

use crate::{Measure, Segment, Unit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Empty,
    Accumulating {
        start: usize,
        end: usize,
        width: usize,
    },
}

/// Accumulator that packs units into segments of at most `limit` characters.
///
/// Normally driven by [`ThreadSplitter`](crate::ThreadSplitter); exposed for
/// callers that tokenize their own input.
///
/// ```rust
/// use strands::{units, Measure, Segmenter};
///
/// let text = "one two three";
/// let mut segmenter = Segmenter::new(text, 8, Measure::Chars);
/// for unit in units(text) {
///     segmenter.push(unit);
/// }
/// let segments = segmenter.finish();
///
/// assert_eq!(segments[0].text, "one two");
/// assert_eq!(segments[1].text, "three");
/// ```
#[derive(Debug, Clone)]
pub struct Segmenter<'a> {
    text: &'a str,
    limit: usize,
    measure: Measure,
    state: State,
    segments: Vec<Segment>,
}

impl<'a> Segmenter<'a> {
    /// Start packing units of `text` into segments of at most `limit`
    /// characters.
    ///
    /// # Panics
    ///
    /// Panics if `limit == 0`.
    #[must_use]
    pub fn new(text: &'a str, limit: usize, measure: Measure) -> Self {
        assert!(limit > 0, "limit must be > 0");
        Self {
            text,
            limit,
            measure,
            state: State::Empty,
            segments: Vec::new(),
        }
    }

    /// Feed the next unit.
    ///
    /// Units must come from the same text, in order.
    pub fn push(&mut self, unit: Unit<'a>) {
        let width = self.measure.len(unit.text);

        if !unit.is_space() && width > self.limit {
            self.oversize(unit);
        } else if self.fits(width) {
            self.extend(unit, width);
        } else {
            self.overflow(unit, width);
        }
    }

    /// Flush what is left and return the segments in order.
    #[must_use]
    pub fn finish(mut self) -> Vec<Segment> {
        self.flush();
        self.segments
    }

    fn fits(&self, width: usize) -> bool {
        match self.state {
            State::Empty => width <= self.limit,
            State::Accumulating { width: current, .. } => current + width <= self.limit,
        }
    }

    /// Empty/Accumulating --unit fits--> Accumulating.
    fn extend(&mut self, unit: Unit<'a>, width: usize) {
        self.state = match self.state {
            State::Empty if unit.is_space() => State::Empty,
            State::Empty => State::Accumulating {
                start: unit.start,
                end: unit.end(),
                width,
            },
            State::Accumulating {
                start,
                width: current,
                ..
            } => State::Accumulating {
                start,
                end: unit.end(),
                width: current + width,
            },
        };
    }

    /// Accumulating --unit doesn't fit--> Empty --> Accumulating.
    fn overflow(&mut self, unit: Unit<'a>, width: usize) {
        self.flush();
        if unit.is_space() {
            trace!(start = unit.start, "dropping whitespace at boundary");
        } else {
            self.extend(unit, width);
        }
    }

    /// * --oversize unit--> Empty --> Accumulating (remainder).
    fn oversize(&mut self, unit: Unit<'a>) {
        self.flush();
        trace!(start = unit.start, len = unit.text.len(), "hard-splitting oversize word");

        let mut start = unit.start;
        let mut rest = unit.text;
        loop {
            let (piece, tail) = self.measure.split_at(rest, self.limit);
            if tail.is_empty() {
                self.state = State::Accumulating {
                    start,
                    end: start + piece.len(),
                    width: self.measure.len(piece),
                };
                break;
            }
            self.emit(start, start + piece.len());
            start += piece.len();
            rest = tail;
        }
    }

    fn flush(&mut self) {
        if let State::Accumulating { start, end, .. } = std::mem::replace(&mut self.state, State::Empty) {
            self.emit(start, end);
        }
    }

    fn emit(&mut self, start: usize, end: usize) {
        let raw = &self.text[start..end];
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }

        let start = start + (raw.len() - raw.trim_start().len());
        let end = start + trimmed.len();
        let index = self.segments.len();
        trace!(index, start, end, "segment complete");
        self.segments.push(Segment::new(trimmed, start, end, index));
    }
}
