//! Per-post character budget.
//!
//! ## The Problem
//!
//! Every post in a multi-post thread ends with a marker like `" 3/12"`. The
//! marker eats into the post's budget, but its width depends on how many
//! posts the thread ends up with, which is only known once splitting is done.
//!
//! ```text
//! limit 280, thread of 9 posts:     " 9/9"       4 chars
//! limit 280, thread of 120 posts:   " 120/120"   8 chars
//! ```
//!
//! ## The Solution: Reserve Up Front
//!
//! [`Budget`] subtracts a fixed worst-case marker width from the requested
//! limit before any splitting happens:
//!
//! ```text
//! effective = max(requested, floor) - reserve
//! ```
//!
//! The default reserve of [`MARKER_RESERVE`] (12) covers every marker up to
//! `" 99999/99999"`, so threads of up to 99 999 posts never overflow the
//! requested limit. Short threads give up a few unused characters per post;
//! in exchange, splitting runs exactly once.
//!
//! The floor keeps tiny or zero limits from collapsing the budget: any limit
//! below [`MIN_LIMIT`] is treated as [`MIN_LIMIT`].

/// Limit used when none is given: one classic post.
pub const DEFAULT_LIMIT: usize = 280;

/// Requested limits below this are raised to it.
pub const MIN_LIMIT: usize = 30;

/// Characters set aside for the positional marker.
///
/// Holds `" 99999/99999"`; see [`Budget::max_safe_total`].
pub const MARKER_RESERVE: usize = 12;

/// Character budget for one post, with the marker reserve split out.
///
/// # Examples
///
/// ```rust
/// use strands::Budget;
///
/// let budget = Budget::new(280);
/// assert_eq!(budget.requested(), 280);
/// assert_eq!(budget.effective(), 268);
///
/// // Tiny limits are clamped to the floor
/// let budget = Budget::new(5);
/// assert_eq!(budget.limit(), 30);
/// assert_eq!(budget.effective(), 18);
///
/// // Custom reserve
/// let budget = Budget::new(280).with_reserve(10).unwrap();
/// assert_eq!(budget.effective(), 270);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Budget {
    requested: usize,
    floor: usize,
    reserve: usize,
}

impl Budget {
    /// A budget for `requested` characters per post with the default floor
    /// and marker reserve.
    #[must_use]
    pub const fn new(requested: usize) -> Self {
        Self {
            requested,
            floor: MIN_LIMIT,
            reserve: MARKER_RESERVE,
        }
    }

    /// The limit the caller asked for, before clamping.
    #[must_use]
    pub const fn requested(&self) -> usize {
        self.requested
    }

    /// The smallest limit honored.
    #[must_use]
    pub const fn floor(&self) -> usize {
        self.floor
    }

    /// Characters set aside for the marker.
    #[must_use]
    pub const fn reserve(&self) -> usize {
        self.reserve
    }

    /// The limit actually used: the requested limit raised to the floor.
    ///
    /// Every finished post, marker included, fits within this.
    #[must_use]
    pub const fn limit(&self) -> usize {
        if self.requested < self.floor {
            self.floor
        } else {
            self.requested
        }
    }

    /// Characters available to the post body once the marker is reserved.
    ///
    /// Always at least 1.
    #[must_use]
    pub const fn effective(&self) -> usize {
        self.limit() - self.reserve
    }

    /// Change the floor.
    ///
    /// # Errors
    ///
    /// Fails when `floor` is zero or does not leave room beyond the reserve.
    pub fn with_floor(self, floor: usize) -> Result<Self, BudgetError> {
        Self::checked(self.requested, floor, self.reserve)
    }

    /// Change the marker reserve.
    ///
    /// A reserve of zero disables room for markers; only use it when the
    /// output is known to fit in a single post.
    ///
    /// # Errors
    ///
    /// Fails when `reserve` would leave no room for text at the floor.
    pub fn with_reserve(self, reserve: usize) -> Result<Self, BudgetError> {
        Self::checked(self.requested, self.floor, reserve)
    }

    fn checked(requested: usize, floor: usize, reserve: usize) -> Result<Self, BudgetError> {
        if floor == 0 {
            return Err(BudgetError::ZeroFloor);
        }
        if reserve >= floor {
            return Err(BudgetError::ReserveExceedsFloor { floor, reserve });
        }
        Ok(Self {
            requested,
            floor,
            reserve,
        })
    }

    /// The largest thread whose widest marker still fits the reserve.
    ///
    /// ```rust
    /// use strands::Budget;
    ///
    /// assert_eq!(Budget::new(280).max_safe_total(), 99_999);
    /// assert_eq!(Budget::new(280).with_reserve(10).unwrap().max_safe_total(), 9_999);
    /// ```
    #[must_use]
    pub fn max_safe_total(&self) -> usize {
        // " n/n" costs two characters plus twice the digit count
        let digits = self.reserve.saturating_sub(2) / 2;
        match digits {
            0 => 1,
            d if d >= 19 => usize::MAX,
            d => 10usize.pow(d as u32) - 1,
        }
    }

    /// Whether markers for a thread of `total` posts fit the reserve.
    #[must_use]
    pub fn covers(&self, total: usize) -> bool {
        marker_width(total) <= self.reserve
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl From<usize> for Budget {
    fn from(requested: usize) -> Self {
        Self::new(requested)
    }
}

/// Width of the widest marker in a thread of `total` posts.
///
/// The last marker, `" {total}/{total}"`, is always the widest. Single-post
/// threads carry no marker.
///
/// ```rust
/// use strands::marker_width;
///
/// assert_eq!(marker_width(1), 0);
/// assert_eq!(marker_width(9), 4);    // " 9/9"
/// assert_eq!(marker_width(10), 6);   // " 10/10"
/// ```
#[must_use]
pub fn marker_width(total: usize) -> usize {
    if total <= 1 {
        return 0;
    }
    2 + 2 * digit_count(total)
}

fn digit_count(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Error when configuring a budget.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BudgetError {
    /// The floor must be positive.
    #[error("floor must be > 0")]
    ZeroFloor,

    /// The reserve must leave at least one character at the floor.
    #[error("reserve ({reserve}) must be < floor ({floor})")]
    ReserveExceedsFloor {
        /// The configured floor.
        floor: usize,
        /// The reserve that was too large.
        reserve: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budget() {
        let budget = Budget::default();
        assert_eq!(budget.requested(), DEFAULT_LIMIT);
        assert_eq!(budget.effective(), DEFAULT_LIMIT - MARKER_RESERVE);
    }

    #[test]
    fn test_floor_clamp() {
        for requested in [0, 1, 10, MIN_LIMIT - 1, MIN_LIMIT] {
            let budget = Budget::new(requested);
            assert_eq!(budget.limit(), MIN_LIMIT);
            assert_eq!(budget.effective(), MIN_LIMIT - MARKER_RESERVE);
        }
        assert_eq!(Budget::new(MIN_LIMIT + 1).limit(), MIN_LIMIT + 1);
    }

    #[test]
    fn test_effective_never_zero() {
        let budget = Budget::new(0).with_floor(13).unwrap();
        assert_eq!(budget.effective(), 1);
    }

    #[test]
    fn test_reserve_exceeds_floor_error() {
        let err = Budget::new(280).with_reserve(MIN_LIMIT).unwrap_err();
        assert_eq!(
            err,
            BudgetError::ReserveExceedsFloor {
                floor: MIN_LIMIT,
                reserve: MIN_LIMIT
            }
        );
        assert!(Budget::new(280).with_floor(0).is_err());
        assert!(Budget::new(280).with_floor(MARKER_RESERVE).is_err());
    }

    #[test]
    fn test_marker_width() {
        assert_eq!(marker_width(0), 0);
        assert_eq!(marker_width(1), 0);
        assert_eq!(marker_width(2), 4);
        assert_eq!(marker_width(99), 6);
        assert_eq!(marker_width(100), 8);
        assert_eq!(marker_width(99_999), 12);
        assert_eq!(marker_width(100_000), 14);
    }

    #[test]
    fn test_reserve_covers_safe_range() {
        let budget = Budget::default();
        assert!(budget.covers(budget.max_safe_total()));
        assert!(!budget.covers(budget.max_safe_total() + 1));

        let narrow = Budget::new(280).with_reserve(4).unwrap();
        assert_eq!(narrow.max_safe_total(), 9);
        assert_eq!(Budget::new(280).with_reserve(0).unwrap().max_safe_total(), 1);
    }
}
