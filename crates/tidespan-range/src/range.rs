// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::progression::TemporalProgression;
use smallvec::{SmallVec, smallvec};
use std::cmp::{max, min};
use tidespan_core::{
    instant::Temporal,
    step::{InvalidStepError, Step},
};

/// A closed inclusive interval `[start, end_inclusive]` over an instant type.
///
/// A range where `start > end_inclusive` is the legal empty state, not an
/// error; all empty ranges compare equal regardless of their bounds. Ranges
/// are immutable `Copy` values with no shared mutable state.
///
/// # Examples
///
/// ```rust
/// # use chrono::NaiveDate;
/// # use tidespan_range::range::TemporalRange;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// let range = TemporalRange::new(start, end);
///
/// assert!(range.contains(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
/// assert!(!range.is_empty());
/// assert_eq!(format!("{}", range), "2024-01-01..2024-01-31");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TemporalRange<T>
where
    T: Temporal,
{
    start: T,
    end_inclusive: T,
}

impl<T> TemporalRange<T>
where
    T: Temporal,
{
    /// Creates a new range. Total: reversed bounds produce an empty range.
    #[inline]
    pub const fn new(start: T, end_inclusive: T) -> Self {
        Self {
            start,
            end_inclusive,
        }
    }

    /// Creates a range from two bounds in either order, swapping them when
    /// needed. The result is never empty; equal bounds give a single-element
    /// range. Idempotent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chrono::NaiveDate;
    /// # use tidespan_range::range::TemporalRange;
    ///
    /// let a = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    /// let b = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    ///
    /// let range = TemporalRange::from_closed_range(a, b);
    /// assert_eq!(range, TemporalRange::from_closed_range(b, a));
    /// assert_eq!(range.start(), b);
    /// assert_eq!(range.end_inclusive(), a);
    /// ```
    #[inline]
    pub fn from_closed_range(a: T, b: T) -> Self {
        if a <= b { Self::new(a, b) } else { Self::new(b, a) }
    }

    /// The canonical empty range, anchored one finest-unit step above the
    /// epoch. Every empty range compares equal to it.
    pub fn empty() -> Self {
        let end_inclusive = T::epoch();
        let start = end_inclusive
            .checked_add(T::FINEST, 1)
            .expect("TemporalRange: epoch must admit one forward step at the finest unit");
        Self {
            start,
            end_inclusive,
        }
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub const fn end_inclusive(&self) -> T {
        self.end_inclusive
    }

    /// Returns `true` if the range contains no instants.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start > self.end_inclusive
    }

    /// Returns `true` if `value` lies within the bounds. Always `false` for
    /// an empty range.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.start <= value && value <= self.end_inclusive
    }

    /// Returns `true` if both ranges are non-empty and share at least one
    /// instant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidespan_core::ticks::Timestamp;
    /// # use tidespan_range::range::TemporalRange;
    ///
    /// let a = TemporalRange::new(Timestamp::new(0), Timestamp::new(10));
    /// let b = TemporalRange::new(Timestamp::new(10), Timestamp::new(20));
    /// let c = TemporalRange::new(Timestamp::new(11), Timestamp::new(20));
    ///
    /// assert!(a.overlaps(b));
    /// assert!(!a.overlaps(c));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && max(self.start, other.start) <= min(self.end_inclusive, other.end_inclusive)
    }

    /// Calculates the shared sub-range of two ranges.
    ///
    /// Returns `None` when either range is empty or they do not overlap.
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        if self.is_empty() || other.is_empty() {
            return None;
        }
        let start = max(self.start, other.start);
        let end_inclusive = min(self.end_inclusive, other.end_inclusive);
        if start <= end_inclusive {
            Some(Self::new(start, end_inclusive))
        } else {
            None
        }
    }

    /// Calculates the union of two ranges.
    ///
    /// Defined when the ranges overlap or touch at adjacent finest-unit
    /// instants, or when one of them is empty. Returns `None` when a gap
    /// separates them.
    pub fn union(&self, other: Self) -> Option<Self> {
        if self.is_empty() {
            return Some(other);
        }
        if other.is_empty() {
            return Some(*self);
        }
        if self.overlaps(other) || self.touches(other) || other.touches(*self) {
            Some(Self::new(
                min(self.start, other.start),
                max(self.end_inclusive, other.end_inclusive),
            ))
        } else {
            None
        }
    }

    /// Calculates the set difference `self - other`.
    ///
    /// # Returns
    ///
    /// * 0 ranges: `other` fully covers `self`.
    /// * 1 range: `other` clips one side of `self` or does not overlap it.
    /// * 2 ranges: `other` is strictly inside `self`, splitting it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidespan_core::ticks::Timestamp;
    /// # use tidespan_range::range::TemporalRange;
    ///
    /// let base = TemporalRange::new(Timestamp::new(0), Timestamp::new(10));
    /// let hole = TemporalRange::new(Timestamp::new(4), Timestamp::new(6));
    ///
    /// let parts = base.difference(hole);
    /// assert_eq!(parts.len(), 2);
    /// assert_eq!(parts[0], TemporalRange::new(Timestamp::new(0), Timestamp::new(3)));
    /// assert_eq!(parts[1], TemporalRange::new(Timestamp::new(7), Timestamp::new(10)));
    /// ```
    pub fn difference(&self, other: Self) -> SmallVec<[Self; 2]> {
        if !self.overlaps(other) {
            return smallvec![*self];
        }
        let mut result = SmallVec::new();
        if self.start < other.start {
            if let Some(left_end) = other.start.checked_add(T::FINEST, -1) {
                result.push(Self::new(self.start, left_end));
            }
        }
        if self.end_inclusive > other.end_inclusive {
            if let Some(right_start) = other.end_inclusive.checked_add(T::FINEST, 1) {
                result.push(Self::new(right_start, self.end_inclusive));
            }
        }
        result
    }

    /// Creates the progression stepping through this range.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStepError`] when the instant type cannot step by the
    /// step's unit.
    #[inline]
    pub fn step(self, step: Step) -> Result<TemporalProgression<T>, InvalidStepError> {
        TemporalProgression::from_closed_range(self.start, self.end_inclusive, step)
    }

    // `self.end + 1 finest == other.start`, i.e. no instant fits between.
    fn touches(&self, other: Self) -> bool {
        matches!(
            self.end_inclusive.checked_add(T::FINEST, 1),
            Some(succ) if succ == other.start
        )
    }
}

impl<T> PartialEq for TemporalRange<T>
where
    T: Temporal,
{
    fn eq(&self, other: &Self) -> bool {
        (self.is_empty() && other.is_empty())
            || (self.start == other.start && self.end_inclusive == other.end_inclusive)
    }
}

impl<T> Eq for TemporalRange<T> where T: Temporal {}

impl<T> std::hash::Hash for TemporalRange<T>
where
    T: Temporal,
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // All empty ranges are equal, so they must hash alike.
        if self.is_empty() {
            state.write_u8(0);
        } else {
            state.write_u8(1);
            self.start.hash(state);
            self.end_inclusive.hash(state);
        }
    }
}

impl<T> Default for TemporalRange<T>
where
    T: Temporal,
{
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> std::fmt::Display for TemporalRange<T>
where
    T: Temporal,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end_inclusive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tidespan_core::ticks::{Ticks, Timestamp};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ts(raw: i64) -> Timestamp {
        Ticks::new(raw)
    }

    fn ts_range(start: i64, end: i64) -> TemporalRange<Timestamp> {
        TemporalRange::new(ts(start), ts(end))
    }

    #[test]
    fn test_simple_creation() {
        let start = date(2024, 1, 1);
        let end_inclusive = date(2024, 1, 6);
        let range = TemporalRange::new(start, end_inclusive);

        assert_eq!(range.start(), start);
        assert_eq!(range.end_inclusive(), end_inclusive);
        assert!(!range.is_empty());
        assert_eq!(format!("{}", range), "2024-01-01..2024-01-06");
    }

    #[test]
    fn test_reversed_bounds_are_empty() {
        let range = TemporalRange::new(date(2024, 1, 2), date(2024, 1, 1));
        assert!(range.is_empty());
        assert_eq!(range, TemporalRange::empty());
    }

    #[test]
    fn test_empty_law() {
        assert!(TemporalRange::<Timestamp>::empty().is_empty());
        assert!(ts_range(1, 0).is_empty());
        assert!(!ts_range(0, 0).is_empty());
    }

    #[test]
    fn test_all_empty_ranges_are_equal() {
        let a = ts_range(100, 0);
        let b = ts_range(7, 3);
        assert_eq!(a, b);
        assert_eq!(a, TemporalRange::empty());
    }

    #[test]
    fn test_empty_ranges_hash_alike() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(ts_range(100, 0));
        set.insert(ts_range(7, 3));
        set.insert(TemporalRange::<Timestamp>::empty());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_from_closed_range_normalizes() {
        let a = date(2024, 3, 1);
        let b = date(2024, 1, 1);

        let range = TemporalRange::from_closed_range(a, b);
        assert_eq!(range.start(), b);
        assert_eq!(range.end_inclusive(), a);
        assert!(!range.is_empty());

        // Order-independent and idempotent.
        assert_eq!(range, TemporalRange::from_closed_range(b, a));
        assert_eq!(
            range,
            TemporalRange::from_closed_range(range.start(), range.end_inclusive())
        );
    }

    #[test]
    fn test_from_closed_range_single_element() {
        let a = date(2024, 1, 1);
        let range = TemporalRange::from_closed_range(a, a);
        assert!(!range.is_empty());
        assert!(range.contains(a));
    }

    #[test]
    fn test_contains() {
        let range = TemporalRange::new(date(2024, 1, 1), date(2024, 1, 31));
        assert!(range.contains(date(2024, 1, 1)));
        assert!(range.contains(date(2024, 1, 31)));
        assert!(range.contains(date(2024, 1, 15)));
        assert!(!range.contains(date(2023, 12, 31)));
        assert!(!range.contains(date(2024, 2, 1)));
    }

    #[test]
    fn test_empty_contains_nothing() {
        let range = TemporalRange::<Timestamp>::empty();
        assert!(!range.contains(ts(0)));
        assert!(!range.contains(ts(1)));
    }

    #[test]
    fn test_overlaps() {
        let a = ts_range(0, 10);
        assert!(a.overlaps(ts_range(5, 15)));
        assert!(a.overlaps(ts_range(10, 20)));
        assert!(a.overlaps(ts_range(2, 8)));
        assert!(a.overlaps(a));
        assert!(!a.overlaps(ts_range(11, 20)));
        assert!(!a.overlaps(TemporalRange::empty()));
        assert!(!TemporalRange::<Timestamp>::empty().overlaps(a));
    }

    #[test]
    fn test_intersection() {
        let a = ts_range(0, 10);

        assert_eq!(a.intersection(ts_range(5, 15)), Some(ts_range(5, 10)));
        assert_eq!(a.intersection(ts_range(2, 8)), Some(ts_range(2, 8)));
        assert_eq!(a.intersection(ts_range(10, 20)), Some(ts_range(10, 10)));
        assert_eq!(a.intersection(ts_range(11, 20)), None);
        assert_eq!(a.intersection(TemporalRange::empty()), None);
    }

    #[test]
    fn test_union() {
        let a = ts_range(0, 10);

        // Overlapping.
        assert_eq!(a.union(ts_range(5, 15)), Some(ts_range(0, 15)));
        // Adjacent at the finest unit.
        assert_eq!(a.union(ts_range(11, 20)), Some(ts_range(0, 20)));
        assert_eq!(ts_range(11, 20).union(a), Some(ts_range(0, 20)));
        // Contained.
        assert_eq!(a.union(ts_range(2, 8)), Some(a));
        // Gap.
        assert_eq!(a.union(ts_range(12, 20)), None);
        // Empty operand.
        assert_eq!(a.union(TemporalRange::empty()), Some(a));
        assert_eq!(TemporalRange::empty().union(a), Some(a));
    }

    #[test]
    fn test_difference() {
        let base = ts_range(0, 10);

        // Disjoint: unchanged.
        let parts = base.difference(ts_range(12, 15));
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0], base);

        // Full cover: nothing left.
        assert!(base.difference(ts_range(-5, 15)).is_empty());

        // Clip right.
        let parts = base.difference(ts_range(8, 15));
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0], ts_range(0, 7));

        // Clip left.
        let parts = base.difference(ts_range(-5, 2));
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0], ts_range(3, 10));

        // Split.
        let parts = base.difference(ts_range(4, 6));
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], ts_range(0, 3));
        assert_eq!(parts[1], ts_range(7, 10));
    }

    #[test]
    fn test_default_is_empty() {
        assert!(TemporalRange::<Timestamp>::default().is_empty());
        assert!(TemporalRange::<NaiveDate>::default().is_empty());
    }

    #[test]
    fn test_step_into_progression() {
        let range = TemporalRange::new(date(2024, 1, 1), date(2024, 1, 6));
        let progression = range.step(Step::days(1).unwrap()).unwrap();
        assert_eq!(progression.count_elements(), 6);
    }
}
