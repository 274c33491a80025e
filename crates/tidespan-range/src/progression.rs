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

use std::iter::FusedIterator;
use tidespan_core::{
    instant::Temporal,
    step::{InvalidStepError, Step},
};

/// A stepped, lazily materialized sequence of instants bounded by a closed
/// range: element `k` is `start + k * step` for every `k` whose value does
/// not exceed `end_inclusive`.
///
/// A progression is a stateless descriptor. Every call to [`iter`] builds a
/// fresh cursor, so the sequence is restartable and independent consumers
/// never observe each other's position. The final yielded element is the
/// largest reachable value not exceeding `end_inclusive`; nothing guarantees
/// it equals `end_inclusive` exactly.
///
/// [`iter`]: TemporalProgression::iter
///
/// # Examples
///
/// ```rust
/// # use chrono::NaiveDate;
/// # use tidespan_core::step::Step;
/// # use tidespan_range::progression::TemporalProgression;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
///
/// let progression =
///     TemporalProgression::from_closed_range(start, end, Step::days(3).unwrap()).unwrap();
/// let elements: Vec<_> = progression.iter().collect();
///
/// assert_eq!(
///     elements,
///     vec![
///         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
///         NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
///     ]
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TemporalProgression<T>
where
    T: Temporal,
{
    start: T,
    end_inclusive: T,
    step: Step,
}

impl<T> TemporalProgression<T>
where
    T: Temporal,
{
    /// Creates a progression over `[start, end_inclusive]` with the given
    /// step. A reversed range yields a progression that iterates zero
    /// elements — that is a valid state, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStepError`] when the instant type cannot step by the
    /// step's unit.
    pub fn from_closed_range(
        start: T,
        end_inclusive: T,
        step: Step,
    ) -> Result<Self, InvalidStepError> {
        if !T::supports(step.unit()) {
            return Err(InvalidStepError::unsupported_unit(step.unit(), step.amount()));
        }
        Ok(Self {
            start,
            end_inclusive,
            step,
        })
    }

    /// Returns the first bound of the progression.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the inclusive upper bound of the progression.
    #[inline]
    pub const fn end_inclusive(&self) -> T {
        self.end_inclusive
    }

    /// Returns the step applied between consecutive elements.
    #[inline]
    pub const fn step(&self) -> Step {
        self.step
    }

    /// Returns `true` if iteration yields no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start > self.end_inclusive
    }

    /// Returns the first element, or `None` for an empty progression.
    #[inline]
    pub fn first(&self) -> Option<T> {
        if self.is_empty() { None } else { Some(self.start) }
    }

    /// Returns the last element: the largest reachable value not exceeding
    /// the upper bound. Walks the progression, so cost is linear in its
    /// length.
    #[inline]
    pub fn last(&self) -> Option<T> {
        self.iter().last()
    }

    /// Counts the elements the progression yields. Linear in its length.
    #[inline]
    pub fn count_elements(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if `value` is reachable from `start` by a whole number
    /// of steps without exceeding the upper bound.
    ///
    /// Unlike [`TemporalRange::contains`], this honors step alignment: a
    /// value strictly between two consecutive elements is not a member even
    /// though it lies within the bounds.
    ///
    /// [`TemporalRange::contains`]: crate::range::TemporalRange::contains
    pub fn contains(&self, value: T) -> bool {
        if value < self.start || value > self.end_inclusive {
            return false;
        }
        for element in self.iter() {
            if element == value {
                return true;
            }
            if element > value {
                return false;
            }
        }
        false
    }

    /// Creates a fresh iteration cursor over the progression.
    #[inline]
    pub fn iter(&self) -> ProgressionIter<T> {
        ProgressionIter {
            cursor: if self.is_empty() {
                None
            } else {
                Some(self.start)
            },
            end_inclusive: self.end_inclusive,
            step: self.step,
        }
    }
}

impl<T> std::fmt::Display for TemporalProgression<T>
where
    T: Temporal,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}..{} step {}",
            self.start, self.end_inclusive, self.step
        )
    }
}

impl<T> IntoIterator for TemporalProgression<T>
where
    T: Temporal,
{
    type Item = T;
    type IntoIter = ProgressionIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &TemporalProgression<T>
where
    T: Temporal,
{
    type Item = T;
    type IntoIter = ProgressionIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iteration cursor over a [`TemporalProgression`].
#[derive(Clone, Debug)]
pub struct ProgressionIter<T>
where
    T: Temporal,
{
    cursor: Option<T>,
    end_inclusive: T,
    step: Step,
}

impl<T> Iterator for ProgressionIter<T>
where
    T: Temporal,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor?;
        self.cursor = match current.checked_step(self.step) {
            // The strict advance check keeps a degenerate instant impl from
            // stalling the cursor.
            Some(next) if next > current && next <= self.end_inclusive => Some(next),
            _ => None,
        };
        Some(current)
    }
}

impl<T> FusedIterator for ProgressionIter<T> where T: Temporal {}
