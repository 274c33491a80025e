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

//! Partitioning a range into contiguous runs of unit-stepped elements.
//!
//! A chunk traversal walks the unit-stepped progression of a range and cuts
//! it into sub-ranges of at most `size` consecutive elements. Chunks are
//! disjoint, cover every stepped element exactly once, and the boundary
//! elements of consecutive chunks are adjacent under the step. The cursor is
//! never truncated internally; callers align the range start beforehand when
//! they want calendar-uniform boundaries.

use crate::range::TemporalRange;
use std::iter::FusedIterator;
use tidespan_core::{
    instant::Temporal,
    step::{InvalidStepError, Step},
    unit::TemporalUnit,
};

/// The error for a non-positive chunk size.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ChunkSizeError {
    /// The rejected size.
    pub size: i64,
}

impl std::fmt::Display for ChunkSizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "chunk size must be positive (got {})", self.size)
    }
}

impl std::error::Error for ChunkSizeError {}

/// The error type for chunk traversal construction.
///
/// Both variants surface eagerly at the call site, before any chunk is
/// produced, so an invalid argument is never observed mid-iteration.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ChunkError {
    /// The requested element count per chunk was zero or negative.
    Size(ChunkSizeError),
    /// The instant type cannot step by the requested unit.
    Step(InvalidStepError),
}

impl std::fmt::Display for ChunkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Size(e) => write!(f, "{}", e),
            Self::Step(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ChunkError {}

impl From<ChunkSizeError> for ChunkError {
    fn from(e: ChunkSizeError) -> Self {
        Self::Size(e)
    }
}

impl From<InvalidStepError> for ChunkError {
    fn from(e: InvalidStepError) -> Self {
        Self::Step(e)
    }
}

/// A lazy iterator over the chunks of a range.
///
/// Each produced chunk is an independent [`TemporalRange`] spanning at most
/// `size` consecutive unit-stepped elements, and fewer only for the final
/// chunk. The traversal is deterministic and side-effect-free: cloning the
/// iterator (or re-invoking the producing call) yields identical chunks.
#[derive(Clone, Debug)]
pub struct TemporalChunks<T>
where
    T: Temporal,
{
    cursor: Option<T>,
    end_inclusive: T,
    step: Step,
    size: i64,
}

impl<T> Iterator for TemporalChunks<T>
where
    T: Temporal,
{
    type Item = TemporalRange<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.cursor?;
        let mut last = first;
        let mut taken = 1;
        while taken < self.size {
            match last.checked_step(self.step) {
                Some(next) if next > last && next <= self.end_inclusive => {
                    last = next;
                    taken += 1;
                }
                _ => {
                    // The remaining span is shorter than a full chunk; this
                    // one is final.
                    self.cursor = None;
                    return Some(TemporalRange::new(first, last));
                }
            }
        }
        self.cursor = match last.checked_step(self.step) {
            Some(next) if next > last && next <= self.end_inclusive => Some(next),
            _ => None,
        };
        Some(TemporalRange::new(first, last))
    }
}

impl<T> FusedIterator for TemporalChunks<T> where T: Temporal {}

impl<T> TemporalRange<T>
where
    T: Temporal,
{
    /// Splits this range into chunks of at most `size` consecutive elements
    /// stepped one `unit` apart.
    ///
    /// The first chunk begins at the range start as-is; align it with
    /// [`Temporal::truncate`] beforehand if calendar-uniform boundaries are
    /// wanted. An empty range yields zero chunks.
    ///
    /// # Errors
    ///
    /// * [`ChunkError::Size`] when `size` is zero or negative.
    /// * [`ChunkError::Step`] when the instant type cannot step by `unit`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chrono::NaiveDate;
    /// # use tidespan_core::unit::TemporalUnit;
    /// # use tidespan_range::range::TemporalRange;
    ///
    /// let range = TemporalRange::new(
    ///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
    /// );
    ///
    /// let chunks: Vec<_> = range.chunks(TemporalUnit::Day, 3).unwrap().collect();
    /// assert_eq!(chunks.len(), 3);
    /// assert_eq!(
    ///     chunks[0],
    ///     TemporalRange::new(
    ///         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///         NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
    ///     )
    /// );
    /// ```
    pub fn chunks(self, unit: TemporalUnit, size: i64) -> Result<TemporalChunks<T>, ChunkError> {
        if size <= 0 {
            return Err(ChunkSizeError { size }.into());
        }
        let step = Step::new(unit, 1)?;
        if !T::supports(unit) {
            return Err(InvalidStepError::unsupported_unit(unit, 1).into());
        }
        Ok(TemporalChunks {
            cursor: if self.is_empty() {
                None
            } else {
                Some(self.start())
            },
            end_inclusive: self.end_inclusive(),
            step,
            size,
        })
    }

    /// Splits this range into chunks of at most `size` years.
    #[inline]
    pub fn chunk_year(self, size: i64) -> Result<TemporalChunks<T>, ChunkError> {
        self.chunks(TemporalUnit::Year, size)
    }

    /// Splits this range into chunks of at most `size` months.
    #[inline]
    pub fn chunk_month(self, size: i64) -> Result<TemporalChunks<T>, ChunkError> {
        self.chunks(TemporalUnit::Month, size)
    }

    /// Splits this range into chunks of at most `size` weeks.
    #[inline]
    pub fn chunk_week(self, size: i64) -> Result<TemporalChunks<T>, ChunkError> {
        self.chunks(TemporalUnit::Week, size)
    }

    /// Splits this range into chunks of at most `size` days.
    #[inline]
    pub fn chunk_day(self, size: i64) -> Result<TemporalChunks<T>, ChunkError> {
        self.chunks(TemporalUnit::Day, size)
    }

    /// Splits this range into chunks of at most `size` hours.
    #[inline]
    pub fn chunk_hour(self, size: i64) -> Result<TemporalChunks<T>, ChunkError> {
        self.chunks(TemporalUnit::Hour, size)
    }

    /// Splits this range into chunks of at most `size` minutes.
    #[inline]
    pub fn chunk_minute(self, size: i64) -> Result<TemporalChunks<T>, ChunkError> {
        self.chunks(TemporalUnit::Minute, size)
    }

    /// Splits this range into chunks of at most `size` seconds.
    #[inline]
    pub fn chunk_second(self, size: i64) -> Result<TemporalChunks<T>, ChunkError> {
        self.chunks(TemporalUnit::Second, size)
    }
}
